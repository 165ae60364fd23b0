use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordbook_core::DictionaryCore;
use wordbook_types::AppEvent;

/// Shell's main loop.
///
/// Search input is debounced: a query only runs once no new input arrived
/// for `debounce`. Pending input is flushed when the input side quits.
pub async fn event_loop(
    mut core: DictionaryCore,
    category: Option<String>,
    input_rx: AsyncReceiver<AppEvent>,
    ui_tx: AsyncSender<AppEvent>,
    debounce: Duration,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut pending: Option<String> = None;

    tracing::debug!("[EVENT_LOOP] Starting, debounce {:?}", debounce);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = input_rx.recv() => {
                match event {
                    Ok(AppEvent::SearchInput(text)) => {
                        pending = Some(text);
                    }
                    Ok(AppEvent::Quit) | Err(_) => {
                        if let Some(text) = pending.take() {
                            run_query(&mut core, &text, category.as_deref(), &ui_tx).await?;
                        }
                        break;
                    }
                    Ok(event) => {
                        tracing::debug!("[EVENT_LOOP] Ignoring {:?}", std::mem::discriminant(&event));
                    }
                }
            }
            _ = tokio::time::sleep(debounce), if pending.is_some() => {
                if let Some(text) = pending.take() {
                    run_query(&mut core, &text, category.as_deref(), &ui_tx).await?;
                }
            }
        }
    }

    let _ = ui_tx.send(AppEvent::Quit).await;
    Ok(())
}

async fn run_query(
    core: &mut DictionaryCore,
    text: &str,
    category: Option<&str>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let filter = text.trim().to_string();
    let rows = core.query(&filter, category).await;
    tracing::debug!("Query '{}' -> {} rows", filter, rows.len());

    ui_tx.send(AppEvent::ShowResults { filter, rows }).await?;
    Ok(())
}
