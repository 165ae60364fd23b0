use std::io::Write;

use kanal::AsyncReceiver;
use wordbook_types::AppEvent;

use crate::render::format_rows;

const PROMPT: &str = "search> ";

/// Print results as they arrive; the prompt only shows on a terminal
pub async fn ui_loop(ui_rx: AsyncReceiver<AppEvent>, interactive: bool) -> anyhow::Result<()> {
    prompt(interactive);

    loop {
        match ui_rx.recv().await {
            Ok(AppEvent::ShowResults { filter, rows }) => {
                tracing::debug!("Showing {} rows for '{}'", rows.len(), filter);
                println!("{}", format_rows(&rows));
                prompt(interactive);
            }
            Ok(AppEvent::Quit) | Err(_) => break,
            Ok(_) => {}
        }
    }

    Ok(())
}

fn prompt(interactive: bool) {
    if interactive {
        print!("{PROMPT}");
        let _ = std::io::stdout().flush();
    }
}
