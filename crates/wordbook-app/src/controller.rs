use std::io::Read;
use std::time::Duration;

use anyhow::Context;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::signal;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordbook_core::DictionaryCore;
use wordbook_types::AppEvent;

use crate::events::event_loop;
use crate::io::spawn_input_thread;
use crate::ui::ui_loop;

/// Channels between the shell tasks
pub struct ChannelSet {
    pub input: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input: kanal::bounded_async(64),
            ui: kanal::bounded_async(16),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns and stops the search shell tasks
pub struct ShellController {
    cancel_token: CancellationToken,
    debounce: Duration,
    interactive: bool,
}

impl ShellController {
    pub fn new(debounce: Duration, interactive: bool) -> Self {
        Self {
            cancel_token: CancellationToken::new(),
            debounce,
            interactive,
        }
    }

    /// Spawn the event and UI loops, and start reading `input` on its own
    /// thread. The returned tasks finish on cancellation even while the
    /// reader is blocked.
    pub fn spawn_tasks<R>(
        &self,
        core: DictionaryCore,
        category: Option<String>,
        input: R,
    ) -> anyhow::Result<JoinSet<anyhow::Result<()>>>
    where
        R: Read + Send + 'static,
    {
        let ChannelSet {
            input: input_channel,
            ui,
        } = ChannelSet::new();
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            core,
            category,
            input_channel.1,
            ui.0,
            self.debounce,
            self.cancel_token.child_token(),
        ));

        tasks.spawn(ui_loop(ui.1, self.interactive));

        spawn_input_thread(input, input_channel.0).context("Failed to start input reader")?;

        Ok(tasks)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

pub async fn run_shell(
    core: DictionaryCore,
    category: Option<String>,
    debounce: Duration,
    interactive: bool,
) -> anyhow::Result<()> {
    let controller = ShellController::new(debounce, interactive);
    let mut tasks = controller.spawn_tasks(core, category, std::io::stdin())?;

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = &mut shutdown, if !controller.cancel_token.is_cancelled() => {
                if let Err(e) = result {
                    tracing::error!("failed to listen for ctrl+c: {e}");
                }
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            joined = tasks.join_next() => {
                match joined {
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => tracing::error!("shell task failed: {e:#}"),
                    Some(Err(e)) => tracing::error!("shell task panicked: {e}"),
                    None => break,
                }
            }
        }
    }

    Ok(())
}
