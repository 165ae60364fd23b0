use std::io::{self, BufRead, BufReader, Read};
use std::thread::{self, JoinHandle};

use kanal::{AsyncSender, Sender};
use wordbook_types::AppEvent;

pub const QUIT_COMMAND: &str = ":q";

/// Forward each line as search input until EOF, `:q` or the event loop
/// going away
pub fn read_lines<R: BufRead>(reader: R, input_tx: &Sender<AppEvent>) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let text = line.trim();

        if text == QUIT_COMMAND {
            break;
        }
        if input_tx.send(AppEvent::SearchInput(text.to_string())).is_err() {
            tracing::debug!("Event loop gone, input reader stopping");
            return Ok(());
        }
    }

    // event loop may already be gone
    let _ = input_tx.send(AppEvent::Quit);
    Ok(())
}

/// Run [`read_lines`] on its own OS thread.
///
/// Blocking reads can't be cancelled, so the thread is never joined: the
/// shell finishes without it and the process exit ends it.
pub fn spawn_input_thread<R>(reader: R, input_tx: AsyncSender<AppEvent>) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    let input_tx = input_tx.to_sync();

    thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || {
            if let Err(e) = read_lines(BufReader::new(reader), &input_tx) {
                tracing::error!("Input reader failed: {e}");
            }
            tracing::info!("Input reader stopping");
        })
}
