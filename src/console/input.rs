//! Blocking line reader for the console
//!
//! Standard input cannot be cancelled once a read is in flight, so it is read
//! on a plain OS thread that the runtime never waits for. Lines arrive on a
//! channel the async side can drop at any time.

use std::{io::BufRead, thread};

use tokio::sync::mpsc;
use tracing::debug;

/// Lines buffered between the reader thread and the console
const LINE_BUFFER: usize = 64;

/// Read `reader` line by line on a dedicated thread
///
/// The channel closes at EOF, after a read error has been forwarded, or once
/// the receiving side is dropped and the next line arrives.
pub fn spawn_line_reader<R>(reader: R) -> std::io::Result<mpsc::Receiver<std::io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() {
                    debug!("Console receiver dropped, stopping input thread");
                    return;
                }
                if failed {
                    return;
                }
            }
            debug!("Console input reached EOF");
        })?;

    Ok(rx)
}
