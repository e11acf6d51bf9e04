//! Process signal handling for the host harness

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::info;

/// Resolve once SIGTERM or SIGINT arrives
///
/// Returns an error when the signal handler cannot be registered, leaving the
/// caller to decide whether to keep running without graceful shutdown.
pub async fn shutdown_signal() -> std::io::Result<()> {
    let mut signals = Signals::new([SIGTERM, SIGINT])?;
    let handle = signals.handle();

    if let Some(signal) = signals.next().await {
        info!("Received signal {}, ending workout session", signal);
    }

    handle.close();
    Ok(())
}
