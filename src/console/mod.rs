//! Host console module
//!
//! A line-oriented stand-in for the platform: each line is a user command or
//! a lifecycle signal, forwarded to the session loop.

pub mod commands;
pub mod input;
pub mod responses;

use std::future::Future;

use anyhow::Context;
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::{mpsc, watch},
};
use tracing::{debug, error, info, warn};

use crate::{lifecycle::TimerSnapshot, tasks::SessionEvent};
pub use commands::{ConsoleInput, HELP};
pub use input::spawn_line_reader;
pub use responses::{ErrorResponse, StatusResponse};

/// Handle console lines until input closes or `quit`
pub async fn run_console<W>(
    mut lines: mpsc::Receiver<std::io::Result<String>>,
    mut writer: W,
    events: mpsc::Sender<SessionEvent>,
    snapshots: watch::Receiver<TimerSnapshot>,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = lines.recv().await {
        let line = line.context("failed to read console input")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<ConsoleInput>() {
            Ok(ConsoleInput::Event(event)) => {
                debug!("Console event: {:?}", event);
                events
                    .send(event)
                    .await
                    .context("workout session is no longer running")?;
                continue;
            }
            Ok(ConsoleInput::Status) => {
                serde_json::to_string(&StatusResponse::new(snapshots.borrow().clone()))?
            }
            Ok(ConsoleInput::Help) => HELP.to_string(),
            Ok(ConsoleInput::Quit) => break,
            Err(e) => {
                warn!("Ignoring console input {:?}: {}", line, e);
                serde_json::to_string(&ErrorResponse::new(e.to_string()))?
            }
        };

        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    info!("Console closed");
    Ok(())
}

/// Run the console until it finishes or `shutdown` resolves
///
/// Either way the console, and with it the session's event sender, is dropped
/// before this returns, so the session loop ends next.
pub async fn run_until_shutdown<W, F>(
    lines: mpsc::Receiver<std::io::Result<String>>,
    writer: W,
    events: mpsc::Sender<SessionEvent>,
    snapshots: watch::Receiver<TimerSnapshot>,
    shutdown: F,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
    F: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        result = run_console(lines, writer, events, snapshots) => result,
        result = shutdown => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => error!("Failed to listen for shutdown signals: {}", e),
            }
            Ok(())
        }
    }
}

/// Log every published snapshot change until the session ends
pub async fn follow_snapshots(mut snapshots: watch::Receiver<TimerSnapshot>) {
    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        info!(
            "{:?} {} progress={:.2} alarm={}",
            snapshot.phase,
            snapshot.remaining_time_display,
            snapshot.progress,
            snapshot.is_alarm_active
        );
    }
}
