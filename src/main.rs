//! Gym Rest Timer - headless host harness
//!
//! Reads user commands and lifecycle signals from stdin, one per line, and
//! drives the rest timer as the mobile platform would.

use anyhow::Context;
use tokio::{io::stdout, sync::mpsc};
use tracing::{error, info, warn};

use gym_rest_timer::{
    config::Config,
    console::{follow_snapshots, run_until_shutdown, spawn_line_reader, HELP},
    lifecycle::LifecycleCoordinator,
    services::TokioAlarmScheduler,
    tasks::Session,
    utils::{shutdown_signal, SystemClock},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("gym_rest_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting gym-rest-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: duration={}, minimize_grace={}ms, background_cleanup={}ms",
        config.duration, config.minimize_grace_ms, config.background_cleanup_ms
    );

    let scheduler = TokioAlarmScheduler::new(!config.no_notifications);
    let mut coordinator =
        LifecycleCoordinator::new(scheduler, config.duration, config.coordinator_settings());
    if !coordinator.request_authorization() {
        warn!("Continuing without system notifications");
    }

    let (session, snapshots) = Session::new(coordinator, SystemClock);
    let (events_tx, events_rx) = mpsc::channel(64);
    let session_task = tokio::spawn(session.run(events_rx));
    tokio::spawn(follow_snapshots(snapshots.clone()));

    info!("{}", HELP);

    let lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))
        .context("failed to start console input thread")?;
    if let Err(e) = run_until_shutdown(lines, stdout(), events_tx, snapshots, shutdown_signal()).await
    {
        error!("Console error: {:#}", e);
    }

    // Dropping the console closes the event channel and ends the session
    match session_task.await {
        Ok(coordinator) => info!("Final state: {:?}", coordinator.phase()),
        Err(e) => error!("Session task failed: {}", e),
    }

    info!("Shutdown complete");
    Ok(())
}
