//! Delayed continuation timers

use tokio::{sync::mpsc, task::JoinHandle, time::sleep};
use tracing::debug;

use crate::lifecycle::{Continuation, Deferred};

/// Post `deferred.continuation` back to the session after its delay
///
/// The coordinator checks the generation when the continuation arrives, so a
/// superseded timer only costs a no-op.
pub fn spawn_continuation(
    deferred: Deferred,
    resume_tx: mpsc::UnboundedSender<Continuation>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(deferred.delay).await;
        if resume_tx.send(deferred.continuation).is_err() {
            debug!(
                "Session ended before {:?} came due",
                deferred.continuation.kind
            );
        }
    })
}
