//! Poll loop — drives [`DashboardPoller::refresh`] on a fixed period.
//!
//! The loop awaits each refresh before waiting for the next tick, and
//! missed ticks are skipped, so a slow controller never causes two
//! scheduled refreshes to be in flight at once. The loop runs until
//! [`PollHandle::stop`] is called or the handle is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ports::{ControllerApi, DisplaySurface, Notifier};
use crate::services::dashboard_poller::DashboardPoller;

/// Default refresh period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(10);

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running poll loop.
pub struct PollHandle {
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stop the loop and wait for it to exit.
    ///
    /// A refresh that is in flight is abandoned at its next await point.
    pub async fn stop(self) {
        // Err only means the loop already exited.
        let _ = self.stop_tx.send(());
        if let Err(err) = self.task.await {
            tracing::warn!(error = %err, "poll loop task ended abnormally");
        }
    }

    /// Whether the loop task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn the poll loop on the current tokio runtime.
///
/// The first refresh runs immediately, then one per `period`.
pub fn spawn<A, S, N>(poller: Arc<DashboardPoller<A, S, N>>, period: Duration) -> PollHandle
where
    A: ControllerApi + 'static,
    S: DisplaySurface + 'static,
    N: Notifier + 'static,
{
    let (stop_tx, stop_rx) = oneshot::channel();
    let task = tokio::spawn(run(poller, period.max(MIN_PERIOD), stop_rx));
    PollHandle { stop_tx, task }
}

async fn run<A, S, N>(
    poller: Arc<DashboardPoller<A, S, N>>,
    period: Duration,
    mut stop_rx: oneshot::Receiver<()>,
) where
    A: ControllerApi,
    S: DisplaySurface,
    N: Notifier,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tracing::info!(period_secs = period.as_secs_f64(), "poll loop started");

    loop {
        tokio::select! {
            _ = &mut stop_rx => break,
            _ = ticker.tick() => {}
        }
        tokio::select! {
            _ = &mut stop_rx => break,
            outcome = poller.refresh() => {
                tracing::trace!(?outcome, "scheduled refresh finished");
            }
        }
    }

    tracing::info!("poll loop stopped");
}
