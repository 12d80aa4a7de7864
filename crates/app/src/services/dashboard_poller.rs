//! Dashboard poller — refreshes the display from the controller and runs the
//! two user actions (toggle mock mode, sensor self-test).

use terrarium_domain::envelope::Reply;
use terrarium_domain::error::ClientError;
use terrarium_domain::sensor::{MockToggle, SensorTestOutcome};
use terrarium_domain::time;
use terrarium_domain::view::{DashboardView, Labels};

use crate::ports::{ControllerApi, DisplaySurface, Notifier};

/// What a [`DashboardPoller::refresh`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new view was written to the surface.
    Rendered,
    /// The controller answered with a non-success status; the view is untouched.
    Ignored { status: String },
    /// Request, decode or render failed; logged, the view is untouched.
    Failed,
}

/// Application service driving the dashboard.
///
/// Holds explicit handles to the controller, the display surface and the
/// notifier. None of the operations lock: a user action may run while a
/// scheduled refresh is in flight. Each render is a single surface update,
/// so the last completed render wins and two snapshots never mix on screen.
pub struct DashboardPoller<A, S, N> {
    api: A,
    surface: S,
    notifier: N,
    labels: Labels,
}

impl<A, S, N> DashboardPoller<A, S, N>
where
    A: ControllerApi,
    S: DisplaySurface,
    N: Notifier,
{
    /// Create a poller with the default labels.
    pub fn new(api: A, surface: S, notifier: N) -> Self {
        Self {
            api,
            surface,
            notifier,
            labels: Labels::default(),
        }
    }

    /// Replace the labels used for relay and sensor indicators.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// The controller this poller talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The surface this poller renders to.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Fetch the current snapshot and render it.
    ///
    /// Never fails: transport and decode errors are logged and leave the
    /// previous view on screen. A non-success status is dropped without
    /// an error report.
    pub async fn refresh(&self) -> RefreshOutcome {
        match self.api.fetch_state().await {
            Ok(Reply::Success(snapshot)) => {
                let view = DashboardView::from_snapshot(&snapshot, &self.labels);
                self.surface.render(&view.cells());
                tracing::debug!(
                    mode = %snapshot.system.mode,
                    cycle_count = snapshot.system.cycle_count,
                    last_read = %time::describe(snapshot.sensors.last_read.as_ref()),
                    last_pump_run = %time::describe(snapshot.relays.last_pump_run.as_ref()),
                    "dashboard refreshed"
                );
                RefreshOutcome::Rendered
            }
            Ok(Reply::Failure { status, .. }) => {
                tracing::debug!(%status, "state reply not successful, view unchanged");
                RefreshOutcome::Ignored { status }
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to refresh dashboard");
                RefreshOutcome::Failed
            }
        }
    }

    /// Flip the controller's mock mode, show its message, then refresh once.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] when the request or its decoding fails;
    /// nothing is shown and no refresh happens in that case.
    pub async fn toggle_mock(&self) -> Result<MockToggle, ClientError> {
        let reply = self.api.toggle_mock().await?;
        tracing::info!(message = %reply.message, "mock mode toggled");
        self.notifier.notify(&reply.message).await;
        self.refresh().await;
        Ok(reply)
    }

    /// Force a sensor sample and show the reading or the controller's error.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] on transport or decode failure. An
    /// application-level failure is not an error: it is shown to the user
    /// and returned as [`SensorTestOutcome::Failed`].
    pub async fn test_sensor(&self) -> Result<SensorTestOutcome, ClientError> {
        let outcome = match self.api.test_sensor().await? {
            Reply::Success(reading) => SensorTestOutcome::Passed(reading),
            Reply::Failure { status, message } => {
                tracing::warn!(%status, "sensor self-test failed");
                SensorTestOutcome::Failed { status, message }
            }
        };
        self.notifier.notify(&outcome.to_string()).await;
        Ok(outcome)
    }
}
