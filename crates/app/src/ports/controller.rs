//! Controller port — the terrarium controller's HTTP API as seen by the client.

use std::future::Future;

use terrarium_domain::envelope::Reply;
use terrarium_domain::error::ClientError;
use terrarium_domain::health::HealthReport;
use terrarium_domain::history::HistoryPage;
use terrarium_domain::sensor::{MockToggle, SensorReading};
use terrarium_domain::snapshot::StateSnapshot;

/// Reads and commands against the controller.
///
/// Implementations classify replies by body only: an HTTP error status
/// with a well-formed envelope is a [`Reply::Failure`], not an `Err`.
pub trait ControllerApi: Send + Sync {
    /// `GET /api/v1/state`.
    fn fetch_state(
        &self,
    ) -> impl Future<Output = Result<Reply<StateSnapshot>, ClientError>> + Send;

    /// `POST /api/v1/mock` — flips the simulated-sensor mode.
    fn toggle_mock(&self) -> impl Future<Output = Result<MockToggle, ClientError>> + Send;

    /// `GET /api/v1/sensor/test` — forces a sensor sample.
    fn test_sensor(
        &self,
    ) -> impl Future<Output = Result<Reply<SensorReading>, ClientError>> + Send;

    /// `GET /api/v1/health`.
    fn fetch_health(&self) -> impl Future<Output = Result<HealthReport, ClientError>> + Send;

    /// `GET /api/v1/history?limit=N`.
    fn fetch_history(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<HistoryPage, ClientError>> + Send;
}

impl<T: ControllerApi> ControllerApi for std::sync::Arc<T> {
    fn fetch_state(
        &self,
    ) -> impl Future<Output = Result<Reply<StateSnapshot>, ClientError>> + Send {
        (**self).fetch_state()
    }

    fn toggle_mock(&self) -> impl Future<Output = Result<MockToggle, ClientError>> + Send {
        (**self).toggle_mock()
    }

    fn test_sensor(
        &self,
    ) -> impl Future<Output = Result<Reply<SensorReading>, ClientError>> + Send {
        (**self).test_sensor()
    }

    fn fetch_health(&self) -> impl Future<Output = Result<HealthReport, ClientError>> + Send {
        (**self).fetch_health()
    }

    fn fetch_history(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<HistoryPage, ClientError>> + Send {
        (**self).fetch_history(limit)
    }
}
