//! Diagnostics service — one-shot health and history reads.

use terrarium_domain::error::ClientError;
use terrarium_domain::health::HealthReport;
use terrarium_domain::history::HistoryPage;

use crate::ports::ControllerApi;

/// Application service for controller diagnostics.
pub struct DiagnosticsService<A> {
    api: A,
}

impl<A: ControllerApi> DiagnosticsService<A> {
    /// Create a new service backed by the given controller.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Read the controller health report.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decoding fails.
    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        let report = self.api.fetch_health().await?;
        if !report.status.is_healthy() {
            tracing::warn!(status = %report.status, "controller is not healthy");
        }
        Ok(report)
    }

    /// Read the most recent `limit` history records.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the controller refuses, or a
    /// transport/decode error.
    pub async fn history(&self, limit: u32) -> Result<HistoryPage, ClientError> {
        let page = self.api.fetch_history(limit).await?;
        tracing::debug!(
            count = page.records.len(),
            meta = ?page.meta,
            "history fetched"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use terrarium_domain::envelope::Reply;
    use terrarium_domain::health::HealthStatus;
    use terrarium_domain::history::HistoryMeta;
    use terrarium_domain::sensor::{MockToggle, SensorReading};
    use terrarium_domain::snapshot::StateSnapshot;

    #[derive(Default)]
    struct StubDiagnostics {
        requested_limit: Mutex<Option<u32>>,
        reject_history: bool,
    }

    impl ControllerApi for StubDiagnostics {
        async fn fetch_state(&self) -> Result<Reply<StateSnapshot>, ClientError> {
            Err(ClientError::MissingData)
        }

        async fn toggle_mock(&self) -> Result<MockToggle, ClientError> {
            Err(ClientError::MissingData)
        }

        async fn test_sensor(&self) -> Result<Reply<SensorReading>, ClientError> {
            Err(ClientError::MissingData)
        }

        async fn fetch_health(&self) -> Result<HealthReport, ClientError> {
            Ok(HealthReport {
                status: HealthStatus::Warning,
                components: BTreeMap::from([("dht22_sensor".to_string(), "error".to_string())]),
                uptime_seconds: 60,
                cycle_count: 2,
                version: "2.0.0".to_string(),
                timestamp: None,
            })
        }

        async fn fetch_history(&self, limit: u32) -> Result<HistoryPage, ClientError> {
            *self.requested_limit.lock().unwrap() = Some(limit);
            if self.reject_history {
                return Err(ClientError::Rejected {
                    status: "error".to_string(),
                    message: "history disabled".to_string(),
                });
            }
            Ok(HistoryPage {
                records: Vec::new(),
                meta: Some(HistoryMeta {
                    count: 0,
                    total: 0,
                    limit: i64::from(limit),
                }),
            })
        }
    }

    #[tokio::test]
    async fn should_return_health_report() {
        let svc = DiagnosticsService::new(StubDiagnostics::default());
        let report = svc.health().await.unwrap();
        assert_eq!(report.status, HealthStatus::Warning);
        assert_eq!(report.components["dht22_sensor"], "error");
    }

    #[tokio::test]
    async fn should_forward_history_limit() {
        let svc = DiagnosticsService::new(StubDiagnostics::default());
        let page = svc.history(25).await.unwrap();
        assert_eq!(*svc.api.requested_limit.lock().unwrap(), Some(25));
        assert_eq!(page.meta.unwrap().limit, 25);
    }

    #[tokio::test]
    async fn should_propagate_history_rejection() {
        let svc = DiagnosticsService::new(StubDiagnostics {
            reject_history: true,
            ..StubDiagnostics::default()
        });
        let result = svc.history(10).await;
        assert!(matches!(result, Err(ClientError::Rejected { .. })));
    }
}
