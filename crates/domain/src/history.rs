//! Recent climate samples from `GET /api/v1/history`.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::time::Timestamp;

/// Number of records the controller returns when no limit is given.
pub const DEFAULT_LIMIT: u32 = 100;

/// One control-loop sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: Timestamp,
    pub temperature: f64,
    pub humidity: f64,
    pub light_on: bool,
    pub heater_on: bool,
    pub pump_on: bool,
    pub sensor_error: bool,
}

/// Paging information sent next to the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMeta {
    /// Records in this page.
    pub count: usize,
    /// Records kept by the controller.
    pub total: usize,
    pub limit: i64,
}

/// Decoded history reply.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPage {
    pub records: Vec<HistoryRecord>,
    pub meta: Option<HistoryMeta>,
}

impl HistoryPage {
    /// Decode a history envelope; `meta` lives next to `data`, not inside it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] on a non-success status, or a decode
    /// error when `data` or `meta` have the wrong shape.
    pub fn from_envelope(mut envelope: Envelope) -> Result<Self, ClientError> {
        let meta = envelope
            .meta
            .take()
            .map(serde_json::from_value)
            .transpose()?;
        let records = envelope.into_data()?;
        Ok(Self { records, meta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn should_decode_records_and_meta() {
        let page = HistoryPage::from_envelope(envelope(json!({
            "status": "success",
            "data": [{
                "timestamp": "2024-05-01T10:00:00Z",
                "temperature": 25.1,
                "humidity": 66.0,
                "light_on": true,
                "heater_on": false,
                "pump_on": false,
                "sensor_error": false
            }],
            "meta": {"count": 1, "total": 40, "limit": 1}
        })))
        .unwrap();
        assert_eq!(page.records.len(), 1);
        assert!(page.records[0].light_on);
        assert_eq!(
            page.meta,
            Some(HistoryMeta {
                count: 1,
                total: 40,
                limit: 1
            })
        );
    }

    #[test]
    fn should_accept_missing_meta() {
        let page =
            HistoryPage::from_envelope(envelope(json!({"status": "success", "data": []})))
                .unwrap();
        assert!(page.records.is_empty());
        assert!(page.meta.is_none());
    }

    #[test]
    fn should_reject_failure_status() {
        let result = HistoryPage::from_envelope(envelope(
            json!({"status": "error", "message": "history disabled"}),
        ));
        assert!(matches!(result, Err(ClientError::Rejected { .. })));
    }
}
