//! # terrarium-adapter-http-reqwest
//!
//! Implements the [`ControllerApi`] and [`SettingsApi`] ports over the
//! controller's REST API.
//!
//! ## Endpoints
//!
//! | Method | Path | Reply |
//! |--------|------|-------|
//! | GET | `/api/v1/state` | envelope around a state snapshot |
//! | POST | `/api/v1/mock` | `{message}` |
//! | GET | `/api/v1/sensor/test` | envelope around a sensor reading |
//! | GET | `/api/v1/health` | bare health report |
//! | GET | `/api/v1/history?limit=N` | envelope around records, plus `meta` |
//! | GET | `/api/v1/settings` | envelope around the settings |
//! | PUT | `/api/v1/settings` | `{status, message}` |
//! | POST | `/api/v1/settings/reset` | `{status, message}` |
//!
//! Response bodies are decoded whatever the HTTP status code: the controller
//! reports application failures (e.g. a dead sensor) as HTTP 500 with a
//! regular JSON envelope, and those must reach the caller as replies.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `terrarium-app` and `terrarium-domain`.

mod config;
mod error;

pub use config::HttpConfig;
pub use error::HttpError;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use terrarium_app::ports::{ControllerApi, SettingsApi};
use terrarium_domain::envelope::{Envelope, Reply};
use terrarium_domain::error::ClientError;
use terrarium_domain::health::HealthReport;
use terrarium_domain::history::HistoryPage;
use terrarium_domain::sensor::{MockToggle, SensorReading};
use terrarium_domain::settings::{Settings, SettingsPatch};
use terrarium_domain::snapshot::StateSnapshot;

const STATE_PATH: &str = "api/v1/state";
const MOCK_PATH: &str = "api/v1/mock";
const SENSOR_TEST_PATH: &str = "api/v1/sensor/test";
const HEALTH_PATH: &str = "api/v1/health";
const HISTORY_PATH: &str = "api/v1/history";
const SETTINGS_PATH: &str = "api/v1/settings";
const SETTINGS_RESET_PATH: &str = "api/v1/settings/reset";

/// Controller client backed by a shared [`reqwest::Client`].
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpController {
    client: Client,
    base_url: Url,
}

impl HttpController {
    /// Build a client for the controller described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] when the base URL is not an
    /// absolute `http`/`https` URL, or [`HttpError::Build`] when the TLS
    /// backend cannot be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(HttpError::Build)?;

        Ok(Self { client, base_url })
    }

    /// The normalised base URL (always ends with `/`).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, HttpError> {
        self.base_url
            .join(path)
            .map_err(|err| HttpError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                reason: err.to_string(),
            })
    }

    async fn execute<T: DeserializeOwned>(&self, method: Method, url: Url) -> Result<T, HttpError> {
        tracing::debug!(%method, %url, "controller request");
        let request = self.client.request(method, url.clone());
        Self::send(request, &url).await
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder, url: &Url) -> Result<T, HttpError> {
        let response = request
            .send()
            .await
            .map_err(|source| HttpError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(HttpError::Body)?;
        tracing::trace!(%status, len = body.len(), "controller response");

        serde_json::from_slice(&body).map_err(|source| HttpError::Decode {
            status: status.as_u16(),
            source,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, HttpError> {
    let invalid = |reason: String| HttpError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    // Endpoints are joined relative to the base, so keep any path prefix.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl ControllerApi for HttpController {
    async fn fetch_state(&self) -> Result<Reply<StateSnapshot>, ClientError> {
        let envelope: Envelope = self
            .execute(Method::GET, self.endpoint(STATE_PATH)?)
            .await?;
        envelope.into_reply()
    }

    async fn toggle_mock(&self) -> Result<MockToggle, ClientError> {
        Ok(self.execute(Method::POST, self.endpoint(MOCK_PATH)?).await?)
    }

    async fn test_sensor(&self) -> Result<Reply<SensorReading>, ClientError> {
        let envelope: Envelope = self
            .execute(Method::GET, self.endpoint(SENSOR_TEST_PATH)?)
            .await?;
        envelope.into_reply()
    }

    async fn fetch_health(&self) -> Result<HealthReport, ClientError> {
        Ok(self
            .execute(Method::GET, self.endpoint(HEALTH_PATH)?)
            .await?)
    }

    async fn fetch_history(&self, limit: u32) -> Result<HistoryPage, ClientError> {
        let mut url = self.endpoint(HISTORY_PATH)?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        let envelope: Envelope = self.execute(Method::GET, url).await?;
        HistoryPage::from_envelope(envelope)
    }
}

impl SettingsApi for HttpController {
    async fn fetch_settings(&self) -> Result<Settings, ClientError> {
        let envelope: Envelope = self
            .execute(Method::GET, self.endpoint(SETTINGS_PATH)?)
            .await?;
        envelope.into_data()
    }

    async fn update_settings(&self, patch: &SettingsPatch) -> Result<String, ClientError> {
        let url = self.endpoint(SETTINGS_PATH)?;
        tracing::debug!(method = %Method::PUT, %url, "controller request");
        let request = self.client.put(url.clone()).json(patch);
        let envelope: Envelope = Self::send(request, &url).await?;
        envelope.into_message()
    }

    async fn reset_settings(&self) -> Result<String, ClientError> {
        let envelope: Envelope = self
            .execute(Method::POST, self.endpoint(SETTINGS_RESET_PATH)?)
            .await?;
        envelope.into_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    use axum::Json;
    use axum::Router;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::{get, post, put};
    use serde_json::{Value, json};

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn controller(base_url: String) -> HttpController {
        HttpController::new(&HttpConfig {
            base_url,
            ..HttpConfig::default()
        })
        .unwrap()
    }

    fn state_body() -> Value {
        json!({
            "status": "success",
            "data": {
                "timestamp": "2024-05-01T10:00:00+03:00",
                "sensors": {
                    "temperature": 21.47,
                    "humidity": 55.3,
                    "last_read": "2024-05-01T09:59:58+03:00",
                    "sensor_error": false
                },
                "relays": {
                    "light": true,
                    "heater": false,
                    "pump": true,
                    "last_pump_run": "0001-01-01T00:00:00Z"
                },
                "system": {"cycle_count": 12, "uptime": 3600, "mode": "auto"}
            }
        })
    }

    #[test]
    fn should_append_trailing_slash_to_base_url() {
        let url = parse_base_url("http://pi.local:8080/terrarium").unwrap();
        assert_eq!(url.as_str(), "http://pi.local:8080/terrarium/");
        assert_eq!(
            url.join(STATE_PATH).unwrap().as_str(),
            "http://pi.local:8080/terrarium/api/v1/state"
        );
    }

    #[test]
    fn should_reject_unsupported_scheme() {
        assert!(matches!(
            parse_base_url("ftp://pi.local"),
            Err(HttpError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn should_reject_relative_url() {
        assert!(parse_base_url("/api/v1").is_err());
    }

    #[tokio::test]
    async fn should_fetch_and_decode_state() {
        let base = serve(Router::new().route(
            "/api/v1/state",
            get(|| async { Json(state_body()) }),
        ))
        .await;

        let reply = controller(base).fetch_state().await.unwrap();

        let Reply::Success(snapshot) = reply else {
            panic!("expected success, got {reply:?}");
        };
        assert_eq!(snapshot.system.cycle_count, 12);
        assert!(snapshot.relays.pump);
        assert!(snapshot.timestamp.is_some());
    }

    #[tokio::test]
    async fn should_classify_failure_status_as_reply() {
        let base = serve(Router::new().route(
            "/api/v1/state",
            get(|| async { Json(json!({"status": "error"})) }),
        ))
        .await;

        let reply = controller(base).fetch_state().await.unwrap();

        assert_eq!(
            reply,
            Reply::Failure {
                status: "error".to_string(),
                message: None
            }
        );
    }

    #[tokio::test]
    async fn should_read_body_of_server_error_response() {
        let base = serve(Router::new().route(
            "/api/v1/sensor/test",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"status": "error", "message": "sensor offline"})),
                )
            }),
        ))
        .await;

        let reply = controller(base).test_sensor().await.unwrap();

        assert_eq!(
            reply,
            Reply::Failure {
                status: "error".to_string(),
                message: Some("sensor offline".to_string())
            }
        );
    }

    #[tokio::test]
    async fn should_decode_sensor_reading() {
        let base = serve(Router::new().route(
            "/api/v1/sensor/test",
            get(|| async {
                Json(json!({
                    "status": "success",
                    "data": {"temperature": 22, "humidity": 60, "valid": true}
                }))
            }),
        ))
        .await;

        let reply = controller(base).test_sensor().await.unwrap();

        let Reply::Success(reading) = reply else {
            panic!("expected success, got {reply:?}");
        };
        assert_eq!(reading.temperature.to_string(), "22");
        assert_eq!(reading.valid, Some(true));
    }

    #[tokio::test]
    async fn should_toggle_mock_with_post() {
        let base = serve(Router::new().route(
            "/api/v1/mock",
            post(|| async { Json(json!({"status": "success", "message": "Mock mode: true"})) }),
        ))
        .await;

        let toggle = controller(base).toggle_mock().await.unwrap();

        assert_eq!(toggle.message, "Mock mode: true");
    }

    #[tokio::test]
    async fn should_report_decode_error_for_non_json_body() {
        let base = serve(Router::new().route(
            "/api/v1/state",
            get(|| async { "<html>bad gateway</html>" }),
        ))
        .await;

        let result = controller(base).fetch_state().await;

        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn should_report_transport_error_when_controller_is_down() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = controller(format!("http://{addr}")).fetch_state().await;

        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn should_time_out_hung_request() {
        let base = serve(Router::new().route(
            "/api/v1/state",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(state_body())
            }),
        ))
        .await;
        let controller = HttpController::new(&HttpConfig {
            base_url: base,
            timeout_secs: 1,
            ..HttpConfig::default()
        })
        .unwrap();

        let result = controller.fetch_state().await;

        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn should_fetch_health_report() {
        let base = serve(Router::new().route(
            "/api/v1/health",
            get(|| async {
                Json(json!({
                    "status": "healthy",
                    "components": {"dht22_sensor": "ok", "relays": "ok"},
                    "uptime_seconds": 3600,
                    "cycle_count": 12,
                    "version": "2.0.0",
                    "timestamp": "2024-05-01T10:00:00Z"
                }))
            }),
        ))
        .await;

        let report = controller(base).fetch_health().await.unwrap();

        assert!(report.status.is_healthy());
        assert_eq!(report.components.len(), 2);
    }

    #[tokio::test]
    async fn should_send_history_limit_as_query() {
        let base = serve(Router::new().route(
            "/api/v1/history",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let limit: i64 = params["limit"].parse().unwrap();
                Json(json!({
                    "status": "success",
                    "data": [],
                    "meta": {"count": 0, "total": 0, "limit": limit}
                }))
            }),
        ))
        .await;

        let page = controller(base).fetch_history(7).await.unwrap();

        assert!(page.records.is_empty());
        assert_eq!(page.meta.unwrap().limit, 7);
    }

    #[tokio::test]
    async fn should_fetch_settings_from_envelope() {
        let base = serve(Router::new().route(
            "/api/v1/settings",
            get(|| async {
                Json(json!({
                    "status": "success",
                    "data": {
                        "light_schedule": {"start_time": "08:00", "end_time": "20:00", "enabled": true},
                        "targets": {"temperature": 26.5, "humidity": 70},
                        "pump_settings": {"duration_seconds": 30, "min_interval": 3600},
                        "cycle_pause": 10,
                        "use_mock_data": false
                    }
                }))
            }),
        ))
        .await;

        let settings = controller(base).fetch_settings().await.unwrap();

        assert_eq!(settings.light_schedule.end_time, "20:00");
        assert_eq!(settings.pump_settings.duration_seconds, 30);
        assert_eq!(settings.cycle_pause, 10);
    }

    #[tokio::test]
    async fn should_put_only_patched_keys() {
        let (tx, rx) = tokio::sync::oneshot::channel::<Value>();
        let tx = std::sync::Arc::new(std::sync::Mutex::new(Some(tx)));
        let base = serve(Router::new().route(
            "/api/v1/settings",
            put(move |Json(body): Json<Value>| async move {
                if let Some(tx) = tx.lock().unwrap().take() {
                    tx.send(body).unwrap();
                }
                Json(json!({"status": "success", "message": "updated"}))
            }),
        ))
        .await;
        let patch = SettingsPatch {
            cycle_pause: Some(15),
            ..SettingsPatch::default()
        };

        let message = controller(base).update_settings(&patch).await.unwrap();

        assert_eq!(message, "updated");
        assert_eq!(rx.await.unwrap(), json!({"cycle_pause": 15}));
    }

    #[tokio::test]
    async fn should_reject_refused_settings_update() {
        let base = serve(Router::new().route(
            "/api/v1/settings",
            put(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"status": "error", "message": "invalid body"})),
                )
            }),
        ))
        .await;
        let patch = SettingsPatch {
            use_mock_data: Some(true),
            ..SettingsPatch::default()
        };

        let result = controller(base).update_settings(&patch).await;

        assert!(matches!(
            result,
            Err(ClientError::Rejected { message, .. }) if message == "invalid body"
        ));
    }

    #[tokio::test]
    async fn should_reset_settings_with_post() {
        let base = serve(Router::new().route(
            "/api/v1/settings/reset",
            post(|| async {
                Json(json!({"status": "success", "message": "defaults restored"}))
            }),
        ))
        .await;

        let message = controller(base).reset_settings().await.unwrap();

        assert_eq!(message, "defaults restored");
    }
}
