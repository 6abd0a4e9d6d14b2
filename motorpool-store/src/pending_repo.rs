use async_trait::async_trait;
use motorpool_core::repository::PendingReservationRepository;
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::app_config::UpstreamConfig;

/// Keys the backend has used to wrap the pending list in an envelope.
const ENVELOPE_KEYS: [&str; 3] = ["data", "results", "pending"];

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No pending reservations URL configured")]
    MissingUrl,
    #[error("Invalid upstream URL {0}: {1}")]
    InvalidUrl(String, String),
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected pending reservations payload: {0}")]
    UnexpectedPayload(String),
}

/// Pulls the record list out of either a bare array or a known envelope.
pub fn extract_records(body: Value) -> Result<Vec<Value>, StoreError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut envelope) => {
            for key in ENVELOPE_KEYS {
                if let Some(Value::Array(items)) = envelope.remove(key) {
                    return Ok(items);
                }
            }
            Err(StoreError::UnexpectedPayload(
                "object without a data, results or pending array".to_string(),
            ))
        }
        other => Err(StoreError::UnexpectedPayload(format!("expected an array, got {}", other))),
    }
}

/// Reads pending reservations from the backend REST API.
pub struct HttpPendingRepository {
    client: reqwest::Client,
    url: Url,
    api_token: Option<String>,
}

impl HttpPendingRepository {
    pub fn new(config: &UpstreamConfig) -> Result<Self, StoreError> {
        let raw_url = config.pending_url.as_deref().ok_or(StoreError::MissingUrl)?;
        let url = Url::parse(raw_url)
            .map_err(|e| StoreError::InvalidUrl(raw_url.to_string(), e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            url,
            api_token: config.api_token.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<Value>, StoreError> {
        let mut request = self.client.get(self.url.clone());
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let body: Value = request.send().await?.error_for_status()?.json().await?;
        extract_records(body)
    }
}

#[async_trait]
impl PendingReservationRepository for HttpPendingRepository {
    async fn fetch_pending(&self) -> Result<Vec<Value>, Box<dyn std::error::Error + Send + Sync>> {
        let records = self.fetch().await?;
        info!("Fetched {} pending records from {}", records.len(), self.url);
        Ok(records)
    }
}

/// Fixed set of records, for local runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPendingRepository {
    records: Vec<Value>,
}

impl InMemoryPendingRepository {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl PendingReservationRepository for InMemoryPendingRepository {
    async fn fetch_pending(&self) -> Result<Vec<Value>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.records.clone())
    }
}

/// HTTP source when an upstream URL is configured, otherwise an empty
/// in-memory one.
pub fn build_repository(
    config: &UpstreamConfig,
) -> Result<Arc<dyn PendingReservationRepository>, StoreError> {
    match config.pending_url {
        Some(_) => {
            let repo = HttpPendingRepository::new(config)?;
            info!("Reading pending reservations from {}", repo.url());
            Ok(Arc::new(repo))
        }
        None => {
            warn!("No upstream.pending_url configured, pending reservations will be empty");
            Ok(Arc::new(InMemoryPendingRepository::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_bare_array() {
        let records = extract_records(json!([{ "vehicle_id": "V1" }])).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_extract_envelopes() {
        for key in ENVELOPE_KEYS {
            let body = json!({ key: [{ "car_id": 3 }, { "car_id": 4 }], "count": 2 });
            assert_eq!(extract_records(body).unwrap().len(), 2);
        }
    }

    #[test]
    fn test_extract_rejects_other_shapes() {
        assert!(matches!(
            extract_records(json!({ "items": [] })),
            Err(StoreError::UnexpectedPayload(_))
        ));
        assert!(matches!(
            extract_records(json!("nope")),
            Err(StoreError::UnexpectedPayload(_))
        ));
    }

    #[test]
    fn test_http_repository_needs_valid_url() {
        let missing = UpstreamConfig::default();
        assert!(matches!(HttpPendingRepository::new(&missing), Err(StoreError::MissingUrl)));

        let invalid = UpstreamConfig {
            pending_url: Some("not a url".to_string()),
            ..UpstreamConfig::default()
        };
        assert!(matches!(
            HttpPendingRepository::new(&invalid),
            Err(StoreError::InvalidUrl(_, _))
        ));
    }

    #[tokio::test]
    async fn test_in_memory_repository() {
        let repo = InMemoryPendingRepository::new(vec![json!({ "vehicle_id": "V1" })]);
        let records = repo.fetch_pending().await.unwrap();
        assert_eq!(records, vec![json!({ "vehicle_id": "V1" })]);
    }

    #[tokio::test]
    async fn test_default_repository_is_empty() {
        let repo = build_repository(&UpstreamConfig::default()).unwrap();
        assert!(repo.fetch_pending().await.unwrap().is_empty());
    }
}
