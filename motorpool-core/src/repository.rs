use async_trait::async_trait;
use serde_json::Value;

use crate::normalize::{normalize_records, NormalizedBatch};
use crate::{CoreError, CoreResult};

/// Source of the raw pending-reservation records the backend currently holds.
///
/// Records are returned as received; [`load_pending`] maps them onto the
/// canonical schema.
#[async_trait]
pub trait PendingReservationRepository: Send + Sync {
    async fn fetch_pending(&self) -> Result<Vec<Value>, Box<dyn std::error::Error + Send + Sync>>;
}

pub async fn load_pending(repo: &dyn PendingReservationRepository) -> CoreResult<NormalizedBatch> {
    let records = repo
        .fetch_pending()
        .await
        .map_err(|e| CoreError::SourceError(e.to_string()))?;
    Ok(normalize_records(&records))
}
