use async_trait::async_trait;

use crate::modules::batch_import::domain::{ImportBatch, ImportResponse};
use crate::shared::errors::AppResult;

/// Port (interface) for the external import endpoint
/// Infrastructure layer implements this for the admin HTTP API; tests
/// substitute a scripted double. One call per submission; the `Err` side is
/// transport/protocol failure only, so a response reporting failed records
/// is still an `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImportEndpoint: Send + Sync {
    /// Submit a validated batch and return the server's per-record verdict
    async fn import_batch(&self, batch: &ImportBatch) -> AppResult<ImportResponse>;
}
