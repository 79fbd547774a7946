use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::modules::batch_import::domain::{
    parse_batch, summarize, DialogState, ImportSummary, PreviewSummary,
};
use crate::modules::batch_import::infrastructure::ingestion::{read_source, IngestionSource};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::extract_error_message;
use crate::{log_debug, log_info, log_warn};

use super::ports::{ImportEndpoint, Notifier};

/// Owns one import dialog session: the state machine, the single in-flight
/// submission, and the notifications around it.
///
/// Lock order is state before cancel token; neither lock is held across the
/// endpoint await, so ingestion and close stay responsive while a
/// submission is in flight.
pub struct BatchImportService {
    state: Mutex<DialogState>,
    cancel: Mutex<CancellationToken>,
    endpoint: Arc<dyn ImportEndpoint>,
    notifier: Arc<dyn Notifier>,
}

impl BatchImportService {
    pub fn new(endpoint: Arc<dyn ImportEndpoint>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Mutex::new(DialogState::default()),
            cancel: Mutex::new(CancellationToken::new()),
            endpoint,
            notifier,
        }
    }

    /// Snapshot of the dialog state for display.
    pub async fn state(&self) -> DialogState {
        self.state.lock().await.clone()
    }

    /// Preview of the currently staged batch, if one is staged.
    pub async fn preview(&self) -> Option<PreviewSummary> {
        self.state
            .lock()
            .await
            .staged_batch()
            .map(|batch| batch.preview())
    }

    /// Reconciled view of the shown result, if the session reached one.
    pub async fn result_summary(&self) -> Option<ImportSummary> {
        self.state.lock().await.response().map(summarize)
    }

    /// Feed one input source through read + parse and move the state machine
    /// accordingly. A fresh parse supersedes whatever was staged; a source
    /// that fails to read leaves the state untouched. Refused outright while
    /// a submission is in flight.
    pub async fn ingest(&self, source: IngestionSource) -> AppResult<DialogState> {
        if self.state.lock().await.is_submitting() {
            return Err(AppError::InvalidInput(
                "an import is already in progress".to_string(),
            ));
        }

        let raw = read_source(&source).await?;

        let mut state = self.state.lock().await;
        // The read suspended; a submission may have started meanwhile.
        if state.is_submitting() {
            return Err(AppError::InvalidInput(
                "an import is already in progress".to_string(),
            ));
        }

        if let Some(text) = raw {
            match parse_batch(&text) {
                Ok(Some(batch)) => {
                    log_debug!("Staged import batch with {} account(s)", batch.accounts.len());
                    state.stage_batch(batch);
                }
                Ok(None) => {
                    log_debug!("Ingested input was empty, clearing staged batch");
                    state.clear_input();
                }
                Err(error) => {
                    log_debug!("Rejected import payload: {}", error);
                    state.reject_input(error);
                }
            }
        }

        Ok(state.clone())
    }

    /// Send the staged batch to the import endpoint, exactly once.
    ///
    /// A completed round-trip always lands on `Result`; the response's own
    /// `success` flag only picks the notification level. Transport failure
    /// notifies, falls back to `Previewing` with the batch retained, and
    /// propagates the error. Closing the dialog mid-flight resolves this
    /// call with `Cancelled`.
    pub async fn submit(&self) -> AppResult<ImportSummary> {
        let (batch, token) = {
            let mut state = self.state.lock().await;
            let token = self.cancel.lock().await.clone();
            (state.begin_submission()?, token)
        };
        log_info!("Submitting import batch with {} account(s)", batch.accounts.len());

        let outcome = tokio::select! {
            _ = token.cancelled() => {
                log_debug!("Import submission abandoned, dialog closed");
                return Err(AppError::Cancelled(
                    "import submission abandoned".to_string(),
                ));
            }
            outcome = self.endpoint.import_batch(&batch) => outcome,
        };

        match outcome {
            Ok(response) => {
                log_info!(
                    "Import completed - Imported: {}, Skipped: {}, Failed: {}",
                    response.imported_count,
                    response.skipped_count,
                    response.failed_count
                );
                if response.success {
                    self.notifier.success(&response.message);
                } else {
                    self.notifier.warning(&response.message);
                }

                let summary = summarize(&response);
                self.state.lock().await.complete_submission(response);
                Ok(summary)
            }
            Err(err) => {
                log_warn!("Import submission failed: {}", err);
                self.notifier
                    .error(&format!("Import failed: {}", extract_error_message(&err)));
                self.state.lock().await.revert_submission();
                Err(err)
            }
        }
    }

    /// Dialog closed: discard batch and result and abandon any in-flight
    /// submission. A fresh cancellation token is minted so the next session
    /// submits normally.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        let mut cancel = self.cancel.lock().await;
        cancel.cancel();
        *cancel = CancellationToken::new();
        state.reset();
        log_debug!("Import dialog reset");
    }
}
