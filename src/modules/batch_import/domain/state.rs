use serde::Serialize;

use crate::shared::errors::{AppError, AppResult};

use super::batch::ImportBatch;
use super::parser::ValidationError;
use super::response::ImportResponse;

/// Lifecycle of one import dialog session.
///
/// The only mutable node in the pipeline. `Previewing` and `Invalid` are
/// mutually exclusive renditions of "input was evaluated"; `Submitting`
/// carries the batch so a transport failure can fall back to `Previewing`
/// without re-ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DialogState {
    #[default]
    Empty,
    Previewing {
        batch: ImportBatch,
    },
    Invalid {
        error: ValidationError,
    },
    Submitting {
        batch: ImportBatch,
    },
    Result {
        response: ImportResponse,
    },
}

impl DialogState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, DialogState::Submitting { .. })
    }

    /// Batch currently staged for submission, if any.
    pub fn staged_batch(&self) -> Option<&ImportBatch> {
        match self {
            DialogState::Previewing { batch } | DialogState::Submitting { batch } => Some(batch),
            _ => None,
        }
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            DialogState::Invalid { error } => Some(error),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&ImportResponse> {
        match self {
            DialogState::Result { response } => Some(response),
            _ => None,
        }
    }

    /// A fresh parse replaces whatever was staged, including a shown result.
    pub fn stage_batch(&mut self, batch: ImportBatch) {
        *self = DialogState::Previewing { batch };
    }

    pub fn reject_input(&mut self, error: ValidationError) {
        *self = DialogState::Invalid { error };
    }

    /// Neutral no-input outcome: drop any staged preview or error.
    pub fn clear_input(&mut self) {
        *self = DialogState::Empty;
    }

    /// Move `Previewing` to `Submitting`, handing back the batch to send.
    /// Submission is unavailable from every other state.
    pub fn begin_submission(&mut self) -> AppResult<ImportBatch> {
        match self {
            DialogState::Previewing { batch } => {
                let batch = batch.clone();
                *self = DialogState::Submitting {
                    batch: batch.clone(),
                };
                Ok(batch)
            }
            DialogState::Submitting { .. } => Err(AppError::InvalidInput(
                "an import is already in progress".to_string(),
            )),
            _ => Err(AppError::InvalidInput(
                "no validated batch is staged for submission".to_string(),
            )),
        }
    }

    /// Record the endpoint's response. A response landing after the dialog
    /// was closed is dropped; interest in it was abandoned with the reset.
    pub fn complete_submission(&mut self, response: ImportResponse) {
        if self.is_submitting() {
            *self = DialogState::Result { response };
        }
    }

    /// Transport failure: fall back to `Previewing` with the batch retained
    /// so the same payload can be retried without re-ingestion.
    pub fn revert_submission(&mut self) {
        if let DialogState::Submitting { batch } = self {
            let batch = batch.clone();
            *self = DialogState::Previewing { batch };
        }
    }

    /// Dialog closed: discard batch and result, whatever the state.
    pub fn reset(&mut self) {
        *self = DialogState::Empty;
    }
}
