pub mod modules;
pub mod shared;

// Re-exports so shells and tests can wire the import dialog without deep paths
pub use modules::batch_import::{
    parse_batch, summarize, BatchImportService, DialogState, DroppedFile, HttpImportEndpoint,
    ImportBatch, ImportEndpoint, ImportResponse, ImportSummary, IngestionError, IngestionSource,
    LogNotifier, Notifier, PreviewSummary, ValidationError,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::{extract_error_message, init_logger};
