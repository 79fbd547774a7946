pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ports::{ImportEndpoint, Notifier};
pub use application::BatchImportService;
pub use domain::{
    parse_batch, summarize, DialogState, ImportBatch, ImportResponse, ImportSummary,
    PreviewSummary, ValidationError,
};
pub use infrastructure::{
    DroppedFile, HttpImportEndpoint, IngestionError, IngestionSource, LogNotifier,
};
