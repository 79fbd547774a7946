pub mod http_endpoint;
pub mod ingestion;
pub mod log_notifier;

pub use http_endpoint::HttpImportEndpoint;
pub use ingestion::{read_source, DroppedFile, IngestionError, IngestionSource};
pub use log_notifier::LogNotifier;
