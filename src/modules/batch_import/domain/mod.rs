pub mod batch;
pub mod parser;
pub mod reconciler;
pub mod response;
pub mod state;

pub use batch::{ImportAccountRecord, ImportBatch, ImportCredentials, PreviewSummary};
pub use parser::{parse_batch, ValidationError};
pub use reconciler::{summarize, EntryOutcome, ImportSummary, ResultEntry};
pub use response::{ImportResponse, ImportResultRecord};
pub use state::DialogState;
