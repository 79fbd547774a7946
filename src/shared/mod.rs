pub mod errors; // Shared error types
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use errors::{AppError, AppResult};
