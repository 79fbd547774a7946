use crate::shared::errors::AppError;

/// Pull a human-readable message out of an error for notification display.
///
/// Kept generic on purpose: callers treat this as an opaque utility and the
/// wording it produces is part of the notification surface, not the error
/// itself.
pub fn extract_error_message(err: &AppError) -> String {
    match err {
        AppError::Ingestion(inner) => inner.to_string(),
        AppError::ApiError(msg)
        | AppError::NotFound(msg)
        | AppError::InvalidInput(msg)
        | AppError::Unauthorized(msg)
        | AppError::RateLimitError(msg)
        | AppError::Cancelled(msg)
        | AppError::ExternalServiceError(msg) => msg.clone(),
    }
}
