use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::batch::ImportBatch;

/// Why a pasted or dropped payload was rejected before ever touching the
/// network.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum ValidationError {
    #[error("Failed to parse JSON, check that the format is correct")]
    MalformedJson,

    #[error("Invalid data format: missing accounts array")]
    MissingAccountsField,

    #[error("The accounts array is empty")]
    EmptyAccountsArray,

    /// Number of records missing a usable `credentials.refreshToken`.
    /// Only the count is reported, matching the import contract.
    #[error("{0} account(s) missing a valid credentials.refreshToken")]
    InvalidCredentials(usize),
}

/// Parse raw text into a validated [`ImportBatch`].
///
/// `Ok(None)` is the neutral outcome for empty or whitespace-only input:
/// nothing to preview, nothing to report. Checks run in order and
/// short-circuit: JSON syntax, `accounts` present and an array, array
/// non-empty, then a per-record refresh-token check. Pure and idempotent;
/// the caller decides what to do with the result.
pub fn parse_batch(raw: &str) -> Result<Option<ImportBatch>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(raw).map_err(|_| ValidationError::MalformedJson)?;

    let accounts = match value.get("accounts") {
        Some(Value::Array(items)) => items,
        _ => return Err(ValidationError::MissingAccountsField),
    };

    if accounts.is_empty() {
        return Err(ValidationError::EmptyAccountsArray);
    }

    let invalid = accounts
        .iter()
        .filter(|account| !has_usable_refresh_token(account))
        .count();
    if invalid > 0 {
        return Err(ValidationError::InvalidCredentials(invalid));
    }

    // Structure is vetted; a decode failure past this point means a field
    // carries a JSON type the interchange format never produces.
    let batch = serde_json::from_value(value).map_err(|_| ValidationError::MalformedJson)?;
    Ok(Some(batch))
}

/// A record is valid when `credentials.refreshToken` is a non-empty string.
/// A missing `credentials` object fails this check rather than the decode.
fn has_usable_refresh_token(account: &Value) -> bool {
    account
        .get("credentials")
        .and_then(|credentials| credentials.get("refreshToken"))
        .and_then(Value::as_str)
        .map(|token| !token.is_empty())
        .unwrap_or(false)
}
