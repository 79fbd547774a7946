use serde::{Deserialize, Serialize};

/// Endpoint response for one import round-trip.
///
/// Read-only on this side; the three counts are reported by the server and
/// shown verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
    pub imported_count: usize,
    pub skipped_count: usize,
    pub failed_count: usize,
    pub results: Vec<ImportResultRecord>,
}

/// Per-account outcome inside an [`ImportResponse`].
///
/// Order is whatever the server returned; `identifier` is the only
/// correlation key back to the submitted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResultRecord {
    /// Account identifier (email or nickname)
    pub identifier: String,
    pub success: bool,
    pub message: String,
    /// New credential ID (on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<u64>,
}
