use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Batch import request in the account-export interchange format.
///
/// This is the exact shape submitted to the import endpoint; no field is
/// coerced beyond JSON decoding, and unknown-but-expected sections
/// (`groups`, `tags`) ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBatch {
    /// Export format version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Export timestamp (milliseconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<u64>,

    /// Account list
    pub accounts: Vec<ImportAccountRecord>,

    /// Account groups (opaque, passed through)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<serde_json::Value>,

    /// Export-level tags (opaque, passed through)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<serde_json::Value>,
}

impl ImportBatch {
    /// Display projection of a staged batch for the preview panel.
    pub fn preview(&self) -> PreviewSummary {
        PreviewSummary {
            version: self.version.clone(),
            account_count: self.accounts.len(),
            exported_at: self
                .exported_at
                .and_then(|ms| Utc.timestamp_millis_opt(ms as i64).single()),
        }
    }
}

/// One account entry within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportAccountRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Identity provider (Google, Github, BuilderId)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idp: Option<String>,

    /// Credential set; validity of the record hinges on this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<ImportCredentials>,

    /// Subscription details (opaque, passed through)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<serde_json::Value>,

    /// Usage details (opaque, passed through)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Token material for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,

    /// Refresh token; a record without one is invalid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// OIDC Client ID (IdC auth)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OIDC Client Secret (IdC auth)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Expiry timestamp (milliseconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,

    /// Auth method (social / idc / builder-id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// What the preview panel shows about a staged batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSummary {
    pub version: Option<String>,
    pub account_count: usize,
    pub exported_at: Option<DateTime<Utc>>,
}
