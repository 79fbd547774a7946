use async_trait::async_trait;
use reqwest::Client;

use crate::log_debug;
use crate::modules::batch_import::application::ports::ImportEndpoint;
use crate::modules::batch_import::domain::{ImportBatch, ImportResponse};
use crate::shared::errors::{AppError, AppResult};

/// reqwest-backed [`ImportEndpoint`] against the admin HTTP API.
pub struct HttpImportEndpoint {
    client: Client,
    base_url: String,
    admin_token: Option<String>,
}

impl HttpImportEndpoint {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("Kanri-Admin-Client/1.0")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    /// Build from `KANRI_ADMIN_URL` / `KANRI_ADMIN_TOKEN`, loading `.env`
    /// when present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("KANRI_ADMIN_URL")
            .map_err(|_| AppError::InvalidInput("KANRI_ADMIN_URL is not set".to_string()))?;
        let endpoint = Self::new(base_url)?;

        Ok(match std::env::var("KANRI_ADMIN_TOKEN") {
            Ok(token) if !token.is_empty() => endpoint.with_token(token),
            _ => endpoint,
        })
    }
}

#[async_trait]
impl ImportEndpoint for HttpImportEndpoint {
    async fn import_batch(&self, batch: &ImportBatch) -> AppResult<ImportResponse> {
        let url = format!("{}/admin/credentials/import", self.base_url);
        log_debug!("POST {} with {} account(s)", url, batch.accounts.len());

        let mut request = self.client.post(&url).json(batch);
        if let Some(token) = &self.admin_token {
            request = request.bearer_auth(token);
        }

        // Connect/timeout failures and non-2xx statuses both land on the
        // transport-error path; per-record failures arrive inside the body.
        let response = request.send().await?.error_for_status()?;

        response
            .json::<ImportResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse import response: {}", e)))
    }
}
