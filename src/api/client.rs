//! Endpoint API client: the four calls the service exposes, plus the URL
//! and summary derivation that feed the recents cache after a successful
//! create or update.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::api::types::{
    ApiError, ApiResponse, CreateJsonRequest, DeleteJsonRequest, EndpointRecord,
    UpdateJsonRequest,
};
use crate::config::ApiConfig;
use crate::recents::summary::EndpointSummary;

pub struct ApiClient {
    http: Client,
    base_url: String,
    default_expires_hours: i64,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_expires_hours: config.default_expires_hours,
        })
    }

    // ========================================
    // CRUD CALLS
    // ========================================

    /// POST /api/json. An empty or absent password is omitted from the
    /// body; `expires_in_hours` falls back to the configured default.
    pub async fn create_json(
        &self,
        content: &str,
        password: Option<&str>,
        expires_in_hours: Option<i64>,
    ) -> Result<EndpointRecord, ApiError> {
        let url = format!("{}/api/json", self.base_url);
        debug!("POST {}", url);

        let body = CreateJsonRequest {
            json: content.to_string(),
            password: password.filter(|p| !p.is_empty()).map(str::to_string),
            expires: self.expires_from_now(expires_in_hours),
        };
        self.request_record(self.http.post(url).json(&body)).await
    }

    /// GET /api/json/{id}.
    pub async fn get_json(&self, id: &str) -> Result<EndpointRecord, ApiError> {
        let url = self.endpoint_url(id);
        debug!("GET {}", url);

        self.request_record(self.http.get(url)).await
    }

    /// PUT /api/json/{id}. The password is always present: the server
    /// checks it against the one set at creation.
    pub async fn update_json(
        &self,
        id: &str,
        content: &str,
        password: &str,
        expires_in_hours: Option<i64>,
    ) -> Result<EndpointRecord, ApiError> {
        let url = self.endpoint_url(id);
        debug!("PUT {}", url);

        let body = UpdateJsonRequest {
            json: content.to_string(),
            password: password.to_string(),
            expires: self.expires_from_now(expires_in_hours),
        };
        self.request_record(self.http.put(url).json(&body)).await
    }

    /// DELETE /api/json/{id}.
    pub async fn delete_json(&self, id: &str, password: &str) -> Result<(), ApiError> {
        let url = self.endpoint_url(id);
        debug!("DELETE {}", url);

        let body = DeleteJsonRequest {
            password: password.to_string(),
        };
        self.execute(self.http.delete(url).json(&body)).await?;
        Ok(())
    }

    // ========================================
    // DERIVED DISPLAY STRINGS
    // ========================================

    /// The raw API URL for an endpoint id.
    pub fn endpoint_url(&self, id: &str) -> String {
        format!("{}/api/json/{}", self.base_url, id)
    }

    /// The human view URL for an endpoint id.
    pub fn view_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// The cache entry to record after a successful create or update,
    /// with both display URLs captured as of now.
    pub fn summarize(&self, record: &EndpointRecord) -> EndpointSummary {
        EndpointSummary {
            id: record.id.clone(),
            created_at: record.created_at,
            expires: record.expires,
            endpoint_url: self.endpoint_url(&record.id),
            view_url: self.view_url(&record.id),
        }
    }

    // ========================================
    // INTERNALS
    // ========================================

    fn expires_from_now(&self, hours: Option<i64>) -> DateTime<Utc> {
        Utc::now() + chrono::Duration::hours(hours.unwrap_or(self.default_expires_hours))
    }

    async fn request_record(&self, builder: RequestBuilder) -> Result<EndpointRecord, ApiError> {
        let body = self.execute(builder).await?;
        let envelope: ApiResponse<EndpointRecord> = serde_json::from_str(&body)
            .map_err(|e| ApiError::transport(format!("failed to parse response: {}", e)))?;
        Ok(envelope.data)
    }

    /// Sends the request and returns the raw body of a 2xx response;
    /// everything else becomes an `ApiError`.
    async fn execute(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(body)
    }
}
