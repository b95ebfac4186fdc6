//! Wire types for the endpoint API.
//!
//! Field names mirror the service's JSON vocabulary: camelCase, content
//! under "json". Passwords travel in request bodies only; the server
//! never echoes them back.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ========================================
// RECORDS
// ========================================

/// A stored JSON document as the service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRecord {
    pub id: String,
    #[serde(rename = "json")]
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
}

/// Success envelope: every 2xx response nests its payload under "data".
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

// ========================================
// REQUEST BODIES
// ========================================

#[derive(Debug, Serialize)]
pub struct CreateJsonRequest {
    pub json: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UpdateJsonRequest {
    pub json: String,
    pub password: String,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DeleteJsonRequest {
    pub password: String,
}

// ========================================
// ERRORS
// ========================================

/// Body shape the service uses for non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A descriptive API failure: the HTTP status when one was received, plus
/// a message suitable for direct display.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// Failure before any HTTP status existed (connect, timeout, decode).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Error for a non-2xx response: the body's "error" field wins, then
    /// "message", then a status-derived fallback.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .filter(|s| !s.is_empty())
            .or(parsed.message.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| format!("HTTP {}", status));

        Self {
            status: Some(status),
            message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
