//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `POST /api/chat` body. Both fields are optional at the wire level so a
/// missing field reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub section: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub variant: &'static str,
    pub model: String,
}
