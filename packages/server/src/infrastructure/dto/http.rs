//! HTTP request/response DTOs.
//!
//! Request fields default to empty strings so that a missing field is reported
//! by the use case ("Email is required.") instead of a 422 from the extractor.

use serde::{Deserialize, Serialize};

/// `POST /register` body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
}

/// `POST /login` body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /forgot-password` body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// `{success, message, name?}` response of `/register` and `/login`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AuthResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            name: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// `POST /forgot-password` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ForgotPasswordResponse {
    pub message: String,
}

/// `GET /chat` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatPageQuery {
    pub id: Option<String>,
}

/// `GET /debug/presence` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PresenceDebugDto {
    /// Server time (JST, RFC 3339)
    pub generated_at: Option<String>,
    pub open_connections: usize,
    pub users: Vec<PresentUserDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PresentUserDto {
    pub id: String,
    pub name: String,
    pub avatar: String,
}
