//! Realtime protocol DTOs.
//!
//! Every frame is a JSON object whose `type` field selects the event.

use serde::{Deserialize, Serialize};

/// Client → Server events
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientEvent {
    /// `{"type":"join","email":<id>,"user":<name>}`
    ///
    /// `user` is accepted but not used: the display name comes from the user record.
    Join {
        email: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user: Option<String>,
    },
    /// `{"type":"message","user":<name>,"message":<text>}`
    Message { user: String, message: String },
    /// `{"type":"leave","email":<id>}`
    Leave { email: String },
}

/// Server → Client events
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerEvent {
    /// `{"type":"users","users":[{"name":..,"avatar":..}, ...]}`
    Users { users: Vec<UserSummary> },
    /// `{"type":"message","user":<name>,"message":<text>}`
    Message { user: String, message: String },
}

/// One entry of the presence list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserSummary {
    pub name: String,
    pub avatar: String,
}
