//! On-disk representation of the user directory.
//!
//! The file is a single JSON object keyed by user identifier:
//!
//! ```json
//! {
//!   "ana@example.com": {
//!     "name": "Ana",
//!     "email": "ana@example.com",
//!     "password": "secret",
//!     "avatar": "🦊",
//!     "isOnline": false
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One stored user record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRecordData {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "isOnline", default)]
    pub is_online: bool,
}

/// Whole file contents
pub type UserFileData = BTreeMap<String, UserRecordData>;
