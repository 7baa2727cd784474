//! Login request and response bodies

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token expiry as a Unix timestamp (seconds)
    #[serde(rename = "expiresAtUnix")]
    pub expires_at_unix: i64,
}
