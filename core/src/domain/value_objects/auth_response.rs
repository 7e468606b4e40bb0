//! Authentication response value object.

use serde::{Deserialize, Serialize};

/// Response returned after a successful login or refresh
///
/// Serializes with the camelCase keys the HTTP contract expects
/// (`accessToken`, `expiresIn`, `refreshToken`). `expires_in` is the
/// access-token lifetime in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    /// Signed access token for the Authorization header
    pub access_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Opaque refresh token, single-use under rotation
    pub refresh_token: String,
}

impl AccessTokenResponse {
    /// Creates a new response
    pub fn new(access_token: String, expires_in: i64, refresh_token: String) -> Self {
        Self {
            access_token,
            expires_in,
            refresh_token,
        }
    }
}
