//! Users API
//!
//! `/users/me` endpoint: read and update the authenticated user.

use crate::api::null_as_default;
use crate::client::HttpClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The authenticated user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nickname: String,
}

/// Accessor for the `/users` endpoints
#[derive(Debug, Clone)]
pub struct Users {
    http: Arc<HttpClient>,
}

impl Users {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// GET /users/me
    pub async fn get_me(&self) -> Result<User> {
        self.http.get("users/me", &[]).await
    }

    /// POST /users/me
    ///
    /// Only the nickname is sent. Returns the user as accepted by the server.
    pub async fn update_me(&self, user: &User) -> Result<User> {
        self.http
            .post("users/me", &[("nickname", user.nickname.as_str())])
            .await
    }
}
