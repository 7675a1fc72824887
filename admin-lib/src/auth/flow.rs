//! Login flow against the admin auth endpoints
//!
//! Login happens before any token exists, so the flow owns its own HTTP
//! client instead of going through [`crate::AdminClient`]. A successful
//! login yields the [`AdminUser`] and [`AccessToken`] to establish a
//! [`super::Session`] with.

use serde::Deserialize;

use super::AccessToken;
use super::AdminUser;
use super::SessionCheck;
use crate::error::AuthError;

/// Username/password login against the admin API.
pub struct LoginFlow {
    base_url: String,
    http_client: reqwest::Client,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: AdminUser,
    /// Token for subsequent API calls.
    pub token: AccessToken,
}

#[derive(Deserialize)]
struct LoginResponse {
    user: AdminUser,
    token: String,
}

#[derive(Deserialize)]
struct CheckSessionResponse {
    #[serde(default)]
    token: Option<String>,
}

impl LoginFlow {
    /// Creates a login flow for the given admin API root URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: reqwest::Client::new(),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Authenticates with a username and password.
    ///
    /// A 401 response maps to [`AuthError::InvalidCredentials`].
    pub async fn login(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<LoginOutcome, AuthError> {
        let response = self
            .http_client
            .post(self.auth_url("login"))
            .json(&serde_json::json!({
                "userName": user_name,
                "password": password,
            }))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Parse(format!(
                "login failed with HTTP {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        let parsed: LoginResponse =
            serde_json::from_str(&body).map_err(|err| AuthError::Parse(err.to_string()))?;

        Ok(LoginOutcome {
            user: parsed.user,
            token: AccessToken::new(parsed.token),
        })
    }

    /// Validates a stored session against the auth endpoint.
    ///
    /// A 200 response keeps the session alive; it carries a replacement
    /// token when the user's role changed since the token was issued. Any
    /// non-2xx response means the session has ended.
    pub async fn check_session(
        &self,
        token: &AccessToken,
        user_id: u64,
    ) -> Result<SessionCheck, AuthError> {
        let response = self
            .http_client
            .get(self.auth_url("check_session"))
            .query(&[("id", user_id.to_string())])
            .header("Authorization", token.value())
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(SessionCheck::Invalid);
        }

        let body = response.text().await?;
        let parsed: CheckSessionResponse =
            serde_json::from_str(&body).map_err(|err| AuthError::Parse(err.to_string()))?;

        Ok(SessionCheck::Valid {
            refreshed: parsed.token.map(AccessToken::new),
        })
    }
}
