//! TokenProvider trait and AccessToken

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AuthError;

use super::Session;

/// A session token issued by the admin auth endpoint.
///
/// The token is an opaque string sent back verbatim in the `Authorization`
/// header of every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token from the raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token string.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Supplies the token used to authorize API requests.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a token, or an error when none is available.
    async fn get_token(&self) -> Result<AccessToken, AuthError>;
}

/// A provider that always returns the same token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    /// Creates a provider around a fixed token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(token),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn get_token(&self) -> Result<AccessToken, AuthError> {
        Ok(self.token.clone())
    }
}

/// A provider backed by a shared [`Session`].
///
/// Requests fail with [`AuthError::SessionExpired`] once the session has
/// been logged out, so a cleared session immediately stops all API traffic.
#[derive(Clone)]
pub struct SessionTokenProvider {
    session: Arc<RwLock<Session>>,
}

impl SessionTokenProvider {
    /// Creates a provider reading from the given shared session.
    pub fn new(session: Arc<RwLock<Session>>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl TokenProvider for SessionTokenProvider {
    async fn get_token(&self) -> Result<AccessToken, AuthError> {
        let session = self.session.read().await;
        session.token().cloned().ok_or(AuthError::SessionExpired)
    }
}
