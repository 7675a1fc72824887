//! Explicit session lifecycle
//!
//! The session is an owned value passed to whatever needs it, not an
//! ambient global: login sets it, logout clears it, and a session check
//! against the auth endpoint either refreshes the token or ends it.

use serde::Deserialize;

use super::AccessToken;
use super::Policy;
use super::UserPolicy;

/// An authenticated admin user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// Unique user id.
    pub id: u64,
    /// Login name.
    pub user_name: String,
    /// Granted policies and organization scope.
    #[serde(default)]
    pub policy: UserPolicy,
}

impl AdminUser {
    /// Returns `true` if the user holds any of the required policies.
    pub fn has_permission(&self, required: &[Policy]) -> bool {
        self.policy.has_any(required)
    }

    /// Returns `true` if the user is scoped to an organization.
    pub fn has_organization(&self) -> bool {
        self.policy.organization.is_some()
    }
}

/// The login state of the admin application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<AdminUser>,
    token: Option<AccessToken>,
}

impl Session {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the logged-in user, if any.
    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    /// Returns the current token, if logged in.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Returns `true` if both a user and a token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Establishes the session after a successful login.
    pub fn login(&mut self, user: AdminUser, token: AccessToken) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Clears the session.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }

    /// Folds the outcome of a session check into the session.
    ///
    /// A valid check may carry a refreshed token (issued when the user's
    /// role changed); an invalid check ends the session.
    pub fn apply_check(&mut self, check: SessionCheck) {
        match check {
            SessionCheck::Valid { refreshed: Some(token) } => self.token = Some(token),
            SessionCheck::Valid { refreshed: None } => {}
            SessionCheck::Invalid => self.logout(),
        }
    }
}

/// Result of validating a stored session against the auth endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCheck {
    /// The session is still valid.
    Valid {
        /// Replacement token, present when the user's role changed.
        refreshed: Option<AccessToken>,
    },
    /// The session is no longer valid.
    Invalid,
}
