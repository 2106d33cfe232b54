//! Data structures for authentication-related entities.
//!
//! This module defines the session record held by the session store and the
//! request bodies accepted by the authentication endpoints.

use nexushub_adapters::{User, UserRole};
use serde::{Deserialize, Serialize};

/// The process-local record of which identity, if any, is active.
///
/// Authentication is derived from the presence of a user, so the two can
/// never disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
    is_loading: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True while a login or signup is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

/// Wire form of [`Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            user: session.user.clone(),
            is_authenticated: session.is_authenticated(),
            is_loading: session.is_loading,
        }
    }
}

/// Body of `PUT /api/auth/session`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceIdentityRequest {
    #[serde(default)]
    pub user: Option<User>,
}
