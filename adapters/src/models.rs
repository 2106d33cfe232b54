//! Generic identity models for the `adapters` crate.
//!
//! These models define the account records shared by every directory adapter
//! and by the backend's session layer, so that services can work against a
//! consistent shape regardless of where identities are stored.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last identifier handed out by [`UserId::generate`], in epoch milliseconds.
static LAST_ISSUED_ID: AtomicI64 = AtomicI64::new(0);

/// Opaque account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Issues a timestamp-derived identifier.
    ///
    /// The value is the current time in milliseconds, bumped past the last
    /// issued value so two signups in the same millisecond stay distinct.
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_ISSUED_ID.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_ISSUED_ID.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed) {
                Ok(_) => return Self(next.to_string()),
                Err(actual) => last = actual,
            }
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of platform roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Host,
    Guest,
    User,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [UserRole::Admin, UserRole::Host, UserRole::Guest, UserRole::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Host => "host",
            UserRole::Guest => "guest",
            UserRole::User => "user",
        }
    }

    /// Admins and hosts run webinars and see the management views.
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Host)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "host" => Ok(UserRole::Host),
            "guest" => Ok(UserRole::Guest),
            "user" => Ok(UserRole::User),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A named account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Builds an unverified standard account from signup data.
    pub fn from_signup(data: SignupData) -> Self {
        Self {
            id: UserId::generate(),
            email: data.email,
            phone: data.phone,
            name: data.name,
            role: UserRole::User,
            company: data.company,
            is_verified: false,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    /// Upper-cased first letters of each word of the display name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Login form input. Only the address is checked by the mock directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupData {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}
