//! User management table: filtering and summary counts over the directory.

use nexushub_adapters::{User, UserRole};
use serde::{Deserialize, Serialize};

/// Role filter of the user table; `all` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleFilter {
    #[default]
    All,
    Admin,
    Host,
    Guest,
    User,
}

impl RoleFilter {
    fn matches(&self, role: UserRole) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Admin => role == UserRole::Admin,
            RoleFilter::Host => role == UserRole::Host,
            RoleFilter::Guest => role == UserRole::Guest,
            RoleFilter::User => role == UserRole::User,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub role: RoleFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub verified: usize,
    pub active: usize,
    pub admins: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTable {
    pub stats: UserStats,
    pub users: Vec<User>,
}

fn matches_search(user: &User, needle: &str) -> bool {
    needle.is_empty()
        || user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
        || user
            .company
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

/// Stats cover the whole directory; only the row list is filtered.
pub fn user_table(users: Vec<User>, query: &UserQuery) -> UserTable {
    let stats = UserStats {
        total: users.len(),
        verified: users.iter().filter(|u| u.is_verified).count(),
        active: users.iter().filter(|u| u.last_login.is_some()).count(),
        admins: users.iter().filter(|u| u.role == UserRole::Admin).count(),
    };
    let needle = query.search.trim().to_lowercase();
    let users = users
        .into_iter()
        .filter(|u| query.role.matches(u.role) && matches_search(u, &needle))
        .collect();
    UserTable { stats, users }
}
