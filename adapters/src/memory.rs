//! In-memory identity directory seeded with the platform's demo accounts.
//!
//! Lookups are a linear scan over a small vector; the directory lives for
//! the lifetime of the process and is never persisted.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use tokio::sync::RwLock;

use crate::errors::AdapterError;
use crate::models::{User, UserId, UserRole};
use crate::IdentityAdapter;

#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: RwLock<Vec<User>>,
}

fn seed_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()
}

fn seed_user(id: &str, email: &str, name: &str, role: UserRole, company: &str) -> User {
    User {
        id: UserId::new(id),
        email: email.to_string(),
        phone: None,
        name: name.to_string(),
        role,
        company: Some(company.to_string()),
        is_verified: true,
        created_at: seed_epoch(),
        last_login: None,
    }
}

impl InMemoryDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Directory holding the three demo accounts (admin, host, user).
    pub fn seeded() -> Self {
        Self::new(vec![
            seed_user("1", "admin@nexushub.com", "Admin User", UserRole::Admin, "NexusHub"),
            seed_user("2", "host@nexushub.com", "John Host", UserRole::Host, "TechCorp"),
            seed_user("3", "user@nexushub.com", "Jane User", UserRole::User, "StartupXYZ"),
        ])
    }
}

#[async_trait]
impl IdentityAdapter for InMemoryDirectory {
    async fn find_by_address(&self, address: &str) -> Result<Option<User>, AdapterError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == address).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), AdapterError> {
        debug!("adding identity {} <{}> to directory", user.id, user.email);
        self.users.write().await.push(user);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, AdapterError> {
        Ok(self.users.read().await.clone())
    }
}
