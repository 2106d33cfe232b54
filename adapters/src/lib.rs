//! Core `adapters` crate for abstracting identity directory access.
//!
//! This crate defines the `IdentityAdapter` trait, which outlines the lookups
//! and mutations the session layer needs from an account store, and provides
//! the in-memory seeded implementation used by the mocked platform.

pub mod errors;
pub mod memory;
pub mod models;

pub use errors::AdapterError;
pub use memory::InMemoryDirectory;
pub use models::*;

use async_trait::async_trait;

/// Abstract store of known identities.
#[async_trait]
pub trait IdentityAdapter: Send + Sync {
    /// Looks up an identity by contact address. A miss is `Ok(None)`.
    async fn find_by_address(&self, address: &str) -> Result<Option<User>, AdapterError>;

    /// Appends an identity. Addresses are not checked for uniqueness.
    async fn insert(&self, user: User) -> Result<(), AdapterError>;

    /// All identities in insertion order.
    async fn list(&self) -> Result<Vec<User>, AdapterError>;
}
