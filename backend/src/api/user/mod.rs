//! Module for user management API endpoints.
//!
//! This module handles the user table shown to administrators, which is
//! distinct from the core authentication process.

pub mod handlers;
pub mod routes;
