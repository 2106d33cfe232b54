//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the API domains (webinars,
//! the content vault, user management, analytics and settings), excluding
//! the authentication routes which are handled separately.

pub mod platform;
pub mod user;
pub mod vault;
pub mod webinar;
