//! Module for platform-wide endpoints: analytics and settings.

pub mod handlers;
pub mod routes;
