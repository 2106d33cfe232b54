//! Module for the content vault API.

pub mod handlers;
pub mod routes;
