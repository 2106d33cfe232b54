//! Module for the webinar API: catalog listing, scheduling and the live room.

pub mod handlers;
pub mod routes;
