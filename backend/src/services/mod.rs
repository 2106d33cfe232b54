//! Module for core business logic services.
//!
//! This module encapsulates the in-memory stores and aggregations behind the
//! content views: the webinar and vault catalog, live-room state, simulated
//! uploads, analytics roll-ups, the user table and platform settings.

pub mod accounts;
pub mod analytics;
pub mod catalog;
pub mod live_room;
pub mod settings;
pub mod uploads;
