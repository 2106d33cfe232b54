//! NexusHub backend library.
//!
//! Wires the identity directory, the process session, the content services
//! and the route table into a single axum `Router`. `main.rs` only loads
//! configuration, sets up logging and serves the router.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod logging;
pub mod middleware;
pub mod services;
pub mod views;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use nexushub_adapters::{IdentityAdapter, InMemoryDirectory};

use crate::auth::SessionStore;
use crate::config::Config;
use crate::services::catalog::Catalog;
use crate::services::live_room::LiveRooms;
use crate::services::settings::SettingsStore;
use crate::services::uploads::UploadTracker;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub catalog: Arc<Catalog>,
    pub rooms: Arc<LiveRooms>,
    pub uploads: Arc<UploadTracker>,
    pub settings: Arc<SettingsStore>,
}

impl AppState {
    pub fn new(config: Config, directory: Arc<dyn IdentityAdapter>) -> Self {
        let catalog = Arc::new(Catalog::seeded());
        Self {
            uploads: Arc::new(UploadTracker::new(config.uploads.clone(), catalog.clone())),
            sessions: Arc::new(SessionStore::new(directory)),
            catalog,
            rooms: Arc::new(LiveRooms::new()),
            settings: Arc::new(SettingsStore::new()),
        }
    }

    /// State backed by the seeded demo directory.
    pub fn seeded(config: Config) -> Self {
        Self::new(config, Arc::new(InMemoryDirectory::seeded()))
    }
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", auth::auth_router())
        .nest("/webinars", api::webinar::routes::webinar_router())
        .nest("/vault", api::vault::routes::vault_router())
        .nest("/users", api::user::routes::user_router())
        .merge(api::platform::routes::platform_router());

    Router::new()
        .nest("/api", api)
        .fallback(get(views::handlers::render_page))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}
