//! Role-gated view composition.
//!
//! `compose` is a pure lookup from the session's role to the default view
//! and the sidebar navigation. Roles are a closed enum, so a new role has to
//! be placed in this table before the crate compiles.

use nexushub_adapters::UserRole;
use serde::Serialize;

use super::routes::normalize;
use crate::auth::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultView {
    Landing,
    AdminDashboard,
    UserDashboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub title: &'static str,
    pub url: &'static str,
    /// Set on the entry whose url is the page being viewed.
    pub active: bool,
}

const fn entry(title: &'static str, url: &'static str) -> NavEntry {
    NavEntry {
        title,
        url,
        active: false,
    }
}

const BASE_NAV: [NavEntry; 3] = [
    entry("Dashboard", "/dashboard"),
    entry("Webinars", "/webinars"),
    entry("Content Vault", "/vault"),
];

const STAFF_NAV: [NavEntry; 3] = [
    entry("Analytics", "/analytics"),
    entry("User Management", "/users"),
    entry("Settings", "/settings"),
];

const STAFF_QUICK_ACTIONS: [NavEntry; 2] = [
    entry("Create Webinar", "/webinars/create"),
    entry("Upload Content", "/vault/upload"),
];

const MEMBER_NAV: [NavEntry; 2] = [
    entry("My Calendar", "/calendar"),
    entry("Help & Support", "/help"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub main: Vec<NavEntry>,
    pub quick_actions: Vec<NavEntry>,
}

impl Navigation {
    pub fn contains(&self, title: &str) -> bool {
        self.main.iter().chain(&self.quick_actions).any(|e| e.title == title)
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.quick_actions.is_empty()
    }

    /// Marks the entries pointing at `path`, ignoring trailing slashes.
    pub fn mark_active(&mut self, path: &str) {
        let path = normalize(path);
        for entry in self.main.iter_mut().chain(self.quick_actions.iter_mut()) {
            entry.active = entry.url == path;
        }
    }

    pub fn active(&self) -> Option<&NavEntry> {
        self.main.iter().chain(&self.quick_actions).find(|e| e.active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub default_view: DefaultView,
    pub navigation: Navigation,
}

pub fn compose(session: &Session) -> Composition {
    match session.role() {
        None => Composition {
            default_view: DefaultView::Landing,
            navigation: Navigation::default(),
        },
        // Hosts share the administrator dashboard and navigation.
        Some(UserRole::Admin | UserRole::Host) => Composition {
            default_view: DefaultView::AdminDashboard,
            navigation: Navigation {
                main: BASE_NAV.iter().chain(&STAFF_NAV).cloned().collect(),
                quick_actions: STAFF_QUICK_ACTIONS.to_vec(),
            },
        },
        Some(UserRole::Guest | UserRole::User) => Composition {
            default_view: DefaultView::UserDashboard,
            navigation: Navigation {
                main: BASE_NAV.iter().chain(&MEMBER_NAV).cloned().collect(),
                quick_actions: Vec::new(),
            },
        },
    }
}
