//! The static route table mapping browser paths to views.
//!
//! Entries are matched in order; the last entry is the catch-all. There are
//! no redirects or guards here: gating happens when the view is rendered.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewRoute {
    /// Landing page or dashboard, depending on the session.
    Home,
    WebinarList,
    WebinarCreate,
    LiveSession { id: String },
    Vault,
    VaultUpload,
    Analytics,
    UserManagement,
    Settings,
    NotFound,
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Exact(&'static str),
    /// A literal prefix followed by exactly one non-empty segment.
    Param(&'static str),
    Any,
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Home,
    WebinarList,
    WebinarCreate,
    LiveSession,
    Vault,
    VaultUpload,
    Analytics,
    UserManagement,
    Settings,
    NotFound,
}

const TABLE: [(Pattern, Target); 11] = [
    (Pattern::Exact("/"), Target::Home),
    (Pattern::Exact("/dashboard"), Target::Home),
    (Pattern::Exact("/webinars"), Target::WebinarList),
    (Pattern::Exact("/webinars/create"), Target::WebinarCreate),
    (Pattern::Param("/webinars/live/"), Target::LiveSession),
    (Pattern::Exact("/vault"), Target::Vault),
    (Pattern::Exact("/vault/upload"), Target::VaultUpload),
    (Pattern::Exact("/analytics"), Target::Analytics),
    (Pattern::Exact("/users"), Target::UserManagement),
    (Pattern::Exact("/settings"), Target::Settings),
    (Pattern::Any, Target::NotFound),
];

impl Target {
    fn build(self, param: &str) -> ViewRoute {
        match self {
            Target::Home => ViewRoute::Home,
            Target::WebinarList => ViewRoute::WebinarList,
            Target::WebinarCreate => ViewRoute::WebinarCreate,
            Target::LiveSession => ViewRoute::LiveSession { id: param.to_string() },
            Target::Vault => ViewRoute::Vault,
            Target::VaultUpload => ViewRoute::VaultUpload,
            Target::Analytics => ViewRoute::Analytics,
            Target::UserManagement => ViewRoute::UserManagement,
            Target::Settings => ViewRoute::Settings,
            Target::NotFound => ViewRoute::NotFound,
        }
    }
}

/// Strips trailing slashes, keeping the root as `/`.
pub(crate) fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

pub fn resolve(path: &str) -> ViewRoute {
    let path = normalize(path);
    for (pattern, target) in TABLE {
        let captured = match pattern {
            Pattern::Exact(literal) => (path == literal).then_some(""),
            Pattern::Param(prefix) => path
                .strip_prefix(prefix)
                .filter(|rest| !rest.is_empty() && !rest.contains('/')),
            Pattern::Any => Some(""),
        };
        if let Some(param) = captured {
            return target.build(param);
        }
    }
    ViewRoute::NotFound
}
