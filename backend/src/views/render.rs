//! Page rendering: turns a resolved route and a session snapshot into the
//! page payload the browser shell draws.
//!
//! The sidebar layout only exists for authenticated sessions. Content views
//! other than `Home` render their data whether or not anyone is signed in.

use serde::Serialize;

use crate::auth::Session;
use crate::errors::AppResult;
use crate::services::accounts::{user_table, UserQuery, UserTable};
use crate::services::analytics::{self, AnalyticsReport};
use crate::services::catalog::{ContentType, VaultItem, Webinar, WebinarStatus};
use crate::services::live_room::{Control, LiveRoom};
use crate::services::settings::SettingsPanel;
use crate::AppState;

use super::composer::{compose, DefaultView, Navigation};
use super::routes::ViewRoute;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarUser {
    pub name: String,
    pub email: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    /// e.g. "admin Panel".
    pub panel: String,
    pub navigation: Navigation,
    pub user: SidebarUser,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub sidebar: Option<Sidebar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingContent {
    pub features: Vec<Feature>,
    pub upcoming_webinars: Vec<Webinar>,
    pub sign_in_prompt: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_webinars: usize,
    pub total_users: usize,
    pub this_month_attendees: u32,
    pub avg_engagement: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentUser {
    pub name: String,
    pub email: String,
    pub joined: chrono::NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardContent {
    pub stats: AdminStats,
    pub recent_webinars: Vec<Webinar>,
    pub recent_users: Vec<RecentUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub webinars_attended: u32,
    /// Minutes.
    pub total_watch_time: u32,
    pub vault_items_viewed: u32,
    pub current_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDashboardContent {
    pub greeting: String,
    pub stats: MemberStats,
    pub upcoming_webinars: Vec<Webinar>,
    pub recent_vault_content: Vec<VaultItem>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentTypeOption {
    pub value: ContentType,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Content {
    Landing(LandingContent),
    AdminDashboard(AdminDashboardContent),
    UserDashboard(UserDashboardContent),
    WebinarList {
        webinars: Vec<Webinar>,
    },
    WebinarCreate {
        #[serde(rename = "defaultHost")]
        default_host: String,
    },
    LiveSession {
        room: LiveRoom,
        #[serde(rename = "isHost")]
        is_host: bool,
        #[serde(rename = "canManage")]
        can_manage: bool,
        controls: Vec<Control>,
    },
    Vault {
        items: Vec<VaultItem>,
    },
    VaultUpload {
        #[serde(rename = "contentTypes")]
        content_types: Vec<ContentTypeOption>,
    },
    Analytics(AnalyticsReport),
    UserManagement(UserTable),
    Settings(SettingsPanel),
    NotFound {
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub path: String,
    pub route: ViewRoute,
    pub layout: Layout,
    pub content: Content,
}

impl Page {
    pub fn is_not_found(&self) -> bool {
        matches!(self.content, Content::NotFound { .. })
    }
}

fn sidebar(session: &Session, path: &str) -> Option<Sidebar> {
    let user = session.user()?;
    let mut navigation = compose(session).navigation;
    navigation.mark_active(path);
    Some(Sidebar {
        panel: format!("{} Panel", user.role),
        navigation,
        user: SidebarUser {
            name: user.name.clone(),
            email: user.email.clone(),
            initials: user.initials(),
        },
    })
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Global Reach",
            description: "Connect with audiences worldwide through scalable webinar technology",
        },
        Feature {
            title: "Enterprise Security",
            description: "Bank-grade security ensures your content and data stay protected",
        },
        Feature {
            title: "Real-time Engagement",
            description: "Interactive features keep your audience engaged throughout sessions",
        },
    ]
}

fn achievements() -> Vec<Achievement> {
    vec![
        Achievement { title: "First Webinar", description: "Attended your first webinar", completed: true },
        Achievement { title: "Knowledge Seeker", description: "Viewed 5 vault items", completed: true },
        Achievement { title: "Regular Attendee", description: "Attend 10 webinars", completed: true },
        Achievement { title: "Expert Learner", description: "Complete 20 vault items", completed: false },
    ]
}

fn upcoming(webinars: Vec<Webinar>) -> Vec<Webinar> {
    let mut upcoming: Vec<Webinar> = webinars
        .into_iter()
        .filter(|w| w.status == WebinarStatus::Scheduled)
        .collect();
    upcoming.sort_by_key(|w| w.scheduled_at);
    upcoming
}

async fn home(session: &Session, state: &AppState) -> AppResult<Content> {
    let webinars = state.catalog.webinars().await;
    let content = match compose(session).default_view {
        DefaultView::Landing => Content::Landing(LandingContent {
            features: features(),
            upcoming_webinars: upcoming(webinars),
            sign_in_prompt: true,
        }),
        DefaultView::AdminDashboard => {
            let users = state.sessions.directory().list().await?;
            let mut recent_webinars = webinars.clone();
            recent_webinars.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
            recent_webinars.truncate(3);
            Content::AdminDashboard(AdminDashboardContent {
                stats: AdminStats {
                    total_webinars: webinars.len(),
                    total_users: users.len(),
                    this_month_attendees: 3420,
                    avg_engagement: 78,
                },
                recent_webinars,
                recent_users: users
                    .iter()
                    .rev()
                    .take(3)
                    .map(|u| RecentUser {
                        name: u.name.clone(),
                        email: u.email.clone(),
                        joined: u.created_at.date_naive(),
                    })
                    .collect(),
            })
        }
        DefaultView::UserDashboard => {
            let mut recent_vault_content = state.catalog.vault_items().await;
            recent_vault_content.truncate(3);
            Content::UserDashboard(UserDashboardContent {
                greeting: format!("Welcome back, {}", session.user().map_or("", |u| u.name.as_str())),
                stats: MemberStats {
                    webinars_attended: 12,
                    total_watch_time: 720,
                    vault_items_viewed: 8,
                    current_streak: 3,
                },
                upcoming_webinars: upcoming(webinars),
                recent_vault_content,
                achievements: achievements(),
            })
        }
    };
    Ok(content)
}

/// Renders the page for `route` as seen by `session`.
pub async fn render(path: &str, route: ViewRoute, session: &Session, state: &AppState) -> AppResult<Page> {
    let content = match &route {
        ViewRoute::Home => home(session, state).await?,
        ViewRoute::WebinarList => Content::WebinarList {
            webinars: state.catalog.webinars().await,
        },
        ViewRoute::WebinarCreate => Content::WebinarCreate {
            default_host: session.user().map(|u| u.name.clone()).unwrap_or_default(),
        },
        ViewRoute::LiveSession { id } => {
            let role = session.role();
            Content::LiveSession {
                room: state.rooms.room(id).await,
                is_host: role.is_some_and(|r| r.is_staff()),
                can_manage: role == Some(nexushub_adapters::UserRole::Admin),
                controls: Control::available_to(role),
            }
        }
        ViewRoute::Vault => Content::Vault {
            items: state.catalog.vault_items().await,
        },
        ViewRoute::VaultUpload => Content::VaultUpload {
            content_types: ContentType::ALL
                .iter()
                .map(|ct| ContentTypeOption {
                    value: *ct,
                    label: ct.label(),
                })
                .collect(),
        },
        ViewRoute::Analytics => Content::Analytics(analytics::report()),
        ViewRoute::UserManagement => {
            let users = state.sessions.directory().list().await?;
            Content::UserManagement(user_table(users, &UserQuery::default()))
        }
        ViewRoute::Settings => Content::Settings(state.settings.panel().await),
        ViewRoute::NotFound => Content::NotFound {
            path: path.to_string(),
        },
    };

    Ok(Page {
        path: path.to_string(),
        route,
        layout: Layout {
            sidebar: sidebar(session, path),
        },
        content,
    })
}
