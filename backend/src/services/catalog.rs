//! In-memory catalog of webinars and content vault items.
//!
//! The catalog starts from the platform's demo fixtures. Newly created
//! webinars and completed vault uploads are appended for the lifetime of
//! the process.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebinarStatus {
    Scheduled,
    Live,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webinar {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub host: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: WebinarStatus,
    pub registrations: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<u32>,
    pub tags: Vec<String>,
    pub is_recorded: bool,
    pub is_public: bool,
    pub requires_registration: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    #[serde(default = "enabled")]
    pub email_reminder_24h: bool,
    #[serde(default = "enabled")]
    pub email_reminder_1h: bool,
    #[serde(default)]
    pub sms_reminder_30min: bool,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            email_reminder_24h: true,
            email_reminder_1h: true,
            sms_reminder_30min: false,
        }
    }
}

/// Body of the webinar creation form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWebinar {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default = "default_max_attendees")]
    pub max_attendees: u32,
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default)]
    pub guests: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "enabled")]
    pub is_recorded: bool,
    #[serde(default = "enabled")]
    pub is_public: bool,
    #[serde(default = "enabled")]
    pub requires_registration: bool,
    #[serde(default)]
    pub reminder_settings: ReminderSettings,
}

fn enabled() -> bool {
    true
}

fn default_duration() -> u32 {
    60
}

fn default_max_attendees() -> u32 {
    100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    WebinarRecording,
    Pdf,
    Course,
    Other,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::WebinarRecording,
        ContentType::Pdf,
        ContentType::Course,
        ContentType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::WebinarRecording => "Webinar Recording",
            ContentType::Pdf => "PDF Document",
            ContentType::Course => "Course Material",
            ContentType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    pub upload_date: NaiveDate,
    pub download_count: u32,
    pub rating: f32,
    pub tags: Vec<String>,
    pub progress: u8,
    pub description: String,
}

pub struct Catalog {
    webinars: RwLock<Vec<Webinar>>,
    vault: RwLock<Vec<VaultItem>>,
}

impl Catalog {
    pub fn new(webinars: Vec<Webinar>, vault: Vec<VaultItem>) -> Self {
        Self {
            webinars: RwLock::new(webinars),
            vault: RwLock::new(vault),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_webinars(), seed_vault())
    }

    pub async fn webinars(&self) -> Vec<Webinar> {
        self.webinars.read().await.clone()
    }

    pub async fn webinar_count(&self) -> usize {
        self.webinars.read().await.len()
    }

    /// Schedules a new webinar. The first listed host is used, falling back
    /// to `default_host`.
    pub async fn create_webinar(&self, form: NewWebinar, default_host: &str) -> AppResult<Webinar> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Webinar title is required".into()));
        }
        if form.duration_minutes == 0 {
            return Err(AppError::Validation("Duration must be at least one minute".into()));
        }

        let mut webinars = self.webinars.write().await;
        let webinar = Webinar {
            id: webinars.iter().map(|w| w.id).max().unwrap_or(0) + 1,
            title: title.to_string(),
            description: form.description,
            host: form
                .hosts
                .into_iter()
                .next()
                .unwrap_or_else(|| default_host.to_string()),
            scheduled_at: form.scheduled_at,
            duration_minutes: form.duration_minutes,
            status: WebinarStatus::Scheduled,
            registrations: 0,
            max_attendees: Some(form.max_attendees),
            attendees: None,
            tags: form.tags,
            is_recorded: form.is_recorded,
            is_public: form.is_public,
            requires_registration: form.requires_registration,
        };
        info!(webinar_id = webinar.id, title = %webinar.title, "webinar scheduled");
        webinars.push(webinar.clone());
        Ok(webinar)
    }

    pub async fn vault_items(&self) -> Vec<VaultItem> {
        self.vault.read().await.clone()
    }

    pub async fn add_vault_item(&self, mut item: VaultItem) -> VaultItem {
        let mut vault = self.vault.write().await;
        item.id = vault.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        vault.push(item.clone());
        item
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().unwrap_or_default()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn webinar(
    id: u32,
    title: &str,
    description: &str,
    host: &str,
    scheduled_at: DateTime<Utc>,
    duration_minutes: u32,
    status: WebinarStatus,
    registrations: u32,
    capacity: (Option<u32>, Option<u32>),
    tag_list: &[&str],
) -> Webinar {
    Webinar {
        id,
        title: title.to_string(),
        description: description.to_string(),
        host: host.to_string(),
        scheduled_at,
        duration_minutes,
        status,
        registrations,
        max_attendees: capacity.0,
        attendees: capacity.1,
        tags: tags(tag_list),
        is_recorded: true,
        is_public: true,
        requires_registration: true,
    }
}

fn seed_webinars() -> Vec<Webinar> {
    vec![
        webinar(
            1,
            "Future of AI in Business Operations",
            "Explore how artificial intelligence is transforming modern business operations and workflows.",
            "Dr. Sarah Chen",
            at(2024, 1, 15, 14, 0),
            60,
            WebinarStatus::Scheduled,
            234,
            (Some(500), None),
            &["AI", "Business", "Technology"],
        ),
        webinar(
            2,
            "Building Scalable SaaS Products",
            "Learn the fundamentals of creating and scaling successful software-as-a-service applications.",
            "Mike Rodriguez",
            at(2024, 1, 18, 15, 30),
            45,
            WebinarStatus::Scheduled,
            189,
            (Some(300), None),
            &["SaaS", "Development", "Scaling"],
        ),
        webinar(
            3,
            "DevOps Best Practices Workshop",
            "Hands-on workshop covering modern DevOps practices, CI/CD, and infrastructure automation.",
            "Alex Kim",
            at(2024, 1, 10, 16, 0),
            90,
            WebinarStatus::Completed,
            201,
            (None, Some(178)),
            &["DevOps", "Workshop", "Infrastructure"],
        ),
        webinar(
            4,
            "Data Privacy & Security in 2024",
            "Understanding GDPR, data protection laws, and implementing security best practices.",
            "Emma Watson",
            at(2024, 1, 12, 13, 0),
            75,
            WebinarStatus::Live,
            156,
            (None, Some(142)),
            &["Security", "Privacy", "Compliance"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn vault_item(
    id: u32,
    title: &str,
    content_type: ContentType,
    extent: (Option<&str>, Option<u32>),
    upload_date: NaiveDate,
    download_count: u32,
    rating: f32,
    tag_list: &[&str],
    progress: u8,
    description: &str,
) -> VaultItem {
    VaultItem {
        id,
        title: title.to_string(),
        content_type,
        duration: extent.0.map(str::to_string),
        pages: extent.1,
        upload_date,
        download_count,
        rating,
        tags: tags(tag_list),
        progress,
        description: description.to_string(),
    }
}

fn seed_vault() -> Vec<VaultItem> {
    vec![
        vault_item(
            1,
            "AI in Business Operations - Complete Workshop",
            ContentType::WebinarRecording,
            (Some("120 min"), None),
            day(2024, 1, 10),
            45,
            4.8,
            &["AI", "Business", "Workshop"],
            75,
            "Complete workshop recording covering AI implementation in business operations.",
        ),
        vault_item(
            2,
            "SaaS Development Best Practices Guide",
            ContentType::Pdf,
            (None, Some(28)),
            day(2024, 1, 8),
            67,
            4.9,
            &["SaaS", "Development", "Guide"],
            50,
            "Comprehensive guide to building and scaling SaaS products effectively.",
        ),
        vault_item(
            3,
            "DevOps Fundamentals Course",
            ContentType::Course,
            (Some("8 hours"), None),
            day(2024, 1, 5),
            89,
            4.7,
            &["DevOps", "Course", "Infrastructure"],
            100,
            "Complete course covering DevOps practices, tools, and methodologies.",
        ),
        vault_item(
            4,
            "Data Security Implementation Checklist",
            ContentType::Pdf,
            (None, Some(12)),
            day(2024, 1, 3),
            34,
            4.6,
            &["Security", "Checklist", "Data"],
            0,
            "Essential security checklist for protecting sensitive data and systems.",
        ),
        vault_item(
            5,
            "Leadership in Tech - Expert Panel",
            ContentType::WebinarRecording,
            (Some("90 min"), None),
            day(2024, 1, 1),
            123,
            4.9,
            &["Leadership", "Panel", "Management"],
            100,
            "Expert panel discussion on leadership challenges in technology companies.",
        ),
        vault_item(
            6,
            "React Performance Optimization",
            ContentType::Course,
            (Some("4 hours"), None),
            day(2023, 12, 28),
            156,
            4.8,
            &["React", "Performance", "Development"],
            25,
            "Advanced techniques for optimizing React application performance.",
        ),
    ]
}
