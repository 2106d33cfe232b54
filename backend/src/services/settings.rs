//! Platform settings panel state.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    pub site_name: String,
    pub site_description: String,
    pub support_email: String,
    pub primary_color: String,
    pub logo_url: String,
    pub hubspot_api_key: String,
    pub sendgrid_api_key: String,
    pub clicksend_api_key: String,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub webinar_reminders: bool,
    pub new_user_alerts: bool,
    pub require_email_verification: bool,
    pub enable_two_factor: bool,
    /// Hours.
    pub session_timeout: u32,
    pub allow_guest_registration: bool,
    pub enable_recordings: bool,
    pub enable_chat: bool,
    /// Minutes.
    pub max_webinar_duration: u32,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            site_name: "NexusHub".into(),
            site_description: "Professional webinar platform for modern businesses".into(),
            support_email: "support@nexushub.com".into(),
            primary_color: "#0066cc".into(),
            logo_url: String::new(),
            hubspot_api_key: String::new(),
            sendgrid_api_key: String::new(),
            clicksend_api_key: String::new(),
            email_notifications: true,
            sms_notifications: true,
            webinar_reminders: true,
            new_user_alerts: true,
            require_email_verification: true,
            enable_two_factor: false,
            session_timeout: 24,
            allow_guest_registration: true,
            enable_recordings: true,
            enable_chat: true,
            max_webinar_duration: 240,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
}

impl IntegrationStatus {
    fn of(api_key: &str) -> Self {
        if api_key.is_empty() {
            IntegrationStatus::Disconnected
        } else {
            IntegrationStatus::Connected
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Integrations {
    pub hubspot: IntegrationStatus,
    pub sendgrid: IntegrationStatus,
    pub clicksend: IntegrationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsPanel {
    pub settings: PlatformSettings,
    pub integrations: Integrations,
}

impl From<PlatformSettings> for SettingsPanel {
    fn from(settings: PlatformSettings) -> Self {
        let integrations = Integrations {
            hubspot: IntegrationStatus::of(&settings.hubspot_api_key),
            sendgrid: IntegrationStatus::of(&settings.sendgrid_api_key),
            clicksend: IntegrationStatus::of(&settings.clicksend_api_key),
        };
        Self { settings, integrations }
    }
}

#[derive(Default)]
pub struct SettingsStore {
    current: RwLock<PlatformSettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn panel(&self) -> SettingsPanel {
        self.current.read().await.clone().into()
    }

    pub async fn save(&self, settings: PlatformSettings) -> AppResult<SettingsPanel> {
        if settings.site_name.trim().is_empty() {
            return Err(AppError::Validation("Site name is required".into()));
        }
        if settings.session_timeout == 0 || settings.max_webinar_duration == 0 {
            return Err(AppError::Validation("Timeouts and durations must be positive".into()));
        }
        *self.current.write().await = settings.clone();
        info!(site = %settings.site_name, "settings saved");
        Ok(settings.into())
    }
}
