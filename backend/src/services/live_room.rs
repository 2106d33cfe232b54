//! Local state for the live webinar screen.
//!
//! There is no media transport. Each room holds the viewer's control toggles
//! and a chat log; sent messages are echoed into the log and nowhere else.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use nexushub_adapters::{User, UserRole};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    Mute,
    Video,
    ScreenShare,
    HandRaise,
    Sound,
    Fullscreen,
}

impl std::str::FromStr for Control {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mute" => Ok(Control::Mute),
            "video" => Ok(Control::Video),
            "screen-share" => Ok(Control::ScreenShare),
            "hand-raise" => Ok(Control::HandRaise),
            "sound" => Ok(Control::Sound),
            "fullscreen" => Ok(Control::Fullscreen),
            other => Err(AppError::Validation(format!("Unknown control '{other}'"))),
        }
    }
}

impl Control {
    /// Controls offered to a viewer with `role`. Staff present and may share
    /// their screen; everyone else raises a hand instead.
    pub fn available_to(role: Option<UserRole>) -> Vec<Control> {
        let presenter = if role.is_some_and(|r| r.is_staff()) {
            Control::ScreenShare
        } else {
            Control::HandRaise
        };
        vec![
            Control::Mute,
            Control::Video,
            presenter,
            Control::Sound,
            Control::Fullscreen,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub is_muted: bool,
    pub is_video_off: bool,
    pub is_screen_sharing: bool,
    pub hand_raised: bool,
    pub is_sound_on: bool,
    pub is_fullscreen: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            is_muted: false,
            is_video_off: false,
            is_screen_sharing: false,
            hand_raised: false,
            is_sound_on: true,
            is_fullscreen: false,
        }
    }
}

impl Controls {
    pub fn toggle(&mut self, control: Control) {
        let flag = match control {
            Control::Mute => &mut self.is_muted,
            Control::Video => &mut self.is_video_off,
            Control::ScreenShare => &mut self.is_screen_sharing,
            Control::HandRaise => &mut self.hand_raised,
            Control::Sound => &mut self.is_sound_on,
            Control::Fullscreen => &mut self.is_fullscreen,
        };
        *flag = !*flag;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u32,
    pub user: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_host: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveRoom {
    pub id: String,
    pub title: String,
    pub host: String,
    pub started_at: DateTime<Utc>,
    pub participants: u32,
    pub max_attendees: u32,
    pub ended: bool,
    pub controls: Controls,
    pub chat: Vec<ChatMessage>,
}

impl LiveRoom {
    fn open(id: &str) -> Self {
        let started_at = Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).single().unwrap_or_default();
        let seed = [
            (1, "John Doe", "Great presentation so far!", 15, false),
            (2, "Dr. Sarah Chen", "Thank you! Feel free to ask questions anytime.", 16, true),
            (3, "Alice Smith", "Can you share more details about AI automation?", 18, false),
        ];
        Self {
            id: id.to_string(),
            title: "Future of AI in Business Operations".to_string(),
            host: "Dr. Sarah Chen".to_string(),
            started_at,
            participants: 142,
            max_attendees: 500,
            ended: false,
            controls: Controls::default(),
            chat: seed
                .into_iter()
                .map(|(id, user, message, minute, is_host)| ChatMessage {
                    id,
                    user: user.to_string(),
                    message: message.to_string(),
                    timestamp: started_at + chrono::Duration::minutes(minute),
                    is_host,
                })
                .collect(),
        }
    }
}

/// Live rooms keyed by the opaque id from `/webinars/live/:id`.
#[derive(Default)]
pub struct LiveRooms {
    rooms: RwLock<HashMap<String, LiveRoom>>,
}

impl LiveRooms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the room as it stands. A room nobody has acted in yet is
    /// shown in its opening state but not stored.
    pub async fn room(&self, id: &str) -> LiveRoom {
        match self.rooms.read().await.get(id) {
            Some(room) => room.clone(),
            None => LiveRoom::open(id),
        }
    }

    /// Flips `control` for a viewer with `role`.
    pub async fn toggle(&self, id: &str, control: Control, role: Option<UserRole>) -> AppResult<LiveRoom> {
        if !Control::available_to(role).contains(&control) {
            return Err(AppError::Forbidden(match control {
                Control::ScreenShare => "Only hosts can share their screen".into(),
                _ => "Hosts cannot raise a hand".into(),
            }));
        }
        let mut rooms = self.rooms.write().await;
        let room = rooms.entry(id.to_string()).or_insert_with(|| LiveRoom::open(id));
        room.controls.toggle(control);
        Ok(room.clone())
    }

    /// Appends a chat message from `sender`. Blank messages are ignored.
    pub async fn send_message(&self, id: &str, sender: Option<&User>, text: &str) -> LiveRoom {
        let mut rooms = self.rooms.write().await;
        let room = rooms.entry(id.to_string()).or_insert_with(|| LiveRoom::open(id));
        let text = text.trim();
        if !text.is_empty() {
            room.chat.push(ChatMessage {
                id: room.chat.len() as u32 + 1,
                user: sender.map_or_else(|| "Anonymous".to_string(), |u| u.name.clone()),
                message: text.to_string(),
                timestamp: Utc::now(),
                is_host: sender.is_some_and(|u| u.role.is_staff()),
            });
        }
        room.clone()
    }

    /// Ends the webinar. Only administrators may do this.
    pub async fn end(&self, id: &str, by: Option<&User>) -> AppResult<()> {
        if by.map(|u| u.role) != Some(UserRole::Admin) {
            return Err(AppError::Forbidden("Only administrators can end a webinar".into()));
        }
        let mut rooms = self.rooms.write().await;
        let room = rooms.entry(id.to_string()).or_insert_with(|| LiveRoom::open(id));
        room.ended = true;
        info!(room = id, "webinar ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexushub_adapters::{SignupData, UserId};

    fn user(role: UserRole) -> User {
        let mut user = User::from_signup(SignupData {
            email: "someone@x.com".into(),
            name: "Some One".into(),
            ..Default::default()
        });
        user.id = UserId::new("77");
        user.role = role;
        user
    }

    #[tokio::test]
    async fn room_opens_with_seed_chat() {
        let rooms = LiveRooms::new();
        let room = rooms.room("abc").await;
        assert_eq!(room.id, "abc");
        assert_eq!(room.chat.len(), 3);
        assert!(room.controls.is_sound_on);
        assert!(!room.controls.is_muted);
    }

    #[tokio::test]
    async fn viewing_a_room_does_not_store_it() {
        let rooms = LiveRooms::new();
        rooms.room("abc").await;
        rooms.room("def").await;
        assert!(rooms.rooms.read().await.is_empty());

        rooms.toggle("abc", Control::Mute, None).await.unwrap();
        assert_eq!(rooms.rooms.read().await.len(), 1);
        assert!(rooms.room("abc").await.controls.is_muted);
    }

    #[tokio::test]
    async fn toggles_flip_and_persist_per_room() {
        let rooms = LiveRooms::new();
        let room = rooms.toggle("a", Control::Mute, None).await.unwrap();
        assert!(room.controls.is_muted);
        let room = rooms.toggle("a", Control::Sound, None).await.unwrap();
        assert!(!room.controls.is_sound_on);
        assert!(!rooms.room("b").await.controls.is_muted);
        let room = rooms.toggle("a", Control::Mute, None).await.unwrap();
        assert!(!room.controls.is_muted);
    }

    #[tokio::test]
    async fn screen_share_is_for_staff_and_hand_raise_for_everyone_else() {
        let rooms = LiveRooms::new();
        for role in [None, Some(UserRole::User), Some(UserRole::Guest)] {
            assert!(matches!(
                rooms.toggle("r", Control::ScreenShare, role).await,
                Err(AppError::Forbidden(_))
            ));
        }
        for role in [UserRole::Admin, UserRole::Host] {
            assert!(matches!(
                rooms.toggle("r", Control::HandRaise, Some(role)).await,
                Err(AppError::Forbidden(_))
            ));
        }

        let room = rooms.toggle("r", Control::ScreenShare, Some(UserRole::Host)).await.unwrap();
        assert!(room.controls.is_screen_sharing);
        assert!(!room.controls.hand_raised);

        let room = rooms.toggle("r", Control::HandRaise, Some(UserRole::User)).await.unwrap();
        assert!(room.controls.hand_raised);
    }

    #[test]
    fn available_controls_follow_role() {
        let staff = Control::available_to(Some(UserRole::Admin));
        assert!(staff.contains(&Control::ScreenShare));
        assert!(!staff.contains(&Control::HandRaise));

        let member = Control::available_to(None);
        assert!(member.contains(&Control::HandRaise));
        assert!(!member.contains(&Control::ScreenShare));
        assert_eq!(member.len(), 5);
    }

    #[tokio::test]
    async fn chat_echoes_trimmed_messages_and_skips_blank() {
        let rooms = LiveRooms::new();
        let host = user(UserRole::Host);

        let room = rooms.send_message("r", Some(&host), "  hello all ").await;
        let last = room.chat.last().unwrap();
        assert_eq!(last.id, 4);
        assert_eq!(last.message, "hello all");
        assert_eq!(last.user, "Some One");
        assert!(last.is_host);

        let room = rooms.send_message("r", None, "   ").await;
        assert_eq!(room.chat.len(), 4);

        let room = rooms.send_message("r", None, "hi").await;
        let last = room.chat.last().unwrap();
        assert_eq!(last.user, "Anonymous");
        assert!(!last.is_host);
    }

    #[tokio::test]
    async fn only_admin_can_end() {
        let rooms = LiveRooms::new();
        assert!(matches!(
            rooms.end("r", Some(&user(UserRole::Host))).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(rooms.end("r", None).await.is_err());
        rooms.end("r", Some(&user(UserRole::Admin))).await.unwrap();
        assert!(rooms.room("r").await.ended);
    }

    #[test]
    fn control_names_parse() {
        assert_eq!("hand-raise".parse::<Control>().unwrap(), Control::HandRaise);
        assert!(matches!("volume".parse::<Control>(), Err(AppError::Validation(_))));
    }
}
