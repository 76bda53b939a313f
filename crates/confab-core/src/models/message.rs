use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub sender_username: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Base64 photo payload as sent by the service.
    #[serde(default)]
    pub photo_data: Option<String>,
    #[serde(default)]
    pub photo_mime_type: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub is_reply: bool,
    pub original_message_id: i64,
    pub is_forwarded: bool,
    pub is_deleted: bool,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default)]
    pub original_message: Option<OriginalMessage>,
}

impl Message {
    /// Text to show in previews; deleted and photo-only messages have none.
    pub fn preview_text(&self) -> Option<&str> {
        if self.is_deleted {
            return None;
        }
        self.content.as_deref()
    }
}

/// The quoted message a reply points back to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginalMessage {
    pub id: i64,
    pub content: String,
    pub sender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    pub message_id: i64,
    pub user_id: i64,
    pub emoticon: String,
}
