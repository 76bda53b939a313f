use serde::{Deserialize, Serialize};

/// A conversation is either a one-to-one chat or a named group.
pub const CONVERSATION_TYPE_PRIVATE: &str = "private";
pub const CONVERSATION_TYPE_GROUP: &str = "group";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub conversation_type: String,
    pub photo_url: String,
    pub last_message_id: i64,
}

impl Conversation {
    pub fn is_group(&self) -> bool {
        self.conversation_type == CONVERSATION_TYPE_GROUP
    }
}

/// One row in the conversation list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationPreview {
    pub conversation_id: i64,
    pub conversation_type: String,
    pub display_name: String,
    pub display_photo_url: String,
    #[serde(default)]
    pub last_message_content: Option<String>,
    #[serde(default)]
    pub last_message_photo_url: Option<String>,
    /// RFC 3339 timestamp of the newest message, empty for fresh conversations.
    pub last_message_timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationPreview>,
}
