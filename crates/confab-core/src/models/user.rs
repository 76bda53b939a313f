use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub photo_url: String,
}

impl User {
    /// Name shown in rosters and conversation headers.
    pub fn display_name(&self) -> &str {
        &self.username
    }
}
