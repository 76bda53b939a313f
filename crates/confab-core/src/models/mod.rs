//! Data models for confab service entities.
//!
//! This module contains the wire types exchanged with the confab REST API:
//!
//! - `User`: account identity and profile photo
//! - `Conversation`, `ConversationPreview`: private and group chats
//! - `Message`, `Reaction`, `OriginalMessage`: conversation content

pub mod conversation;
pub mod message;
pub mod user;

pub use conversation::{Conversation, ConversationListResponse, ConversationPreview};
pub use message::{Message, OriginalMessage, Reaction};
pub use user::User;
