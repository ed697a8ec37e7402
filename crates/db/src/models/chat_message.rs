//! Chat message model and DTOs.

use aura_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `chat_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessage {
    pub id: DbId,
    pub user_id: DbId,
    pub session_id: Uuid,
    /// `"user"` or `"ai"`.
    pub role: String,
    pub content: String,
    /// Personality that answered. Only set on AI messages.
    pub personality: Option<String>,
    /// Personalities the reply was tagged with. Empty on user messages.
    pub personalities: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a chat message.
#[derive(Debug, Clone)]
pub struct CreateChatMessage {
    pub user_id: DbId,
    pub session_id: Uuid,
    pub role: &'static str,
    pub content: String,
    pub personality: Option<String>,
    pub personalities: Vec<String>,
}
