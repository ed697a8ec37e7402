//! Repository for the `chat_messages` table.

use aura_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::chat_message::{ChatMessage, CreateChatMessage};

/// Column list for `chat_messages` queries.
const COLUMNS: &str =
    "id, user_id, session_id, role, content, personality, personalities, created_at";

/// Provides operations for the append-only conversation log.
pub struct ChatMessageRepo;

impl ChatMessageRepo {
    /// Persist a user message and the reply to it atomically.
    ///
    /// Both rows share one transaction, so a conversation turn is either
    /// fully stored or not stored at all.
    pub async fn create_exchange(
        pool: &PgPool,
        user_message: &CreateChatMessage,
        ai_message: &CreateChatMessage,
    ) -> Result<(ChatMessage, ChatMessage), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let stored_user = Self::insert(&mut tx, user_message).await?;
        let stored_ai = Self::insert(&mut tx, ai_message).await?;
        tx.commit().await?;
        Ok((stored_user, stored_ai))
    }

    /// Messages of a session, oldest first, capped at `limit`.
    pub async fn list_session(
        pool: &PgPool,
        user_id: DbId,
        session_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chat_messages
             WHERE user_id = $1 AND session_id = $2
             ORDER BY created_at, id
             LIMIT $3"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(user_id)
            .bind(session_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The last `limit` messages of a session, returned oldest first.
    pub async fn recent_turns(
        pool: &PgPool,
        user_id: DbId,
        session_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM (
                SELECT {COLUMNS} FROM chat_messages
                WHERE user_id = $1 AND session_id = $2
                ORDER BY created_at DESC, id DESC
                LIMIT $3
             ) recent
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(user_id)
            .bind(session_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateChatMessage,
    ) -> Result<ChatMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_messages (user_id, session_id, role, content, personality, personalities)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(input.user_id)
            .bind(input.session_id)
            .bind(input.role)
            .bind(&input.content)
            .bind(&input.personality)
            .bind(&input.personalities)
            .fetch_one(&mut **tx)
            .await
    }
}
