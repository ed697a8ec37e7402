//! Handlers for the AI companion conversation.
//!
//! One provider call per request. Nothing is stored unless the call
//! succeeds; the user message and the reply are then written together.

use aura_core::chat::{self, HISTORY_PAGE_SIZE, ROLE_AI, ROLE_USER};
use aura_core::personality::Personality;
use aura_core::types::DbId;
use aura_db::models::chat_message::{ChatMessage, CreateChatMessage};
use aura_db::repositories::ChatMessageRepo;
use aura_llm::ConversationTurn;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::users::{ensure_user_exists, find_user};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /chat` and `POST /sos`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: DbId,
    pub message: String,
    /// Continues an existing session when set; otherwise a new one starts.
    pub session_id: Option<Uuid>,
    /// Explicit personality. Ignored by the SOS endpoint.
    pub personality: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub ai_message: String,
    pub personality_used: Personality,
    /// Personalities the reply expresses, in tag order.
    pub personalities: Vec<Personality>,
    pub session_id: Uuid,
}

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

/// Run one conversation turn and persist it.
///
/// `message` is what gets stored and answered; it may differ from the
/// raw request text (the SOS prefix).
async fn converse(
    state: &AppState,
    user_id: DbId,
    session_id: Uuid,
    personality: Personality,
    message: String,
) -> AppResult<ChatResponse> {
    let user = find_user(&state.pool, user_id).await?;

    let history = ChatMessageRepo::recent_turns(
        &state.pool,
        user.id,
        session_id,
        state.config.chat_history_turns,
    )
    .await?;

    let mut conversation: Vec<ConversationTurn> = history
        .into_iter()
        .map(|m| match m.role.as_str() {
            ROLE_AI => ConversationTurn::assistant(m.content),
            _ => ConversationTurn::user(m.content),
        })
        .collect();
    conversation.push(ConversationTurn::user(chat::context_message(
        &user.name,
        &user.goal,
        &user.progress(),
        &message,
    )));

    let reply = state
        .llm
        .complete(&chat::system_prompt(personality), &conversation)
        .await?;

    let personalities: Vec<Personality> = state
        .personality_policy
        .extract_from_response(&reply)
        .into_iter()
        .collect();

    let user_message = CreateChatMessage {
        user_id: user.id,
        session_id,
        role: ROLE_USER,
        content: message,
        personality: None,
        personalities: Vec::new(),
    };
    let ai_message = CreateChatMessage {
        user_id: user.id,
        session_id,
        role: ROLE_AI,
        content: reply.clone(),
        personality: Some(personality.as_str().to_string()),
        personalities: personalities.iter().map(|p| p.as_str().to_string()).collect(),
    };
    ChatMessageRepo::create_exchange(&state.pool, &user_message, &ai_message).await?;

    tracing::info!(
        user_id = user.id,
        %session_id,
        personality = %personality,
        history_turns = conversation.len() - 1,
        "Chat turn completed",
    );

    Ok(ChatResponse {
        ai_message: reply,
        personality_used: personality,
        personalities,
        session_id,
    })
}

/// POST /api/v1/chat
///
/// Answer with the requested personality, or pick one from the message
/// keywords when none is given.
pub async fn send_message(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<impl IntoResponse> {
    chat::validate_message(&input.message)?;

    let personality = match input.personality.as_deref() {
        Some(explicit) => Personality::from_str_value(explicit)?,
        None => state.personality_policy.select_for_request(&input.message),
    };
    let session_id = input.session_id.unwrap_or_else(Uuid::new_v4);

    let response = converse(&state, input.user_id, session_id, personality, input.message).await?;
    Ok(Json(DataResponse { data: response }))
}

/// POST /api/v1/sos
///
/// Urgent support: always answered by Alex, and stored with the SOS
/// prefix so the history shows it was an emergency.
pub async fn send_sos(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<impl IntoResponse> {
    chat::validate_message(&input.message)?;

    let session_id = input.session_id.unwrap_or_else(Uuid::new_v4);
    tracing::warn!(user_id = input.user_id, %session_id, "SOS request received");

    let response = converse(
        &state,
        input.user_id,
        session_id,
        Personality::Alex,
        chat::sos_message(&input.message),
    )
    .await?;
    Ok(Json(DataResponse { data: response }))
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// GET /api/v1/users/{user_id}/chat-history/{session_id}
///
/// Messages of one session, oldest first. An unknown session is empty.
pub async fn get_history(
    State(state): State<AppState>,
    Path((user_id, session_id)): Path<(DbId, Uuid)>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;
    let messages: Vec<ChatMessage> =
        ChatMessageRepo::list_session(&state.pool, user_id, session_id, HISTORY_PAGE_SIZE)
            .await?;
    Ok(Json(DataResponse { data: messages }))
}
