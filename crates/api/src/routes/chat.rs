//! Route definitions for the companion conversation.

use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// POST   /chat    -> send_message
/// POST   /sos     -> send_sos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::send_message))
        .route("/sos", post(chat::send_sos))
}
