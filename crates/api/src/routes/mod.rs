pub mod achievements;
pub mod chat;
pub mod checkins;
pub mod health;
pub mod relapses;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                           register (POST)
/// /users/{user_id}                                 get
/// /users/{user_id}/checkins                        recent check-ins
/// /users/{user_id}/relapses                        relapse log
/// /users/{user_id}/achievements                    catalog with earned flags
/// /users/{user_id}/galaxy                          galaxy visualization
/// /users/{user_id}/weekly-reports                  list, generate (GET, POST)
/// /users/{user_id}/chat-history/{session_id}       session messages
///
/// /checkins                                        record (POST)
/// /relapses                                        record (POST)
///
/// /chat                                            conversation turn (POST)
/// /sos                                             urgent support (POST)
///
/// /achievements                                    static catalog
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/checkins", checkins::router())
        .nest("/relapses", relapses::router())
        .nest("/achievements", achievements::router())
        .merge(chat::router())
}
