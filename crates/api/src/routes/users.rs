//! Route definitions for users and their per-user resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{achievements, chat, checkins, galaxy, relapses, users, weekly_reports};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /                                  -> create_user
/// GET    /{user_id}                         -> get_user
/// GET    /{user_id}/checkins                -> list_check_ins
/// GET    /{user_id}/relapses                -> list_relapses
/// GET    /{user_id}/achievements            -> list_user_achievements
/// GET    /{user_id}/galaxy                  -> get_galaxy
/// GET    /{user_id}/weekly-reports          -> list_reports
/// POST   /{user_id}/weekly-reports          -> generate_report
/// GET    /{user_id}/chat-history/{session_id} -> get_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user))
        .route("/{user_id}", get(users::get_user))
        .route("/{user_id}/checkins", get(checkins::list_check_ins))
        .route("/{user_id}/relapses", get(relapses::list_relapses))
        .route(
            "/{user_id}/achievements",
            get(achievements::list_user_achievements),
        )
        .route("/{user_id}/galaxy", get(galaxy::get_galaxy))
        .route(
            "/{user_id}/weekly-reports",
            get(weekly_reports::list_reports).post(weekly_reports::generate_report),
        )
        .route(
            "/{user_id}/chat-history/{session_id}",
            get(chat::get_history),
        )
}
