//! Handlers for the achievement catalog.

use aura_core::achievements::{Achievement, CATALOG};
use aura_core::types::DbId;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::users::find_user;
use crate::response::DataResponse;
use crate::state::AppState;

/// A catalog entry annotated with whether the user holds it.
#[derive(Debug, Serialize)]
pub struct AchievementStatus {
    #[serde(flatten)]
    pub achievement: &'static Achievement,
    pub earned: bool,
}

/// GET /api/v1/achievements
pub async fn list_catalog() -> impl IntoResponse {
    Json(DataResponse { data: CATALOG })
}

/// GET /api/v1/users/{user_id}/achievements
///
/// Every catalog entry, in catalog order, with an `earned` flag.
pub async fn list_user_achievements(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = find_user(&state.pool, user_id).await?;

    let statuses: Vec<AchievementStatus> = CATALOG
        .iter()
        .map(|achievement| AchievementStatus {
            achievement,
            earned: user.achievements.iter().any(|id| id == achievement.id),
        })
        .collect();

    Ok(Json(DataResponse { data: statuses }))
}
