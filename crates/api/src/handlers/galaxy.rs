use aura_core::galaxy;
use aura_core::types::DbId;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::handlers::users::find_user;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{user_id}/galaxy
pub async fn get_galaxy(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = find_user(&state.pool, user_id).await?;
    let progress = galaxy::render(user.current_streak, user.total_days_clean, &user.achievements);
    Ok(Json(DataResponse { data: progress }))
}
