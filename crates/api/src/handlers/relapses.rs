use aura_core::error::CoreError;
use aura_core::types::DbId;
use aura_db::models::relapse::CreateRelapse;
use aura_db::repositories::RelapseRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::handlers::users::ensure_user_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/relapses
///
/// Log a relapse and reset the current streak. Best streak, clean-day
/// total and earned achievements are kept.
pub async fn create_relapse(
    State(state): State<AppState>,
    Json(input): Json<CreateRelapse>,
) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let outcome = RelapseRepo::record(&state.pool, &input, today)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    tracing::info!(
        user_id = input.user_id,
        relapse_id = outcome.relapse.id,
        best_streak = outcome.user.best_streak,
        "Relapse recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

/// GET /api/v1/users/{user_id}/relapses
pub async fn list_relapses(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;
    let relapses = RelapseRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data: relapses }))
}
