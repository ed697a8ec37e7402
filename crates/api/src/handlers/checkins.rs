//! Handlers for daily check-ins.

use aura_core::checkin;
use aura_core::error::CoreError;
use aura_core::types::DbId;
use aura_db::models::check_in::CreateCheckIn;
use aura_db::repositories::check_in_repo::RECENT_CHECK_INS_LIMIT;
use aura_db::repositories::CheckInRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::handlers::users::ensure_user_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/checkins
///
/// Record today's check-in. Updates the streak counters and unlocks any
/// achievements the new totals qualify for, all in one transaction.
pub async fn create_check_in(
    State(state): State<AppState>,
    Json(mut input): Json<CreateCheckIn>,
) -> AppResult<impl IntoResponse> {
    checkin::validate_mood(input.mood)?;
    checkin::validate_trigger(input.urge_triggers.as_deref())?;

    // Blank trigger text means "none given".
    input.urge_triggers = input
        .urge_triggers
        .take()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let today = Utc::now().date_naive();
    let outcome = CheckInRepo::record(&state.pool, &input, today)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    tracing::info!(
        user_id = input.user_id,
        check_in_id = outcome.check_in.id,
        stayed_on_track = input.stayed_on_track,
        current_streak = outcome.user.current_streak,
        new_achievements = outcome.new_achievements.len(),
        "Check-in recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

/// GET /api/v1/users/{user_id}/checkins
///
/// The most recent check-ins, newest first.
pub async fn list_check_ins(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;
    let check_ins = CheckInRepo::list_recent(&state.pool, user_id, RECENT_CHECK_INS_LIMIT).await?;
    Ok(Json(DataResponse { data: check_ins }))
}
