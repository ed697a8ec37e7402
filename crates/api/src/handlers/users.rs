use aura_core::error::CoreError;
use aura_core::types::DbId;
use aura_core::user;
use aura_db::models::user::{CreateUser, User};
use aura_db::repositories::UserRepo;
use aura_db::DbPool;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a user or fail with 404.
pub(crate) async fn find_user(pool: &DbPool, user_id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))
}

/// Fail with 404 unless the user exists.
pub(crate) async fn ensure_user_exists(pool: &DbPool, user_id: DbId) -> AppResult<()> {
    if UserRepo::exists(pool, user_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))
    }
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    user::validate_profile(&input.name, &input.goal)?;

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, "User registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = find_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data: user }))
}
