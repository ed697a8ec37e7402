//! Repository for the `users` table.

use aura_core::progress::StreakState;
use aura_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, goal, current_streak, best_streak, \
                                  total_days_clean, achievements, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with zeroed progress, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, goal)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.name.trim())
            .bind(input.goal.trim())
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a user with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Load a user and hold a row lock until the transaction ends.
    ///
    /// Serialises concurrent progress updates for the same user.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Write back progress counters and the achievement list.
    pub async fn save_progress(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        progress: &StreakState,
        achievements: &[String],
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                current_streak = $2,
                best_streak = $3,
                total_days_clean = $4,
                achievements = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(progress.current_streak)
            .bind(progress.best_streak)
            .bind(progress.total_days_clean)
            .bind(achievements)
            .fetch_one(&mut **tx)
            .await
    }
}
