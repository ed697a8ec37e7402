//! Repository for the `relapses` table.

use aura_core::progress;
use aura_core::types::DbId;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::relapse::{CreateRelapse, Relapse, RelapseOutcome};
use crate::repositories::UserRepo;

/// Column list for `relapses` queries.
const COLUMNS: &str =
    "id, user_id, date, trigger_analysis, emotional_state, time_of_day, created_at";

/// Provides operations for the append-only relapse log.
pub struct RelapseRepo;

impl RelapseRepo {
    /// Append a relapse and reset the user's current streak.
    ///
    /// Best streak, clean-day total and achievements are untouched.
    /// Returns `None` if the user does not exist.
    pub async fn record(
        pool: &PgPool,
        input: &CreateRelapse,
        date: NaiveDate,
    ) -> Result<Option<RelapseOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(user) = UserRepo::find_for_update(&mut tx, input.user_id).await? else {
            return Ok(None);
        };

        let progress = progress::apply_relapse(user.progress());
        let user = UserRepo::save_progress(&mut tx, user.id, &progress, &user.achievements).await?;

        let query = format!(
            "INSERT INTO relapses (user_id, date, trigger_analysis, emotional_state, time_of_day)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let relapse = sqlx::query_as::<_, Relapse>(&query)
            .bind(input.user_id)
            .bind(date)
            .bind(&input.trigger_analysis)
            .bind(&input.emotional_state)
            .bind(&input.time_of_day)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(RelapseOutcome { relapse, user }))
    }

    /// All relapses for a user, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Relapse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM relapses
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Relapse>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
