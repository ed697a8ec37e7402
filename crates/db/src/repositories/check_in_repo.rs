//! Repository for the `check_ins` table.
//!
//! Recording a check-in is the one write that touches progress and
//! achievements, so it runs as a single transaction holding the user's
//! row lock.

use aura_core::achievements::{self, AchievementAggregates};
use aura_core::checkin::CheckInSummary;
use aura_core::progress;
use aura_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::check_in::{CheckIn, CheckInOutcome, CreateCheckIn};
use crate::repositories::UserRepo;

/// Column list for `check_ins` queries.
const COLUMNS: &str =
    "id, user_id, date, stayed_on_track, mood, had_urges, urge_triggers, created_at";

/// Number of check-ins returned by [`CheckInRepo::list_recent`] by default.
pub const RECENT_CHECK_INS_LIMIT: i64 = 30;

/// Provides operations for the append-only check-in log.
pub struct CheckInRepo;

impl CheckInRepo {
    /// Record a check-in and apply its effects to the user.
    ///
    /// Within one transaction: lock the user, advance or reset the streak,
    /// append the check-in, recompute achievement aggregates from the full
    /// log, and union any newly earned achievements into the user.
    ///
    /// Returns `None` if the user does not exist.
    pub async fn record(
        pool: &PgPool,
        input: &CreateCheckIn,
        date: NaiveDate,
    ) -> Result<Option<CheckInOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(user) = UserRepo::find_for_update(&mut tx, input.user_id).await? else {
            return Ok(None);
        };

        let progress = progress::apply_check_in(user.progress(), input.stayed_on_track);

        let insert_query = format!(
            "INSERT INTO check_ins (user_id, date, stayed_on_track, mood, had_urges, urge_triggers)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let check_in = sqlx::query_as::<_, CheckIn>(&insert_query)
            .bind(input.user_id)
            .bind(date)
            .bind(input.stayed_on_track)
            .bind(input.mood)
            .bind(input.had_urges)
            .bind(&input.urge_triggers)
            .fetch_one(&mut *tx)
            .await?;

        let log = Self::summaries_newest_first(&mut tx, user.id).await?;
        let aggregates = AchievementAggregates::from_check_ins(progress.current_streak, &log);
        let newly_earned =
            achievements::evaluate(&aggregates, &user.achievements, achievements::CATALOG);
        let merged = achievements::merge_earned(&user.achievements, &newly_earned);

        let user = UserRepo::save_progress(&mut tx, user.id, &progress, &merged).await?;
        tx.commit().await?;

        if !newly_earned.is_empty() {
            tracing::info!(
                user_id = user.id,
                achievements = ?newly_earned,
                "Achievements unlocked",
            );
        }

        Ok(Some(CheckInOutcome {
            check_in,
            user,
            new_achievements: newly_earned.into_iter().map(str::to_string).collect(),
        }))
    }

    /// Most recent check-ins for a user, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<CheckIn>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM check_ins
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, CheckIn>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Check-ins created within `[start, end]`, oldest first.
    pub async fn list_between(
        pool: &PgPool,
        user_id: DbId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<CheckIn>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM check_ins
             WHERE user_id = $1 AND created_at >= $2 AND created_at <= $3
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, CheckIn>(&query)
            .bind(user_id)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// The user's full log as evaluator input, newest first.
    async fn summaries_newest_first(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
    ) -> Result<Vec<CheckInSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM check_ins
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, CheckIn>(&query)
            .bind(user_id)
            .fetch_all(&mut **tx)
            .await?;
        Ok(rows.iter().map(CheckInSummary::from).collect())
    }
}
