//! Repository for the `weekly_reports` table.

use aura_core::types::DbId;
use aura_core::weekly_report::WeeklySummary;
use sqlx::PgPool;

use crate::models::weekly_report::WeeklyReport;

/// Column list for `weekly_reports` queries.
const COLUMNS: &str = "id, user_id, week_start, week_end, checkin_count, clean_days, \
                       total_urges, average_mood, most_common_trigger, insights, \
                       achievements_earned, created_at";

/// Provides operations for stored weekly report snapshots.
pub struct WeeklyReportRepo;

impl WeeklyReportRepo {
    /// Store a computed summary as an immutable snapshot.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        summary: &WeeklySummary,
    ) -> Result<WeeklyReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO weekly_reports
                (user_id, week_start, week_end, checkin_count, clean_days, total_urges,
                 average_mood, most_common_trigger, insights, achievements_earned)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeeklyReport>(&query)
            .bind(user_id)
            .bind(summary.week_start)
            .bind(summary.week_end)
            .bind(summary.checkin_count)
            .bind(summary.clean_days)
            .bind(summary.total_urges)
            .bind(summary.average_mood)
            .bind(&summary.most_common_trigger)
            .bind(&summary.insights)
            .bind(&summary.achievements_earned)
            .fetch_one(pool)
            .await
    }

    /// All snapshots for a user, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WeeklyReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM weekly_reports
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, WeeklyReport>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
