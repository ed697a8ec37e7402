//! Weekly report snapshot model.

use aura_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `weekly_reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WeeklyReport {
    pub id: DbId,
    pub user_id: DbId,
    pub week_start: Timestamp,
    pub week_end: Timestamp,
    pub checkin_count: i32,
    pub clean_days: i32,
    pub total_urges: i32,
    pub average_mood: f64,
    pub most_common_trigger: Option<String>,
    pub insights: Vec<String>,
    pub achievements_earned: Vec<String>,
    pub created_at: Timestamp,
}
