//! Daily check-in model and DTOs.

use aura_core::checkin::CheckInSummary;
use aura_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::User;

/// A row from the `check_ins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CheckIn {
    pub id: DbId,
    pub user_id: DbId,
    pub date: NaiveDate,
    pub stayed_on_track: bool,
    /// 1-5 inclusive.
    pub mood: i32,
    pub had_urges: bool,
    pub urge_triggers: Option<String>,
    pub created_at: Timestamp,
}

impl From<&CheckIn> for CheckInSummary {
    fn from(c: &CheckIn) -> Self {
        CheckInSummary {
            stayed_on_track: c.stayed_on_track,
            mood: c.mood,
            had_urges: c.had_urges,
            urge_triggers: c.urge_triggers.clone(),
        }
    }
}

/// DTO for recording a check-in.
#[derive(Debug, Deserialize)]
pub struct CreateCheckIn {
    pub user_id: DbId,
    pub stayed_on_track: bool,
    pub mood: i32,
    pub had_urges: bool,
    pub urge_triggers: Option<String>,
}

/// Everything a recorded check-in changed.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInOutcome {
    pub check_in: CheckIn,
    pub user: User,
    /// Achievement ids unlocked by this check-in, in catalog order.
    pub new_achievements: Vec<String>,
}
