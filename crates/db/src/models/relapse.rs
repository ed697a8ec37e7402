//! Relapse event model and DTOs.

use aura_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::User;

/// A row from the `relapses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Relapse {
    pub id: DbId,
    pub user_id: DbId,
    pub date: NaiveDate,
    pub trigger_analysis: Option<String>,
    pub emotional_state: Option<String>,
    pub time_of_day: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for reporting a relapse.
#[derive(Debug, Deserialize)]
pub struct CreateRelapse {
    pub user_id: DbId,
    pub trigger_analysis: Option<String>,
    pub emotional_state: Option<String>,
    pub time_of_day: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelapseOutcome {
    pub relapse: Relapse,
    pub user: User,
}
