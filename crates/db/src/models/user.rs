//! User entity model and DTOs.

use aura_core::progress::StreakState;
use aura_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub goal: String,
    pub current_streak: i32,
    pub best_streak: i32,
    pub total_days_clean: i32,
    /// Earned achievement ids. Append-only.
    pub achievements: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// The progress counters as the streak tracker sees them.
    pub fn progress(&self) -> StreakState {
        StreakState {
            current_streak: self.current_streak,
            best_streak: self.best_streak,
            total_days_clean: self.total_days_clean,
        }
    }
}

/// DTO for registering a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub goal: String,
}
