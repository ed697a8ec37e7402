//! Streak bookkeeping for daily check-ins and relapses.
//!
//! The tracker is pure: callers load the user's counters, apply an event,
//! and write the returned counters back.

use serde::{Deserialize, Serialize};

/// The three progress counters stored on a user.
///
/// `current_streak <= best_streak` holds for every value produced by
/// [`apply_check_in`] and [`apply_relapse`], provided the input held it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Unbroken run of positive check-ins.
    pub current_streak: i32,
    /// Longest `current_streak` ever reached. Never decreases.
    pub best_streak: i32,
    /// Cumulative count of positive check-ins. Never decreases.
    pub total_days_clean: i32,
}

/// Apply a daily check-in.
///
/// A positive check-in extends the streak and the clean-day total; a
/// negative one resets the streak and leaves the other counters alone.
pub fn apply_check_in(state: StreakState, stayed_on_track: bool) -> StreakState {
    if stayed_on_track {
        let current_streak = state.current_streak + 1;
        StreakState {
            current_streak,
            best_streak: state.best_streak.max(current_streak),
            total_days_clean: state.total_days_clean + 1,
        }
    } else {
        StreakState {
            current_streak: 0,
            ..state
        }
    }
}

/// Apply a reported relapse: the streak resets, history is preserved.
pub fn apply_relapse(state: StreakState) -> StreakState {
    StreakState {
        current_streak: 0,
        ..state
    }
}
