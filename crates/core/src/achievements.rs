//! Achievement catalog and unlock evaluation.
//!
//! The catalog is static configuration. Evaluation runs against
//! [`AchievementAggregates`] computed by the caller from the user's full
//! check-in log, and only ever reports achievements the user does not
//! already hold.

use std::collections::HashSet;

use serde::Serialize;

use crate::checkin::CheckInSummary;

// ---------------------------------------------------------------------------
// Unlock predicates
// ---------------------------------------------------------------------------

/// The aggregate an achievement's threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockType {
    /// Current streak length.
    Streak,
    /// Total number of check-ins ever recorded.
    Checkins,
    /// Trailing run of good-mood check-ins, newest first.
    GoodMoodStreak,
    /// Distinct non-empty trigger descriptions (case-folded, trimmed).
    TriggersIdentified,
    /// Check-ins where an urge was reported and the user stayed on track.
    UrgesResisted,
}

/// `{type, threshold}` unlock rule. Earned when the aggregate is `>=` the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnlockRule {
    #[serde(rename = "type")]
    pub kind: UnlockType,
    pub threshold: i32,
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub requirement: UnlockRule,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    category: &'static str,
    kind: UnlockType,
    threshold: i32,
) -> Achievement {
    Achievement {
        id,
        name,
        description,
        icon,
        category,
        requirement: UnlockRule { kind, threshold },
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub const FIRST_STEP: &str = "first_step";
pub const WEEK_WARRIOR: &str = "week_warrior";
pub const FORTNIGHT_FIGHTER: &str = "fortnight_fighter";
pub const MONTHLY_MASTER: &str = "monthly_master";
pub const QUARTER_CHAMPION: &str = "quarter_champion";
pub const CONSISTENT_CHECKER: &str = "consistent_checker";
pub const BRIGHT_DAYS: &str = "bright_days";
pub const SELF_AWARE: &str = "self_aware";
pub const URGE_SURFER: &str = "urge_surfer";
pub const UNSHAKEABLE: &str = "unshakeable";

/// Every achievement a user can earn, in evaluation order.
pub const CATALOG: &[Achievement] = &[
    entry(
        FIRST_STEP,
        "First Step",
        "Complete your first daily check-in",
        "🌱",
        "milestone",
        UnlockType::Checkins,
        1,
    ),
    entry(
        WEEK_WARRIOR,
        "Week Warrior",
        "Stay on track for 7 days in a row",
        "⚔️",
        "streak",
        UnlockType::Streak,
        7,
    ),
    entry(
        FORTNIGHT_FIGHTER,
        "Fortnight Fighter",
        "Stay on track for 14 days in a row",
        "🛡️",
        "streak",
        UnlockType::Streak,
        14,
    ),
    entry(
        MONTHLY_MASTER,
        "Monthly Master",
        "Stay on track for 30 days in a row",
        "🏆",
        "streak",
        UnlockType::Streak,
        30,
    ),
    entry(
        QUARTER_CHAMPION,
        "Quarter Champion",
        "Stay on track for 90 days in a row",
        "👑",
        "streak",
        UnlockType::Streak,
        90,
    ),
    entry(
        CONSISTENT_CHECKER,
        "Consistent Checker",
        "Record 30 check-ins",
        "📅",
        "consistency",
        UnlockType::Checkins,
        30,
    ),
    entry(
        BRIGHT_DAYS,
        "Bright Days",
        "Report a good mood on your last 5 check-ins",
        "☀️",
        "wellbeing",
        UnlockType::GoodMoodStreak,
        5,
    ),
    entry(
        SELF_AWARE,
        "Self Aware",
        "Identify 3 different triggers",
        "🔍",
        "insight",
        UnlockType::TriggersIdentified,
        3,
    ),
    entry(
        URGE_SURFER,
        "Urge Surfer",
        "Ride out 5 urges and stay on track",
        "🌊",
        "resilience",
        UnlockType::UrgesResisted,
        5,
    ),
    entry(
        UNSHAKEABLE,
        "Unshakeable",
        "Ride out 25 urges and stay on track",
        "🗿",
        "resilience",
        UnlockType::UrgesResisted,
        25,
    ),
];

/// Look up a catalog entry by id.
pub fn find(id: &str) -> Option<&'static Achievement> {
    CATALOG.iter().find(|a| a.id == id)
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Per-user aggregates the unlock rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AchievementAggregates {
    pub current_streak: i32,
    pub total_checkins: i32,
    pub good_mood_streak: i32,
    pub triggers_identified: i32,
    pub urges_resisted: i32,
}

impl AchievementAggregates {
    /// Derive aggregates from the full check-in log.
    ///
    /// `newest_first` must be ordered by creation time, most recent first;
    /// the good-mood run starts at the head and stops at the first check-in
    /// below the good-mood threshold.
    pub fn from_check_ins(current_streak: i32, newest_first: &[CheckInSummary]) -> Self {
        let good_mood_streak = newest_first
            .iter()
            .take_while(|c| c.is_good_mood())
            .count();

        let distinct_triggers: HashSet<String> = newest_first
            .iter()
            .filter_map(CheckInSummary::trigger)
            .map(str::to_lowercase)
            .collect();

        let urges_resisted = newest_first.iter().filter(|c| c.resisted_urge()).count();

        Self {
            current_streak,
            total_checkins: saturating_i32(newest_first.len()),
            good_mood_streak: saturating_i32(good_mood_streak),
            triggers_identified: saturating_i32(distinct_triggers.len()),
            urges_resisted: saturating_i32(urges_resisted),
        }
    }

    /// The aggregate value a given unlock type is measured by.
    pub fn value_for(&self, kind: UnlockType) -> i32 {
        match kind {
            UnlockType::Streak => self.current_streak,
            UnlockType::Checkins => self.total_checkins,
            UnlockType::GoodMoodStreak => self.good_mood_streak,
            UnlockType::TriggersIdentified => self.triggers_identified,
            UnlockType::UrgesResisted => self.urges_resisted,
        }
    }
}

pub(crate) fn saturating_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Return the ids of catalog entries newly earned by `aggregates`.
///
/// Entries already present in `earned` are skipped, so re-running with
/// unchanged aggregates returns an empty list. Order follows `catalog`.
pub fn evaluate(
    aggregates: &AchievementAggregates,
    earned: &[String],
    catalog: &[Achievement],
) -> Vec<&'static str> {
    catalog
        .iter()
        .filter(|a| !earned.iter().any(|e| e == a.id))
        .filter(|a| aggregates.value_for(a.requirement.kind) >= a.requirement.threshold)
        .map(|a| a.id)
        .collect()
}

/// Union newly earned ids into an existing achievement list, keeping the
/// existing order and never dropping an entry.
pub fn merge_earned(existing: &[String], newly_earned: &[&str]) -> Vec<String> {
    let mut merged = existing.to_vec();
    for id in newly_earned {
        if !merged.iter().any(|e| e == id) {
            merged.push((*id).to_string());
        }
    }
    merged
}
