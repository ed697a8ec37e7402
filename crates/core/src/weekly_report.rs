//! Weekly report aggregation.
//!
//! Summarises the check-ins of a seven-day window into a few statistics
//! and canned insight lines. An empty window is a normal outcome, not an
//! error.

use serde::Serialize;

use crate::achievements::saturating_i32;
use crate::checkin::{CheckInSummary, GOOD_MOOD_THRESHOLD};
use crate::types::Timestamp;

/// Length of the report window.
pub const REPORT_WINDOW_DAYS: i64 = 7;

/// Message returned when the window holds no check-ins.
pub const INSUFFICIENT_DATA_MESSAGE: &str =
    "Not enough data yet. Check in daily and your weekly report will be ready soon.";

pub const INSIGHT_POSITIVE_MOOD: &str =
    "Your mood has been consistently positive this week. Keep nurturing what's working!";
pub const INSIGHT_PERFECT_WEEK: &str =
    "Perfect week! You stayed on track every single day.";
pub const INSIGHT_NO_URGES: &str =
    "No urges reported this week. Your strategies are paying off.";

/// Computed statistics for one report window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub week_start: Timestamp,
    pub week_end: Timestamp,
    pub checkin_count: i32,
    pub clean_days: i32,
    pub total_urges: i32,
    pub average_mood: f64,
    pub most_common_trigger: Option<String>,
    pub insights: Vec<String>,
    /// Always empty: achievements carry no earn timestamp to filter by.
    pub achievements_earned: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeeklyReportOutcome {
    InsufficientData { message: &'static str },
    Ready(WeeklySummary),
}

/// Most frequent non-empty trigger. Ties go to the trigger seen first.
pub fn most_common_trigger(check_ins: &[CheckInSummary]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for trigger in check_ins.iter().filter_map(CheckInSummary::trigger) {
        match counts.iter().position(|(t, _)| *t == trigger) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((trigger, 1)),
        }
    }

    // `max_by_key` keeps the last maximum, so scan in reverse to keep the first.
    counts
        .iter()
        .rev()
        .max_by_key(|(_, n)| *n)
        .map(|(t, _)| (*t).to_string())
}

fn insights(
    average_mood: f64,
    count: i32,
    clean_days: i32,
    urges: i32,
    trigger: Option<&str>,
) -> Vec<String> {
    let mut out = Vec::new();

    if average_mood >= f64::from(GOOD_MOOD_THRESHOLD) {
        out.push(INSIGHT_POSITIVE_MOOD.to_string());
    }
    if clean_days == count {
        out.push(INSIGHT_PERFECT_WEEK.to_string());
    }
    if urges == 0 {
        out.push(INSIGHT_NO_URGES.to_string());
    } else {
        out.push(format!(
            "You faced {urges} urge(s) this week and kept showing up. Every urge you ride out builds resilience."
        ));
    }
    if let Some(t) = trigger {
        out.push(format!(
            "Your most common trigger was \"{t}\". Consider building an If-Then plan for it with Casey."
        ));
    }
    out
}

/// Aggregate the check-ins created within `[week_start, week_end]`.
///
/// `check_ins` should be ordered oldest first; that order decides
/// trigger ties.
pub fn generate(
    check_ins: &[CheckInSummary],
    week_start: Timestamp,
    week_end: Timestamp,
) -> WeeklyReportOutcome {
    if check_ins.is_empty() {
        return WeeklyReportOutcome::InsufficientData {
            message: INSUFFICIENT_DATA_MESSAGE,
        };
    }

    let count = saturating_i32(check_ins.len());
    let clean_days = saturating_i32(check_ins.iter().filter(|c| c.stayed_on_track).count());
    let total_urges = saturating_i32(check_ins.iter().filter(|c| c.had_urges).count());
    let mood_sum: i64 = check_ins.iter().map(|c| i64::from(c.mood)).sum();
    let average_mood = mood_sum as f64 / check_ins.len() as f64;
    let most_common_trigger = most_common_trigger(check_ins);

    let insights = insights(
        average_mood,
        count,
        clean_days,
        total_urges,
        most_common_trigger.as_deref(),
    );

    WeeklyReportOutcome::Ready(WeeklySummary {
        week_start,
        week_end,
        checkin_count: count,
        clean_days,
        total_urges,
        average_mood,
        most_common_trigger,
        insights,
        achievements_earned: Vec::new(),
    })
}
