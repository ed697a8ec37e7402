//! Check-in constants, validation and the trimmed-down view of a check-in
//! that the achievement evaluator and weekly report consume.

use crate::error::CoreError;

/// Lowest accepted mood rating.
pub const MOOD_MIN: i32 = 1;

/// Highest accepted mood rating.
pub const MOOD_MAX: i32 = 5;

/// Mood rating at or above which a day counts as a good-mood day.
pub const GOOD_MOOD_THRESHOLD: i32 = 4;

/// Maximum length of the free-text trigger description.
pub const MAX_TRIGGER_LENGTH: usize = 500;

/// Validate that a mood rating is within `MOOD_MIN..=MOOD_MAX`.
pub fn validate_mood(mood: i32) -> Result<(), CoreError> {
    if (MOOD_MIN..=MOOD_MAX).contains(&mood) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Mood must be between {MOOD_MIN} and {MOOD_MAX}, got {mood}"
        )))
    }
}

/// Validate the optional trigger description length.
pub fn validate_trigger(trigger: Option<&str>) -> Result<(), CoreError> {
    match trigger {
        Some(t) if t.chars().count() > MAX_TRIGGER_LENGTH => Err(CoreError::Validation(format!(
            "Urge triggers must be at most {MAX_TRIGGER_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

/// The fields of a stored check-in that the pure components need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInSummary {
    pub stayed_on_track: bool,
    pub mood: i32,
    pub had_urges: bool,
    pub urge_triggers: Option<String>,
}

impl CheckInSummary {
    /// The trigger text with surrounding whitespace removed, or `None` when
    /// absent or blank.
    pub fn trigger(&self) -> Option<&str> {
        self.urge_triggers
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// An urge was reported and the user still stayed on track.
    pub fn resisted_urge(&self) -> bool {
        self.had_urges && self.stayed_on_track
    }

    pub fn is_good_mood(&self) -> bool {
        self.mood >= GOOD_MOOD_THRESHOLD
    }
}
