//! Personality selection heuristics.
//!
//! Three response personalities shape the tone of the assistant. Which one
//! answers a message is decided by an ordered keyword rule table; which
//! ones a generated reply "sounds like" is decided by inline speaker
//! markers or, failing that, the same keyword lists.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

pub const PERSONALITY_ALEX: &str = "alex";
pub const PERSONALITY_CASEY: &str = "casey";
pub const PERSONALITY_LEO: &str = "leo";

/// All valid personality identifiers.
pub const VALID_PERSONALITIES: &[&str] = &[PERSONALITY_ALEX, PERSONALITY_CASEY, PERSONALITY_LEO];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    /// Empathetic coach. The default.
    Alex,
    /// Strategist.
    Casey,
    /// Motivator.
    Leo,
}

/// Every personality, in tag order.
pub const ALL_PERSONALITIES: &[Personality] =
    &[Personality::Alex, Personality::Casey, Personality::Leo];

impl Personality {
    /// Parse a personality identifier (case-insensitive).
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            PERSONALITY_ALEX => Ok(Self::Alex),
            PERSONALITY_CASEY => Ok(Self::Casey),
            PERSONALITY_LEO => Ok(Self::Leo),
            _ => Err(CoreError::Validation(format!(
                "Invalid personality '{s}'. Must be one of: {}",
                VALID_PERSONALITIES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alex => PERSONALITY_ALEX,
            Self::Casey => PERSONALITY_CASEY,
            Self::Leo => PERSONALITY_LEO,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Alex => "Alex",
            Self::Casey => "Casey",
            Self::Leo => "Leo",
        }
    }

    /// Inline speaker tag a reply may carry, e.g. `[casey]`, lowercased.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Alex => "[alex]",
            Self::Casey => "[casey]",
            Self::Leo => "[leo]",
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Keyword rules
// ---------------------------------------------------------------------------

pub const STRATEGY_KEYWORDS: &[&str] = &[
    "plan",
    "trigger",
    "pattern",
    "strategy",
    "how to",
    "what should",
    "analyze",
];

pub const MOTIVATION_KEYWORDS: &[&str] = &[
    "motivation",
    "encourage",
    "celebrate",
    "proud",
    "achievement",
    "progress",
];

/// Only consulted when scanning generated replies.
pub const EMPATHY_KEYWORDS: &[&str] = &[
    "feel",
    "sad",
    "lonely",
    "hard",
    "tough",
    "sorry",
    "understand",
    "okay to",
    "courage",
    "listen",
];

/// A keyword list mapped to the personality it selects.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub personality: Personality,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// Whether any keyword occurs in `lowered` (already lowercased).
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Ordered rule table plus the fallback personality.
///
/// `request_rules` are tried in order and the first hit wins.
/// `response_rules` are all evaluated independently.
#[derive(Debug, Clone)]
pub struct PersonalityPolicy {
    pub request_rules: Vec<KeywordRule>,
    pub response_rules: Vec<KeywordRule>,
    pub fallback: Personality,
}

impl Default for PersonalityPolicy {
    fn default() -> Self {
        let strategy = KeywordRule {
            personality: Personality::Casey,
            keywords: STRATEGY_KEYWORDS,
        };
        let motivation = KeywordRule {
            personality: Personality::Leo,
            keywords: MOTIVATION_KEYWORDS,
        };
        let empathy = KeywordRule {
            personality: Personality::Alex,
            keywords: EMPATHY_KEYWORDS,
        };

        Self {
            request_rules: vec![strategy, motivation],
            response_rules: vec![empathy, strategy, motivation],
            fallback: Personality::Alex,
        }
    }
}

impl PersonalityPolicy {
    /// Pick the personality that should answer an incoming message.
    pub fn select_for_request(&self, message: &str) -> Personality {
        let lowered = message.to_lowercase();
        self.request_rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(self.fallback, |rule| rule.personality)
    }

    /// Tag a generated reply with the personalities it expresses.
    ///
    /// Explicit speaker markers win; otherwise every keyword rule that
    /// matches contributes a tag. Never returns an empty set.
    pub fn extract_from_response(&self, response: &str) -> BTreeSet<Personality> {
        let lowered = response.to_lowercase();

        let mut tags: BTreeSet<Personality> = ALL_PERSONALITIES
            .iter()
            .copied()
            .filter(|p| lowered.contains(p.marker()))
            .collect();

        if tags.is_empty() {
            tags = self
                .response_rules
                .iter()
                .filter(|rule| rule.matches(&lowered))
                .map(|rule| rule.personality)
                .collect();
        }

        if tags.is_empty() {
            tags.insert(self.fallback);
        }
        tags
    }
}
