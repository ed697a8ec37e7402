//! Galaxy progress visualization payload.
//!
//! Each clean day of the current streak becomes a star; streak milestones
//! unlock named constellations.

use serde::Serialize;

/// Days beyond this are not rendered as stars.
pub const MAX_RENDERED_STARS: i32 = 365;

/// Day at which star brightness saturates at 1.0.
pub const FULL_BRIGHTNESS_DAY: i32 = 100;

/// Clean days per galaxy level.
pub const DAYS_PER_LEVEL: i32 = 30;

pub const MIN_GALAXY_LEVEL: i32 = 1;
pub const MAX_GALAXY_LEVEL: i32 = 10;

/// Light years credited per clean day.
pub const LIGHT_YEARS_PER_DAY: i64 = 10;

/// Label for days past the last milestone.
pub const BEYOND_MILESTONES: &str = "Infinity";

/// Streak milestones and their constellation names, ascending.
pub const CONSTELLATIONS: &[(i32, &str)] = &[
    (7, "Determination"),
    (14, "Strength"),
    (30, "Resilience"),
    (60, "Wisdom"),
    (90, "Transformation"),
    (180, "Mastery"),
    (365, "Transcendence"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    /// 1-based day index.
    pub day: i32,
    pub brightness: f64,
    pub constellation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextConstellation {
    pub milestone: i32,
    pub name: &'static str,
    pub days_needed: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalaxyProgress {
    pub stars: Vec<Star>,
    pub galaxy_level: i32,
    pub constellations_unlocked: Vec<&'static str>,
    pub next_constellation: Option<NextConstellation>,
    pub total_light_years: i64,
    pub achievements: Vec<String>,
}

/// Constellation a given day belongs to: the smallest milestone `>= day`.
pub fn constellation_for_day(day: i32) -> &'static str {
    CONSTELLATIONS
        .iter()
        .find(|(milestone, _)| *milestone >= day)
        .map_or(BEYOND_MILESTONES, |(_, name)| *name)
}

/// Linear brightness ramp, saturating at [`FULL_BRIGHTNESS_DAY`].
pub fn star_brightness(day: i32) -> f64 {
    (f64::from(day) / f64::from(FULL_BRIGHTNESS_DAY)).min(1.0)
}

pub fn galaxy_level(total_days: i32) -> i32 {
    (total_days / DAYS_PER_LEVEL + 1).clamp(MIN_GALAXY_LEVEL, MAX_GALAXY_LEVEL)
}

/// Build the galaxy payload for a user's current progress.
pub fn render(streak: i32, total_days: i32, achievements: &[String]) -> GalaxyProgress {
    let stars = (1..=streak.min(MAX_RENDERED_STARS))
        .map(|day| Star {
            day,
            brightness: star_brightness(day),
            constellation: constellation_for_day(day),
        })
        .collect();

    let constellations_unlocked = CONSTELLATIONS
        .iter()
        .filter(|(milestone, _)| *milestone <= streak)
        .map(|(_, name)| *name)
        .collect();

    let next_constellation = CONSTELLATIONS
        .iter()
        .find(|(milestone, _)| *milestone > streak)
        .map(|(milestone, name)| NextConstellation {
            milestone: *milestone,
            name: *name,
            days_needed: milestone - streak,
        });

    GalaxyProgress {
        stars,
        galaxy_level: galaxy_level(total_days),
        constellations_unlocked,
        next_constellation,
        total_light_years: i64::from(total_days) * LIGHT_YEARS_PER_DAY,
        achievements: achievements.to_vec(),
    }
}
