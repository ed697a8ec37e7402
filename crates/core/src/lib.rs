//! Pure domain logic for the Aura recovery companion.
//!
//! Streak bookkeeping, achievement evaluation, galaxy rendering,
//! personality selection and weekly report aggregation. Nothing in this
//! crate touches the database or the network; callers load the data,
//! run it through these functions, and persist the results.

pub mod achievements;
pub mod chat;
pub mod checkin;
pub mod error;
pub mod galaxy;
pub mod personality;
pub mod progress;
pub mod types;
pub mod user;
pub mod weekly_report;
