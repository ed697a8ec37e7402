//! Request handlers.
//!
//! Each submodule groups the handlers of one area. Handlers validate input
//! with the `aura_core` helpers, delegate persistence to the repositories
//! in `aura_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod achievements;
pub mod chat;
pub mod checkins;
pub mod galaxy;
pub mod relapses;
pub mod users;
pub mod weekly_reports;
