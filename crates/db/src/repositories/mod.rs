//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-step writes open their
//! own transaction; helpers that join an existing one take
//! `&mut Transaction`.

pub mod chat_message_repo;
pub mod check_in_repo;
pub mod relapse_repo;
pub mod user_repo;
pub mod weekly_report_repo;

pub use chat_message_repo::ChatMessageRepo;
pub use check_in_repo::CheckInRepo;
pub use relapse_repo::RelapseRepo;
pub use user_repo::UserRepo;
pub use weekly_report_repo::WeeklyReportRepo;
