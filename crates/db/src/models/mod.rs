//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Outcome structs for multi-step writes, where the flow needs one

pub mod chat_message;
pub mod check_in;
pub mod relapse;
pub mod user;
pub mod weekly_report;
