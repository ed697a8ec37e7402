use std::sync::Arc;

use aura_core::personality::PersonalityPolicy;
use aura_llm::ChatCompletion;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: aura_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Completion provider used by the chat and SOS endpoints.
    pub llm: Arc<dyn ChatCompletion>,
    /// Keyword rules for picking and tagging personalities.
    pub personality_policy: Arc<PersonalityPolicy>,
}
