//! Text-completion collaborator for the conversation flow.
//!
//! [`ChatCompletion`] is the seam the API depends on. [`AnthropicClient`]
//! talks to the Anthropic Messages API; [`mock::ScriptedCompletion`] stands
//! in for it in tests.

pub mod anthropic;
pub mod completion;
pub mod config;
pub mod error;
pub mod mock;

pub use anthropic::AnthropicClient;
pub use completion::{ChatCompletion, ConversationTurn, TurnRole};
pub use config::LlmConfig;
pub use error::LlmError;
