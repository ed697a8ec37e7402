//! In-process completion backend for tests and local runs without a key.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::completion::{ChatCompletion, ConversationTurn};
use crate::error::LlmError;

/// A request the mock received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub conversation: Vec<ConversationTurn>,
}

/// Replies from a script, then repeats a fallback reply.
///
/// A scripted `None` simulates a provider failure for that call.
pub struct ScriptedCompletion {
    script: Mutex<VecDeque<Option<String>>>,
    fallback: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedCompletion {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: fallback.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply for the next unanswered call.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.push(Some(reply.into()));
        self
    }

    /// Queue a provider failure for the next unanswered call.
    pub fn with_failure(self) -> Self {
        self.push(None);
        self
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn push(&self, entry: Option<String>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(entry);
        }
    }
}

impl Default for ScriptedCompletion {
    fn default() -> Self {
        Self::new("I'm here with you.")
    }
}

#[async_trait]
impl ChatCompletion for ScriptedCompletion {
    async fn complete(
        &self,
        system_prompt: &str,
        conversation: &[ConversationTurn],
    ) -> Result<String, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                system_prompt: system_prompt.to_string(),
                conversation: conversation.to_vec(),
            });
        }

        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());

        match next {
            Some(Some(reply)) => Ok(reply),
            Some(None) => Err(LlmError::Api {
                status: 529,
                body: "scripted failure".to_string(),
            }),
            None => Ok(self.fallback.clone()),
        }
    }
}
