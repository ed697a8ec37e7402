//! Conversation constants, prompt texts and message assembly.

use crate::error::CoreError;
use crate::personality::Personality;
use crate::progress::StreakState;

/// Author role of a stored user message.
pub const ROLE_USER: &str = "user";

/// Author role of a stored assistant reply.
pub const ROLE_AI: &str = "ai";

/// Maximum accepted length of a single user message, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 4000;

/// Maximum number of messages returned by the chat history endpoint.
pub const HISTORY_PAGE_SIZE: i64 = 100;

/// Prefix prepended to messages sent through the SOS endpoint.
pub const SOS_PREFIX: &str = "[SOS - URGENT SUPPORT NEEDED] ";

const BASE_SYSTEM_MESSAGE: &str = "\
You are \"Aura,\" a compassionate and intelligent AI guide. Your sole mission is to \
provide unwavering, non-judgmental support to users on their journey to quit pornography \
and reclaim their focus, energy, and life. You are a coach, a strategist, a motivator, and \
a safe space. Your primary goal is to empower the user to build a life they don't want to \
escape from.

CORE RULES:
- NEVER use shaming, guilt-inducing, or disappointed language
- Always be supportive, patient, and empowering
- Keep responses concise, clear, and actionable
- Be proactive and caring

You have access to the user's streak data, mood history, and previous conversations to \
provide personalized support.";

const ALEX_PROMPT: &str = "\
You are \"Alex,\" the Empathetic Coach personality of Aura. You are warm, patient, and an \
excellent listener. Your role is to validate feelings, offer comfort, and reduce shame.

Key phrases you use:
- \"It sounds like that was really tough. It's okay to feel that way.\"
- \"Thank you for sharing that with me. It takes courage.\"
- \"What's on your mind right now?\"

Always be compassionate and non-judgmental. Focus on emotional support and validation.";

const CASEY_PROMPT: &str = "\
You are \"Casey,\" the Strategist personality of Aura. You are logical, clear-thinking, and \
a problem-solver. Your role is to analyze triggers, identify patterns, and co-create \
actionable plans.

Key phrases you use:
- \"Let's break this down. What was happening right before the urge hit?\"
- \"I've noticed a pattern. Let's create a specific 'If-Then' plan for that time.\"
- \"What is one small, concrete action you can take right now?\"

Always be analytical and solution-focused. Help users understand their patterns and build \
strategies.";

const LEO_PROMPT: &str = "\
You are \"Leo,\" the Motivator personality of Aura. You are energetic and inspiring, \
providing encouragement and celebrating progress. Your role is to boost morale, celebrate \
milestones, and provide motivational fuel.

Key phrases you use:
- \"You've made it another 24 hours! That's a huge win, and you should be proud.\"
- \"Remember why you started this journey. Think about the focus and freedom you're \
fighting for.\"
- \"Here is a thought for today: 'A river cuts through rock, not because of its power, but \
because of its persistence.'\"

Always be encouraging and inspirational. Focus on motivation and celebrating progress.";

/// Personality-specific instructions appended to the base system message.
pub fn personality_prompt(personality: Personality) -> &'static str {
    match personality {
        Personality::Alex => ALEX_PROMPT,
        Personality::Casey => CASEY_PROMPT,
        Personality::Leo => LEO_PROMPT,
    }
}

/// Full system prompt for a conversation turn.
pub fn system_prompt(personality: Personality) -> String {
    format!("{BASE_SYSTEM_MESSAGE}\n\n{}", personality_prompt(personality))
}

/// The user's message wrapped with their profile and progress.
pub fn context_message(name: &str, goal: &str, progress: &StreakState, message: &str) -> String {
    format!(
        "User Context:\n\
         Name: {name}\n\
         Goal: {goal}\n\
         Current Streak: {} days\n\
         Best Streak: {} days\n\
         Total Days Clean: {} days\n\
         \n\
         User Message: {message}",
        progress.current_streak, progress.best_streak, progress.total_days_clean,
    )
}

/// Mark a message as an urgent SOS request.
pub fn sos_message(message: &str) -> String {
    format!("{SOS_PREFIX}{message}")
}

/// Validate an incoming chat message: non-blank and bounded in length.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Validation(
            "Message must be a non-empty string".to_string(),
        ));
    }
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message must be at most {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_combines_base_and_personality() {
        let prompt = system_prompt(Personality::Casey);
        assert!(prompt.starts_with("You are \"Aura,\""));
        assert!(prompt.contains("the Strategist personality"));
        assert!(!prompt.contains("the Motivator personality"));
    }

    #[test]
    fn every_personality_has_a_distinct_prompt() {
        let prompts = [
            personality_prompt(Personality::Alex),
            personality_prompt(Personality::Casey),
            personality_prompt(Personality::Leo),
        ];
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
        assert_ne!(prompts[0], prompts[2]);
    }

    #[test]
    fn context_message_includes_progress() {
        let progress = StreakState {
            current_streak: 4,
            best_streak: 9,
            total_days_clean: 21,
        };
        let msg = context_message("Jordan", "Focus", &progress, "Hello");
        assert!(msg.contains("Name: Jordan\n"));
        assert!(msg.contains("Current Streak: 4 days\n"));
        assert!(msg.contains("Best Streak: 9 days\n"));
        assert!(msg.contains("Total Days Clean: 21 days\n"));
        assert!(msg.ends_with("User Message: Hello"));
    }

    #[test]
    fn sos_prefix_is_prepended() {
        assert_eq!(
            sos_message("I'm struggling"),
            "[SOS - URGENT SUPPORT NEEDED] I'm struggling"
        );
    }

    #[test]
    fn blank_or_oversized_messages_are_rejected() {
        assert!(validate_message("   ").is_err());
        assert!(validate_message(&"a".repeat(MAX_MESSAGE_LENGTH + 1)).is_err());
        assert!(validate_message("hi").is_ok());
    }
}
