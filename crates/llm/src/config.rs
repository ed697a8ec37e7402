/// Default Anthropic API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Completion provider configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key. When absent every completion fails with
    /// [`LlmError::NotConfigured`](crate::LlmError::NotConfigured).
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                        |
    /// |--------------------|--------------------------------|
    /// | `LLM_API_KEY`      | (unset)                        |
    /// | `LLM_BASE_URL`     | `https://api.anthropic.com`    |
    /// | `LLM_MODEL`        | `claude-3-5-sonnet-20241022`   |
    /// | `LLM_MAX_TOKENS`   | `1024`                         |
    /// | `LLM_TIMEOUT_SECS` | `60`                           |
    pub fn from_env() -> Self {
        let api_key = std::env::var("LLM_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url = std::env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let max_tokens: u32 = std::env::var("LLM_MAX_TOKENS")
            .unwrap_or_else(|_| "1024".into())
            .parse()
            .expect("LLM_MAX_TOKENS must be a valid u32");

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            model,
            max_tokens,
            timeout_secs,
        }
    }
}
