use aura_llm::LlmConfig;

/// Minimum gap between the provider timeout and the request timeout. A stalled
/// provider must fail inside the handler, where it maps to `UPSTREAM_ERROR`.
pub const PROVIDER_TIMEOUT_HEADROOM_SECS: u64 = 5;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development
/// except the database URL, which is read separately at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `90`).
    pub request_timeout_secs: u64,
    /// Prior messages of a session sent along with a new chat message.
    pub chat_history_turns: i64,
    /// Completion provider settings.
    pub llm: LlmConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8001`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `90`                       |
    /// | `CHAT_HISTORY_TURNS`   | `20`                       |
    ///
    /// Provider variables are documented on [`LlmConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let chat_history_turns: i64 = std::env::var("CHAT_HISTORY_TURNS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("CHAT_HISTORY_TURNS must be a valid i64");

        let config = Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            chat_history_turns: chat_history_turns.max(0),
            llm: LlmConfig::from_env(),
        };

        if config.effective_request_timeout_secs() != config.request_timeout_secs {
            tracing::warn!(
                configured = config.request_timeout_secs,
                llm_timeout = config.llm.timeout_secs,
                applied = config.effective_request_timeout_secs(),
                "REQUEST_TIMEOUT_SECS does not exceed LLM_TIMEOUT_SECS, raising it",
            );
        }

        config
    }

    /// Request timeout applied by the router: the configured value, raised to
    /// stay [`PROVIDER_TIMEOUT_HEADROOM_SECS`] above the provider timeout.
    pub fn effective_request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.max(
            self.llm
                .timeout_secs
                .saturating_add(PROVIDER_TIMEOUT_HEADROOM_SECS),
        )
    }
}
