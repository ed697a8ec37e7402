/// Errors from the completion provider.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("LLM API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging. Never sent to clients.
        body: String,
    },

    /// The provider answered without any text content.
    #[error("LLM returned an empty response")]
    EmptyResponse,

    /// No API key is configured.
    #[error("LLM provider is not configured")]
    NotConfigured,
}
