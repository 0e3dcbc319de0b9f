//! Wrapper configuration and defaults.

/// Configuration for the wrapper itself (as opposed to the transport, which is
/// configured at bind time).
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Prune one level of null/empty-string body fields on outgoing requests
    /// during the request-interceptor pass.
    pub enable_empty_params_filtering: bool,
    /// Emit structured diagnostic events for each request/response.
    pub enable_log: bool,
    /// Cosmetic color tag attached to success diagnostics.
    pub success_font_color: String,
    /// Cosmetic color tag attached to error diagnostics.
    pub error_font_color: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enable_empty_params_filtering: true,
            enable_log: true,
            success_font_color: "#05af0d".to_string(),
            error_font_color: "#ff0000".to_string(),
        }
    }
}
