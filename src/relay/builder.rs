//! Builder pattern implementation for creating Relay instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use relay::relay::RelayBuilder;
//!
//! let relay = RelayBuilder::new()
//!     .empty_params_filtering(true)
//!     .log(false)
//!     .build();
//! ```

use super::{config::RelayConfig, relay::Relay};

/// A builder used to create a [`Relay`].
///
/// ```rust
/// use relay::relay::RelayBuilder;
///
/// let relay = RelayBuilder::new().log(false).build();
/// ```
#[derive(Default)]
pub struct RelayBuilder {
    config: RelayConfig,
}

impl RelayBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        RelayBuilder::default()
    }

    /// Convenience function to silence the diagnostic events.
    pub fn quiet() -> Self {
        let mut builder = RelayBuilder::default();
        builder.config.enable_log = false;
        builder
    }

    /// Enables or disables one-level empty-value pruning of outgoing bodies.
    pub fn empty_params_filtering(mut self, enable: bool) -> Self {
        self.config.enable_empty_params_filtering = enable;
        self
    }

    /// Enables or disables the diagnostic request/response events.
    pub fn log(mut self, enable: bool) -> Self {
        self.config.enable_log = enable;
        self
    }

    /// Sets the cosmetic color tag attached to success diagnostics.
    pub fn success_font_color(mut self, color: impl Into<String>) -> Self {
        self.config.success_font_color = color.into();
        self
    }

    /// Sets the cosmetic color tag attached to error diagnostics.
    pub fn error_font_color(mut self, color: impl Into<String>) -> Self {
        self.config.error_font_color = color.into();
        self
    }

    /// Create the [`Relay`] with the specified options.
    pub fn build(self) -> Relay {
        Relay::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_applies_options() {
        let relay = RelayBuilder::new()
            .empty_params_filtering(false)
            .log(false)
            .success_font_color("#00ff00")
            .build();
        assert!(!relay.config().enable_empty_params_filtering);
        assert!(!relay.config().enable_log);
        assert_eq!(relay.config().success_font_color, "#00ff00");
    }

    #[test]
    fn test_quiet_builder() {
        let relay = RelayBuilder::quiet().build();
        assert!(!relay.config().enable_log);
        assert!(relay.config().enable_empty_params_filtering);
    }
}
