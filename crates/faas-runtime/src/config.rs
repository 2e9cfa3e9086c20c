//! Runtime configuration

use std::env;
use std::time::Duration;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Interface the HTTP listener binds to
    pub host: String,

    /// Port the HTTP listener binds to (0 picks a free port)
    pub port: u16,

    /// Largest request body handed to a handler, in bytes
    pub max_body_bytes: usize,

    /// Handler invocation timeout in seconds
    pub handler_timeout_secs: u64,
}

impl RuntimeConfig {
    /// Load configuration from environment variables, falling back to
    /// [`RuntimeConfig::default`] for anything unset or unparseable
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("FUNC_HOST").unwrap_or(defaults.host),

            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),

            max_body_bytes: env::var("FUNC_MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_bytes),

            handler_timeout_secs: env::var("FUNC_HANDLER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.handler_timeout_secs),
        }
    }

    /// Address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get handler timeout duration
    pub fn handler_timeout(&self) -> Duration {
        Duration::from_secs(self.handler_timeout_secs)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 1024 * 1024, // 1MB
            handler_timeout_secs: 30,
        }
    }
}
