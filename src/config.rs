//! Tool configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored when present.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `OUTPUT_FORMAT` - Payload rendering: `pretty` or `compact` (default: `pretty`)
//!
//! Logs always go to stderr so stdout carries nothing but payloads.

use anyhow::Result;
use std::env;

/// Configuration for the `svc-models` command-line tool.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    pub output_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let output_format = env::var("OUTPUT_FORMAT").unwrap_or_else(|_| "pretty".to_string());

        Self {
            log_level,
            log_format,
            output_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `output_format` is not `pretty` or `compact`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.output_format != "pretty" && self.output_format != "compact" {
            anyhow::bail!(
                "OUTPUT_FORMAT must be 'pretty' or 'compact', got '{}'",
                self.output_format
            );
        }

        Ok(())
    }

    /// Applies command-line flags on top of the environment.
    ///
    /// Runs before [`Config::validate`], so a flag replaces whatever the
    /// environment said, including an invalid value.
    pub fn apply_overrides(&mut self, compact: bool) {
        if compact {
            self.output_format = "compact".to_string();
        }
    }

    /// Returns whether payloads are pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.output_format == "pretty"
    }

    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
        tracing::debug!("  Output format: {}", self.output_format);
    }
}
