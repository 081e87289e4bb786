//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{
    HostSettings, LoggerSettings, NotificationDefaults, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Longest accepted timeout: one day
const MAX_TIMEOUT_MS: u64 = 24 * 60 * 60 * 1000;

impl NotificationDefaults {
    /// Validate notification defaults
    ///
    /// # Validation Rules
    /// - Timeout, when set, must be greater than 0 and at most one day
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(timeout_ms) = self.timeout_ms {
            if timeout_ms == 0 {
                return Err(ConfigError::validation(
                    "notification.timeout_ms",
                    "Timeout must be greater than 0. Leave it unset to disable auto-close.",
                ));
            }

            if timeout_ms > MAX_TIMEOUT_MS {
                return Err(ConfigError::validation(
                    "notification.timeout_ms",
                    "Timeout cannot exceed one day (86400000 ms).",
                ));
            }
        }

        Ok(())
    }
}

impl HostSettings {
    /// Validate host configuration
    ///
    /// # Validation Rules
    /// - Application name must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::validation(
                "host.app_name",
                "Application name cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of trace, debug, info, warn, error
    /// - File format must be one of full, compact, json
    /// - File path must not be empty when file output is enabled
    /// - At least one output must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level".to_string(),
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        self.file.parse_format()?;

        if self.file.enabled && self.file.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path cannot be empty when file output is enabled.",
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger.validate()?;
        self.notification.validate()?;
        self.host.validate()?;
        Ok(())
    }
}
