//! Configuration management module for native-notify
//!
//! This module provides layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. Built-in defaults
//! 2. `default.toml` - Base configuration
//! 3. `local.toml` - Local overrides (not committed to version control)
//! 4. `NOTIFY_*` environment variables

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HostBackend, HostSettings, NotificationDefaults, Settings};
