//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands, ShowArgs};
use crate::config::error::ConfigError;
use crate::config::settings::{HostBackend, Settings};
use crate::config::ConfigLoader;
use std::path::Path;

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override configuration file values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading configuration from the specified path or default loader
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_config_path(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => ConfigLoader::from_file(path).load()?,
            None => ConfigLoader::new()?.load()?,
        };

        Ok(Self::new(config))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);
        Self::apply_command_overrides(&mut config, &cli.command);

        config.validate()?;

        Ok(config)
    }

    /// Apply global CLI argument overrides
    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    /// Apply command-specific CLI argument overrides
    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Show(args) => Self::apply_show_overrides(config, args),
            Commands::Check { headless } => {
                if *headless {
                    config.host.backend = HostBackend::Headless;
                }
            }
        }
    }

    fn apply_show_overrides(config: &mut Settings, args: &ShowArgs) {
        if let Some(level) = args.log_level {
            config.logger.level = level.into();
        }

        if let Some(timeout) = args.timeout {
            config.notification.timeout_ms = Some(timeout);
        }

        if args.sound {
            config.notification.silent = false;
        }

        if args.headless {
            config.host.backend = HostBackend::Headless;
        }
    }

    /// Get the base configuration
    pub fn base_config(&self) -> &Settings {
        &self.base_config
    }
}
