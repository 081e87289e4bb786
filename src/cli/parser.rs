//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Show native desktop notifications from the command line
#[derive(Parser, Debug)]
#[command(name = "native-notify")]
#[command(about = "Show native desktop notifications from the command line")]
#[command(long_about = "
native-notify shows a single desktop notification and waits until its
lifecycle ends: the user clicks it, its timeout elapses, or the platform
reports an error. Hosts without notification support close immediately
without showing anything.

EXAMPLES:
    # Show a notification that stays until clicked
    native-notify show \"Build finished\" --body \"All 214 tests passed\"

    # Auto-close after five seconds and play the default sound
    native-notify show \"Deploy done\" --timeout 5000 --sound

    # Check what the current host supports
    native-notify check

    # Use a custom configuration file with verbose logging
    native-notify --config /etc/native-notify.toml --verbose show \"Hello\"
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load settings from this TOML file instead of the layered
    /// `config/default.toml` and `config/local.toml` files.
    /// The file must exist and be readable.
    #[arg(short, long, global = true, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a notification and wait until it closes
    ///
    /// Exits with a non-zero status if the platform reported an error.
    ///
    /// Examples:
    ///   native-notify show "Hello"                       # Stays until clicked or dismissed
    ///   native-notify show "Hello" --timeout 3000        # Auto-close after 3s
    ///   native-notify show "Hello" --headless            # Close without rendering
    Show(ShowArgs),

    /// Report backend, capability and permission state
    Check {
        /// Use the headless host regardless of configuration
        #[arg(long)]
        headless: bool,
    },
}

/// Arguments of the show command
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Notification title
    #[arg(value_parser = super::validation::validate_title)]
    pub title: String,

    /// Notification body text
    #[arg(short, long)]
    pub body: Option<String>,

    /// Icon name or path
    #[arg(long)]
    pub icon: Option<String>,

    /// Tag identifying the notification
    #[arg(long)]
    pub tag: Option<String>,

    /// Auto-close after this many milliseconds unless clicked first
    ///
    /// Overrides `notification.timeout_ms` from configuration.
    #[arg(short, long, value_name = "MS", value_parser = super::validation::validate_timeout_ms)]
    pub timeout: Option<u64>,

    /// Play sound and vibrate (notifications are silent by default)
    #[arg(long)]
    pub sound: bool,

    /// Use the headless host regardless of configuration
    #[arg(long)]
    pub headless: bool,

    /// Log level override
    ///
    /// Overrides both configuration file settings and --verbose/--quiet.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        if let Commands::Show(args) = &self.command
            && args.headless
            && args.sound
        {
            return Err("--sound has no effect together with --headless".to_string());
        }

        Ok(())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}
