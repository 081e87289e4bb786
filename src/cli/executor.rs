//! Command executor for dispatching CLI commands

use super::handlers::{CheckCommandHandler, ShowCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings
///
/// # Errors
/// Returns validation failures and errors from the command handlers.
/// A notification that closed because the platform reported an error is
/// an error.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })?;

    match &cli.command {
        Commands::Show(args) => {
            ShowCommandHandler::new(settings).execute(args).await?;
            Ok(())
        }
        Commands::Check { .. } => CheckCommandHandler::new(&settings).execute().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostBackend;
    use clap::Parser;

    fn headless_settings() -> Settings {
        let mut config = Settings::default();
        config.host.backend = HostBackend::Headless;
        config
    }

    #[tokio::test]
    async fn test_execute_check() {
        let cli = Cli::try_parse_from(["native-notify", "check"]).unwrap();
        let result = execute_command(&cli, headless_settings()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_show_headless() {
        let cli = Cli::try_parse_from(["native-notify", "show", "Hello", "--headless"]).unwrap();
        let result = execute_command(&cli, headless_settings()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_rejects_sound_with_headless() {
        let cli =
            Cli::try_parse_from(["native-notify", "show", "Hello", "--headless", "--sound"]).unwrap();
        let result = execute_command(&cli, headless_settings()).await;

        match result {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "cli_arguments"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
