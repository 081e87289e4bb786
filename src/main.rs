use clap::Parser;
use native_notify::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    tracing::debug!(
        version = native_notify::pkg_version(),
        backend = settings.host.backend.as_str(),
        "Starting"
    );

    cli::execute_command(&cli, settings).await?;
    Ok(())
}
