mod api;
mod cli;
mod router;
mod startup;
mod state;

use clap::Parser;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let mut config = startup::load_config();
    cli.apply_overrides(&mut config);

    match cli.subcommand() {
        Command::Serve => startup::serve(&config).await?,
        Command::Check => startup::check(&config)?,
    }

    Ok(())
}
