//! Reva - image override resolution and responsive asset delivery.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use reva::cli::{self, Cli, Commands};
use reva::config::DeliveryConfig;
use reva::logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = DeliveryConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Assets { category } => cli::assets::run(category.as_deref()),
        Commands::Resolve { args } => cli::resolve::run(args, &config).await,
        Commands::Variants { args } => cli::variants::run(args, &config),
    }
}
