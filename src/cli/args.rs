//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::transform::ImageFormat;

/// Reva asset delivery CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: reva.toml)
    #[arg(short = 'C', long, default_value = "reva.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the built-in asset registry
    #[command(visible_alias = "a")]
    Assets {
        /// Filter by category (hero, logo, editorial, lifestage, lifestyle, service)
        #[arg(short = 'c', long)]
        category: Option<String>,
    },

    /// Resolve every asset against the override store
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Build a variant URL and srcset for any image URL
    #[command(visible_alias = "v")]
    Variants {
        #[command(flatten)]
        args: VariantArgs,
    },
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Read override records from a JSON file instead of the configured store
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub overrides: Option<PathBuf>,

    /// Preview the loading state: resolve without fetching anything
    #[arg(long)]
    pub skip_fetch: bool,

    /// Use the static-first loading policy (critical-path assets)
    #[arg(short, long)]
    pub static_first: bool,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Variants command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct VariantArgs {
    /// URL to transform
    pub url: String,

    /// Target width in pixels
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Compression quality (1-100)
    #[arg(short, long)]
    pub quality: Option<i32>,

    /// Output format (avif, webp)
    #[arg(short, long)]
    pub format: Option<ImageFormat>,

    /// Width ladder for the srcset (comma-separated)
    #[arg(short = 'W', long, value_delimiter = ',')]
    pub widths: Option<Vec<u32>>,
}
