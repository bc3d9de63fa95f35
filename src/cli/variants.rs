//! `variants` command: variant URL and srcset for any image URL.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::VariantArgs;
use crate::config::DeliveryConfig;
use crate::log;
use crate::transform::{self, VariantOptions};

pub fn run(args: &VariantArgs, config: &DeliveryConfig) -> Result<()> {
    let options = VariantOptions {
        width: args.width,
        quality: args.quality.or(config.image.quality),
        format: args.format,
    };

    if !transform::is_transformable_url(&args.url) {
        log!("warning"; "URL is outside the transformable bucket; passing through unchanged");
    }

    println!(
        "{} {}",
        "variant:".bold(),
        transform::build_variant_url(&args.url, &options)
    );

    let ladder = args.widths.as_deref().unwrap_or(&config.image.widths);
    match transform::build_variant_set(&args.url, ladder, &options) {
        Some(srcset) => println!("{}  {srcset}", "srcset:".bold()),
        None => println!("{}  {}", "srcset:".bold(), "(not transformable)".dimmed()),
    }

    Ok(())
}
