//! `assets` command: print the registry table.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::registry::{self, AssetCategory};

pub fn run(category: Option<&str>) -> Result<()> {
    let filter = match category {
        Some(name) => match AssetCategory::from_name(name) {
            Some(category) => Some(category),
            None => bail!(
                "unknown category `{name}` (expected one of: {})",
                AssetCategory::ALL.map(|c| c.name()).join(", ")
            ),
        },
        None => None,
    };

    for category in AssetCategory::ALL {
        if filter.is_some_and(|f| f != category) {
            continue;
        }

        let entries: Vec<_> = registry::assets()
            .iter()
            .filter(|e| e.category == category)
            .collect();
        if entries.is_empty() {
            continue;
        }

        println!("{}", category.label().bold());
        for entry in entries {
            println!(
                "  {:<26} {:<30} {}",
                entry.id.cyan(),
                entry.path,
                entry.built_in_url.dimmed()
            );
        }
        println!();
    }

    Ok(())
}
