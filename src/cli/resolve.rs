//! `resolve` command: fetch overrides and print the resolved URL map.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::cli::ResolveArgs;
use crate::config::DeliveryConfig;
use crate::delivery::{AssetDelivery, LoadingPolicy, ResolvedAssets};
use crate::log;
use crate::overrides::{JsonFileSource, OverrideFeed, RestSource, StaticSource};
use crate::registry;

pub async fn run(args: &ResolveArgs, config: &DeliveryConfig) -> Result<()> {
    let policy = if args.static_first {
        LoadingPolicy::StaticFirst
    } else {
        LoadingPolicy::Deferred
    };

    let resolved = if args.skip_fetch {
        // What a consumer sees before the snapshot is in.
        let delivery = AssetDelivery::new(OverrideFeed::new(StaticSource::default()));
        delivery.assets(policy)
    } else if let Some(path) = &args.overrides {
        let delivery = AssetDelivery::new(OverrideFeed::new(JsonFileSource::new(path.clone())));
        delivery.refresh(policy).await
    } else {
        let endpoint = config.store.endpoint.as_deref().context(
            "no [store] endpoint configured; pass --overrides <file> or set one in reva.toml",
        )?;
        let source = RestSource::new(endpoint, &config.store.table, config.store.api_key.as_deref())?;
        let delivery = AssetDelivery::new(OverrideFeed::with_ttl(source, config.cache.ttl()));
        delivery.refresh(policy).await
    };

    if args.json {
        print_json(&resolved)?;
    } else {
        print_table(&resolved);
    }
    Ok(())
}

/// JSON object in registry order (`preserve_order` keeps it stable).
fn print_json(resolved: &ResolvedAssets) -> Result<()> {
    let mut assets = serde_json::Map::new();
    for entry in registry::assets() {
        let url = resolved.url(entry.id).unwrap_or_default();
        assets.insert(entry.id.to_string(), json!(url));
    }

    let output = json!({ "ready": resolved.ready, "assets": assets });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_table(resolved: &ResolvedAssets) {
    if !resolved.ready {
        log!("resolve"; "override snapshot not loaded; showing loading-state URLs");
    }

    for entry in registry::assets() {
        match resolved.url(entry.id) {
            Some(url) => println!("{:<26} {url}", entry.id.cyan()),
            None => println!("{:<26} {}", entry.id.cyan(), "(deferred)".dimmed()),
        }
    }
}
