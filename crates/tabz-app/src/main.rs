// ABOUTME: Main application entry point.
// ABOUTME: Loads config and a scenario file, replays it and prints the final layout as JSON.

mod host;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tabz_core::Config;

use scenario::Scenario;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: tabz <scenario.toml>")?;

    let config = match Config::default_path() {
        Some(path) => Config::load_or_init(&path).unwrap_or_else(|e| {
            tracing::warn!("Using default settings, {}: {}", path.display(), e);
            Config::default()
        }),
        None => Config::default(),
    };
    tracing::info!(
        "Loaded config: first_split_vertical={}, min_panel_size={}",
        config.layout.first_split_vertical,
        config.layout.min_panel_size
    );

    let scenario = Scenario::load(&path)
        .with_context(|| format!("Failed to load scenario {}", path.display()))?;
    let snapshot = scenario.run(config.layout)?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
