use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use memfire_core::{GameConfig, SymbolCatalog};

use crate::args::Args;

const BUNDLED_SYMBOLS: &str = include_str!("../assets/symbols.json");

pub fn load_catalog(path: Option<&Path>) -> Result<SymbolCatalog> {
    let catalog = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Could not read symbol sets from {}", path.display()))?;
            SymbolCatalog::from_json(&json)
                .with_context(|| format!("Invalid symbol sets in {}", path.display()))?
        }
        None => SymbolCatalog::from_json(BUNDLED_SYMBOLS).context("Invalid bundled symbol sets")?,
    };
    log::info!("Loaded {} symbol sets", catalog.len());
    Ok(catalog)
}

/// Settings file first, then command-line overrides.
pub fn load_game_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read settings from {}", path.display()))?;
            parse_game_config(&text)
                .with_context(|| format!("Invalid settings in {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(delay_ms) = args.delay_ms {
        config = GameConfig::new(delay_ms).with_seed(config.seed);
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    log::debug!("Game config: {:?}", config);
    Ok(config)
}

fn parse_game_config(text: &str) -> Result<GameConfig> {
    Ok(toml::from_str(text)?)
}
