use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

/// Memory game where one tile is a bomb that wipes out your matched pairs.
#[derive(Parser, Debug)]
#[command(name = "memfire", version)]
pub struct Args {
    /// JSON file mapping symbol-set names to `[{ "id", "content" }]` lists.
    #[arg(long)]
    pub symbols: Option<PathBuf>,
    /// TOML file with game settings (`reveal_delay_ms`, `reload_delay_ms`, `seed`).
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Seed for deck shuffling, overrides the settings file.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Reveal delay in milliseconds; the reload delay becomes half of it.
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// Show tile faces while they are face down.
    #[arg(long)]
    pub reveal: bool,
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}
