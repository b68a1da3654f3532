#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use deck::*;
pub use engine::*;
pub use error::*;
pub use guess::*;
pub use phase::*;
pub use score::*;
pub use session::*;
pub use snapshot::*;
pub use symbols::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod deck;
mod engine;
mod error;
mod guess;
mod phase;
mod score;
mod session;
mod snapshot;
mod symbols;
mod tile;
mod timer;
mod types;

pub const DEFAULT_REVEAL_DELAY_MS: u64 = 600;

/// Timing and randomness knobs of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay before a revealed pair, mismatch or bomb penalty is applied.
    pub reveal_delay_ms: u64,
    /// Delay between entering `Reloading` and the fresh deck appearing.
    pub reload_delay_ms: u64,
    pub seed: u64,
}

impl GameConfig {
    /// Config whose reload delay is half of the reveal delay.
    pub const fn new(reveal_delay_ms: u64) -> Self {
        Self {
            reveal_delay_ms,
            reload_delay_ms: reveal_delay_ms / 2,
            seed: 0,
        }
    }

    pub const fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub const fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub const fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_DELAY_MS)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Selected,
    PairSelected,
    BombTriggered,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            Selected => true,
            PairSelected => true,
            BombTriggered => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reload_delay_defaults_to_half_the_reveal_delay() {
        let config = GameConfig::default();
        assert_eq!(config.reveal_delay(), Duration::from_millis(600));
        assert_eq!(config.reload_delay(), Duration::from_millis(300));
        assert_eq!(GameConfig::new(100).with_seed(9).reload_delay_ms, 50);
    }

    #[test]
    fn only_ignored_clicks_have_no_update() {
        assert!(!ClickOutcome::NoChange.has_update());
        assert!(ClickOutcome::Selected.has_update());
        assert!(ClickOutcome::PairSelected.has_update());
        assert!(ClickOutcome::BombTriggered.has_update());
    }

    #[test]
    fn missing_config_fields_fall_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "seed": 5 }"#).unwrap();
        assert_eq!(config, GameConfig::default().with_seed(5));
    }
}
