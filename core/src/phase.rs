use serde::{Deserialize, Serialize};

/// Coarse game state, exactly one is active at any time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Start,
    Matched,
    Bombed,
    Over,
    Reloading,
}

impl GamePhase {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }

    pub const fn is_reloading(self) -> bool {
        matches!(self, Self::Reloading)
    }

    /// The board is hidden while a new deck is being prepared.
    pub const fn is_board_visible(self) -> bool {
        !self.is_reloading()
    }

    pub const fn accepts_clicks(self) -> bool {
        !matches!(self, Self::Over | Self::Reloading)
    }

    pub const fn status_message(self) -> &'static str {
        use GamePhase::*;
        match self {
            Start => "Start clicking tiles to match pairs!",
            Matched => "Wow! You found a pair. Continue playing.",
            Bombed => "Boom! You lost all your matched pairs. Continue playing.",
            Over => "Game ended! You found all matching tiles. Click to restart.",
            Reloading => "Reloading...",
        }
    }
}
