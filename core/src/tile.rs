use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::{SymbolId, TileKey};

/// One game piece: half of a symbol pair, or the bomb.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: SymbolId,
    pub content: String,
    pub key: TileKey,
    /// Marks the bomb, and after a bomb penalty also every neutralized tile.
    pub bombed: bool,
    /// Permanently resolved, no longer selectable.
    pub guessed: bool,
}

impl Tile {
    pub fn is_bomb(&self) -> bool {
        self.id.is_bomb()
    }

    /// Whether the tile has been taken out of play, either matched or the bomb.
    pub const fn is_settled(&self) -> bool {
        self.guessed || self.bombed
    }
}
