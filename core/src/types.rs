use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Positional identifier assigned to a tile when the deck is shuffled.
pub type TileKey = u16;

/// Score points, always derived from the tile list.
pub type Points = u32;

/// Reserved identifier of the bomb tile.
pub const BOMB_ID: &str = "bomb";

/// Glyph shown on the face of the bomb tile.
pub const BOMB_GLYPH: &str = "🔥";

/// Identity shared by the two tiles of a pair.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(String);

impl SymbolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn bomb() -> Self {
        Self::new(BOMB_ID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_bomb(&self) -> bool {
        self.0 == BOMB_ID
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SymbolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Monotonic round counter; delayed events scheduled in an older round are discarded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId(u64);

impl RoundId {
    pub const fn value(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
