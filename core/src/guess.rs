use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of a selected tile, enough to detect re-clicks and compare pairs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRef {
    pub key: TileKey,
    pub id: SymbolId,
}

impl From<&Tile> for GuessRef {
    fn from(tile: &Tile) -> Self {
        Self {
            key: tile.key,
            id: tile.id.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadySelected,
    MismatchLockout,
    BombNeutralized,
    AlreadyGuessed,
}

/// What the resolver decided about a click, before any state is touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickDecision {
    Ignore(IgnoreReason),
    Accept { slot: Slot, triggers_bomb: bool },
}

/// State of the two-slot buffer once both slots are looked at together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairState {
    Incomplete,
    Match(SymbolId),
    Mismatch,
}

/// Two-slot selection buffer; the first slot always fills before the second.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessSlots {
    first: Option<GuessRef>,
    second: Option<GuessRef>,
}

impl GuessSlots {
    pub fn first(&self) -> Option<&GuessRef> {
        self.first.as_ref()
    }

    pub fn second(&self) -> Option<&GuessRef> {
        self.second.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    pub fn contains(&self, key: TileKey) -> bool {
        self.keys().contains(&Some(key))
    }

    pub fn keys(&self) -> [Option<TileKey>; 2] {
        [
            self.first.as_ref().map(|guess| guess.key),
            self.second.as_ref().map(|guess| guess.key),
        ]
    }

    pub fn pair_state(&self) -> PairState {
        match (&self.first, &self.second) {
            (Some(first), Some(second)) if first.id == second.id => PairState::Match(first.id.clone()),
            (Some(_), Some(_)) => PairState::Mismatch,
            _ => PairState::Incomplete,
        }
    }

    /// Decides whether `tile` may be selected, checking the rules in order.
    pub fn resolve_click(&self, tile: &Tile, bomb_triggered: bool) -> ClickDecision {
        use ClickDecision::*;
        use IgnoreReason::*;

        if self.contains(tile.key) {
            return Ignore(AlreadySelected);
        }
        if self.pair_state() == PairState::Mismatch {
            return Ignore(MismatchLockout);
        }
        if tile.bombed && tile.guessed {
            return Ignore(BombNeutralized);
        }
        if tile.guessed {
            return Ignore(AlreadyGuessed);
        }

        let slot = if self.first.is_none() {
            Slot::First
        } else {
            Slot::Second
        };
        Accept {
            slot,
            triggers_bomb: tile.bombed && !bomb_triggered,
        }
    }

    pub(crate) fn fill(&mut self, slot: Slot, guess: GuessRef) {
        match slot {
            Slot::First => self.first = Some(guess),
            Slot::Second => self.second = Some(guess),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(key: TileKey, id: &str) -> Tile {
        Tile {
            id: SymbolId::new(id),
            content: id.into(),
            key,
            bombed: id == BOMB_ID,
            guessed: false,
        }
    }

    fn accept(slots: &mut GuessSlots, tile: &Tile) {
        match slots.resolve_click(tile, false) {
            ClickDecision::Accept { slot, .. } => slots.fill(slot, tile.into()),
            other => panic!("click was not accepted: {other:?}"),
        }
    }

    #[test]
    fn fills_first_then_second() {
        let mut slots = GuessSlots::default();
        let a = tile(0, "a");
        let b = tile(1, "b");

        assert_eq!(
            slots.resolve_click(&a, false),
            ClickDecision::Accept {
                slot: Slot::First,
                triggers_bomb: false
            }
        );
        accept(&mut slots, &a);
        assert_eq!(
            slots.resolve_click(&b, false),
            ClickDecision::Accept {
                slot: Slot::Second,
                triggers_bomb: false
            }
        );
    }

    #[test]
    fn reclicking_a_selected_tile_is_ignored() {
        let mut slots = GuessSlots::default();
        let a = tile(0, "a");
        accept(&mut slots, &a);

        assert_eq!(
            slots.resolve_click(&a, false),
            ClickDecision::Ignore(IgnoreReason::AlreadySelected)
        );
    }

    #[test]
    fn mismatched_pair_locks_out_further_clicks() {
        let mut slots = GuessSlots::default();
        accept(&mut slots, &tile(0, "a"));
        accept(&mut slots, &tile(1, "b"));

        assert_eq!(slots.pair_state(), PairState::Mismatch);
        assert_eq!(
            slots.resolve_click(&tile(2, "c"), false),
            ClickDecision::Ignore(IgnoreReason::MismatchLockout)
        );
    }

    #[test]
    fn matching_pair_is_reported() {
        let mut slots = GuessSlots::default();
        accept(&mut slots, &tile(0, "a"));
        accept(&mut slots, &tile(3, "a"));

        assert_eq!(slots.pair_state(), PairState::Match(SymbolId::new("a")));
        assert_eq!(slots.keys(), [Some(0), Some(3)]);
        assert_eq!(slots.first().map(|guess| guess.key), Some(0));
        assert_eq!(slots.second().map(|guess| guess.id.as_str()), Some("a"));
    }

    #[test]
    fn bomb_triggers_only_once() {
        let slots = GuessSlots::default();
        let bomb = tile(4, BOMB_ID);

        assert_eq!(
            slots.resolve_click(&bomb, false),
            ClickDecision::Accept {
                slot: Slot::First,
                triggers_bomb: true
            }
        );

        let mut neutralized = bomb.clone();
        neutralized.guessed = true;
        assert_eq!(
            slots.resolve_click(&neutralized, true),
            ClickDecision::Ignore(IgnoreReason::BombNeutralized)
        );
    }

    #[test]
    fn guessed_tiles_cannot_be_selected() {
        let slots = GuessSlots::default();
        let mut a = tile(0, "a");
        a.guessed = true;

        assert_eq!(
            slots.resolve_click(&a, false),
            ClickDecision::Ignore(IgnoreReason::AlreadyGuessed)
        );
    }
}
