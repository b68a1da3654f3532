use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of one tile, with the presentation hints the board needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub key: TileKey,
    pub id: SymbolId,
    pub content: String,
    pub bombed: bool,
    pub guessed: bool,
    /// Guessed or currently selected.
    pub face_up: bool,
    /// A click on this tile would not be ignored right now.
    pub selectable: bool,
    pub score_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub status: String,
    pub round: RoundId,
    pub tiles: Vec<TileView>,
    pub score: Points,
    pub selected: [Option<TileKey>; 2],
    pub bomb_triggered: bool,
}

impl Snapshot {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let guesses = engine.guesses();
        let bomb_triggered = engine.bomb_triggered();
        let accepts_clicks = engine.phase().accepts_clicks();

        let tiles = engine
            .deck()
            .iter()
            .map(|tile| {
                let selected = guesses.contains(tile.key);
                TileView {
                    key: tile.key,
                    id: tile.id.clone(),
                    content: tile.content.clone(),
                    bombed: tile.bombed,
                    guessed: tile.guessed,
                    face_up: tile.guessed || selected,
                    selectable: accepts_clicks
                        && matches!(
                            guesses.resolve_click(tile, bomb_triggered),
                            ClickDecision::Accept { .. }
                        ),
                    score_label: score_label(tile, bomb_triggered).map(String::from),
                }
            })
            .collect();

        Self {
            phase: engine.phase(),
            status: engine.phase().status_message().into(),
            round: engine.round(),
            tiles,
            score: engine.score(),
            selected: guesses.keys(),
            bomb_triggered,
        }
    }

    pub fn tile(&self, key: TileKey) -> Option<&TileView> {
        self.tiles.iter().find(|tile| tile.key == key)
    }

    pub fn is_board_visible(&self) -> bool {
        self.phase.is_board_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::time::Duration;

    fn engine() -> PlayEngine {
        PlayEngine::new(
            GameConfig::default().with_seed(3),
            vec![Symbol::new("apple", "🍎"), Symbol::new("banana", "🍌")],
        )
        .unwrap()
    }

    #[test]
    fn repeated_snapshots_are_identical() {
        let mut engine = engine();
        engine.submit_click(0).unwrap();

        assert_eq!(engine.snapshot(), engine.snapshot());
    }

    #[test]
    fn selected_tiles_are_face_up_and_not_selectable() {
        let mut engine = engine();
        let key = engine
            .deck()
            .iter()
            .find(|tile| !tile.is_bomb())
            .map(|tile| tile.key)
            .unwrap();
        engine.submit_click(key).unwrap();

        let snapshot = engine.snapshot();
        let tile = snapshot.tile(key).unwrap();
        assert!(tile.face_up);
        assert!(!tile.selectable);
        assert_eq!(snapshot.selected, [Some(key), None]);
        assert_eq!(snapshot.status, GamePhase::Start.status_message());
    }

    #[test]
    fn bomb_label_drops_to_zero_once_triggered() {
        let mut engine = engine();
        let bomb = engine
            .deck()
            .iter()
            .find(|tile| tile.is_bomb())
            .map(|tile| tile.key)
            .unwrap();

        let before = engine.snapshot();
        assert_eq!(before.tile(bomb).unwrap().score_label.as_deref(), Some("+10"));

        engine.submit_click(bomb).unwrap();
        engine.advance_by(Duration::from_millis(600));

        let after = engine.snapshot();
        let view = after.tile(bomb).unwrap();
        assert_eq!(view.score_label.as_deref(), Some("0"));
        assert!(view.face_up);
        assert!(!view.selectable);
    }

    #[test]
    fn board_hidden_while_reloading() {
        let mut engine = engine();
        engine.begin_reload(None).unwrap();

        let snapshot = engine.snapshot();
        assert!(!snapshot.is_board_visible());
        assert!(snapshot.tiles.is_empty());
        assert_eq!(snapshot.score, 0);
    }
}
