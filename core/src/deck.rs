use alloc::vec::Vec;
use core::ops::Index;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Largest number of pairs whose deck still fits in `TileKey`.
pub const MAX_PAIRS: usize = (TileKey::MAX as usize - 1) / 2;

pub trait DeckGenerator {
    fn generate(self, symbols: &[Symbol]) -> Result<Deck>;
}

/// Builds a deck by duplicating every symbol, adding the bomb, and shuffling with a seeded RNG.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, symbols: &[Symbol]) -> Result<Deck> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        build_deck(symbols, &mut rng)
    }
}

/// Duplicates each symbol into a pair, appends the bomb, shuffles, and numbers the tiles by position.
pub fn build_deck<R: Rng>(symbols: &[Symbol], rng: &mut R) -> Result<Deck> {
    if symbols.is_empty() {
        return Err(GameError::InvalidConfiguration(
            "cannot build a deck from an empty symbol list".into(),
        ));
    }
    if symbols.len() > MAX_PAIRS {
        return Err(GameError::InvalidConfiguration(alloc::format!(
            "{} symbols requested but a deck holds at most {} pairs",
            symbols.len(),
            MAX_PAIRS
        )));
    }

    let mut tiles: Vec<Tile> = symbols
        .iter()
        .chain(symbols.iter())
        .map(|symbol| Tile {
            id: symbol.id.clone(),
            content: symbol.content.clone(),
            key: 0,
            bombed: false,
            guessed: false,
        })
        .collect();
    tiles.push(Tile {
        id: SymbolId::bomb(),
        content: BOMB_GLYPH.into(),
        key: 0,
        bombed: true,
        guessed: false,
    });

    tiles.shuffle(rng);

    for (index, tile) in tiles.iter_mut().enumerate() {
        // bounded by MAX_PAIRS above
        tile.key = index as TileKey;
    }

    log::debug!("Built deck of {} tiles from {} symbols", tiles.len(), symbols.len());
    Ok(Deck { tiles })
}

/// Tiles of one round in shuffled order; a tile's key equals its position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn validate_key(&self, key: TileKey) -> Result<TileKey> {
        if usize::from(key) < self.tiles.len() {
            Ok(key)
        } else {
            Err(GameError::InvalidTileKey(key))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// Every tile is either the bomb or already guessed.
    pub fn is_complete(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(Tile::is_settled)
    }
}

impl Index<TileKey> for Deck {
    type Output = Tile;

    fn index(&self, key: TileKey) -> &Self::Output {
        &self.tiles[usize::from(key)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec;

    fn fruit() -> Vec<Symbol> {
        vec![
            Symbol::new("apple", "🍎"),
            Symbol::new("banana", "🍌"),
            Symbol::new("cherry", "🍒"),
            Symbol::new("grape", "🍇"),
        ]
    }

    #[test]
    fn deck_has_two_of_each_symbol_and_one_bomb() {
        for seed in 0..16 {
            let deck = RandomDeckGenerator::new(seed).generate(&fruit()).unwrap();

            assert_eq!(deck.len(), 9);
            assert_eq!(deck.iter().filter(|tile| tile.bombed).count(), 1);
            assert!(deck.iter().all(|tile| !tile.guessed));

            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for tile in deck.iter().filter(|tile| !tile.is_bomb()) {
                *counts.entry(tile.id.as_str()).or_default() += 1;
            }
            assert_eq!(counts.len(), 4);
            assert!(counts.values().all(|&count| count == 2));
        }
    }

    #[test]
    fn keys_follow_shuffled_position() {
        let deck = RandomDeckGenerator::new(7).generate(&fruit()).unwrap();

        for (index, tile) in deck.iter().enumerate() {
            assert_eq!(usize::from(tile.key), index);
            assert_eq!(&deck[tile.key], tile);
        }
    }

    #[test]
    fn bomb_tile_is_flagged_and_unique() {
        let deck = RandomDeckGenerator::new(3).generate(&fruit()).unwrap();
        let bombs: Vec<_> = deck.iter().filter(|tile| tile.is_bomb()).collect();

        assert_eq!(bombs.len(), 1);
        assert!(bombs[0].bombed);
        assert_eq!(bombs[0].content, BOMB_GLYPH);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a = RandomDeckGenerator::new(42).generate(&fruit()).unwrap();
        let b = RandomDeckGenerator::new(42).generate(&fruit()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_symbol_list_is_rejected() {
        let err = RandomDeckGenerator::new(0).generate(&[]).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn single_pair_deck() {
        let deck = RandomDeckGenerator::new(0)
            .generate(&[Symbol::new("apple", "🍎")])
            .unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.pair_count(), 1);
        assert_eq!(deck.validate_key(3), Err(GameError::InvalidTileKey(3)));
    }
}
