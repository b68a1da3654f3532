use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of a symbol set, duplicated into a pair when the deck is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub content: String,
}

impl Symbol {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: SymbolId::new(id),
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    pub name: String,
    pub symbols: Vec<Symbol>,
}

impl SymbolSet {
    /// Contents of the set joined by spaces, the way the set picker lists them.
    pub fn preview(&self) -> String {
        self.symbols
            .iter()
            .map(|symbol| symbol.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(GameError::InvalidConfiguration(format!(
                "symbol set `{}` has no symbols",
                self.name
            )));
        }

        let mut seen = BTreeSet::new();
        for symbol in &self.symbols {
            if symbol.id.as_str().is_empty() || symbol.content.is_empty() {
                return Err(GameError::InvalidConfiguration(format!(
                    "symbol set `{}` contains an empty id or content",
                    self.name
                )));
            }
            if symbol.id.is_bomb() {
                return Err(GameError::InvalidConfiguration(format!(
                    "symbol set `{}` uses the reserved id `{}`",
                    self.name, BOMB_ID
                )));
            }
            if !seen.insert(&symbol.id) {
                return Err(GameError::InvalidConfiguration(format!(
                    "symbol set `{}` repeats the id `{}`",
                    self.name, symbol.id
                )));
            }
        }

        Ok(())
    }
}

/// Validated collection of the symbol sets a player can choose from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<Symbol>>", into = "BTreeMap<String, Vec<Symbol>>")]
pub struct SymbolCatalog {
    sets: Vec<SymbolSet>,
}

impl SymbolCatalog {
    pub fn new(sets: impl IntoIterator<Item = SymbolSet>) -> Result<Self> {
        let mut sets: Vec<SymbolSet> = sets.into_iter().collect();
        if sets.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "at least one symbol set is required".into(),
            ));
        }
        sets.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(pair) = sets.windows(2).find(|pair| pair[0].name == pair[1].name) {
            return Err(GameError::InvalidConfiguration(format!(
                "symbol set `{}` is defined twice",
                pair[0].name
            )));
        }
        for set in &sets {
            set.validate()?;
        }
        Ok(Self { sets })
    }

    /// Parses the `{ "<set>": [{ "id": .., "content": .. }] }` layout.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|err| GameError::InvalidConfiguration(format!("malformed symbol data: {err}")))
    }

    pub fn default_set(&self) -> &SymbolSet {
        &self.sets[0]
    }

    pub fn get(&self, name: &str) -> Result<&SymbolSet> {
        self.sets
            .iter()
            .find(|set| set.name == name)
            .ok_or_else(|| GameError::UnknownSymbolSet(name.into()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Vec<Symbol>>> for SymbolCatalog {
    type Error = GameError;

    fn try_from(map: BTreeMap<String, Vec<Symbol>>) -> Result<Self> {
        Self::new(
            map.into_iter()
                .map(|(name, symbols)| SymbolSet { name, symbols }),
        )
    }
}

impl From<SymbolCatalog> for BTreeMap<String, Vec<Symbol>> {
    fn from(catalog: SymbolCatalog) -> Self {
        catalog
            .sets
            .into_iter()
            .map(|set| (set.name, set.symbols))
            .collect()
    }
}
