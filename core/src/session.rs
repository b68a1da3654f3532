use alloc::string::String;
use core::time::Duration;

use crate::*;

/// Player-facing controller: symbol-set selection, resets, and clicks over one engine.
#[derive(Clone, Debug)]
pub struct Session {
    catalog: SymbolCatalog,
    active: String,
    engine: PlayEngine,
}

impl Session {
    /// Starts on the catalog's default set.
    pub fn new(catalog: SymbolCatalog, config: GameConfig) -> Result<Self> {
        let set = catalog.default_set();
        let active = set.name.clone();
        let engine = PlayEngine::new(config, set.symbols.clone())?;
        log::debug!("Session started with symbol set `{}`", active);
        Ok(Self {
            catalog,
            active,
            engine,
        })
    }

    pub fn symbol_sets(&self) -> impl Iterator<Item = &SymbolSet> {
        self.catalog.iter()
    }

    pub fn active_set(&self) -> &SymbolSet {
        // `active` always names a set taken from the catalog
        self.catalog
            .get(&self.active)
            .unwrap_or_else(|_| self.catalog.default_set())
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn phase(&self) -> GamePhase {
        self.engine.phase()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    pub fn submit_click(&mut self, key: TileKey) -> Result<ClickOutcome> {
        self.engine.submit_click(key)
    }

    /// Switches to another symbol set and reloads; choosing the active set again changes nothing.
    pub fn select_symbol_set(&mut self, name: &str) -> Result<()> {
        let set = self.catalog.get(name)?;
        if set.name == self.active {
            return Ok(());
        }
        log::debug!("Switching symbol set `{}` -> `{}`", self.active, set.name);
        self.engine.begin_reload(Some(set.symbols.clone()))?;
        self.active = set.name.clone();
        Ok(())
    }

    pub fn request_reset(&mut self) -> Result<()> {
        self.engine.request_reset()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.engine.next_deadline()
    }

    pub fn advance_by(&mut self, elapsed: Duration) -> usize {
        self.engine.advance_by(elapsed)
    }

    pub fn advance_to(&mut self, time: Duration) -> usize {
        self.engine.advance_to(time)
    }

    pub fn settle(&mut self) -> usize {
        self.engine.settle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn catalog() -> SymbolCatalog {
        SymbolCatalog::new([
            SymbolSet {
                name: "fruit".into(),
                symbols: vec![Symbol::new("apple", "🍎"), Symbol::new("banana", "🍌")],
            },
            SymbolSet {
                name: "zoo".into(),
                symbols: vec![
                    Symbol::new("cat", "🐱"),
                    Symbol::new("dog", "🐶"),
                    Symbol::new("fox", "🦊"),
                ],
            },
        ])
        .unwrap()
    }

    #[test]
    fn unknown_symbol_set_leaves_state_unchanged() {
        let mut session = Session::new(catalog(), GameConfig::default()).unwrap();
        session.submit_click(1).unwrap();
        let before = session.snapshot();

        assert_eq!(
            session.select_symbol_set("cars"),
            Err(GameError::UnknownSymbolSet("cars".into()))
        );
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.active_set().name, "fruit");
    }

    #[test]
    fn switching_sets_reloads_with_new_symbols() {
        let mut session = Session::new(catalog(), GameConfig::default()).unwrap();

        session.select_symbol_set("zoo").unwrap();
        assert_eq!(session.phase(), GamePhase::Reloading);
        assert_eq!(session.active_set().name, "zoo");

        session.advance_by(Duration::from_millis(300));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, GamePhase::Start);
        assert_eq!(snapshot.tiles.len(), 7);
        assert!(snapshot.tiles.iter().any(|tile| tile.id.as_str() == "fox"));
    }

    #[test]
    fn selecting_active_set_is_a_no_op() {
        let mut session = Session::new(catalog(), GameConfig::default()).unwrap();
        let before = session.snapshot();

        session.select_symbol_set("fruit").unwrap();
        assert_eq!(session.snapshot(), before);
        assert!(session.next_deadline().is_none());
    }

    #[test]
    fn reset_outside_over_is_rejected() {
        let mut session = Session::new(catalog(), GameConfig::default()).unwrap();
        assert_eq!(
            session.request_reset(),
            Err(GameError::InvalidPhase(GamePhase::Start))
        );
    }
}
