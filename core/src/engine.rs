use alloc::vec::Vec;
use core::time::Duration;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Owns one session's mutable game state and advances it on a virtual clock.
#[derive(Clone, Debug)]
pub struct PlayEngine {
    config: GameConfig,
    symbols: Vec<Symbol>,
    deck: Deck,
    guesses: GuessSlots,
    phase: GamePhase,
    bomb_triggered: bool,
    score: Points,
    round: RoundId,
    now: Duration,
    scheduler: Scheduler,
    rng: SmallRng,
}

impl PlayEngine {
    /// Builds the first deck right away; the engine starts in `Start`.
    pub fn new(config: GameConfig, symbols: Vec<Symbol>) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let deck = RandomDeckGenerator::new(rng.random()).generate(&symbols)?;
        Ok(Self {
            config,
            symbols,
            deck,
            guesses: GuessSlots::default(),
            phase: GamePhase::Start,
            bomb_triggered: false,
            score: 0,
            round: RoundId::default(),
            now: Duration::ZERO,
            scheduler: Scheduler::default(),
            rng,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn guesses(&self) -> &GuessSlots {
        &self.guesses
    }

    pub fn score(&self) -> Points {
        self.score
    }

    pub fn bomb_triggered(&self) -> bool {
        self.bomb_triggered
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.scheduler.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(self)
    }

    pub fn submit_click(&mut self, key: TileKey) -> Result<ClickOutcome> {
        if !self.phase.accepts_clicks() {
            log::trace!("click on {} ignored in {:?}", key, self.phase);
            return Ok(ClickOutcome::NoChange);
        }
        let key = self.deck.validate_key(key)?;
        let tile = &self.deck[key];

        let (slot, triggers_bomb) = match self.guesses.resolve_click(tile, self.bomb_triggered) {
            ClickDecision::Ignore(reason) => {
                log::trace!("click on {} ignored: {:?}", key, reason);
                return Ok(ClickOutcome::NoChange);
            }
            ClickDecision::Accept {
                slot,
                triggers_bomb,
            } => (slot, triggers_bomb),
        };

        let guess = GuessRef::from(tile);
        if triggers_bomb {
            self.bomb_triggered = true;
            self.set_phase(GamePhase::Bombed);
            self.refresh_score();
        }
        self.guesses.fill(slot, guess);

        let pair_event = match self.guesses.pair_state() {
            PairState::Incomplete => None,
            PairState::Match(_) => Some(DelayedEvent::ResolveMatch),
            PairState::Mismatch => Some(DelayedEvent::ClearMismatch),
        };
        if let Some(event) = pair_event {
            // a refilled second slot replaces whatever the old pair was waiting on
            self.scheduler.cancel_family(TimerFamily::Pair);
            self.schedule(self.config.reveal_delay(), event);
        }

        Ok(if triggers_bomb {
            ClickOutcome::BombTriggered
        } else if pair_event.is_some() {
            ClickOutcome::PairSelected
        } else {
            ClickOutcome::Selected
        })
    }

    /// Restarts the round with the same symbols; only accepted once the game is over.
    pub fn request_reset(&mut self) -> Result<()> {
        if !self.phase.is_over() {
            return Err(GameError::InvalidPhase(self.phase));
        }
        self.begin_reload(None)
    }

    /// Discards the current round and schedules a rebuild, optionally with new symbols.
    pub fn begin_reload(&mut self, symbols: Option<Vec<Symbol>>) -> Result<()> {
        if let Some(symbols) = symbols {
            if symbols.is_empty() {
                return Err(GameError::InvalidConfiguration(
                    "cannot reload with an empty symbol list".into(),
                ));
            }
            self.symbols = symbols;
        }
        self.scheduler.cancel_all();
        self.round = self.round.next();
        self.deck = Deck::default();
        self.guesses.clear();
        self.bomb_triggered = false;
        self.refresh_score();

        log::debug!("{:?} -> Reloading (round {})", self.phase, self.round.value());
        self.phase = GamePhase::Reloading;
        self.schedule(self.config.reload_delay(), DelayedEvent::Rebuild);
        Ok(())
    }

    pub fn advance_by(&mut self, elapsed: Duration) -> usize {
        self.advance_to(self.now.saturating_add(elapsed))
    }

    /// Moves the clock forward to `time`, firing every event due on the way. Returns how many fired.
    pub fn advance_to(&mut self, time: Duration) -> usize {
        let mut fired = 0;
        while let Some(scheduled) = self.scheduler.pop_due(time) {
            self.now = self.now.max(scheduled.due);
            self.fire(scheduled);
            fired += 1;
        }
        self.now = self.now.max(time);
        fired
    }

    /// Fires every pending event, jumping the clock to each deadline in turn.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.scheduler.next_deadline() {
            fired += self.advance_to(deadline);
        }
        fired
    }

    fn schedule(&mut self, delay: Duration, event: DelayedEvent) {
        let due = self.now.saturating_add(delay);
        self.scheduler.schedule(due, self.round, event);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase == phase {
            return;
        }
        log::debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.scheduler.cancel_family(TimerFamily::Phase);

        match phase {
            GamePhase::Bombed => {
                self.schedule(self.config.reveal_delay(), DelayedEvent::ApplyBombPenalty)
            }
            GamePhase::Over => {
                for tile in self.deck.iter_mut() {
                    tile.guessed = true;
                }
            }
            GamePhase::Start | GamePhase::Matched | GamePhase::Reloading => {}
        }
    }

    fn fire(&mut self, scheduled: Scheduled) {
        if scheduled.round != self.round {
            log::warn!(
                "Discarding {:?} from round {}, current round is {}",
                scheduled.event,
                scheduled.round.value(),
                self.round.value()
            );
            return;
        }

        match scheduled.event {
            DelayedEvent::ResolveMatch => self.resolve_match(),
            DelayedEvent::ClearMismatch => self.guesses.clear(),
            DelayedEvent::ApplyBombPenalty => self.apply_bomb_penalty(),
            DelayedEvent::Rebuild => self.rebuild(),
        }
    }

    fn resolve_match(&mut self) {
        let PairState::Match(id) = self.guesses.pair_state() else {
            log::warn!("Match resolution fired without a matching pair");
            return;
        };

        for tile in self.deck.iter_mut().filter(|tile| tile.id == id) {
            tile.guessed = true;
        }
        self.set_phase(GamePhase::Matched);
        self.clear_guesses();
        self.tiles_changed();
    }

    /// Freezes every matched tile together with the bomb so none of them score.
    fn apply_bomb_penalty(&mut self) {
        for tile in self.deck.iter_mut() {
            let settled = tile.is_settled();
            tile.guessed = settled;
            tile.bombed = settled;
        }
        self.clear_guesses();
        self.tiles_changed();
    }

    fn rebuild(&mut self) {
        let generator = RandomDeckGenerator::new(self.rng.random());
        match generator.generate(&self.symbols) {
            Ok(deck) => {
                self.deck = deck;
                self.guesses.clear();
                self.bomb_triggered = false;
                self.set_phase(GamePhase::Start);
                self.refresh_score();
            }
            Err(err) => log::error!("Could not rebuild the deck: {}", err),
        }
    }

    /// Clears both slots and drops any pair resolution still waiting on them.
    fn clear_guesses(&mut self) {
        self.guesses.clear();
        self.scheduler.cancel_family(TimerFamily::Pair);
    }

    fn tiles_changed(&mut self) {
        if self.deck.is_complete() {
            self.set_phase(GamePhase::Over);
        }
        self.refresh_score();
    }

    fn refresh_score(&mut self) {
        self.score = compute_score(self.deck.iter(), self.bomb_triggered);
    }
}
