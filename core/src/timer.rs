use alloc::vec::Vec;
use core::time::Duration;

use crate::*;

/// Groups delayed events that are cancelled together.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerFamily {
    /// Match or mismatch resolution of the two guess slots.
    Pair,
    /// Bomb penalty and deck reload, tied to the current phase.
    Phase,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DelayedEvent {
    ResolveMatch,
    ClearMismatch,
    ApplyBombPenalty,
    Rebuild,
}

impl DelayedEvent {
    pub const fn family(self) -> TimerFamily {
        match self {
            Self::ResolveMatch | Self::ClearMismatch => TimerFamily::Pair,
            Self::ApplyBombPenalty | Self::Rebuild => TimerFamily::Phase,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub due: Duration,
    pub round: RoundId,
    pub event: DelayedEvent,
    seq: u64,
}

/// Pending delayed events, kept sorted by due time and then by scheduling order.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    queue: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    pub fn schedule(&mut self, due: Duration, round: RoundId, event: DelayedEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let at = self
            .queue
            .partition_point(|pending| (pending.due, pending.seq) <= (due, seq));
        self.queue.insert(
            at,
            Scheduled {
                due,
                round,
                event,
                seq,
            },
        );
    }

    pub fn cancel_family(&mut self, family: TimerFamily) {
        self.queue.retain(|pending| pending.event.family() != family);
    }

    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.first().map(|pending| pending.due)
    }

    /// Removes and returns the earliest event due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Scheduled> {
        match self.queue.first() {
            Some(pending) if pending.due <= now => Some(self.queue.remove(0)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
