//! `TimerQueue` — delayed lifecycle events keyed by tick.
//!
//! The lifecycle never sleeps.  Anything that must happen "later" is pushed
//! here and fired by `Arena::step` once the clock reaches its tick.

use std::collections::BTreeMap;

use vb_core::{Team, Tick};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Clear the end-of-rally re-entrancy guard.
    ReleaseResetGuard,
    /// Turn off a team's win flash.
    ClearFlash(Team),
}

#[derive(Default, Debug)]
pub struct TimerQueue {
    inner: BTreeMap<Tick, Vec<TimerEvent>>,
    total: usize,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, due: Tick, event: TimerEvent) {
        self.inner.entry(due).or_default().push(event);
        self.total += 1;
    }

    /// Remove and return every event due at or before `now`, earliest tick
    /// first and in push order within a tick.
    pub fn drain_due(&mut self, now: Tick) -> Vec<TimerEvent> {
        if self.inner.first_key_value().is_none_or(|(&t, _)| t > now) {
            return Vec::new();
        }
        let later = self.inner.split_off(&now.offset(1));
        let due = std::mem::replace(&mut self.inner, later);
        let events: Vec<TimerEvent> = due.into_values().flatten().collect();
        self.total -= events.len();
        events
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
