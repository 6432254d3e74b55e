//! Per-cell debounce deadlines for validation feedback.
//!
//! Each cell key owns its own deadline, so rapid edits to two different
//! cells never cancel each other's pending validation. The host event loop
//! drives this with explicit instants; nothing here spawns timers, which
//! keeps tests deterministic.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::table::CellKey;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadlines: FxHashMap<CellKey, Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadlines: FxHashMap::default(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)arm the deadline for one cell. A later touch pushes the same
    /// cell's deadline out; other cells are untouched.
    pub fn schedule(&mut self, key: CellKey, now: Instant) {
        self.deadlines.insert(key, now + self.delay);
    }

    /// Drop a pending deadline (edit cancelled or committed).
    pub fn cancel(&mut self, key: &CellKey) {
        self.deadlines.remove(key);
    }

    /// Remove and return every cell whose deadline has passed, sorted for
    /// deterministic firing order.
    pub fn due(&mut self, now: Instant) -> Vec<CellKey> {
        let mut ready: Vec<CellKey> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, _)| key.clone())
            .collect();
        ready.sort();
        for key in &ready {
            self.deadlines.remove(key);
        }
        ready
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}
