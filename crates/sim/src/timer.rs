//! One-shot timer queue drained by the tick loop.
//!
//! Entries are keyed by the tick on which they fire and pop in scheduling
//! order within a tick. The tick counter freezes while a game is paused,
//! so pending entries freeze with it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry<T> {
    due: u64,
    seq: u64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops its maximum; flipped compare surfaces the
        // earliest (due, seq) pair first.
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of deferred effects, keyed by expiry tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Schedule `payload` to fire once the game clock reaches `due`.
    pub fn schedule(&mut self, due: u64, payload: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { due, seq, payload });
    }

    /// Pop the next entry due at or before `now`, if any. Call in a loop
    /// to drain a tick.
    pub fn pop_due(&mut self, now: u64) -> Option<T> {
        if self.heap.peek().is_some_and(|e| e.due <= now) {
            self.heap.pop().map(|e| e.payload)
        } else {
            None
        }
    }

    /// Tick of the soonest pending entry.
    pub fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.due)
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
