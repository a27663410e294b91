//! One-shot timers and debounce slots.
//!
//! [`TimerManager`] only tracks *when* timers fire; whoever owns it maps
//! fired [`TimerId`]s to work. Expiry takes an explicit `now` so hosts and
//! tests can drive time deterministically.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::error::TimerError;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    fire_at: Instant,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
    /// Insertion sequence, so timers due at the same instant fire in
    /// scheduling order.
    seq: u64,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time && self.seq == other.seq
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other
            .fire_time
            .cmp(&self.fire_time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Tracks pending one-shot timers.
#[derive(Default)]
pub struct TimerManager {
    timers: SlotMap<TimerId, TimerData>,
    queue: BinaryHeap<TimerQueueEntry>,
    next_seq: u64,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a one-shot timer that fires `delay` after `now`.
    pub fn start_one_shot_at(&mut self, now: Instant, delay: Duration) -> TimerId {
        let fire_at = now + delay;
        let id = self.timers.insert(TimerData { fire_at });
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: fire_at,
            seq,
        });
        tracing::trace!(target: "transfer_list_core::timer", ?id, ?delay, "timer started");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Fails if the timer already fired or was stopped before.
    pub fn stop(&mut self, id: TimerId) -> Result<(), TimerError> {
        match self.timers.remove(id) {
            Some(_) => {
                tracing::trace!(target: "transfer_list_core::timer", ?id, "timer stopped");
                Ok(())
            }
            None => Err(TimerError::InvalidTimerId),
        }
    }

    /// Get the duration from `now` until the next timer fires, if any.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        self.discard_stale();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Remove and return every timer due at or before `now`, in fire order.
    #[tracing::instrument(skip(self), target = "transfer_list_core::timer", level = "trace")]
    pub fn process_expired_at(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Stopped timers leave their queue entry behind.
            if self.timers.remove(entry.id).is_some() {
                tracing::trace!(target: "transfer_list_core::timer", id = ?entry.id, "timer fired");
                fired.push(entry.id);
            }
        }

        fired
    }

    /// Get the number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    fn discard_stale(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}

/// A single pending-timer slot used to coalesce rapid triggers.
///
/// The slot remembers at most one timer. Scheduling a new timer hands back
/// the previous one so the owner can stop it; only the last trigger inside
/// the delay window survives.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebounceSlot {
    pending: Option<TimerId>,
}

impl DebounceSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `id` as the pending timer, returning the one it replaces.
    pub fn replace(&mut self, id: TimerId) -> Option<TimerId> {
        self.pending.replace(id)
    }

    /// Clear the slot, returning the pending timer if any.
    pub fn take(&mut self) -> Option<TimerId> {
        self.pending.take()
    }

    /// Clear the slot only if `id` is the pending timer.
    ///
    /// Returns `false` when `id` was superseded, meaning the fired work is stale.
    pub fn complete(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
