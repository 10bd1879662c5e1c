//! Host-side timers driving the delayed and periodic actions.
//!
//! Nothing here sleeps or spawns. The host measures wall-clock time and feeds
//! it to [`Scheduler::advance`], which hands back the actions that came due.
//! This mirrors a fixed-step game loop and keeps every timing rule testable
//! with plain numbers.

use crate::types::{GameAction, FLIP_DOWN_DELAY_MS, TICK_MS};

/// One-shot flip-down timer plus the repeating elapsed-time interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    flip_delay_ms: u32,
    tick_interval_ms: u32,
    /// Time left before `FlipMismatchesDown` fires, when armed.
    flip_remaining_ms: Option<u32>,
    /// Time since the last `Tick`, while the interval is running.
    tick_elapsed_ms: Option<u32>,
}

impl Scheduler {
    pub fn new(flip_delay_ms: u32, tick_interval_ms: u32) -> Self {
        Self {
            flip_delay_ms,
            // A zero interval would fire forever inside one advance.
            tick_interval_ms: tick_interval_ms.max(1),
            flip_remaining_ms: None,
            tick_elapsed_ms: None,
        }
    }

    /// Arm the flip-down timer, replacing any armed instance.
    pub fn arm_flip_down(&mut self) {
        self.flip_remaining_ms = Some(self.flip_delay_ms);
    }

    pub fn cancel_flip_down(&mut self) {
        self.flip_remaining_ms = None;
    }

    pub fn flip_down_armed(&self) -> bool {
        self.flip_remaining_ms.is_some()
    }

    pub fn flip_down_remaining_ms(&self) -> Option<u32> {
        self.flip_remaining_ms
    }

    /// Start the tick interval. Already running: left as is.
    pub fn start_ticking(&mut self) {
        if self.tick_elapsed_ms.is_none() {
            self.tick_elapsed_ms = Some(0);
        }
    }

    /// Stop the tick interval and drop any partial progress.
    pub fn stop_ticking(&mut self) {
        self.tick_elapsed_ms = None;
    }

    pub fn is_ticking(&self) -> bool {
        self.tick_elapsed_ms.is_some()
    }

    pub fn cancel_all(&mut self) {
        self.cancel_flip_down();
        self.stop_ticking();
    }

    /// Milliseconds until the next timer fires, if any is active.
    pub fn next_deadline_ms(&self) -> Option<u32> {
        let to_tick = self
            .tick_elapsed_ms
            .map(|t| self.tick_interval_ms.saturating_sub(t));
        match (self.flip_remaining_ms, to_tick) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Let `elapsed_ms` pass and collect what fired, in deadline order.
    ///
    /// The interval catches up: a long stall yields one `Tick` per whole
    /// interval that passed. When both timers fire at the same instant the
    /// flip-down comes first.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<GameAction> {
        let mut due = Vec::new();
        let mut budget = elapsed_ms;

        while let Some(step) = self.next_deadline_ms() {
            if step > budget {
                self.consume(budget);
                break;
            }
            budget -= step;
            self.consume(step);

            if self.flip_remaining_ms == Some(0) {
                self.flip_remaining_ms = None;
                due.push(GameAction::FlipMismatchesDown);
            }
            if self.tick_elapsed_ms == Some(self.tick_interval_ms) {
                self.tick_elapsed_ms = Some(0);
                due.push(GameAction::Tick);
            }
        }

        due
    }

    fn consume(&mut self, ms: u32) {
        if let Some(remaining) = self.flip_remaining_ms.as_mut() {
            *remaining = remaining.saturating_sub(ms);
        }
        if let Some(elapsed) = self.tick_elapsed_ms.as_mut() {
            *elapsed = elapsed.saturating_add(ms).min(self.tick_interval_ms);
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(FLIP_DOWN_DELAY_MS, TICK_MS)
    }
}
