//! Round module - the authoritative game state and its transition function
//!
//! A [`Round`] is a plain value. [`Round::apply`] mutates it in place and
//! reports whether anything changed; [`transition`] is the pure form that
//! leaves the input untouched so callers can keep the previous round for
//! replay or equality-based change detection.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::rng::SimpleRng;
use crate::settings::GameSettings;
use crate::types::*;

/// Face-up cards gathered for judging
pub type Batch = ArrayVec<usize, MATCH_GROUP_SIZE>;

/// Rejected explicit deal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("expected {expected} card values for a {side}x{side} grid, got {actual}")]
    WrongCardCount {
        side: usize,
        expected: usize,
        actual: usize,
    },
    #[error("card value {value} appears {count} times (expected exactly {})", MATCH_GROUP_SIZE)]
    NotAPair { value: u32, count: usize },
}

/// Complete round state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    settings: GameSettings,
    phase: Phase,
    cards: Vec<Card>,
    /// Judged batches so far. Also drives turn order.
    move_count: u32,
    elapsed_ms: u64,
    /// One slot per player.
    scores: Vec<u32>,
    /// Monotonic round id (increments on restart).
    round_id: u32,
    /// Generator for the next deal.
    rng: SimpleRng,
}

/// Pure transition: the next round after `action`, leaving `round` as it was.
pub fn transition(round: &Round, action: GameAction) -> Round {
    let mut next = round.clone();
    next.apply(action);
    next
}

/// Deal a fresh round: face-down cards in a uniformly random order.
pub fn new_round(settings: GameSettings, mut rng: SimpleRng) -> Round {
    let pairs = settings.grid_size.pair_count();
    let mut values = rng.sample_distinct(MIN_CARD_VALUE, MAX_CARD_VALUE, pairs);
    values.extend_from_within(..);
    rng.shuffle(&mut values);

    Round::from_parts(settings, &values, rng)
}

impl Round {
    /// Create a new round with the given RNG seed
    pub fn new(settings: GameSettings, seed: u64) -> Self {
        new_round(settings, SimpleRng::new(seed))
    }

    /// Deal the given values in board order.
    ///
    /// The slice must fill the grid exactly and hold every value exactly
    /// twice. `seed` feeds later restarts.
    pub fn with_values(settings: GameSettings, values: &[u32], seed: u64) -> Result<Self, DealError> {
        let expected = settings.grid_size.card_count();
        if values.len() != expected {
            return Err(DealError::WrongCardCount {
                side: settings.grid_size.side(),
                expected,
                actual: values.len(),
            });
        }

        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for &value in values {
            *counts.entry(value).or_default() += 1;
        }
        if let Some((&value, &count)) = counts.iter().find(|(_, &n)| n != MATCH_GROUP_SIZE) {
            return Err(DealError::NotAPair { value, count });
        }

        Ok(Self::from_parts(settings, values, SimpleRng::new(seed)))
    }

    fn from_parts(settings: GameSettings, values: &[u32], rng: SimpleRng) -> Self {
        let cards = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Card::face_down(i as u32, value))
            .collect();

        Self {
            settings,
            phase: Phase::Idle,
            cards,
            move_count: 0,
            elapsed_ms: 0,
            scores: vec![0; settings.player_count as usize],
            round_id: 0,
            rng,
        }
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn grid_size(&self) -> GridSize {
        self.settings.grid_size
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / MATCH_GROUP_SIZE
    }

    pub fn is_multiplayer(&self) -> bool {
        self.settings.is_multiplayer()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Player whose turn it is.
    ///
    /// Derived from the move count, never stored.
    pub fn current_player(&self) -> usize {
        (self.move_count % self.scores.len().max(1) as u32) as usize
    }

    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_face_up()).count()
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// True while a judged mismatch is still lying face-up.
    pub fn pending_mismatch(&self) -> bool {
        let batch = self.face_up_batch();
        batch.len() == MATCH_GROUP_SIZE && !self.batch_matches(&batch)
    }

    /// Apply an action in place.
    ///
    /// Returns `false` when the action was a legal no-op.
    ///
    /// # Panics
    ///
    /// In debug builds, when `RevealCard` names a position outside the board.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::RevealCard(index) => self.reveal(index),
            GameAction::FlipMismatchesDown => self.flip_mismatches_down(),
            GameAction::Tick => self.tick(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Method form of [`transition`].
    pub fn transition(&self, action: GameAction) -> Round {
        transition(self, action)
    }

    fn reveal(&mut self, index: usize) -> bool {
        debug_assert!(
            index < self.cards.len(),
            "reveal index {} out of range for {} cards",
            index,
            self.cards.len()
        );
        // Release builds skip the assertion; a bad index is then a logged no-op.
        if index >= self.cards.len() {
            tracing::error!(index, len = self.cards.len(), "reveal index out of range");
            return false;
        }

        // Reveals are gated at the batch boundary until the mismatch is cleared.
        if self.face_up_count() >= MATCH_GROUP_SIZE {
            return false;
        }
        if !self.cards[index].visibility.is_selectable() {
            return false;
        }

        self.cards[index].visibility = Visibility::FaceUp;
        if self.phase == Phase::Idle {
            self.phase = Phase::InProgress;
        }

        if self.face_up_count() == MATCH_GROUP_SIZE {
            self.judge();
        }
        true
    }

    /// Judge the full batch. Mismatches stay face-up for the host to show.
    fn judge(&mut self) {
        // Credit goes to whoever made this move, so read before incrementing.
        let player = self.current_player();
        let batch = self.face_up_batch();

        if self.batch_matches(&batch) {
            for &i in &batch {
                self.cards[i].visibility = Visibility::Matched;
            }
            self.scores[player] += 1;

            if self.cards.iter().all(Card::is_matched) {
                self.phase = Phase::Complete;
            }
            tracing::debug!(player, ?batch, "match");
        } else {
            tracing::debug!(player, ?batch, "mismatch");
        }

        self.move_count += 1;
    }

    fn flip_mismatches_down(&mut self) -> bool {
        let batch = self.face_up_batch();
        if batch.len() != MATCH_GROUP_SIZE || self.batch_matches(&batch) {
            return false;
        }
        for &i in &batch {
            self.cards[i].visibility = Visibility::FaceDown;
        }
        true
    }

    fn tick(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        self.elapsed_ms += TICK_MS as u64;
        true
    }

    fn restart(&mut self) {
        let next_id = self.round_id.wrapping_add(1);
        *self = new_round(self.settings, self.rng.clone());
        self.round_id = next_id;
    }

    fn face_up_batch(&self) -> Batch {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_face_up())
            .map(|(i, _)| i)
            .take(MATCH_GROUP_SIZE)
            .collect()
    }

    fn batch_matches(&self, batch: &[usize]) -> bool {
        match batch.split_first() {
            Some((&first, rest)) => {
                let value = self.cards[first].value;
                rest.iter().all(|&i| self.cards[i].value == value)
            }
            None => false,
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(GameSettings::default(), 1)
    }
}
