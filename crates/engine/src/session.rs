//! Game session - the single owner of a round and its timers
//!
//! Hosts never touch [`Round`] fields. They submit actions through the
//! session, read the round back by reference, and feed elapsed time into
//! [`GameSession::advance`]. After every state change the session re-derives
//! which timers should be running from the new round.

use crate::core::{GameSettings, Round};
use crate::scheduler::Scheduler;
use crate::types::{GameAction, Phase};

#[derive(Debug, Clone)]
pub struct GameSession {
    round: Round,
    scheduler: Scheduler,
}

impl GameSession {
    /// Deal a new round with the given RNG seed
    pub fn new(settings: GameSettings, seed: u64) -> Self {
        Self::from_round(Round::new(settings, seed))
    }

    /// Host an existing round with default timer constants.
    pub fn from_round(round: Round) -> Self {
        Self::with_scheduler(round, Scheduler::default())
    }

    pub fn with_scheduler(round: Round, scheduler: Scheduler) -> Self {
        let mut session = Self { round, scheduler };
        session.sync_tick_interval();
        session
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Apply one action and re-derive the timers.
    ///
    /// Returns `false` when the round ignored the action.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let moves_before = self.round.move_count();
        let round_before = self.round.round_id();
        let phase_before = self.round.phase();

        let changed = self.round.apply(action);
        tracing::debug!(
            action = action.as_str(),
            changed,
            moves = self.round.move_count(),
            phase = self.round.phase().as_str(),
            "dispatch"
        );
        if !changed {
            return false;
        }

        if self.round.round_id() != round_before {
            // A pending flip-down belongs to the old board.
            self.scheduler.cancel_flip_down();
            tracing::info!(round = self.round.round_id(), "round restarted");
        } else if self.round.move_count() != moves_before {
            self.scheduler.arm_flip_down();
        }

        if phase_before != Phase::Complete && self.round.phase() == Phase::Complete {
            tracing::info!(
                moves = self.round.move_count(),
                elapsed_ms = self.round.elapsed_ms(),
                scores = ?self.round.scores(),
                "round complete"
            );
        }

        self.sync_tick_interval();
        true
    }

    /// Player picked a card.
    ///
    /// A mismatch still on display is flipped down first, so a quick player
    /// does not have to wait out the delay.
    pub fn select_card(&mut self, index: usize) -> bool {
        self.dispatch(GameAction::FlipMismatchesDown);
        self.dispatch(GameAction::RevealCard(index))
    }

    pub fn restart(&mut self) {
        self.dispatch(GameAction::Restart);
    }

    /// Let time pass; returns how many fired actions changed the round.
    pub fn advance(&mut self, elapsed_ms: u32) -> usize {
        let mut applied = 0;
        for action in self.scheduler.advance(elapsed_ms) {
            if self.dispatch(action) {
                applied += 1;
            }
        }
        applied
    }

    /// Milliseconds until a timer will next change something, if any.
    pub fn next_deadline_ms(&self) -> Option<u32> {
        self.scheduler.next_deadline_ms()
    }

    /// Elapsed time only accrues for a lone player mid-round.
    fn sync_tick_interval(&mut self) {
        let should_tick = !self.round.is_multiplayer() && self.round.phase() == Phase::InProgress;
        if should_tick {
            self.scheduler.start_ticking();
        } else {
            self.scheduler.stop_ticking();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridSize, Visibility, FLIP_DOWN_DELAY_MS, TICK_MS};

    const FOUR_BY_FOUR: [u32; 16] = [7, 7, 3, 3, 1, 1, 2, 2, 4, 4, 5, 5, 6, 6, 8, 8];

    fn session(players: u8) -> GameSession {
        let settings = GameSettings::new(GridSize::Four, players).unwrap();
        GameSession::from_round(Round::with_values(settings, &FOUR_BY_FOUR, 1).unwrap())
    }

    #[test]
    fn fresh_session_has_no_timers() {
        let s = session(1);
        assert!(!s.scheduler().is_ticking());
        assert!(!s.scheduler().flip_down_armed());
        assert_eq!(s.next_deadline_ms(), None);
    }

    #[test]
    fn first_reveal_starts_clock_for_single_player() {
        let mut s = session(1);
        assert!(s.select_card(0));
        assert!(s.scheduler().is_ticking());
        assert!(!s.scheduler().flip_down_armed());

        s.advance(TICK_MS * 3);
        assert_eq!(s.round().elapsed_ms(), 3000);
    }

    #[test]
    fn multiplayer_never_ticks() {
        let mut s = session(2);
        s.select_card(0);
        assert!(!s.scheduler().is_ticking());
        s.advance(10_000);
        assert_eq!(s.round().elapsed_ms(), 0);
    }

    #[test]
    fn mismatch_flips_down_after_delay() {
        let mut s = session(1);
        s.select_card(0);
        s.select_card(2);
        assert!(s.scheduler().flip_down_armed());
        assert!(s.round().pending_mismatch());

        s.advance(FLIP_DOWN_DELAY_MS - 1);
        assert_eq!(s.round().card(0).unwrap().visibility, Visibility::FaceUp);

        s.advance(1);
        assert_eq!(s.round().card(0).unwrap().visibility, Visibility::FaceDown);
        assert_eq!(s.round().card(2).unwrap().visibility, Visibility::FaceDown);
        assert!(!s.scheduler().flip_down_armed());
    }

    #[test]
    fn match_arms_harmless_flip_down() {
        let mut s = session(2);
        s.select_card(0);
        s.select_card(1);
        assert!(s.scheduler().flip_down_armed());

        // Fires, but nothing is left face-up to flip.
        assert_eq!(s.advance(FLIP_DOWN_DELAY_MS), 0);
        assert_eq!(s.round().matched_count(), 2);
    }

    #[test]
    fn selecting_during_mismatch_clears_it_first() {
        let mut s = session(1);
        s.select_card(0);
        s.select_card(2);

        assert!(s.select_card(4));
        assert_eq!(s.round().face_up_count(), 1);
        assert_eq!(s.round().card(0).unwrap().visibility, Visibility::FaceDown);
        assert_eq!(s.round().card(4).unwrap().visibility, Visibility::FaceUp);
    }

    #[test]
    fn raw_reveal_during_mismatch_is_rejected() {
        let mut s = session(1);
        s.select_card(0);
        s.select_card(2);
        assert!(!s.dispatch(GameAction::RevealCard(4)));
        assert_eq!(s.round().face_up_count(), 2);
    }

    #[test]
    fn restart_cancels_timers() {
        let mut s = session(1);
        s.select_card(0);
        s.select_card(2);
        assert!(s.scheduler().flip_down_armed());
        assert!(s.scheduler().is_ticking());

        s.restart();
        assert_eq!(s.round().phase(), Phase::Idle);
        assert_eq!(s.round().round_id(), 1);
        assert!(!s.scheduler().flip_down_armed());
        assert!(!s.scheduler().is_ticking());
    }

    #[test]
    fn completion_stops_clock() {
        let mut s = session(1);
        for i in 0..16 {
            s.select_card(i);
        }
        assert!(s.round().is_complete());
        assert!(!s.scheduler().is_ticking());

        s.advance(5_000);
        assert_eq!(s.round().elapsed_ms(), 0);
    }
}
