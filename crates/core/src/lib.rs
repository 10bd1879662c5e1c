//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the memory-matching game. It has **no
//! dependencies** on rendering, input or wall-clock time, which makes it:
//!
//! - **Deterministic**: the same seed deals the same board and restarts identically
//! - **Testable**: every rule is reachable from a plain value and an action
//! - **Portable**: the terminal host is only one possible consumer
//!
//! # Module Structure
//!
//! - [`rng`]: seeded generator with unbiased Fisher-Yates shuffling
//! - [`settings`]: grid size / player count, parsed from untrusted text with fallbacks
//! - [`round`]: the round state and its transition function
//!
//! # Game Rules
//!
//! - Cards are dealt face-down, each value exactly twice
//! - At most two cards may be face-up at once; a third reveal is ignored
//! - Two face-up cards are judged immediately: a match retires them and scores
//!   for the player whose turn it was, a mismatch stays visible until the host
//!   sends `FlipMismatchesDown`
//! - Every judged pair counts as one move; turn order is `moves % players`
//! - The round completes when every card is matched
//!
//! # Example
//!
//! ```
//! use memory_match_core::{transition, GameSettings, Round};
//! use memory_match_types::{GameAction, Phase};
//!
//! let round = Round::new(GameSettings::default(), 12345);
//! let next = transition(&round, GameAction::RevealCard(0));
//!
//! assert_eq!(round.phase(), Phase::Idle);
//! assert_eq!(next.phase(), Phase::InProgress);
//! assert_eq!(next.face_up_count(), 1);
//! ```

pub mod rng;
pub mod round;
pub mod settings;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use rng::SimpleRng;
pub use round::{new_round, transition, Batch, DealError, Round};
pub use settings::{GameSettings, SettingsError};
