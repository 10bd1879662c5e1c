//! Host driver for the round state machine.
//!
//! The core crate answers "what does this action do"; this crate answers
//! "when is it sent". [`GameSession`] owns the round, [`Scheduler`] tracks the
//! one-shot flip-down delay and the repeating elapsed-time tick. Both are
//! advanced by the caller with measured milliseconds, so there are no threads
//! and no hidden clocks.

pub mod scheduler;
pub mod session;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use scheduler::Scheduler;
pub use session::GameSession;
