//! Terminal input module (host-facing).
//!
//! Independent of the game rules: maps `crossterm` key events into
//! [`BoardCommand`]s and keeps track of which card has keyboard focus. The
//! navigation helper is plain geometry over the board order.

pub mod focus;
pub mod map;
pub mod navigation;

pub use memory_match_types as types;

pub use focus::{FocusGrid, FocusId};
pub use map::{map_key, should_quit, BoardCommand};
pub use navigation::next_index;
