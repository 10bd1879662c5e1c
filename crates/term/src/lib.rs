//! Terminal presentation for the memory game.
//!
//! Renders a `Round` into a simple framebuffer that is then flushed to the
//! terminal backend with diffing. No widget toolkit: the board is small and a
//! framebuffer gives exact control over card proportions.
//!
//! The view and results projections are pure; only `renderer` does I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod results;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use results::{format_elapsed, outcome, standings, Outcome};
