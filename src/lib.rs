//! Memory Match (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, integration
//! tests and benches can write `memory_match::{core,engine,input,term,types}`.

pub use memory_match_core as core;
pub use memory_match_engine as engine;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;
