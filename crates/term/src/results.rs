//! Result projections shown by the view: elapsed time, standings, outcome.
//!
//! Pure functions over a finished (or running) round; nothing here mutates.

use crate::core::Round;

/// Format milliseconds as `m:ss`. Minutes are not capped.
pub fn format_elapsed(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `(player index, score)` pairs, highest score first. Ties keep player order.
pub fn standings(scores: &[u32]) -> Vec<(usize, u32)> {
    let mut rows: Vec<(usize, u32)> = scores.iter().copied().enumerate().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// How a completed round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solo { moves: u32, elapsed_ms: u64 },
    Winner { player: usize, score: u32 },
    /// Every player in `players` shares the top `score`.
    Draw { players: Vec<usize>, score: u32 },
}

impl Outcome {
    /// Headline text for the result overlay.
    pub fn headline(&self) -> String {
        match self {
            Outcome::Solo { .. } => "You did it!".to_string(),
            Outcome::Winner { player, .. } => format!("Player {} Wins!", player + 1),
            Outcome::Draw { .. } => "It's a tie!".to_string(),
        }
    }
}

/// The outcome of `round`, or `None` while it is still being played.
pub fn outcome(round: &Round) -> Option<Outcome> {
    if !round.is_complete() {
        return None;
    }

    if !round.is_multiplayer() {
        return Some(Outcome::Solo {
            moves: round.move_count(),
            elapsed_ms: round.elapsed_ms(),
        });
    }

    let table = standings(round.scores());
    let &(leader, top) = table.first()?;
    let players: Vec<usize> = table
        .iter()
        .take_while(|(_, score)| *score == top)
        .map(|(player, _)| *player)
        .collect();

    if players.len() > 1 {
        Some(Outcome::Draw {
            players,
            score: top,
        })
    } else {
        Some(Outcome::Winner {
            player: leader,
            score: top,
        })
    }
}
