//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the rules engine, the host session, input mapping and rendering alike.
//!
//! # Board Dimensions
//!
//! The board is square and holds `side * side` cards:
//!
//! - **4x4**: 16 cards, 8 pairs
//! - **6x6**: 36 cards, 18 pairs
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Elapsed-time step added by one `Tick` |
//! | `FLIP_DOWN_DELAY_MS` | 1000 | How long a mismatch stays visible |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{GameAction, GridSize, Visibility, MATCH_GROUP_SIZE};
//!
//! let size = GridSize::from_side(6).unwrap();
//! assert_eq!(size.card_count(), 36);
//! assert_eq!(size.pair_count(), 18);
//!
//! assert_eq!(GameAction::RevealCard(3).as_str(), "revealCard");
//! assert!(Visibility::FaceDown.is_selectable());
//! assert_eq!(MATCH_GROUP_SIZE, 2);
//! ```

/// Number of cards that form one judge-eligible batch.
pub const MATCH_GROUP_SIZE: usize = 2;

/// Elapsed time added per `Tick` (1 second)
pub const TICK_MS: u32 = 1000;

/// Delay between a judged mismatch and the flip-down (1 second)
pub const FLIP_DOWN_DELAY_MS: u32 = 1000;

/// Smallest value printed on a card
pub const MIN_CARD_VALUE: u32 = 1;

/// Largest value printed on a card
pub const MAX_CARD_VALUE: u32 = 99;

/// Player count used when none (or an invalid one) is configured
pub const DEFAULT_PLAYER_COUNT: u8 = 1;

/// Upper bound on players sharing one board
pub const MAX_PLAYER_COUNT: u8 = 4;


/// Supported board sizes
///
/// The board is always square. Anything other than 4 or 6 is rejected at
/// configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridSize {
    #[default]
    Four,
    Six,
}

impl GridSize {
    /// Map a side length to a grid size
    pub fn from_side(side: u8) -> Option<Self> {
        match side {
            4 => Some(GridSize::Four),
            6 => Some(GridSize::Six),
            _ => None,
        }
    }

    /// Cards per row (and per column)
    pub fn side(&self) -> usize {
        match self {
            GridSize::Four => 4,
            GridSize::Six => 6,
        }
    }

    pub fn card_count(&self) -> usize {
        self.side() * self.side()
    }

    pub fn pair_count(&self) -> usize {
        self.card_count() / MATCH_GROUP_SIZE
    }
}

/// Which way up a card is lying
///
/// - **FaceDown**: value hidden, may be revealed
/// - **FaceUp**: value shown, waiting to be judged or flipped back
/// - **Matched**: retired as part of a matched pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    FaceDown,
    FaceUp,
    Matched,
}

impl Visibility {
    /// Only face-down cards accept a reveal
    pub fn is_selectable(&self) -> bool {
        matches!(self, Visibility::FaceDown)
    }
}

/// A single card on the board
///
/// `id` equals the card's board position for the lifetime of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: u32,
    pub value: u32,
    pub visibility: Visibility,
}

impl Card {
    /// A fresh face-down card
    pub fn face_down(id: u32, value: u32) -> Self {
        Self {
            id,
            value,
            visibility: Visibility::FaceDown,
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.visibility == Visibility::FaceUp
    }

    pub fn is_matched(&self) -> bool {
        self.visibility == Visibility::Matched
    }
}

/// Round lifecycle
///
/// Legal transitions: Idle → InProgress → Complete, and any phase → Idle
/// through a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    InProgress,
    Complete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::InProgress => "inProgress",
            Phase::Complete => "complete",
        }
    }
}

/// Actions accepted by the round transition function
///
/// These are submitted by the host: card selections from input, the other
/// three from timers and menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Turn the card at this board position face-up
    RevealCard(usize),
    /// Turn a judged mismatch back face-down
    FlipMismatchesDown,
    /// Advance the elapsed-time counter by one step
    Tick,
    /// Deal a fresh round with the same settings
    Restart,
}

impl GameAction {
    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::RevealCard(_) => "revealCard",
            GameAction::FlipMismatchesDown => "flipMismatchesDown",
            GameAction::Tick => "tick",
            GameAction::Restart => "restart",
        }
    }
}

/// Board navigation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}
