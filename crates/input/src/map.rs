//! Key mapping from terminal events to board commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    /// Move the focus one card
    Move(Direction),
    /// Reveal the focused card
    Reveal,
    /// Deal a new round with the same settings
    Restart,
}

/// Map keyboard input to board commands.
pub fn map_key(key: KeyEvent) -> Option<BoardCommand> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(BoardCommand::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(BoardCommand::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
            Some(BoardCommand::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(BoardCommand::Move(Direction::Down))
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(BoardCommand::Reveal),

        KeyCode::Char('r' | 'R') => Some(BoardCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(BoardCommand::Move(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(BoardCommand::Move(Direction::Right))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(BoardCommand::Move(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(BoardCommand::Move(Direction::Down))
        );

        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(BoardCommand::Move(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(BoardCommand::Move(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(BoardCommand::Move(Direction::Down))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(BoardCommand::Reveal)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(BoardCommand::Reveal)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(BoardCommand::Restart)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
