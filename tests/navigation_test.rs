//! Board navigation and roving focus.

use memory_match::input::{next_index, FocusGrid, FocusId};
use memory_match::types::Direction;

#[test]
fn corners_of_a_four_by_four_board() {
    // (from, direction, expected)
    let table = [
        (0, Direction::Left, 3),
        (3, Direction::Left, 2),
        (12, Direction::Left, 15),
        (15, Direction::Left, 14),
        (0, Direction::Right, 1),
        (3, Direction::Right, 0),
        (12, Direction::Right, 13),
        (15, Direction::Right, 12),
        (0, Direction::Up, 12),
        (3, Direction::Up, 15),
        (12, Direction::Up, 8),
        (15, Direction::Up, 11),
        (0, Direction::Down, 4),
        (3, Direction::Down, 7),
        (12, Direction::Down, 0),
        (15, Direction::Down, 3),
    ];

    for (from, direction, expected) in table {
        assert_eq!(
            next_index(from, direction, 4, 16),
            expected,
            "{} from {from}",
            direction.as_str()
        );
    }
}

#[test]
fn full_lap_returns_home() {
    for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
        for start in 0..36 {
            let mut at = start;
            for _ in 0..6 {
                at = next_index(at, direction, 6, 36);
            }
            assert_eq!(at, start, "{} from {start}", direction.as_str());
        }
    }
}

#[test]
fn focus_walks_the_board() {
    let ids: Vec<FocusId> = (0..16).collect();
    let mut focus = FocusGrid::with_stops(&ids);
    assert_eq!(focus.focus_target(), None);

    focus.navigate(Direction::Down, &ids, 4);
    focus.navigate(Direction::Down, &ids, 4);
    focus.navigate(Direction::Right, &ids, 4);
    assert_eq!(focus.current(), 9);
    assert_eq!(focus.focus_target(), Some(9));

    focus.navigate(Direction::Up, &ids, 4);
    focus.navigate(Direction::Up, &ids, 4);
    focus.navigate(Direction::Up, &ids, 4);
    assert_eq!(focus.current(), 13);
}

#[test]
fn bookkeeping_mistakes_are_ignored() {
    let ids: Vec<FocusId> = (0..4).collect();
    let mut focus = FocusGrid::with_stops(&ids);

    assert!(!focus.register(2));
    assert!(!focus.unregister(10));
    assert!(!focus.focus(10));
    assert_eq!(focus.current(), 0);
    assert!(focus.is_registered(2));
}
