//! Grid navigation helper.
//!
//! Pure geometry over a row-major board: given a position, the row length and
//! the number of cells, find the neighbour in a direction. Movement wraps
//! within the current row (left/right) or column (up/down) instead of
//! spilling into the next one.

use crate::types::Direction;

/// Next board position from `current` moving one step in `direction`.
///
/// `row_length == 0`, `len == 0` or an out-of-range `current` leave the
/// position unchanged. A short final row is handled by skipping the missing
/// cells.
pub fn next_index(current: usize, direction: Direction, row_length: usize, len: usize) -> usize {
    if row_length == 0 || len == 0 || current >= len {
        return current;
    }

    let col = current % row_length;
    let row_start = current - col;
    let row_end = (row_start + row_length).min(len) - 1;

    match direction {
        Direction::Left => {
            if current == row_start {
                row_end
            } else {
                current - 1
            }
        }
        Direction::Right => {
            if current == row_end {
                row_start
            } else {
                current + 1
            }
        }
        Direction::Up => {
            if current >= row_length {
                current - row_length
            } else {
                last_in_column(col, row_length, len)
            }
        }
        Direction::Down => {
            if current + row_length < len {
                current + row_length
            } else {
                col
            }
        }
    }
}

fn last_in_column(col: usize, row_length: usize, len: usize) -> usize {
    let rows = len.div_ceil(row_length);
    let candidate = (rows - 1) * row_length + col;
    if candidate < len {
        candidate
    } else {
        candidate - row_length
    }
}
