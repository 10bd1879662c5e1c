//! Roving focus over the card grid.
//!
//! Exactly one card is the focus target at a time. Cards register as tab
//! stops; arrow keys move the focus through the board order with
//! [`next_index`]. Bookkeeping mistakes (double registration, unknown ids)
//! are logged and ignored, never fatal.

use std::collections::BTreeSet;

use crate::navigation::next_index;
use crate::types::Direction;

pub type FocusId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusGrid {
    current: FocusId,
    tab_stops: BTreeSet<FocusId>,
    /// Stays off until the player first interacts with the grid, so the
    /// initial render does not steal focus.
    auto_focus: bool,
}

impl FocusGrid {
    pub fn new(initial: FocusId) -> Self {
        Self {
            current: initial,
            tab_stops: BTreeSet::new(),
            auto_focus: false,
        }
    }

    /// Focus the first id and register every id as a tab stop.
    pub fn with_stops(ids: &[FocusId]) -> Self {
        let mut grid = Self::new(ids.first().copied().unwrap_or_default());
        for &id in ids {
            grid.register(id);
        }
        grid
    }

    pub fn register(&mut self, id: FocusId) -> bool {
        if !self.tab_stops.insert(id) {
            tracing::warn!(id, "tab stop already registered");
            return false;
        }
        true
    }

    pub fn unregister(&mut self, id: FocusId) -> bool {
        if !self.tab_stops.remove(&id) {
            tracing::warn!(id, "unregistering unknown tab stop");
            return false;
        }
        true
    }

    /// Move focus straight to `id` (e.g. the player clicked it).
    pub fn focus(&mut self, id: FocusId) -> bool {
        if !self.tab_stops.contains(&id) {
            tracing::warn!(id, "focusing unknown tab stop");
            return false;
        }
        self.current = id;
        true
    }

    /// Step focus through `ids` (board order) laid out `row_length` per row.
    pub fn navigate(&mut self, direction: Direction, ids: &[FocusId], row_length: usize) -> bool {
        let Some(index) = ids.iter().position(|&id| id == self.current) else {
            tracing::warn!(
                current = self.current,
                direction = direction.as_str(),
                "focused id is not on the board"
            );
            return false;
        };

        let next = ids[next_index(index, direction, row_length, ids.len())];
        self.auto_focus = true;
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }

    pub fn enable_auto_focus(&mut self) {
        self.auto_focus = true;
    }

    pub fn auto_focus_enabled(&self) -> bool {
        self.auto_focus
    }

    pub fn current(&self) -> FocusId {
        self.current
    }

    /// Only the focused stop is reachable with Tab.
    pub fn is_tab_stop(&self, id: FocusId) -> bool {
        id == self.current
    }

    pub fn is_registered(&self, id: FocusId) -> bool {
        self.tab_stops.contains(&id)
    }

    /// The stop that should receive focus now, once auto-focus is on.
    pub fn focus_target(&self) -> Option<FocusId> {
        if !self.auto_focus {
            return None;
        }
        if !self.tab_stops.contains(&self.current) {
            tracing::warn!(id = self.current, "focus target is not registered");
            return None;
        }
        Some(self.current)
    }
}
