//! Keyboard-navigation index arithmetic over the flattened month grid.

use crate::types::DAYS_PER_WEEK;

/// Keys the pickers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Space,
    Escape,
}

/// Move a focused index within a flattened grid of `len` cells.
///
/// Left/Right move by 1, Up/Down by a week, Home/End jump to the focused
/// row's first and last cell. Every move clamps to `[0, len - 1]`; there is
/// no wraparound across grid edges. Keys without an index meaning leave the
/// focus untouched.
pub fn move_focus(index: usize, len: usize, key: Key) -> usize {
    if len == 0 {
        return 0;
    }
    let row_start = index - index % DAYS_PER_WEEK;
    let moved = match key {
        Key::Left => index.saturating_sub(1),
        Key::Right => index + 1,
        Key::Up => index.saturating_sub(DAYS_PER_WEEK),
        Key::Down => index + DAYS_PER_WEEK,
        Key::Home => row_start,
        Key::End => row_start + (DAYS_PER_WEEK - 1),
        _ => index,
    };
    moved.min(len - 1)
}
