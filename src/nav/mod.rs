//! Cursor navigation over the title grid and per-title backup lists

mod grid;
mod list;
mod selection;

pub use grid::{GridLayout, GridNavigator};
pub use list::ListNavigator;
pub use selection::SelectionSet;

/// Movement direction for navigation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The navigator a directional command routes to.
///
/// Dispatch through this enum is exhaustive: a command either moves the grid
/// cursor or the list cursor, never both and never neither.
pub enum ActiveNavigator<'a> {
    Grid(&'a mut GridNavigator),
    List(&'a mut ListNavigator),
}
