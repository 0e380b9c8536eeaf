//! Cursor over the focused title's backup list

use super::Direction;

/// Clamped vertical cursor, no wraparound.
///
/// The backup list is a plain vertical list, so unlike the grid the cursor
/// stops at both ends instead of wrapping.
#[derive(Debug, Clone, Default)]
pub struct ListNavigator {
    index: usize,
    len: usize,
}

impl ListNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Update the backup count, pulling the cursor back in range if needed.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn set_index(&mut self, i: usize) {
        self.index = i.min(self.len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn step(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.index = self.index.saturating_sub(1),
            Direction::Down => {
                self.index = (self.index + 1).min(self.len.saturating_sub(1));
            }
            // Horizontal movement has no meaning in a vertical list
            Direction::Left | Direction::Right => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps_without_wraparound() {
        let mut nav = ListNavigator::new();
        nav.set_len(3);
        nav.step(Direction::Up);
        assert_eq!(nav.index(), 0);
        nav.step(Direction::Down);
        nav.step(Direction::Down);
        nav.step(Direction::Down);
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn test_horizontal_is_noop() {
        let mut nav = ListNavigator::new();
        nav.set_len(3);
        nav.set_index(1);
        nav.step(Direction::Left);
        nav.step(Direction::Right);
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn test_set_index_clamps() {
        let mut nav = ListNavigator::new();
        nav.set_len(2);
        nav.set_index(9);
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn test_shrink_pulls_cursor_back() {
        let mut nav = ListNavigator::new();
        nav.set_len(5);
        nav.set_index(4);
        nav.set_len(2);
        assert_eq!(nav.index(), 1);
        nav.set_len(0);
        assert_eq!(nav.index(), 0);
        nav.step(Direction::Down);
        assert_eq!(nav.index(), 0);
    }
}
