//! Paged grid cursor over the title list
//!
//! The grid shows `rows * cols` titles per page. The navigator tracks a
//! `(page, in_page)` pair; the linear title index is always
//! `page * capacity + in_page` and is kept inside `[0, title_count)` whenever
//! the title list is non-empty.

use super::Direction;

/// Cursor over a paged rows×cols title grid
#[derive(Debug, Clone)]
pub struct GridNavigator {
    rows: usize,
    cols: usize,
    page: usize,
    in_page: usize,
}

impl GridNavigator {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            page: 0,
            in_page: 0,
        }
    }

    /// Titles per page
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn in_page_index(&self) -> usize {
        self.in_page
    }

    /// Linear title index of the cursor.
    ///
    /// Meaningless when the title list is empty; callers must check the
    /// title count before dereferencing this.
    pub fn full_index(&self) -> usize {
        self.page * self.capacity() + self.in_page
    }

    pub fn set_full_index(&mut self, i: usize) {
        self.page = i / self.capacity();
        self.in_page = i % self.capacity();
    }

    pub fn reset(&mut self) {
        self.page = 0;
        self.in_page = 0;
    }

    /// Number of pages needed for `count` titles
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(self.capacity())
    }

    /// Move the cursor one step.
    ///
    /// Left/right wrap across the whole title list, rolling the page over at
    /// page edges. Up/down cross into the previous/next page at the first/last
    /// row, clamped at the first and last page. A partial last page clamps the
    /// cursor onto the last title.
    pub fn step(&mut self, dir: Direction, count: usize) {
        if count == 0 {
            self.reset();
            return;
        }
        let cap = self.capacity();
        let last = count - 1;
        match dir {
            Direction::Left => {
                let full = self.full_index();
                if full == 0 {
                    self.set_full_index(last);
                } else {
                    self.set_full_index(full - 1);
                }
            }
            Direction::Right => {
                let full = self.full_index();
                if full >= last {
                    self.set_full_index(0);
                } else {
                    self.set_full_index(full + 1);
                }
            }
            Direction::Up => {
                if self.in_page >= self.cols {
                    self.in_page -= self.cols;
                } else if self.page > 0 {
                    self.page -= 1;
                    self.in_page += cap - self.cols;
                }
            }
            Direction::Down => {
                if self.in_page + self.cols < cap {
                    self.in_page += self.cols;
                } else if self.page + 1 < self.page_count(count) {
                    self.page += 1;
                    self.in_page %= self.cols;
                }
            }
        }
        self.clamp(count);
    }

    /// Pull the cursor back inside `[0, count)` after the title list shrinks.
    pub fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.reset();
        } else if self.full_index() > count - 1 {
            self.set_full_index(count - 1);
        }
    }
}

/// Cell geometry of the on-screen grid.
///
/// `cell_position` is a pure function of the layout and the linear index;
/// both the selector highlight and the icon cells are placed through it.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub rows: u16,
    pub cols: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub margin: u16,
    /// Height of the bar above the grid
    pub top: u16,
}

impl GridLayout {
    /// Column/row slot of a linear index inside the current page layout
    pub fn cell_slot(&self, i: usize) -> (u16, u16) {
        let capacity = usize::from(self.rows) * usize::from(self.cols);
        let slot = i % capacity.max(1);
        let col = (slot % usize::from(self.cols.max(1))) as u16;
        let row = (slot / usize::from(self.cols.max(1))) as u16;
        (col, row)
    }

    /// Top-left corner of the cell for linear index `i`, in screen cells
    pub fn cell_position(&self, i: usize) -> (u16, u16) {
        let (col, row) = self.cell_slot(i);
        let x = col * self.cell_w + self.margin * (col + 1);
        let y = self.top + row * self.cell_h + self.margin * (row + 1);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridNavigator {
        GridNavigator::new(5, 6)
    }

    #[test]
    fn test_set_full_index_round_trip() {
        let mut nav = grid();
        for i in [0, 1, 29, 30, 59, 61] {
            nav.set_full_index(i);
            assert_eq!(nav.full_index(), i);
        }
        nav.set_full_index(35);
        assert_eq!(nav.page(), 1);
        assert_eq!(nav.in_page_index(), 5);
    }

    #[test]
    fn test_right_crosses_page_boundary() {
        let mut nav = grid();
        nav.set_full_index(29);
        nav.step(Direction::Right, 31);
        assert_eq!(nav.page(), 1);
        assert_eq!(nav.in_page_index(), 0);
    }

    #[test]
    fn test_horizontal_wraparound() {
        let mut nav = grid();
        nav.step(Direction::Left, 31);
        assert_eq!(nav.full_index(), 30);
        nav.step(Direction::Right, 31);
        assert_eq!(nav.full_index(), 0);
    }

    #[test]
    fn test_down_crosses_page_keeps_column() {
        let mut nav = grid();
        nav.set_full_index(26); // page 0, bottom row, col 2
        nav.step(Direction::Down, 90);
        assert_eq!(nav.page(), 1);
        assert_eq!(nav.in_page_index(), 2);
    }

    #[test]
    fn test_up_crosses_page_to_bottom_row() {
        let mut nav = grid();
        nav.set_full_index(32); // page 1, top row, col 2
        nav.step(Direction::Up, 90);
        assert_eq!(nav.page(), 0);
        assert_eq!(nav.in_page_index(), 26);
    }

    #[test]
    fn test_up_clamped_on_first_page() {
        let mut nav = grid();
        nav.set_full_index(3);
        nav.step(Direction::Up, 31);
        assert_eq!(nav.full_index(), 3);
    }

    #[test]
    fn test_down_clamped_on_last_page() {
        let mut nav = grid();
        nav.set_full_index(30);
        nav.step(Direction::Down, 31);
        assert_eq!(nav.full_index(), 30);
    }

    #[test]
    fn test_down_onto_partial_page_clamps_to_last_title() {
        let mut nav = grid();
        nav.set_full_index(29); // bottom-right of page 0
        nav.step(Direction::Down, 31);
        assert_eq!(nav.full_index(), 30);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut nav = grid();
        nav.set_full_index(42);
        nav.clamp(10);
        assert_eq!(nav.full_index(), 9);
        nav.clamp(0);
        assert_eq!(nav.page(), 0);
        assert_eq!(nav.in_page_index(), 0);
    }

    #[test]
    fn test_step_with_no_titles_is_safe() {
        let mut nav = grid();
        nav.step(Direction::Down, 0);
        nav.step(Direction::Right, 0);
        assert_eq!(nav.full_index(), 0);
    }

    #[test]
    fn test_cell_position_is_pure_geometry() {
        let layout = GridLayout {
            rows: 5,
            cols: 6,
            cell_w: 14,
            cell_h: 5,
            margin: 1,
            top: 2,
        };
        assert_eq!(layout.cell_slot(0), (0, 0));
        assert_eq!(layout.cell_slot(6), (0, 1));
        assert_eq!(layout.cell_slot(35), (5, 0)); // 35 mod 30 = 5
        assert_eq!(layout.cell_position(0), (1, 3));
        assert_eq!(layout.cell_position(0), layout.cell_position(0));
        assert_eq!(layout.cell_position(1), (16, 3));
        assert_eq!(layout.cell_position(6), (1, 9));
    }
}
