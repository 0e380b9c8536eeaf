//! Application state management

use crate::core::{Dialog, Mode};
use crate::nav::{ActiveNavigator, Direction, GridNavigator, ListNavigator, SelectionSet};

/// The navigation controller: grid cursor, list cursor, selection set and
/// the Browse/Scroll mode, owned as one explicit struct.
///
/// Every external query and mutation goes through this; there is no other
/// holder of cursor state.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub grid: GridNavigator,
    pub list: ListNavigator,
    pub selection: SelectionSet,
    mode: Mode,
    /// Focused title on the previous tick, used to detect focus changes
    last_focused: Option<usize>,
}

impl NavigationState {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: GridNavigator::new(rows, cols),
            list: ListNavigator::new(),
            selection: SelectionSet::new(),
            mode: Mode::Browse,
            last_focused: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Backup/restore triggers are only armed while scrolling a backup list.
    pub fn armed(&self) -> bool {
        self.mode == Mode::Scroll
    }

    /// Enter Scroll mode. Refused when there is nothing to scroll.
    ///
    /// The list cursor keeps its position; a focus change since the last
    /// visit has already reset it in [`NavigationState::sync_focus`].
    pub fn enter_scroll(&mut self, title_count: usize, backup_count: usize) -> bool {
        if title_count == 0 || backup_count == 0 {
            return false;
        }
        self.mode = Mode::Scroll;
        true
    }

    pub fn leave_scroll(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Reconcile cursors with the current library shape. Called once per tick
    /// and after any operation that changes the title or backup lists.
    ///
    /// Selecting a different title always returns to Browse first and resets
    /// the list cursor; staying on the same title preserves it.
    pub fn sync_focus(&mut self, title_count: usize, backup_count: usize) {
        self.grid.clamp(title_count);
        self.selection.retain_below(title_count);

        let focused = (title_count > 0).then(|| self.grid.full_index());
        if focused != self.last_focused {
            if self.mode == Mode::Scroll {
                self.mode = Mode::Browse;
            }
            self.list.reset();
            self.last_focused = focused;
        }
        self.list.set_len(backup_count);
    }

    /// The navigator directional commands currently route to
    pub fn active(&mut self) -> ActiveNavigator<'_> {
        match self.mode {
            Mode::Browse => ActiveNavigator::Grid(&mut self.grid),
            Mode::Scroll => ActiveNavigator::List(&mut self.list),
        }
    }

    /// Route a directional command to the active navigator
    pub fn step(&mut self, dir: Direction, title_count: usize) {
        match self.active() {
            ActiveNavigator::Grid(grid) => grid.step(dir, title_count),
            ActiveNavigator::List(list) => list.step(dir),
        }
    }

    /// Toggle selection of the focused title.
    ///
    /// Selection is a title-level concept: regardless of mode it operates on
    /// the grid's full index.
    pub fn toggle_selected(&mut self, title_count: usize) {
        if title_count > 0 {
            self.selection.toggle(self.grid.full_index());
        }
    }

    /// Full reset, used when switching user
    pub fn reset(&mut self) {
        self.grid.reset();
        self.list.reset();
        self.list.set_len(0);
        self.selection.clear();
        self.mode = Mode::Browse;
        self.last_focused = None;
    }
}

/// Main application state
pub struct AppState {
    /// Navigation controller (cursors, selection, mode)
    pub nav: NavigationState,
    /// Status message shown in the bottom bar
    pub message: Option<String>,
    /// Pending confirmation dialog, if any
    pub dialog: Option<Dialog>,
    /// Help popup visibility
    pub help_visible: bool,
    /// Whether to draw decoded title icons
    pub icons_enabled: bool,
}

impl AppState {
    pub fn new(rows: usize, cols: usize, icons_enabled: bool) -> Self {
        Self {
            nav: NavigationState::new(rows, cols),
            message: None,
            dialog: None,
            help_visible: false,
            icons_enabled,
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
