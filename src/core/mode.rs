//! Interaction mode and confirmation dialog definitions

/// Which navigator is active.
///
/// Exactly one of the two is active at a time: directional commands move the
/// grid cursor in Browse and the backup-list cursor in Scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the title grid
    #[default]
    Browse,
    /// Scrolling the focused title's backup list
    Scroll,
}

/// Operation waiting on a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Back up the given title indices (insertion order of the selection)
    Backup { targets: Vec<usize> },
    /// Restore one backup of one title
    Restore { title: usize, backup: usize },
    /// Delete one backup of one title
    DeleteBackup { title: usize, backup: usize },
}

/// Highlighted dialog button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Yes,
    No,
}

impl DialogChoice {
    pub fn other(self) -> Self {
        match self {
            DialogChoice::Yes => DialogChoice::No,
            DialogChoice::No => DialogChoice::Yes,
        }
    }
}

/// Blocking yes/no gate, modeled as a short-lived state machine the outer
/// loop drives instead of a nested poll loop.
///
/// The dialog owns only its button focus; it never touches the navigators or
/// the selection set, so running it inside the regular tick is safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub action: PendingAction,
    pub prompt: String,
    pub choice: DialogChoice,
}

impl Dialog {
    pub fn new(action: PendingAction, prompt: impl Into<String>) -> Self {
        Self {
            action,
            prompt: prompt.into(),
            // Destructive operations default to the safe answer
            choice: DialogChoice::No,
        }
    }

    pub fn toggle_choice(&mut self) {
        self.choice = self.choice.other();
    }
}
