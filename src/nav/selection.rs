//! Persistent multi-select set of title indices
//!
//! Selection survives page changes and mode switches; it is cleared only by
//! an explicit clear command, a user switch, or after a batch operation.
//! "Multi-select active" is derived from non-emptiness rather than being a
//! separate flag.

/// Insertion-ordered toggle set of title indices.
///
/// Title counts are small (low thousands at most), so presence is a linear
/// scan over a Vec; the batch operations consume the entries in the order
/// they were marked.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: Vec<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle presence of `i`. Toggling twice restores the prior set.
    pub fn toggle(&mut self, i: usize) {
        match self.entries.iter().position(|&e| e == i) {
            Some(pos) => {
                self.entries.remove(pos);
            }
            None => self.entries.push(i),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, i: usize) -> bool {
        self.entries.contains(&i)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Selected indices in insertion order
    pub fn all(&self) -> &[usize] {
        &self.entries
    }

    /// Drop entries that fell out of range after the title list shrank.
    pub fn retain_below(&mut self, count: usize) {
        self.entries.retain(|&e| e < count);
    }
}
