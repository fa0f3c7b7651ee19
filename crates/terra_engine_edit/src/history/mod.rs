//! Reversible change records and the bounded undo history built from them.

mod change;
mod change_set;

pub use change::Change;
pub use change_set::ChangeSet;

use terra_engine::Extent;

use crate::{EditError, Result};

/// Bounded, truncating log of committed edit sessions with a single cursor.
///
/// Entries before the cursor can be undone, entries at or after it can be
/// redone. Recording a new entry discards everything after the cursor and
/// evicts the oldest entries once the limit is exceeded.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<ChangeSet>,
    index: usize,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the undo/redo cursor, `0..=len()`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[ChangeSet] {
        &self.entries
    }

    pub fn can_undo(&self) -> bool {
        self.index != 0
    }

    pub fn can_redo(&self) -> bool {
        self.index != self.entries.len()
    }

    /// Changes the limit, evicting the oldest entries if there are now too many.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.evict();
    }

    pub fn record(&mut self, changes: ChangeSet) {
        self.entries.truncate(self.index);
        self.entries.push(changes);
        self.index += 1;
        self.evict();
    }

    fn evict(&mut self) {
        while self.entries.len() > self.limit {
            self.entries.remove(0);
            self.index = self.index.saturating_sub(1);
            log::debug!("history limit {} reached, evicted oldest entry", self.limit);
        }
    }

    /// Moves the cursor back and reverts the entry it lands on.
    pub fn undo(&mut self, extent: &mut dyn Extent) -> Result<usize> {
        if !self.can_undo() {
            return Err(EditError::NothingToUndo);
        }
        self.index -= 1;
        let count = self.entries[self.index].undo(extent);
        log::debug!("undo {}/{}: reverted {count} changes", self.index + 1, self.entries.len());
        Ok(count)
    }

    /// Replays the entry under the cursor and moves the cursor forward.
    pub fn redo(&mut self, extent: &mut dyn Extent) -> Result<usize> {
        if !self.can_redo() {
            return Err(EditError::NothingToRedo);
        }
        let count = self.entries[self.index].redo(extent);
        self.index += 1;
        log::debug!("redo {}/{}: replayed {count} changes", self.index, self.entries.len());
        Ok(count)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}
