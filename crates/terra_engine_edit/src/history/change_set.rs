use serde::{Deserialize, Serialize};
use terra_engine::Extent;

use super::Change;

/// Append-only log of changes, replayed in bulk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    /// Replays every change in insertion order; returns how many succeeded.
    pub fn redo(&self, extent: &mut dyn Extent) -> usize {
        let mut count = 0;
        for change in &self.changes {
            if change.redo(extent) {
                count += 1;
            } else {
                log::trace!("redo rejected: {}", change.description());
            }
        }
        if count < self.changes.len() {
            log::warn!("redo applied {count} of {} changes", self.changes.len());
        }
        count
    }

    /// Reverts every change in reverse insertion order; returns how many succeeded.
    pub fn undo(&self, extent: &mut dyn Extent) -> usize {
        let mut count = 0;
        for change in self.changes.iter().rev() {
            if change.undo(extent) {
                count += 1;
            } else {
                log::trace!("undo rejected: {}", change.description());
            }
        }
        if count < self.changes.len() {
            log::warn!("undo reverted {count} of {} changes", self.changes.len());
        }
        count
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_engine::{Tile, TileGrid, Vector};

    #[test]
    fn test_undo_runs_in_reverse_order() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let pos = Vector::new(1, 1);
        let first = Tile::air().with_block(1);
        let second = Tile::air().with_block(2);

        let mut changes = ChangeSet::new();
        changes.push(Change::Tile {
            position: pos,
            old: Tile::air(),
            new: first,
        });
        changes.push(Change::Tile {
            position: pos,
            old: first,
            new: second,
        });

        assert_eq!(2, changes.redo(&mut grid));
        assert_eq!(second, grid.get_tile(pos));

        assert_eq!(2, changes.undo(&mut grid));
        assert_eq!(Tile::air(), grid.get_tile(pos));
    }
}
