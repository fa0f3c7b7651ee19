use terra_engine::{Extent, Tile, TileEntity, Vector};

use crate::{Change, ChangeSet};

/// Records every accepted write into a private [`ChangeSet`].
#[derive(Debug)]
pub struct LoggedExtent<E: Extent> {
    inner: E,
    changes: ChangeSet,
}

impl<E: Extent> LoggedExtent<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            changes: ChangeSet::new(),
        }
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    /// Hands out the recorded changes, leaving an empty log behind.
    pub fn take_changes(&mut self) -> ChangeSet {
        std::mem::take(&mut self.changes)
    }

    /// Reverts everything logged so far against the inner extent.
    pub fn undo(&mut self) -> usize {
        self.changes.undo(&mut self.inner)
    }

    /// Replays everything logged so far against the inner extent.
    pub fn redo(&mut self) -> usize {
        self.changes.redo(&mut self.inner)
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Extent> Extent for LoggedExtent<E> {
    fn lower_bound(&self) -> Vector {
        self.inner.lower_bound()
    }

    fn upper_bound(&self) -> Vector {
        self.inner.upper_bound()
    }

    fn get_tile(&self, position: Vector) -> Tile {
        self.inner.get_tile(position)
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        let old = self.inner.get_tile(position);
        if !self.inner.set_tile(position, tile) {
            return false;
        }
        self.changes.push(Change::Tile { position, old, new: tile });
        true
    }

    fn tile_entities(&self) -> &[TileEntity] {
        self.inner.tile_entities()
    }

    fn add_tile_entity(&mut self, entity: TileEntity) -> bool {
        if !self.inner.add_tile_entity(entity.clone()) {
            return false;
        }
        self.changes.push(Change::TileEntityAdded { entity });
        true
    }

    fn remove_tile_entity(&mut self, entity: &TileEntity) -> bool {
        if !self.inner.remove_tile_entity(entity) {
            return false;
        }
        self.changes.push(Change::TileEntityRemoved { entity: entity.clone() });
        true
    }
}
