use terra_engine::{Extent, Mask, Tile, TileEntity, Vector};

use crate::{ChangeSet, History, LimitedExtent, LoggedExtent, MaskedExtent};

type Chain<'a> = LimitedExtent<MaskedExtent<LoggedExtent<&'a mut dyn Extent>>>;

/// One bounded edit transaction over a world.
///
/// Writes pass through a limit, then a mask, then a change log before they
/// reach the world. When the session was opened with a history, the logged
/// changes are committed to it as a single entry once the session ends or is
/// dropped.
pub struct EditSession<'a> {
    extent: Chain<'a>,
    history: Option<&'a mut History>,
}

impl<'a> EditSession<'a> {
    pub fn new(world: &'a mut dyn Extent, mask: Mask, limit: i32, history: Option<&'a mut History>) -> Self {
        log::debug!("opening edit session (limit {limit}, remember {})", history.is_some());
        Self {
            extent: LimitedExtent::new(MaskedExtent::new(LoggedExtent::new(world), mask), limit),
            history,
        }
    }

    pub fn limit(&self) -> i32 {
        self.extent.limit()
    }

    /// Number of writes attempted so far, including rejected ones.
    pub fn count(&self) -> i32 {
        self.extent.count()
    }

    pub fn mask(&self) -> &Mask {
        self.extent.inner().mask()
    }

    pub fn set_mask(&mut self, mask: Mask) {
        self.extent.inner_mut().set_mask(mask);
    }

    pub fn changes(&self) -> &ChangeSet {
        self.logged().changes()
    }

    pub fn is_remembered(&self) -> bool {
        self.history.is_some()
    }

    /// Reverts this session's changes directly on the world.
    pub fn undo(&mut self) -> usize {
        self.logged_mut().undo()
    }

    /// Replays this session's changes directly on the world.
    pub fn redo(&mut self) -> usize {
        self.logged_mut().redo()
    }

    /// Closes the session, committing its changes to the history.
    pub fn end(self) {
        drop(self);
    }

    /// Closes the session without recording it. Changes already made stay in the world.
    pub fn discard(mut self) {
        if self.history.take().is_some() {
            log::debug!("discarding edit session with {} changes", self.changes().len());
        }
    }

    fn commit(&mut self) {
        let Some(history) = self.history.take() else {
            return;
        };
        let changes = self.logged_mut().take_changes();
        log::debug!("committing edit session with {} changes", changes.len());
        history.record(changes);
    }

    fn logged(&self) -> &LoggedExtent<&'a mut dyn Extent> {
        self.extent.inner().inner()
    }

    fn logged_mut(&mut self) -> &mut LoggedExtent<&'a mut dyn Extent> {
        self.extent.inner_mut().inner_mut()
    }
}

impl Drop for EditSession<'_> {
    fn drop(&mut self) {
        self.commit();
    }
}

impl Extent for EditSession<'_> {
    fn lower_bound(&self) -> Vector {
        self.extent.lower_bound()
    }

    fn upper_bound(&self) -> Vector {
        self.extent.upper_bound()
    }

    fn get_tile(&self, position: Vector) -> Tile {
        self.extent.get_tile(position)
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        self.extent.set_tile(position, tile)
    }

    fn tile_entities(&self) -> &[TileEntity] {
        self.extent.tile_entities()
    }

    fn add_tile_entity(&mut self, entity: TileEntity) -> bool {
        self.extent.add_tile_entity(entity)
    }

    fn remove_tile_entity(&mut self, entity: &TileEntity) -> bool {
        self.extent.remove_tile_entity(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_engine::{Region, Template, TileGrid};

    #[test]
    fn test_limit_counts_masked_writes() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let mask = Mask::from(Region::rectangle(Vector::new(2, 0), Vector::new(3, 3)));
        {
            let mut edit = EditSession::new(&mut grid, mask, 1, None);
            // rejected by the mask, but still uses up the limit
            assert!(!edit.set_tile(Vector::new(0, 0), Tile::air().with_block(1)));
            assert!(!edit.set_tile(Vector::new(2, 0), Tile::air().with_block(1)));
            assert!(edit.changes().is_empty());
        }
        assert_eq!(Tile::air(), grid.get_tile(Vector::new(2, 0)));
    }

    #[test]
    fn test_end_commits_every_write() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let mut history = History::new(5);
        let mut edit = EditSession::new(&mut grid, Mask::Null, -1, Some(&mut history));
        edit.set_tile(Vector::new(1, 1), Template::Block(4).apply(Tile::air()));
        edit.set_tile(Vector::new(2, 2), Template::Block(4).apply(Tile::air()));
        edit.end();
        assert_eq!(1, history.len());
        assert_eq!(2, history.entries()[0].len());
    }

    #[test]
    fn test_drop_commits() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let mut history = History::new(5);
        {
            let mut edit = EditSession::new(&mut grid, Mask::Null, -1, Some(&mut history));
            edit.set_tile(Vector::new(3, 0), Tile::air().with_block(1));
        }
        assert_eq!(1, history.len());
        assert_eq!(1, history.entries()[0].len());
    }

    #[test]
    fn test_discard_records_nothing() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let mut history = History::new(5);
        let mut edit = EditSession::new(&mut grid, Mask::Null, -1, Some(&mut history));
        edit.set_tile(Vector::new(1, 1), Tile::air().with_wall(2));
        edit.discard();
        assert!(history.is_empty());
        assert_eq!(2, grid.get_tile(Vector::new(1, 1)).wall);
    }

    #[test]
    fn test_session_undo_restores_world() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let mut edit = EditSession::new(&mut grid, Mask::Null, -1, None);
        for x in 0..4 {
            edit.set_tile(Vector::new(x, 0), Tile::air().with_block(9));
        }
        assert_eq!(4, edit.undo());
        assert_eq!(Tile::air(), edit.get_tile(Vector::new(3, 0)));
        assert_eq!(4, edit.redo());
        assert_eq!(9, edit.get_tile(Vector::new(3, 0)).block);
    }
}
