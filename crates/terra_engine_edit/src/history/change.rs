use serde::{Deserialize, Serialize};
use terra_engine::{Extent, Tile, TileEntity, Vector};

/// A single reversible edit.
///
/// Replaying a change assumes the positions it touches were valid when it was
/// recorded. Tile changes still check `is_in_bounds` before writing; entity
/// changes hand the entity straight to the extent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// Overwrite of a single tile
    Tile { position: Vector, old: Tile, new: Tile },

    /// A tile entity was placed
    TileEntityAdded { entity: TileEntity },

    /// A tile entity was taken away
    TileEntityRemoved { entity: TileEntity },

    /// A tile entity was replaced by an updated version of itself
    TileEntityUpdated { old: TileEntity, new: TileEntity },
}

impl Change {
    pub fn description(&self) -> String {
        match self {
            Change::Tile { position, .. } => format!("set tile at {position}"),
            Change::TileEntityAdded { entity } => format!("add {entity}"),
            Change::TileEntityRemoved { entity } => format!("remove {entity}"),
            Change::TileEntityUpdated { new, .. } => format!("update {new}"),
        }
    }

    pub fn position(&self) -> Vector {
        match self {
            Change::Tile { position, .. } => *position,
            Change::TileEntityAdded { entity } | Change::TileEntityRemoved { entity } => entity.position(),
            Change::TileEntityUpdated { new, .. } => new.position(),
        }
    }

    /// Reverts the change. Returns `false` if the extent rejected it.
    pub fn undo(&self, extent: &mut dyn Extent) -> bool {
        match self {
            Change::Tile { position, old, .. } => extent.is_in_bounds(*position) && extent.set_tile(*position, *old),
            Change::TileEntityAdded { entity } => extent.remove_tile_entity(entity),
            Change::TileEntityRemoved { entity } => extent.add_tile_entity(entity.clone()),
            Change::TileEntityUpdated { old, new } => extent.remove_tile_entity(new) && extent.add_tile_entity(old.clone()),
        }
    }

    /// Applies the change again. Returns `false` if the extent rejected it.
    pub fn redo(&self, extent: &mut dyn Extent) -> bool {
        match self {
            Change::Tile { position, new, .. } => extent.is_in_bounds(*position) && extent.set_tile(*position, *new),
            Change::TileEntityAdded { entity } => extent.add_tile_entity(entity.clone()),
            Change::TileEntityRemoved { entity } => extent.remove_tile_entity(entity),
            Change::TileEntityUpdated { old, new } => extent.remove_tile_entity(old) && extent.add_tile_entity(new.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_engine::TileGrid;

    #[test]
    fn test_tile_change_checks_bounds() {
        let mut grid = TileGrid::new(2, 2).unwrap();
        let change = Change::Tile {
            position: Vector::new(5, 5),
            old: Tile::air(),
            new: Tile::air().with_block(1),
        };
        assert!(!change.redo(&mut grid));
        assert!(!change.undo(&mut grid));
    }

    #[test]
    fn test_entity_change_swaps_operation() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let sign = TileEntity::Sign {
            position: Vector::new(1, 2),
            text: "x".to_string(),
        };
        let added = Change::TileEntityAdded { entity: sign.clone() };
        assert!(added.redo(&mut grid));
        assert_eq!(1, grid.tile_entities().len());
        assert!(added.undo(&mut grid));
        assert!(grid.tile_entities().is_empty());

        let removed = Change::TileEntityRemoved { entity: sign };
        assert!(removed.undo(&mut grid));
        assert_eq!(1, grid.tile_entities().len());
        assert!(removed.redo(&mut grid));
        assert!(grid.tile_entities().is_empty());
    }

    #[test]
    fn test_entity_update() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let old = TileEntity::Sign {
            position: Vector::new(1, 1),
            text: "before".to_string(),
        };
        let new = TileEntity::Sign {
            position: Vector::new(1, 1),
            text: "after".to_string(),
        };
        grid.add_tile_entity(new.clone());

        let change = Change::TileEntityUpdated { old: old.clone(), new: new.clone() };
        assert!(change.undo(&mut grid));
        assert_eq!(&[old], grid.tile_entities());
        assert!(change.redo(&mut grid));
        assert_eq!(&[new], grid.tile_entities());
    }
}
