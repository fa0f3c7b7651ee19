use crate::{Tile, TileEntity, Vector};

/// Read/write access to a rectangular tile grid.
///
/// Bounds are inclusive: a position `p` is addressable when
/// `lower_bound() <= p <= upper_bound()` componentwise. Writes report
/// rejection through their return value; rejection is an ordinary outcome.
pub trait Extent {
    fn lower_bound(&self) -> Vector {
        Vector::ZERO
    }

    fn upper_bound(&self) -> Vector;

    fn dimensions(&self) -> Vector {
        self.upper_bound() - self.lower_bound() + Vector::ONE
    }

    fn is_in_bounds(&self, position: Vector) -> bool {
        position.is_within(self.lower_bound(), self.upper_bound())
    }

    fn get_tile(&self, position: Vector) -> Tile;

    /// Returns `false` if the write was rejected.
    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool;

    fn tile_entities(&self) -> &[TileEntity] {
        &[]
    }

    fn add_tile_entity(&mut self, _entity: TileEntity) -> bool {
        false
    }

    fn remove_tile_entity(&mut self, _entity: &TileEntity) -> bool {
        false
    }
}

impl<E: Extent + ?Sized> Extent for &mut E {
    fn lower_bound(&self) -> Vector {
        (**self).lower_bound()
    }

    fn upper_bound(&self) -> Vector {
        (**self).upper_bound()
    }

    fn dimensions(&self) -> Vector {
        (**self).dimensions()
    }

    fn is_in_bounds(&self, position: Vector) -> bool {
        (**self).is_in_bounds(position)
    }

    fn get_tile(&self, position: Vector) -> Tile {
        (**self).get_tile(position)
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        (**self).set_tile(position, tile)
    }

    fn tile_entities(&self) -> &[TileEntity] {
        (**self).tile_entities()
    }

    fn add_tile_entity(&mut self, entity: TileEntity) -> bool {
        (**self).add_tile_entity(entity)
    }

    fn remove_tile_entity(&mut self, entity: &TileEntity) -> bool {
        (**self).remove_tile_entity(entity)
    }
}

impl<E: Extent + ?Sized> Extent for Box<E> {
    fn lower_bound(&self) -> Vector {
        (**self).lower_bound()
    }

    fn upper_bound(&self) -> Vector {
        (**self).upper_bound()
    }

    fn dimensions(&self) -> Vector {
        (**self).dimensions()
    }

    fn is_in_bounds(&self, position: Vector) -> bool {
        (**self).is_in_bounds(position)
    }

    fn get_tile(&self, position: Vector) -> Tile {
        (**self).get_tile(position)
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        (**self).set_tile(position, tile)
    }

    fn tile_entities(&self) -> &[TileEntity] {
        (**self).tile_entities()
    }

    fn add_tile_entity(&mut self, entity: TileEntity) -> bool {
        (**self).add_tile_entity(entity)
    }

    fn remove_tile_entity(&mut self, entity: &TileEntity) -> bool {
        (**self).remove_tile_entity(entity)
    }
}
