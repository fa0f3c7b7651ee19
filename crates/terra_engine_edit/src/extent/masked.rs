use terra_engine::{Extent, Mask, Tile, TileEntity, Vector};

/// Forwards tile writes only where the mask permits them.
///
/// The mask is tested against the inner extent before the write.
#[derive(Debug)]
pub struct MaskedExtent<E: Extent> {
    inner: E,
    mask: Mask,
}

impl<E: Extent> MaskedExtent<E> {
    pub fn new(inner: E, mask: Mask) -> Self {
        Self { inner, mask }
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn set_mask(&mut self, mask: Mask) {
        self.mask = mask;
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

impl<E: Extent> Extent for MaskedExtent<E> {
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
        if !self.mask.test(&self.inner, position) {
            return false;
        }
        self.inner.set_tile(position, tile)
    }

    fn tile_entities(&self) -> &[TileEntity] {
        self.inner.tile_entities()
    }

    fn add_tile_entity(&mut self, entity: TileEntity) -> bool {
        self.inner.add_tile_entity(entity)
    }

    fn remove_tile_entity(&mut self, entity: &TileEntity) -> bool {
        self.inner.remove_tile_entity(entity)
    }
}
