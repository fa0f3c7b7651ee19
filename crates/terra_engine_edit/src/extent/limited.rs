use terra_engine::{Extent, Tile, TileEntity, Vector};

/// Stops forwarding tile writes after a fixed number of attempts.
///
/// Every forwarded attempt consumes one unit of the budget, whether or not an
/// inner decorator or the world accepts it. A negative limit never runs out.
#[derive(Debug)]
pub struct LimitedExtent<E: Extent> {
    inner: E,
    limit: i32,
    count: i32,
}

impl<E: Extent> LimitedExtent<E> {
    pub fn new(inner: E, limit: i32) -> Self {
        Self { inner, limit, count: 0 }
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Number of writes attempted so far, saturating at `i32::MAX`.
    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit >= 0 && self.count >= self.limit
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

impl<E: Extent> Extent for LimitedExtent<E> {
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
        if self.is_exhausted() {
            return false;
        }
        self.count = self.count.saturating_add(1);
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
