use terra_engine::{EngineError, Extent, Region, Tile, TileEntity, Vector};

use crate::Result;

/// Detached buffer of tiles with its origin at `(0, 0)`.
///
/// Cells that were never written stay empty: they read back as air and are
/// skipped on paste, leaving the destination untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clipboard {
    dimensions: Vector,
    cells: Vec<Option<Tile>>,
    entities: Vec<TileEntity>,
}

impl Clipboard {
    pub fn new(dimensions: Vector) -> Result<Self> {
        if dimensions.x <= 0 {
            return Err(EngineError::invalid_range("clipboard width", dimensions.x).into());
        }
        if dimensions.y <= 0 {
            return Err(EngineError::invalid_range("clipboard height", dimensions.y).into());
        }
        Ok(Self {
            dimensions,
            cells: vec![None; dimensions.x as usize * dimensions.y as usize],
            entities: Vec::new(),
        })
    }

    /// Copies every in-bounds position of `region` out of `extent`.
    ///
    /// Positions are stored relative to the region's lower bound. Tile
    /// entities inside the region come along.
    pub fn copy_from(extent: &dyn Extent, region: &Region) -> Result<Self> {
        let origin = region.lower_bound();
        let mut clipboard = Self::new(region.dimensions())?;
        for position in region.positions() {
            if extent.is_in_bounds(position) {
                clipboard.set_tile(position - origin, extent.get_tile(position));
            }
        }
        for entity in extent.tile_entities() {
            if region.contains(entity.position()) {
                clipboard.entities.push(entity.translated(-origin));
            }
        }
        log::debug!("copied {} cells and {} entities from {region}", clipboard.len(), clipboard.entities.len());
        Ok(clipboard)
    }

    /// Writes every non-empty cell to `extent` at `position` plus the cell
    /// offset, then re-adds the tile entities. Returns the accepted writes.
    pub fn paste_to(&self, extent: &mut dyn Extent, position: Vector) -> usize {
        let mut count = 0;
        for y in 0..self.dimensions.y {
            for x in 0..self.dimensions.x {
                let cell = Vector::new(x, y);
                let Some(tile) = self.cell(cell) else {
                    continue;
                };
                let target = cell + position;
                if extent.is_in_bounds(target) && extent.set_tile(target, tile) {
                    count += 1;
                }
            }
        }
        for entity in &self.entities {
            let entity = entity.translated(position);
            if extent.is_in_bounds(entity.position()) && extent.add_tile_entity(entity) {
                count += 1;
            }
        }
        count
    }

    pub fn dimensions(&self) -> Vector {
        self.dimensions
    }

    pub fn width(&self) -> i32 {
        self.dimensions.x
    }

    pub fn height(&self) -> i32 {
        self.dimensions.y
    }

    /// The stored value, or `None` for a cell that was never written.
    pub fn cell(&self, position: Vector) -> Option<Tile> {
        self.index(position).and_then(|i| self.cells[i])
    }

    /// Number of written cells.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none) && self.entities.is_empty()
    }

    /// Mirrors the contents along the chosen axes.
    #[must_use]
    pub fn flipped(&self, horizontal: bool, vertical: bool) -> Clipboard {
        let (w, h) = (self.dimensions.x, self.dimensions.y);
        self.remap(self.dimensions, |p| {
            Vector::new(if horizontal { w - 1 - p.x } else { p.x }, if vertical { h - 1 - p.y } else { p.y })
        })
    }

    /// Rotates clockwise by `quarter_turns * 90` degrees. Negative values turn
    /// counter-clockwise.
    #[must_use]
    pub fn rotated(&self, quarter_turns: i32) -> Clipboard {
        let mut result = self.clone();
        for _ in 0..quarter_turns.rem_euclid(4) {
            let h = result.dimensions.y;
            result = result.remap(Vector::new(result.dimensions.y, result.dimensions.x), |p| Vector::new(h - 1 - p.y, p.x));
        }
        result
    }

    fn remap(&self, dimensions: Vector, map: impl Fn(Vector) -> Vector) -> Clipboard {
        let mut result = Clipboard {
            dimensions,
            cells: vec![None; self.cells.len()],
            entities: Vec::with_capacity(self.entities.len()),
        };
        for y in 0..self.dimensions.y {
            for x in 0..self.dimensions.x {
                let source = Vector::new(x, y);
                if let (Some(tile), Some(i)) = (self.cell(source), result.index(map(source))) {
                    result.cells[i] = Some(tile);
                }
            }
        }
        for entity in &self.entities {
            result.entities.push(entity.at(map(entity.position())));
        }
        result
    }

    fn index(&self, position: Vector) -> Option<usize> {
        if !self.is_in_bounds(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.x as usize + position.x as usize)
    }
}

impl Extent for Clipboard {
    fn upper_bound(&self) -> Vector {
        self.dimensions - Vector::ONE
    }

    fn get_tile(&self, position: Vector) -> Tile {
        self.cell(position).unwrap_or_default()
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        match self.index(position) {
            Some(i) => {
                self.cells[i] = Some(tile);
                true
            }
            None => false,
        }
    }

    fn tile_entities(&self) -> &[TileEntity] {
        &self.entities
    }

    fn add_tile_entity(&mut self, entity: TileEntity) -> bool {
        if !self.is_in_bounds(entity.position()) || self.entities.iter().any(|e| e.position() == entity.position()) {
            return false;
        }
        self.entities.push(entity);
        true
    }

    fn remove_tile_entity(&mut self, entity: &TileEntity) -> bool {
        match self.entities.iter().position(|e| e == entity) {
            Some(i) => {
                self.entities.remove(i);
                true
            }
            None => false,
        }
    }
}
