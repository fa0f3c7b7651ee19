use crate::{EngineError, Extent, Result, Tile, TileEntity, Vector};

/// Dense in-memory world: `width × height` tiles stored row by row plus the
/// tile entities placed on them.
#[derive(Clone, Debug, PartialEq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    entities: Vec<TileEntity>,
}

impl TileGrid {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 {
            return Err(EngineError::invalid_range("grid width", width));
        }
        if height <= 0 {
            return Err(EngineError::invalid_range("grid height", height));
        }
        Ok(Self {
            width,
            height,
            tiles: vec![Tile::default(); width as usize * height as usize],
            entities: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Sets every tile to `tile` without touching entities.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    fn index(&self, position: Vector) -> Option<usize> {
        if self.is_in_bounds(position) {
            Some(position.y as usize * self.width as usize + position.x as usize)
        } else {
            None
        }
    }
}

impl Extent for TileGrid {
    fn upper_bound(&self) -> Vector {
        Vector::new(self.width - 1, self.height - 1)
    }

    fn get_tile(&self, position: Vector) -> Tile {
        match self.index(position) {
            Some(idx) => self.tiles[idx],
            None => Tile::default(),
        }
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        match self.index(position) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    fn tile_entities(&self) -> &[TileEntity] {
        &self.entities
    }

    fn add_tile_entity(&mut self, entity: TileEntity) -> bool {
        if !self.is_in_bounds(entity.position()) {
            log::debug!("rejecting {entity}: out of bounds");
            return false;
        }
        if self.entities.iter().any(|e| e.position() == entity.position()) {
            log::debug!("rejecting {entity}: position already occupied");
            return false;
        }
        self.entities.push(entity);
        true
    }

    fn remove_tile_entity(&mut self, entity: &TileEntity) -> bool {
        match self.entities.iter().position(|e| e == entity) {
            Some(idx) => {
                self.entities.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size() {
        assert!(TileGrid::new(0, 10).is_err());
        assert!(TileGrid::new(10, -1).is_err());
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = TileGrid::new(4, 3).unwrap();
        assert_eq!(Vector::new(4, 3), grid.dimensions());
        assert!(!grid.set_tile(Vector::new(4, 0), Tile::air().with_block(1)));
        assert!(!grid.set_tile(Vector::new(-1, 0), Tile::air().with_block(1)));
        assert_eq!(Tile::default(), grid.get_tile(Vector::new(10, 10)));
        assert!(grid.set_tile(Vector::new(3, 2), Tile::air().with_block(1)));
        assert_eq!(1, grid.get_tile(Vector::new(3, 2)).block);
    }

    #[test]
    fn test_entities() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let sign = TileEntity::Sign {
            position: Vector::new(1, 1),
            text: "hello".to_string(),
        };
        assert!(grid.add_tile_entity(sign.clone()));
        assert!(!grid.add_tile_entity(sign.clone()));
        assert!(!grid.add_tile_entity(sign.at(Vector::new(9, 9))));
        assert_eq!(1, grid.tile_entities().len());
        assert!(grid.remove_tile_entity(&sign));
        assert!(!grid.remove_tile_entity(&sign));
    }
}
