use serde::{Deserialize, Serialize};

use crate::{Extent, Region, Template, Vector};

/// Predicate over a grid position, used to filter writes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mask {
    /// Permits everything
    #[default]
    Null,
    Negated(Box<Mask>),
    /// Tests containment only; the extent is ignored
    Region(Region),
    /// Tests the tile currently stored at the position
    Template(Template),
    /// Every mask must permit the position
    All(Vec<Mask>),
    /// At least one mask must permit the position
    Any(Vec<Mask>),
}

impl Mask {
    pub fn test(&self, extent: &dyn Extent, position: Vector) -> bool {
        match self {
            Mask::Null => true,
            Mask::Negated(inner) => !inner.test(extent, position),
            Mask::Region(region) => region.contains(position),
            Mask::Template(template) => template.matches(&extent.get_tile(position)),
            Mask::All(masks) => masks.iter().all(|m| m.test(extent, position)),
            Mask::Any(masks) => masks.iter().any(|m| m.test(extent, position)),
        }
    }

    /// Negation; negating a negated mask yields the inner mask.
    #[must_use]
    pub fn negate(self) -> Mask {
        match self {
            Mask::Negated(inner) => *inner,
            other => Mask::Negated(Box::new(other)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Mask::Null)
    }
}

impl From<Region> for Mask {
    fn from(value: Region) -> Self {
        Mask::Region(value)
    }
}

impl From<Template> for Mask {
    fn from(value: Template) -> Self {
        Mask::Template(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tile, TileGrid};

    fn grid_with_block_at(position: Vector) -> TileGrid {
        let mut grid = TileGrid::new(8, 8).unwrap();
        grid.set_tile(position, Tile::air().with_block(3));
        grid
    }

    #[test]
    fn test_null_mask_permits_everything() {
        let grid = grid_with_block_at(Vector::ZERO);
        assert!(Mask::Null.test(&grid, Vector::new(5, 5)));
        assert!(Mask::Null.test(&grid, Vector::new(-5, 100)));
    }

    #[test]
    fn test_double_negation_is_identity() {
        let grid = grid_with_block_at(Vector::new(2, 2));
        let mask = Mask::Template(Template::Block(3));
        let twice = Mask::Negated(Box::new(Mask::Negated(Box::new(mask.clone()))));
        for pos in Region::rectangle(Vector::ZERO, Vector::new(7, 7)).positions() {
            assert_eq!(mask.test(&grid, pos), twice.test(&grid, pos));
        }
        assert_eq!(mask.clone(), mask.clone().negate().negate());
    }

    #[test]
    fn test_region_mask_ignores_extent() {
        let grid = grid_with_block_at(Vector::ZERO);
        let mask = Mask::from(Region::rectangle(Vector::new(1, 1), Vector::new(2, 2)));
        assert!(mask.test(&grid, Vector::new(2, 1)));
        assert!(!mask.test(&grid, Vector::ZERO));
    }

    #[test]
    fn test_combinations() {
        let grid = grid_with_block_at(Vector::new(1, 1));
        let block = Mask::Template(Template::Block(3));
        let left = Mask::Region(Region::rectangle(Vector::ZERO, Vector::new(3, 7)));

        let both = Mask::All(vec![block.clone(), left.clone()]);
        assert!(both.test(&grid, Vector::new(1, 1)));
        assert!(!both.test(&grid, Vector::new(2, 1)));

        let either = Mask::Any(vec![block, left]);
        assert!(either.test(&grid, Vector::new(2, 1)));
        assert!(!either.test(&grid, Vector::new(6, 1)));

        assert!(Mask::All(Vec::new()).test(&grid, Vector::ZERO));
        assert!(!Mask::Any(Vec::new()).test(&grid, Vector::ZERO));
    }
}
