//! Bulk edits over a region.
//!
//! Every function writes through the extent it is given and returns the
//! number of writes the extent accepted. Positions outside the extent are
//! skipped before a write is attempted.

use fastrand::Rng;
use terra_engine::{Extent, Mask, Pattern, Region, Tile, TileEntity, Vector};

use crate::{Clipboard, Result};

/// Applies `pattern` at every position of `region`.
pub fn set(extent: &mut dyn Extent, region: &Region, pattern: &Pattern, rng: &mut Rng) -> usize {
    let mut count = 0;
    for position in region.positions() {
        if extent.is_in_bounds(position) && extent.set_tile(position, pattern.apply(extent.get_tile(position), rng)) {
            count += 1;
        }
    }
    count
}

/// Like [`set`], restricted to positions where `mask` currently matches.
pub fn replace(extent: &mut dyn Extent, region: &Region, mask: &Mask, pattern: &Pattern, rng: &mut Rng) -> usize {
    let mut count = 0;
    for position in region.positions() {
        if !extent.is_in_bounds(position) || !mask.test(&*extent, position) {
            continue;
        }
        if extent.set_tile(position, pattern.apply(extent.get_tile(position), rng)) {
            count += 1;
        }
    }
    count
}

/// Applies `pattern` to the border of `region`: positions with at least one
/// horizontal or vertical neighbour outside of it.
pub fn outline(extent: &mut dyn Extent, region: &Region, pattern: &Pattern, rng: &mut Rng) -> usize {
    const NEIGHBOURS: [Vector; 4] = [Vector::new(1, 0), Vector::new(-1, 0), Vector::new(0, 1), Vector::new(0, -1)];

    let mut count = 0;
    for position in region.positions() {
        if !extent.is_in_bounds(position) || NEIGHBOURS.iter().all(|&n| region.contains(position + n)) {
            continue;
        }
        if extent.set_tile(position, pattern.apply(extent.get_tile(position), rng)) {
            count += 1;
        }
    }
    count
}

/// Blanks every position of `region` and removes the tile entities inside it.
pub fn clear(extent: &mut dyn Extent, region: &Region) -> usize {
    let mut count = 0;
    for entity in entities_in(extent, region) {
        if extent.remove_tile_entity(&entity) {
            count += 1;
        }
    }
    for position in region.positions() {
        if extent.is_in_bounds(position) && extent.set_tile(position, Tile::air()) {
            count += 1;
        }
    }
    count
}

/// Moves the contents of `region` by `offset`.
///
/// Source cells that the destination does not cover are blanked, and so are
/// destination cells whose source lies outside the extent. Tile entities move
/// with their tiles.
pub fn move_region(extent: &mut dyn Extent, region: &Region, offset: Vector) -> Result<usize> {
    let clipboard = Clipboard::copy_from(&*extent, region)?;

    let mut count = 0;
    for entity in entities_in(extent, region) {
        if extent.remove_tile_entity(&entity) {
            count += 1;
        }
    }
    for position in region.positions() {
        let target = if extent.is_in_bounds(position) {
            let source = position - offset;
            let covered = region.contains(source) && extent.is_in_bounds(source);
            (!covered).then_some(position)
        } else {
            let target = position + offset;
            (!region.contains(target)).then_some(target)
        };
        if let Some(target) = target {
            if extent.is_in_bounds(target) && extent.set_tile(target, Tile::air()) {
                count += 1;
            }
        }
    }
    count += clipboard.paste_to(extent, region.lower_bound() + offset);
    log::debug!("moved {region} by {offset}: {count} writes");
    Ok(count)
}

fn entities_in(extent: &dyn Extent, region: &Region) -> Vec<TileEntity> {
    extent.tile_entities().iter().filter(|e| region.contains(e.position())).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_engine::{Template, TileGrid};

    fn rng() -> Rng {
        Rng::with_seed(7)
    }

    #[test]
    fn test_set_skips_out_of_bounds() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        let region = Region::rectangle(Vector::new(2, 2), Vector::new(5, 5));
        let count = set(&mut grid, &region, &Pattern::single(Template::Block(1)), &mut rng());
        assert_eq!(4, count);
        assert_eq!(1, grid.get_tile(Vector::new(3, 3)).block);
    }

    #[test]
    fn test_outline_of_rectangle() {
        let mut grid = TileGrid::new(8, 8).unwrap();
        let region = Region::rectangle(Vector::new(1, 1), Vector::new(5, 5));
        let count = outline(&mut grid, &region, &Pattern::single(Template::Wall(3)), &mut rng());
        assert_eq!(16, count);
        assert_eq!(3, grid.get_tile(Vector::new(1, 3)).wall);
        assert_eq!(0, grid.get_tile(Vector::new(3, 3)).wall);
    }

    #[test]
    fn test_replace_uses_mask() {
        let mut grid = TileGrid::new(4, 1).unwrap();
        grid.set_tile(Vector::new(1, 0), Tile::air().with_block(2));
        let region = Region::rectangle(Vector::ZERO, Vector::new(3, 0));
        let mask = Mask::Template(Template::Block(2));
        let count = replace(&mut grid, &region, &mask, &Pattern::single(Template::Block(5)), &mut rng());
        assert_eq!(1, count);
        assert_eq!(5, grid.get_tile(Vector::new(1, 0)).block);
        assert!(!grid.get_tile(Vector::new(0, 0)).is_active());
    }

    #[test]
    fn test_move_overlapping() {
        let mut grid = TileGrid::new(6, 1).unwrap();
        for x in 0..3 {
            grid.set_tile(Vector::new(x, 0), Tile::air().with_block(x as u16 + 1));
        }
        let region = Region::rectangle(Vector::ZERO, Vector::new(2, 0));
        move_region(&mut grid, &region, Vector::new(1, 0)).unwrap();

        let blocks: Vec<u16> = (0..6).map(|x| grid.get_tile(Vector::new(x, 0)).block).collect();
        assert_eq!(vec![0, 1, 2, 3, 0, 0], blocks);
    }

    #[test]
    fn test_move_from_outside_the_grid_blanks_destination() {
        let create_row = || {
            let mut grid = TileGrid::new(4, 1).unwrap();
            for x in 0..4 {
                grid.set_tile(Vector::new(x, 0), Tile::air().with_block(x as u16 + 1));
            }
            grid
        };
        let blocks = |grid: &TileGrid| -> Vec<u16> { (0..4).map(|x| grid.get_tile(Vector::new(x, 0)).block).collect() };

        let mut grid = create_row();
        move_region(&mut grid, &Region::rectangle(Vector::new(-1, 0), Vector::new(1, 0)), Vector::new(1, 0)).unwrap();
        assert_eq!(vec![0, 1, 2, 4], blocks(&grid));

        let mut grid = create_row();
        move_region(&mut grid, &Region::rectangle(Vector::new(-1, 0), Vector::new(0, 0)), Vector::new(3, 0)).unwrap();
        assert_eq!(vec![0, 2, 0, 1], blocks(&grid));
    }

    #[test]
    fn test_clear_removes_entities() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        grid.add_tile_entity(TileEntity::Sign {
            position: Vector::new(1, 1),
            text: String::new(),
        });
        let region = Region::rectangle(Vector::ZERO, Vector::new(1, 1));
        assert_eq!(5, clear(&mut grid, &region));
        assert!(grid.tile_entities().is_empty());
    }
}
