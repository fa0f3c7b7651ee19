//! Tests for the extent decorator chain and change logging

use pretty_assertions::assert_eq;
use terra_engine::{Extent, Mask, Region, Template, Tile, TileGrid, Vector};
use terra_engine_edit::{Change, EditSession, LimitedExtent, LoggedExtent, MaskedExtent};

/// Helper to create a grid with a checkerboard of blocks
fn create_checkerboard(width: i32, height: i32) -> TileGrid {
    let mut grid = TileGrid::new(width, height).unwrap();
    for pos in Region::rectangle(Vector::ZERO, Vector::new(width - 1, height - 1)).positions() {
        if (pos.x + pos.y) % 2 == 0 {
            grid.set_tile(pos, Tile::air().with_block(1));
        }
    }
    grid
}

// ============================================================================
// Limited
// ============================================================================

#[test]
fn test_limit_one_rejects_second_write() {
    let mut grid = TileGrid::new(4, 4).unwrap();
    let before = grid.clone();
    {
        let mut limited = LimitedExtent::new(&mut grid, 1);
        assert!(limited.set_tile(Vector::new(0, 0), Tile::air().with_block(2)));
        assert!(!limited.set_tile(Vector::new(3, 3), Tile::air().with_block(2)));
    }
    assert_eq!(before.get_tile(Vector::new(3, 3)), grid.get_tile(Vector::new(3, 3)));
    assert_eq!(2, grid.get_tile(Vector::new(0, 0)).block);
}

// ============================================================================
// Masked
// ============================================================================

#[test]
fn test_mask_tests_wrapped_pre_write_state() {
    let mut grid = create_checkerboard(4, 4);
    let expected: Vec<bool> = Region::rectangle(Vector::ZERO, Vector::new(3, 3))
        .positions()
        .map(|p| grid.get_tile(p).is_active())
        .collect();
    {
        let mut masked = MaskedExtent::new(&mut grid, Mask::Template(Template::Block(1)));
        for pos in Region::rectangle(Vector::ZERO, Vector::new(3, 3)).positions() {
            masked.set_tile(pos, Tile::air().with_wall(7));
        }
    }
    let written: Vec<bool> = Region::rectangle(Vector::ZERO, Vector::new(3, 3))
        .positions()
        .map(|p| grid.get_tile(p).wall == 7)
        .collect();
    assert_eq!(expected, written);
}

#[test]
fn test_negated_mask_writes_the_complement() {
    let mut grid = create_checkerboard(4, 4);
    {
        let mut masked = MaskedExtent::new(&mut grid, Mask::Template(Template::Block(1)).negate());
        for pos in Region::rectangle(Vector::ZERO, Vector::new(3, 3)).positions() {
            masked.set_tile(pos, Tile::air().with_wall(7));
        }
    }
    assert_eq!(0, grid.get_tile(Vector::new(0, 0)).wall);
    assert_eq!(7, grid.get_tile(Vector::new(1, 0)).wall);
}

// ============================================================================
// Logged
// ============================================================================

#[test]
fn test_logged_undo_restores_n_writes() {
    let mut grid = create_checkerboard(5, 5);
    let original = grid.clone();
    let positions: Vec<Vector> = Region::ellipse(Vector::new(2, 2), Vector::new(2, 2)).positions().collect();
    {
        let mut logged = LoggedExtent::new(&mut grid);
        for &pos in &positions {
            assert!(logged.set_tile(pos, Tile::air().with_block(9).with_wall(3)));
        }
        assert_eq!(positions.len(), logged.changes().len());
        assert_eq!(positions.len(), logged.undo());
    }
    assert_eq!(original, grid);
}

#[test]
fn test_logged_change_records_pre_and_post_values() {
    let mut grid = create_checkerboard(2, 2);
    let pos = Vector::new(0, 0);
    let old = grid.get_tile(pos);
    let new = Tile::air().with_wall(5);
    let mut logged = LoggedExtent::new(&mut grid);
    logged.set_tile(pos, new);
    assert_eq!(Some(&Change::Tile { position: pos, old, new }), logged.changes().iter().next());
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_edit_session_only_logs_accepted_writes() {
    let mut grid = TileGrid::new(4, 1).unwrap();
    let mask = Mask::from(Region::rectangle(Vector::new(1, 0), Vector::new(3, 0)));
    let mut edit = EditSession::new(&mut grid, mask, 3, None);
    let results: Vec<bool> = (0..4).map(|x| edit.set_tile(Vector::new(x, 0), Tile::air().with_block(1))).collect();
    // x = 0 is masked out but consumes one unit of the limit; x = 3 is over the limit
    assert_eq!(vec![false, true, true, false], results);
    assert_eq!(2, edit.changes().len());
    assert_eq!(3, edit.count());
}
