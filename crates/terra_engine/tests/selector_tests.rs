//! Tests for the region selector state machines

use terra_engine::{Region, RegionSelector, SelectorKind, Vector};

#[test]
fn test_elliptic_round_trip() {
    let selector = RegionSelector::new(SelectorKind::Elliptic)
        .select_primary(Vector::new(0, 0))
        .select_secondary(Vector::new(4, 4));

    match selector.region() {
        Region::Elliptic(e) => {
            assert_eq!(Vector::new(0, 0), e.center());
            assert_eq!(Vector::new(4, 4), e.radius());
        }
        other => panic!("expected an ellipse, got {other}"),
    }

    let cleared = selector.clear();
    assert_eq!(None, cleared.primary());
    assert_eq!(None, cleared.secondary());
    assert_eq!(Region::Empty, cleared.region());
    assert_eq!(SelectorKind::Elliptic, cleared.kind());
}

#[test]
fn test_elliptic_radius_is_absolute() {
    let selector = RegionSelector::new(SelectorKind::Elliptic)
        .select_primary(Vector::new(10, 10))
        .select_secondary(Vector::new(7, 14));
    match selector.region() {
        Region::Elliptic(e) => assert_eq!(Vector::new(3, 4), e.radius()),
        other => panic!("expected an ellipse, got {other}"),
    }
}

#[test]
fn test_wide_elliptic_selection_contains_center() {
    let region = RegionSelector::new(SelectorKind::Elliptic)
        .select_primary(Vector::new(0, 0))
        .select_secondary(Vector::new(70_000, 70_000))
        .region();
    assert!(region.contains(Vector::ZERO));
    assert!(region.contains(Vector::new(0, -70_000)));
    assert!(!region.contains(Vector::new(70_000, 70_000)));
}

#[test]
fn test_single_anchor_yields_empty() {
    for kind in [SelectorKind::Rectangular, SelectorKind::Elliptic] {
        let primary_only = RegionSelector::new(kind).select_primary(Vector::new(1, 1));
        assert_eq!(Region::Empty, primary_only.region());

        let secondary_only = RegionSelector::new(kind).select_secondary(Vector::new(1, 1));
        assert_eq!(Region::Empty, secondary_only.region());
    }
}

#[test]
fn test_secondary_overwrites() {
    let selector = RegionSelector::new(SelectorKind::Rectangular)
        .select_primary(Vector::new(0, 0))
        .select_secondary(Vector::new(2, 2))
        .select_secondary(Vector::new(5, 3));
    assert_eq!(Vector::new(5, 3), selector.region().upper_bound());
}

#[test]
fn test_polygon_needs_three_vertices() {
    let two = RegionSelector::new(SelectorKind::Polygonal)
        .select_primary(Vector::new(0, 0))
        .select_secondary(Vector::new(4, 0));
    assert_eq!(Region::Empty, two.region());

    let three = two.select_secondary(Vector::new(4, 4));
    match three.region() {
        Region::Polygonal(p) => assert_eq!(&[Vector::new(0, 0), Vector::new(4, 0), Vector::new(4, 4)], p.vertices()),
        other => panic!("expected a polygon, got {other}"),
    }
}
