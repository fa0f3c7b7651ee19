//! Incremental builders turning raw input points into a [`Region`].
//!
//! Selectors are persistent values: every transition returns a new selector and
//! leaves the receiver untouched.

use serde::{Deserialize, Serialize};

use crate::{PolygonalRegion, Region, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectorKind {
    Rectangular,
    Elliptic,
    Polygonal,
}

impl SelectorKind {
    pub const ALL: [SelectorKind; 3] = [SelectorKind::Rectangular, SelectorKind::Elliptic, SelectorKind::Polygonal];
}

impl std::fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectorKind::Rectangular => write!(f, "Rectangular"),
            SelectorKind::Elliptic => write!(f, "Elliptic"),
            SelectorKind::Polygonal => write!(f, "Polygonal"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionSelector {
    /// Two opposite corners
    Rectangular { primary: Option<Vector>, secondary: Option<Vector> },
    /// Center and a point on the bounding box
    Elliptic { primary: Option<Vector>, secondary: Option<Vector> },
    /// Vertex list, first entry is the primary point
    Polygonal { vertices: Vec<Vector> },
}

impl Default for RegionSelector {
    fn default() -> Self {
        RegionSelector::new(SelectorKind::Rectangular)
    }
}

impl RegionSelector {
    pub fn new(kind: SelectorKind) -> Self {
        match kind {
            SelectorKind::Rectangular => RegionSelector::Rectangular {
                primary: None,
                secondary: None,
            },
            SelectorKind::Elliptic => RegionSelector::Elliptic {
                primary: None,
                secondary: None,
            },
            SelectorKind::Polygonal => RegionSelector::Polygonal { vertices: Vec::new() },
        }
    }

    pub fn kind(&self) -> SelectorKind {
        match self {
            RegionSelector::Rectangular { .. } => SelectorKind::Rectangular,
            RegionSelector::Elliptic { .. } => SelectorKind::Elliptic,
            RegionSelector::Polygonal { .. } => SelectorKind::Polygonal,
        }
    }

    pub fn primary(&self) -> Option<Vector> {
        match self {
            RegionSelector::Rectangular { primary, .. } | RegionSelector::Elliptic { primary, .. } => *primary,
            RegionSelector::Polygonal { vertices } => vertices.first().copied(),
        }
    }

    /// The second anchor, or the most recently appended polygon vertex.
    pub fn secondary(&self) -> Option<Vector> {
        match self {
            RegionSelector::Rectangular { secondary, .. } | RegionSelector::Elliptic { secondary, .. } => *secondary,
            RegionSelector::Polygonal { vertices } if vertices.len() > 1 => vertices.last().copied(),
            RegionSelector::Polygonal { .. } => None,
        }
    }

    /// Sets the first anchor. A polygon restarts from this single vertex.
    #[must_use]
    pub fn select_primary(&self, position: Vector) -> Self {
        match self {
            RegionSelector::Rectangular { secondary, .. } => RegionSelector::Rectangular {
                primary: Some(position),
                secondary: *secondary,
            },
            RegionSelector::Elliptic { secondary, .. } => RegionSelector::Elliptic {
                primary: Some(position),
                secondary: *secondary,
            },
            RegionSelector::Polygonal { .. } => RegionSelector::Polygonal { vertices: vec![position] },
        }
    }

    /// Sets the second anchor, or appends a vertex once a polygon has its first one.
    #[must_use]
    pub fn select_secondary(&self, position: Vector) -> Self {
        match self {
            RegionSelector::Rectangular { primary, .. } => RegionSelector::Rectangular {
                primary: *primary,
                secondary: Some(position),
            },
            RegionSelector::Elliptic { primary, .. } => RegionSelector::Elliptic {
                primary: *primary,
                secondary: Some(position),
            },
            RegionSelector::Polygonal { vertices } => {
                let mut vertices = vertices.clone();
                if !vertices.is_empty() {
                    vertices.push(position);
                }
                RegionSelector::Polygonal { vertices }
            }
        }
    }

    #[must_use]
    pub fn clear(&self) -> Self {
        RegionSelector::new(self.kind())
    }

    /// The region described by the current anchors, or [`Region::Empty`] while incomplete.
    pub fn region(&self) -> Region {
        match self {
            RegionSelector::Rectangular {
                primary: Some(p1),
                secondary: Some(p2),
            } => Region::rectangle(*p1, *p2),
            RegionSelector::Elliptic {
                primary: Some(center),
                secondary: Some(p2),
            } => Region::ellipse(*center, (*p2 - *center).abs()),
            RegionSelector::Polygonal { vertices } if vertices.len() >= PolygonalRegion::MIN_VERTICES => {
                Region::polygon(vertices.clone()).unwrap_or_default()
            }
            _ => Region::Empty,
        }
    }
}
