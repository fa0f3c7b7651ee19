//! Immutable point sets over [`Vector`] space.
//!
//! A [`Region`] is one of a small closed set of shapes. All shapes answer the
//! same questions (bounds, containment, iteration) and declare which resize
//! operations they support. Resizing never mutates: every operation returns a
//! new region, and an operation a shape cannot perform fails with
//! [`EngineError::UnsupportedOperation`].

mod elliptic;
mod polygonal;
mod rectangular;

pub use elliptic::EllipticRegion;
pub use polygonal::PolygonalRegion;
pub use rectangular::RectangularRegion;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, Vector};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Nothing selected
    #[default]
    Empty,
    Rectangular(RectangularRegion),
    Elliptic(EllipticRegion),
    Polygonal(PolygonalRegion),
}

impl Region {
    pub fn rectangle(position1: Vector, position2: Vector) -> Self {
        Region::Rectangular(RectangularRegion::new(position1, position2))
    }

    pub fn ellipse(center: Vector, radius: Vector) -> Self {
        Region::Elliptic(EllipticRegion::new(center, radius))
    }

    pub fn polygon(vertices: Vec<Vector>) -> Result<Self> {
        Ok(Region::Polygonal(PolygonalRegion::new(vertices)?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Empty => "empty",
            Region::Rectangular(_) => "rectangular",
            Region::Elliptic(_) => "elliptic",
            Region::Polygonal(_) => "polygonal",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Region::Empty)
    }

    pub fn lower_bound(&self) -> Vector {
        match self {
            Region::Empty => Vector::ZERO,
            Region::Rectangular(r) => r.lower_bound(),
            Region::Elliptic(r) => r.lower_bound(),
            Region::Polygonal(r) => r.lower_bound(),
        }
    }

    pub fn upper_bound(&self) -> Vector {
        match self {
            Region::Empty => Vector::ZERO,
            Region::Rectangular(r) => r.upper_bound(),
            Region::Elliptic(r) => r.upper_bound(),
            Region::Polygonal(r) => r.upper_bound(),
        }
    }

    /// `upper_bound - lower_bound + ONE`; zero for the empty region.
    pub fn dimensions(&self) -> Vector {
        if self.is_empty() {
            return Vector::ZERO;
        }
        self.upper_bound() - self.lower_bound() + Vector::ONE
    }

    pub fn center(&self) -> Vector {
        match self {
            Region::Elliptic(r) => r.center(),
            _ => {
                let lower = self.lower_bound();
                let upper = self.upper_bound();
                Vector::new(lower.x + (upper.x - lower.x) / 2, lower.y + (upper.y - lower.y) / 2)
            }
        }
    }

    pub fn contains(&self, position: Vector) -> bool {
        match self {
            Region::Empty => false,
            Region::Rectangular(r) => r.contains(position),
            Region::Elliptic(r) => r.contains(position),
            Region::Polygonal(r) => r.contains(position),
        }
    }

    pub fn can_expand(&self) -> bool {
        matches!(self, Region::Rectangular(_) | Region::Elliptic(_))
    }

    pub fn can_contract(&self) -> bool {
        matches!(self, Region::Rectangular(_) | Region::Elliptic(_))
    }

    pub fn can_shift(&self) -> bool {
        !self.is_empty()
    }

    pub fn expand(&self, delta: Vector) -> Result<Region> {
        match self {
            Region::Rectangular(r) => Ok(Region::Rectangular(r.expand(delta))),
            Region::Elliptic(r) => Ok(Region::Elliptic(r.expand(delta))),
            _ => Err(self.unsupported("expand")),
        }
    }

    pub fn contract(&self, delta: Vector) -> Result<Region> {
        match self {
            Region::Rectangular(r) => Ok(Region::Rectangular(r.contract(delta)?)),
            Region::Elliptic(r) => Ok(Region::Elliptic(r.contract(delta)?)),
            _ => Err(self.unsupported("contract")),
        }
    }

    pub fn shift(&self, offset: Vector) -> Result<Region> {
        match self {
            Region::Empty => Err(self.unsupported("shift")),
            Region::Rectangular(r) => Ok(Region::Rectangular(r.shift(offset))),
            Region::Elliptic(r) => Ok(Region::Elliptic(r.shift(offset))),
            Region::Polygonal(r) => Ok(Region::Polygonal(r.shift(offset))),
        }
    }

    pub fn inset(&self, amount: i32) -> Result<Region> {
        match self {
            Region::Rectangular(r) => Ok(Region::Rectangular(r.inset(amount)?)),
            Region::Elliptic(r) => Ok(Region::Elliptic(r.inset(amount)?)),
            _ => Err(self.unsupported("inset")),
        }
    }

    pub fn outset(&self, amount: i32) -> Result<Region> {
        match self {
            Region::Rectangular(r) => Ok(Region::Rectangular(r.outset(amount)?)),
            Region::Elliptic(r) => Ok(Region::Elliptic(r.outset(amount))),
            _ => Err(self.unsupported("outset")),
        }
    }

    /// Every contained position, row by row. Each call starts from scratch.
    pub fn positions(&self) -> Positions<'_> {
        Positions::new(self)
    }

    /// Number of contained positions.
    pub fn area(&self) -> usize {
        self.positions().count()
    }

    fn unsupported(&self, operation: &str) -> EngineError {
        EngineError::unsupported(operation, self.name())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Empty => write!(f, "empty region"),
            Region::Rectangular(r) => write!(f, "rectangle {} - {}", r.lower_bound(), r.upper_bound()),
            Region::Elliptic(r) => write!(f, "ellipse at {} with radius {}", r.center(), r.radius()),
            Region::Polygonal(r) => write!(f, "polygon with {} vertices", r.vertices().len()),
        }
    }
}

impl From<RectangularRegion> for Region {
    fn from(value: RectangularRegion) -> Self {
        Region::Rectangular(value)
    }
}

impl From<EllipticRegion> for Region {
    fn from(value: EllipticRegion) -> Self {
        Region::Elliptic(value)
    }
}

impl From<PolygonalRegion> for Region {
    fn from(value: PolygonalRegion) -> Self {
        Region::Polygonal(value)
    }
}

/// Lazy scan of a region's bounding box yielding the contained positions.
pub struct Positions<'a> {
    region: &'a Region,
    lower: Vector,
    upper: Vector,
    next: Option<Vector>,
}

impl<'a> Positions<'a> {
    fn new(region: &'a Region) -> Self {
        let lower = region.lower_bound();
        let upper = region.upper_bound();
        let next = if region.is_empty() { None } else { Some(lower) };
        Self { region, lower, upper, next }
    }

    fn advance(&self, pos: Vector) -> Option<Vector> {
        if pos.x < self.upper.x {
            Some(pos.with_x(pos.x + 1))
        } else if pos.y < self.upper.y {
            Some(Vector::new(self.lower.x, pos.y + 1))
        } else {
            None
        }
    }
}

impl Iterator for Positions<'_> {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        while let Some(pos) = self.next {
            self.next = self.advance(pos);
            if self.region.contains(pos) {
                return Some(pos);
            }
        }
        None
    }
}
