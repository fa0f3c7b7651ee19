use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, Vector};

/// Axis aligned ellipse described by a center and a per-axis radius.
///
/// A zero radius on an axis degenerates the ellipse to a segment (or a point)
/// on that axis: containment then requires exact equality with the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EllipticRegion {
    center: Vector,
    radius: Vector,
}

impl EllipticRegion {
    /// Radius components are stored as magnitudes.
    pub fn new(center: Vector, radius: Vector) -> Self {
        Self { center, radius: radius.abs() }
    }

    pub fn center(&self) -> Vector {
        self.center
    }

    pub fn radius(&self) -> Vector {
        self.radius
    }

    pub fn lower_bound(&self) -> Vector {
        self.center - self.radius
    }

    pub fn upper_bound(&self) -> Vector {
        self.center + self.radius
    }

    /// `(dx/rx)² + (dy/ry)² <= 1`, evaluated in integers.
    pub fn contains(&self, position: Vector) -> bool {
        let d = position - self.center;
        let (dx, dy) = (i128::from(d.x), i128::from(d.y));
        let (rx, ry) = (i128::from(self.radius.x), i128::from(self.radius.y));

        match (rx == 0, ry == 0) {
            (true, true) => dx == 0 && dy == 0,
            (true, false) => dx == 0 && dy * dy <= ry * ry,
            (false, true) => dy == 0 && dx * dx <= rx * rx,
            (false, false) => dx * dx * ry * ry + dy * dy * rx * rx <= rx * rx * ry * ry,
        }
    }

    /// Adds the magnitude of each component of `delta` to the radius.
    pub fn expand(&self, delta: Vector) -> Self {
        Self::new(self.center, self.radius + delta.abs())
    }

    /// Removes the magnitude of each component of `delta` from the radius.
    pub fn contract(&self, delta: Vector) -> Result<Self> {
        let radius = self.radius - delta.abs();
        if radius.x < 0 {
            return Err(EngineError::invalid_range("ellipse radius x", radius.x));
        }
        if radius.y < 0 {
            return Err(EngineError::invalid_range("ellipse radius y", radius.y));
        }
        Ok(Self::new(self.center, radius))
    }

    pub fn shift(&self, offset: Vector) -> Self {
        Self::new(self.center + offset, self.radius)
    }

    pub fn inset(&self, amount: i32) -> Result<Self> {
        self.contract(Vector::new(amount, amount))
    }

    pub fn outset(&self, amount: i32) -> Self {
        self.expand(Vector::new(amount, amount))
    }
}
