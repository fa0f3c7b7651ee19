use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, Vector};

/// Axis aligned box spanned by two opposite corners.
///
/// The corners may be given in any order; bounds are always canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectangularRegion {
    position1: Vector,
    position2: Vector,
}

impl RectangularRegion {
    pub fn new(position1: Vector, position2: Vector) -> Self {
        Self { position1, position2 }
    }

    pub fn position1(&self) -> Vector {
        self.position1
    }

    pub fn position2(&self) -> Vector {
        self.position2
    }

    pub fn lower_bound(&self) -> Vector {
        self.position1.min(self.position2)
    }

    pub fn upper_bound(&self) -> Vector {
        self.position1.max(self.position2)
    }

    pub fn contains(&self, position: Vector) -> bool {
        position.is_within(self.lower_bound(), self.upper_bound())
    }

    /// Grows each axis towards the sign of the matching component of `delta`.
    pub fn expand(&self, delta: Vector) -> Self {
        let mut lower = self.lower_bound();
        let mut upper = self.upper_bound();
        if delta.x > 0 {
            upper.x += delta.x;
        } else {
            lower.x += delta.x;
        }
        if delta.y > 0 {
            upper.y += delta.y;
        } else {
            lower.y += delta.y;
        }
        Self::new(lower, upper)
    }

    /// Pulls in the face opposite to the sign of each component of `delta`.
    ///
    /// A positive component moves the lower face up, a negative one moves the upper face down.
    pub fn contract(&self, delta: Vector) -> Result<Self> {
        let mut lower = self.lower_bound();
        let mut upper = self.upper_bound();
        if delta.x > 0 {
            lower.x += delta.x;
        } else {
            upper.x += delta.x;
        }
        if delta.y > 0 {
            lower.y += delta.y;
        } else {
            upper.y += delta.y;
        }
        Self::checked(lower, upper)
    }

    pub fn shift(&self, offset: Vector) -> Self {
        Self::new(self.position1 + offset, self.position2 + offset)
    }

    pub fn inset(&self, amount: i32) -> Result<Self> {
        let delta = Vector::new(amount, amount);
        Self::checked(self.lower_bound() + delta, self.upper_bound() - delta)
    }

    pub fn outset(&self, amount: i32) -> Result<Self> {
        let delta = Vector::new(amount, amount);
        Self::checked(self.lower_bound() - delta, self.upper_bound() + delta)
    }

    fn checked(lower: Vector, upper: Vector) -> Result<Self> {
        if lower.x > upper.x {
            return Err(EngineError::invalid_range("rectangle width", upper.x - lower.x + 1));
        }
        if lower.y > upper.y {
            return Err(EngineError::invalid_range("rectangle height", upper.y - lower.y + 1));
        }
        Ok(Self::new(lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_by_direction() {
        let region = RectangularRegion::new(Vector::new(0, 0), Vector::new(4, 4));
        let grown = region.expand(Vector::new(2, -3));
        assert_eq!(Vector::new(0, -3), grown.lower_bound());
        assert_eq!(Vector::new(6, 4), grown.upper_bound());
    }

    #[test]
    fn test_contract_by_direction() {
        let region = RectangularRegion::new(Vector::new(0, 0), Vector::new(4, 4));
        let shrunk = region.contract(Vector::new(1, -2)).unwrap();
        assert_eq!(Vector::new(1, 0), shrunk.lower_bound());
        assert_eq!(Vector::new(4, 2), shrunk.upper_bound());
    }

    #[test]
    fn test_contract_past_opposite_face_fails() {
        let region = RectangularRegion::new(Vector::new(0, 0), Vector::new(4, 4));
        assert!(matches!(region.contract(Vector::new(5, 0)), Err(EngineError::InvalidRange { .. })));
        assert!(region.inset(3).is_err());
        assert!(region.inset(2).is_ok());
    }
}
