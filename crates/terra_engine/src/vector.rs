use std::{
    hash::Hash,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

/// Immutable 2D integer coordinate.
///
/// Used both as a point in the grid and as a size, radius or offset.
#[derive(Copy, Clone, Debug, Default, Eq, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Hash for Vector {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0, y: 0 };
    pub const ONE: Vector = Vector { x: 1, y: 1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Vector { x, y }
    }

    pub fn with_x(self, x: i32) -> Vector {
        Vector { x, y: self.y }
    }

    pub fn with_y(self, y: i32) -> Vector {
        Vector { x: self.x, y }
    }

    pub fn abs(self) -> Vector {
        Vector::new(self.x.abs(), self.y.abs())
    }

    pub fn signum(self) -> Vector {
        Vector::new(self.x.signum(), self.y.signum())
    }

    pub fn min(self, other: Self) -> Self {
        Vector::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Vector::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Componentwise `lower <= self <= upper`.
    pub fn is_within(self, lower: Vector, upper: Vector) -> bool {
        lower.x <= self.x && self.x <= upper.x && lower.y <= self.y && self.y <= upper.y
    }
}

impl Add<Vector> for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign<Vector> for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vector> for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign<Vector> for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i32) -> Vector {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector { x: -self.x, y: -self.y }
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl From<(i32, i32)> for Vector {
    fn from(value: (i32, i32)) -> Self {
        Vector { x: value.0, y: value.1 }
    }
}

impl From<(usize, usize)> for Vector {
    fn from(value: (usize, usize)) -> Self {
        Vector {
            x: value.0 as i32,
            y: value.1 as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn test_arithmetic() {
        let a = Vector::new(3, -2);
        let b = Vector::new(1, 5);
        assert_eq!(Vector::new(4, 3), a + b);
        assert_eq!(Vector::new(2, -7), a - b);
        assert_eq!(Vector::new(6, -4), a * 2);
        assert_eq!(Vector::new(-3, 2), -a);
    }

    #[test]
    fn test_is_within() {
        let lower = Vector::new(-1, -1);
        let upper = Vector::new(2, 2);
        assert!(Vector::ZERO.is_within(lower, upper));
        assert!(upper.is_within(lower, upper));
        assert!(!Vector::new(3, 0).is_within(lower, upper));
    }
}
