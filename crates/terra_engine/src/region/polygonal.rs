use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, Vector};

/// Closed polygon over an ordered vertex list (not necessarily convex).
///
/// Containment uses the even-odd rule; points on an edge are inside.
/// Only translation is supported.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolygonalRegion {
    vertices: Vec<Vector>,
}

impl PolygonalRegion {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(vertices: Vec<Vector>) -> Result<Self> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(EngineError::invalid_argument(format!(
                "a polygon needs at least {} vertices, got {}",
                Self::MIN_VERTICES,
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn lower_bound(&self) -> Vector {
        self.vertices.iter().copied().reduce(Vector::min).unwrap_or_default()
    }

    /// One past the maximum vertex coordinate on each axis.
    pub fn upper_bound(&self) -> Vector {
        self.vertices.iter().copied().reduce(Vector::max).unwrap_or_default() + Vector::ONE
    }

    pub fn contains(&self, position: Vector) -> bool {
        let n = self.vertices.len();
        if n < Self::MIN_VERTICES {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if is_on_segment(a, b, position) {
                return true;
            }

            if (a.y > position.y) != (b.y > position.y) {
                // compare position.x with the x of the edge at position.y without dividing
                let dy = (b.y - a.y) as i64;
                let lhs = (position.x - a.x) as i64 * dy;
                let rhs = (position.y - a.y) as i64 * (b.x - a.x) as i64;
                let crosses = if dy > 0 { lhs < rhs } else { lhs > rhs };
                if crosses {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    pub fn shift(&self, offset: Vector) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
        }
    }
}

fn is_on_segment(a: Vector, b: Vector, p: Vector) -> bool {
    let cross = (b.x - a.x) as i64 * (p.y - a.y) as i64 - (b.y - a.y) as i64 * (p.x - a.x) as i64;
    cross == 0 && p.is_within(a.min(b), a.max(b))
}
