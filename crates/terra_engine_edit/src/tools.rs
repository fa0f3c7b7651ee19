//! Tools invoked at a single grid position, e.g. from a click.
//!
//! A tool writes through whatever extent it is handed and reports how many
//! writes were accepted.

use fastrand::Rng;
use terra_engine::{EngineError, Extent, Pattern, Region, Template, Tile, Vector};

use crate::{Result, operations};

/// Paints a pattern inside a circle around the target position.
#[derive(Clone, Debug)]
pub struct BrushTool {
    pattern: Pattern,
    radius: i32,
    rng: Rng,
}

impl BrushTool {
    pub fn new(pattern: Pattern, radius: i32, seed: Option<u64>) -> Result<Self> {
        if radius < 0 {
            return Err(EngineError::invalid_range("brush radius", radius).into());
        }
        let rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Ok(Self { pattern, radius, rng })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// The region the brush covers when applied at `center`.
    pub fn footprint(&self, center: Vector) -> Region {
        Region::ellipse(center, Vector::new(self.radius, self.radius))
    }

    pub fn apply(&mut self, extent: &mut dyn Extent, position: Vector) -> usize {
        let region = self.footprint(position);
        operations::set(extent, &region, &self.pattern, &mut self.rng)
    }
}

#[derive(Clone, Debug, Default)]
pub enum Tool {
    #[default]
    None,

    // === Writers ===
    Brush(BrushTool),
    /// Removes the blocks inside a circle; walls and liquid stay
    Eraser { radius: i32 },

    // === Readers ===
    /// Samples the tile under the cursor
    Pipette { sampled: Option<Tile> },
}

impl Tool {
    pub fn eraser(radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(EngineError::invalid_range("eraser radius", radius).into());
        }
        Ok(Tool::Eraser { radius })
    }

    pub fn pipette() -> Self {
        Tool::Pipette { sampled: None }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::None => "none",
            Tool::Brush(_) => "brush",
            Tool::Eraser { .. } => "eraser",
            Tool::Pipette { .. } => "pipette",
        }
    }

    /// Radius of the area the tool touches, if it has one.
    pub fn radius(&self) -> Option<i32> {
        match self {
            Tool::Brush(brush) => Some(brush.radius()),
            Tool::Eraser { radius } => Some(*radius),
            Tool::None | Tool::Pipette { .. } => None,
        }
    }

    /// Whether applying the tool can modify the extent.
    pub fn is_writer(&self) -> bool {
        matches!(self, Tool::Brush(_) | Tool::Eraser { .. })
    }

    /// The tile last picked up by a pipette.
    pub fn sampled(&self) -> Option<Tile> {
        match self {
            Tool::Pipette { sampled } => *sampled,
            _ => None,
        }
    }

    pub fn apply(&mut self, extent: &mut dyn Extent, position: Vector) -> usize {
        match self {
            Tool::None => 0,
            Tool::Brush(brush) => brush.apply(extent, position),
            Tool::Eraser { radius } => {
                let region = Region::ellipse(position, Vector::new(*radius, *radius));
                let mut rng = Rng::with_seed(0);
                operations::set(extent, &region, &Pattern::single(Template::Air), &mut rng)
            }
            Tool::Pipette { sampled } => {
                if extent.is_in_bounds(position) {
                    *sampled = Some(extent.get_tile(position));
                }
                0
            }
        }
    }
}
