//! Tile templates and weighted patterns.
//!
//! A [`Template`] rewrites part of a tile and can test whether a tile already
//! has that shape. A [`Pattern`] picks one template per application with
//! probability proportional to its weight; the random source is supplied by
//! the caller so selections are reproducible.

use serde::{Deserialize, Serialize};

use crate::{EngineError, LiquidKind, Result, Tile, TileFlags};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Template {
    /// Removes the block
    Air,
    Block(u16),
    Wall(u16),
    Liquid(LiquidKind),
    Paint(u8),
    WallPaint(u8),
    Wire(TileFlags),
    Actuator,
}

impl Template {
    pub const FULL_LIQUID: u8 = 255;

    #[must_use]
    pub fn apply(&self, tile: Tile) -> Tile {
        match *self {
            Template::Air => tile.without_block(),
            Template::Block(id) => tile.with_block(id),
            Template::Wall(id) => tile.with_wall(id),
            Template::Liquid(kind) => tile.with_liquid(kind, Self::FULL_LIQUID),
            Template::Paint(color) => Tile { block_color: color, ..tile },
            Template::WallPaint(color) => Tile { wall_color: color, ..tile },
            Template::Wire(wires) => tile.with_flags(wires & TileFlags::WIRES),
            Template::Actuator => tile.with_flags(TileFlags::ACTUATOR),
        }
    }

    pub fn matches(&self, tile: &Tile) -> bool {
        match *self {
            Template::Air => !tile.is_active(),
            Template::Block(id) => tile.is_active() && tile.block == id,
            Template::Wall(id) => tile.wall == id,
            Template::Liquid(kind) => tile.liquid > 0 && tile.liquid_kind == kind,
            Template::Paint(color) => tile.block_color == color,
            Template::WallPaint(color) => tile.wall_color == color,
            Template::Wire(wires) => tile.flags.contains(wires & TileFlags::WIRES),
            Template::Actuator => tile.flags.contains(TileFlags::ACTUATOR),
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Air => write!(f, "air"),
            Template::Block(id) => write!(f, "block {id}"),
            Template::Wall(id) => write!(f, "wall {id}"),
            Template::Liquid(kind) => write!(f, "{kind:?}"),
            Template::Paint(color) => write!(f, "paint {color}"),
            Template::WallPaint(color) => write!(f, "wall paint {color}"),
            Template::Wire(wires) => write!(f, "wire {wires:?}"),
            Template::Actuator => write!(f, "actuator"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct PatternEntry {
    template: Template,
    weight: u32,
    /// Sum of the weights up to and including this entry
    cumulative_weight: u32,
}

/// Weighted random choice over a set of templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    entries: Vec<PatternEntry>,
}

impl Pattern {
    pub fn new(weighted: Vec<(Template, u32)>) -> Result<Self> {
        if weighted.is_empty() {
            return Err(EngineError::invalid_argument("a pattern needs at least one template"));
        }

        let mut entries = Vec::with_capacity(weighted.len());
        let mut total: u32 = 0;
        for (template, weight) in weighted {
            if weight == 0 {
                return Err(EngineError::invalid_range(format!("weight of {template}"), weight));
            }
            total = total
                .checked_add(weight)
                .ok_or_else(|| EngineError::invalid_range("total pattern weight", i64::from(total) + i64::from(weight)))?;
            entries.push(PatternEntry {
                template,
                weight,
                cumulative_weight: total,
            });
        }
        Ok(Self { entries })
    }

    pub fn single(template: Template) -> Self {
        Self {
            entries: vec![PatternEntry {
                template,
                weight: 1,
                cumulative_weight: 1,
            }],
        }
    }

    pub fn total_weight(&self) -> u32 {
        self.entries.last().map_or(0, |e| e.cumulative_weight)
    }

    pub fn templates(&self) -> impl Iterator<Item = (&Template, u32)> {
        self.entries.iter().map(|e| (&e.template, e.weight))
    }

    pub fn choose(&self, rng: &mut fastrand::Rng) -> &Template {
        if self.entries.len() == 1 {
            return &self.entries[0].template;
        }
        let roll = rng.u32(0..self.total_weight());
        let idx = self.entries.partition_point(|e| e.cumulative_weight <= roll);
        &self.entries[idx.min(self.entries.len() - 1)].template
    }

    #[must_use]
    pub fn apply(&self, tile: Tile, rng: &mut fastrand::Rng) -> Tile {
        self.choose(rng).apply(tile)
    }

    pub fn matches(&self, tile: &Tile) -> bool {
        self.entries.iter().any(|e| e.template.matches(tile))
    }
}

impl From<Template> for Pattern {
    fn from(value: Template) -> Self {
        Pattern::single(value)
    }
}
