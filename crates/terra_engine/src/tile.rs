use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-tile boolean state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TileFlags: u16 {
        /// A block occupies the tile
        const ACTIVE = 1 << 0;
        /// The block is switched off by an actuator
        const INACTIVE = 1 << 1;
        const ACTUATOR = 1 << 2;
        const HALF_BRICK = 1 << 3;

        const RED_WIRE = 1 << 4;
        const BLUE_WIRE = 1 << 5;
        const GREEN_WIRE = 1 << 6;
        const YELLOW_WIRE = 1 << 7;

        const WIRES = Self::RED_WIRE.bits() | Self::BLUE_WIRE.bits() | Self::GREEN_WIRE.bits() | Self::YELLOW_WIRE.bits();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquidKind {
    #[default]
    Water,
    Lava,
    Honey,
    Shimmer,
}

impl LiquidKind {
    pub const ALL: [LiquidKind; 4] = [LiquidKind::Water, LiquidKind::Lava, LiquidKind::Honey, LiquidKind::Shimmer];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slope {
    #[default]
    None,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Slope {
    pub const ALL: [Slope; 5] = [Slope::None, Slope::UpRight, Slope::UpLeft, Slope::DownRight, Slope::DownLeft];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// A single grid cell.
///
/// Tiles are plain values; they are always copied in and out of an extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub block: u16,
    pub wall: u16,
    pub liquid: u8,
    pub liquid_kind: LiquidKind,
    pub block_color: u8,
    pub wall_color: u8,
    pub frame_x: i16,
    pub frame_y: i16,
    pub slope: Slope,
    pub flags: TileFlags,
}

impl Tile {
    /// The blank tile: no block, no wall, no liquid.
    pub fn air() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.flags.contains(TileFlags::ACTIVE)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_block(mut self, block: u16) -> Self {
        self.block = block;
        self.flags.insert(TileFlags::ACTIVE);
        self.frame_x = -1;
        self.frame_y = -1;
        self
    }

    #[must_use]
    pub fn without_block(mut self) -> Self {
        self.block = 0;
        self.flags.remove(TileFlags::ACTIVE | TileFlags::INACTIVE | TileFlags::HALF_BRICK);
        self.slope = Slope::None;
        self.block_color = 0;
        self.frame_x = 0;
        self.frame_y = 0;
        self
    }

    #[must_use]
    pub fn with_wall(mut self, wall: u16) -> Self {
        self.wall = wall;
        self
    }

    #[must_use]
    pub fn with_liquid(mut self, kind: LiquidKind, amount: u8) -> Self {
        self.liquid_kind = kind;
        self.liquid = amount;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TileFlags) -> Self {
        self.flags.insert(flags);
        self
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_active() {
            write!(f, "(Block: {}, Wall: {}, Liquid: {})", self.block, self.wall, self.liquid)
        } else {
            write!(f, "(Air, Wall: {}, Liquid: {})", self.wall, self.liquid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_empty() {
        assert!(Tile::air().is_empty());
        assert!(!Tile::air().is_active());
    }

    #[test]
    fn test_with_block_activates() {
        let tile = Tile::air().with_block(30);
        assert!(tile.is_active());
        assert_eq!(30, tile.block);
        assert!(!tile.is_empty());

        let cleared = tile.without_block();
        assert!(!cleared.is_active());
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_liquid_kind_round_trip() {
        for kind in LiquidKind::ALL {
            assert_eq!(Some(kind), LiquidKind::from_u8(kind.to_u8()));
        }
        assert_eq!(None, LiquidKind::from_u8(9));
    }
}
