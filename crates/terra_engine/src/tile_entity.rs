use serde::{Deserialize, Serialize};

use crate::Vector;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub stack: i32,
    pub prefix: u8,
}

impl Item {
    pub fn new(id: i32, stack: i32, prefix: u8) -> Self {
        Self { id, stack, prefix }
    }

    pub fn is_empty(&self) -> bool {
        self.id == 0 || self.stack <= 0
    }
}

/// An auxiliary object anchored at a grid position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileEntity {
    Sign { position: Vector, text: String },
    Chest { position: Vector, name: String, items: Vec<Item> },
    ItemFrame { position: Vector, item: Item },
}

impl TileEntity {
    pub fn position(&self) -> Vector {
        match self {
            TileEntity::Sign { position, .. } | TileEntity::Chest { position, .. } | TileEntity::ItemFrame { position, .. } => *position,
        }
    }

    /// Returns a copy of this entity moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector) -> TileEntity {
        let mut result = self.clone();
        match &mut result {
            TileEntity::Sign { position, .. } | TileEntity::Chest { position, .. } | TileEntity::ItemFrame { position, .. } => {
                *position += offset;
            }
        }
        result
    }

    /// Returns a copy of this entity placed at `position`.
    #[must_use]
    pub fn at(&self, position: Vector) -> TileEntity {
        self.translated(position - self.position())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            TileEntity::Sign { .. } => "sign",
            TileEntity::Chest { .. } => "chest",
            TileEntity::ItemFrame { .. } => "item frame",
        }
    }
}

impl std::fmt::Display for TileEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind_name(), self.position())
    }
}
