#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
mod error;
pub use error::*;

mod vector;
pub use vector::*;

mod tile;
pub use tile::*;

mod tile_entity;
pub use tile_entity::*;

pub mod region;
pub use region::{EllipticRegion, PolygonalRegion, Positions, RectangularRegion, Region};

mod selector;
pub use selector::*;

mod extent;
pub use extent::*;

mod tile_grid;
pub use tile_grid::*;

mod template;
pub use template::*;

mod mask;
pub use mask::*;
