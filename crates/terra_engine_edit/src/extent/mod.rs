//! Extent decorators.
//!
//! Each decorator owns exactly one inner extent and forwards to it. An
//! [`crate::EditSession`] stacks them as limited, then masked, then logged,
//! over the world.

mod limited;
mod logged;
mod masked;

pub use limited::LimitedExtent;
pub use logged::LoggedExtent;
pub use masked::MaskedExtent;
