#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
mod error;
pub use error::*;

pub mod extent;
pub use extent::{LimitedExtent, LoggedExtent, MaskedExtent};

pub mod history;
pub use history::{Change, ChangeSet, History};

mod clipboard;
pub use clipboard::*;

mod edit_session;
pub use edit_session::*;

mod session;
pub use session::*;

pub mod operations;

mod tools;
pub use tools::*;

pub mod schematic;

mod config;
pub use config::*;
