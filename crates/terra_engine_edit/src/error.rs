use terra_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    // === History ===
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    // === Session ===
    #[error("No region selected")]
    NoSelection,

    #[error("Clipboard is empty")]
    EmptyClipboard,

    // === Schematics ===
    #[error("Invalid schematic: {message}")]
    InvalidSchematic { message: String },

    #[error("Unsupported schematic version: {version}")]
    UnsupportedSchematicVersion { version: u16 },

    // === External Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, EditError>;

impl EditError {
    pub fn invalid_schematic(message: impl Into<String>) -> Self {
        Self::InvalidSchematic { message: message.into() }
    }
}
