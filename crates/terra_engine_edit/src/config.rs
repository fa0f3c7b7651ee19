use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use terra_engine::EngineError;

use crate::Result;

/// Persistent editing preferences, stored as TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Number of edit sessions kept for undo
    pub history_limit: i64,
    /// Writes allowed per edit session; negative means unlimited
    pub default_limit: i64,
    pub max_brush_radius: i32,
    /// Clicks set selection anchors instead of using the tool
    pub wand_mode: bool,
    /// Seed for pattern selection; `None` seeds from the system
    pub seed: Option<u64>,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            history_limit: 15,
            default_limit: -1,
            max_brush_radius: 32,
            wand_mode: false,
            seed: None,
        }
    }
}

impl EditConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EditConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`EditConfig::load`], but falls back to the defaults when the file
    /// cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("error loading config {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn store(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let mut write_name = path.to_path_buf();
        write_name.set_extension("new");

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&write_name, toml_string)?;
        fs::rename(&write_name, path)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_limit < 0 {
            return Err(EngineError::invalid_range("history_limit", self.history_limit).into());
        }
        if i32::try_from(self.default_limit).is_err() {
            return Err(EngineError::invalid_range("default_limit", self.default_limit).into());
        }
        if self.max_brush_radius < 0 {
            return Err(EngineError::invalid_range("max_brush_radius", self.max_brush_radius).into());
        }
        Ok(())
    }

    /// A pattern random source seeded from `seed` when one is set.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EditError;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = EditConfig::from_toml_str("history_limit = 3\n").unwrap();
        assert_eq!(3, config.history_limit);
        assert_eq!(-1, config.default_limit);
        assert_eq!(32, config.max_brush_radius);
        assert_eq!(None, config.seed);
    }

    #[test]
    fn test_negative_history_limit() {
        let err = EditConfig::from_toml_str("history_limit = -2").unwrap_err();
        assert!(matches!(err, EditError::Engine(EngineError::InvalidRange { value: -2, .. })));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(EditConfig::from_toml_str("history_limit = \"many\""), Err(EditError::Config(_))));
    }
}
