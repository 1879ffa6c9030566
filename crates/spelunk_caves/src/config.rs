//! # Decorator Configuration
//!
//! Tunables for vein placement and decoration, loaded from TOML.
//!
//! Every key is optional; an empty document yields [`DecoratorConfig::default`].
//!
//! ```toml
//! replaceable = ["stone", "deepslate", "tuff"]
//! vein_density = 150
//! max_veins = 6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CaveError, CaveResult};
use crate::material::Material;

/// Decorator tunables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoratorConfig {
    /// Natural materials the decorator may rewrite.
    pub replaceable: Vec<Material>,
    /// Horizontally exposed candidates per vein.
    pub vein_density: u32,
    /// Upper bound on veins per chunk.
    pub max_veins: u32,
    /// Upper bound of the random addend to the vein count.
    pub vein_jitter: u32,
    /// Deep ore variants are used below this height.
    pub deep_ore_below: i32,
    /// Walls and ceilings below this height are left alone.
    pub bedrock_buffer: i32,
    /// Spacing of the mountain rafter grid.
    pub rafter_interval: i32,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            replaceable: Material::DEFAULT_REPLACEABLE.to_vec(),
            vein_density: 100,
            max_veins: 8,
            vein_jitter: 0,
            deep_ore_below: 4,
            bedrock_buffer: 4,
            rafter_interval: 6,
        }
    }
}

impl DecoratorConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`CaveError::InvalidConfig`] on malformed TOML, unknown keys
    /// or values rejected by [`DecoratorConfig::validate`].
    pub fn from_toml_str(source: &str) -> CaveResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CaveError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CaveError::ConfigRead`] if the file cannot be read or parsed,
    /// and [`CaveError::InvalidConfig`] if validation fails.
    pub fn load(path: impl AsRef<Path>) -> CaveResult<Self> {
        let path = path.as_ref();
        let read_error = |reason: String| CaveError::ConfigRead {
            path: path.display().to_string(),
            reason,
        };
        let source = std::fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
        let config: Self = toml::from_str(&source).map_err(|e| read_error(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded decorator config");
        Ok(config)
    }

    /// Checks values that would stall or break decoration.
    ///
    /// # Errors
    ///
    /// Returns [`CaveError::InvalidConfig`] naming the offending key.
    pub fn validate(&self) -> CaveResult<()> {
        if self.replaceable.is_empty() {
            return Err(CaveError::InvalidConfig("replaceable must not be empty".into()));
        }
        if self.vein_density == 0 {
            return Err(CaveError::InvalidConfig("vein_density must be positive".into()));
        }
        if self.rafter_interval <= 0 {
            return Err(CaveError::InvalidConfig("rafter_interval must be positive".into()));
        }
        if let Some(bad) = self
            .replaceable
            .iter()
            .find(|m| m.is_empty() || m.is_liquid())
        {
            return Err(CaveError::InvalidConfig(format!(
                "replaceable contains non-solid material {bad:?}"
            )));
        }
        Ok(())
    }

    /// Returns true if `material` may be rewritten.
    #[inline]
    #[must_use]
    pub fn is_replaceable(&self, material: Material) -> bool {
        self.replaceable.contains(&material)
    }
}
