//! # Settings
//!
//! JSON settings file for the consolidation pipeline. Every field is
//! optional; omitted fields take the built-in defaults.
//!
//! ```json
//! {
//!   "merge_threshold": 0.1,
//!   "backend": "tree",
//!   "containment": "winding_number",
//!   "keywords": { "whitelist": ["PCP", ",CM"], "blacklist": ["SET"] }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::containment::ContainmentRule;
use super::index::NeighborBackend;
use crate::core::config::{DEFAULT_MERGE_THRESHOLD, DEFAULT_PROXIMITY_THRESHOLD};
use crate::core::merge::{Mean, Median};
use crate::core::proximity::{Euclidean, Horizontal};
use crate::core::{ConfigError, ConsolidationConfig, KeywordRules};

/// Errors loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(#[from] ConfigError),
}

/// Distance function selectable from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceKind {
    #[default]
    Euclidean,
    Horizontal,
}

/// Merge function selectable from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeKind {
    #[default]
    Mean,
    Median,
}

/// Pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub proximity_threshold: f64,
    pub merge_threshold: f64,
    pub distance: DistanceKind,
    pub merge: MergeKind,
    pub backend: NeighborBackend,
    pub containment: ContainmentRule,
    pub keywords: KeywordRules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
            merge_threshold: DEFAULT_MERGE_THRESHOLD,
            distance: DistanceKind::default(),
            merge: MergeKind::default(),
            backend: NeighborBackend::default(),
            containment: ContainmentRule::default(),
            keywords: KeywordRules::default(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text)?;
        log::debug!("Loaded settings from {:?}: {:?}", path, settings);
        Ok(settings)
    }

    /// Parse settings from JSON text
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.consolidation_config()?;
        Ok(settings)
    }

    /// Build a validated consolidation config
    pub fn consolidation_config(&self) -> Result<ConsolidationConfig, ConfigError> {
        let config = ConsolidationConfig::new(self.proximity_threshold, self.merge_threshold);
        let config = match self.distance {
            DistanceKind::Euclidean => config.with_proximity(Euclidean),
            DistanceKind::Horizontal => config.with_proximity(Horizontal),
        };
        let config = match self.merge {
            MergeKind::Mean => config.with_merge(Mean),
            MergeKind::Median => config.with_merge(Median),
        };
        config.validate()?;
        Ok(config)
    }
}
