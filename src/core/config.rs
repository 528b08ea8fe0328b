//! # Configuration
//!
//! Consolidation configuration. Thresholds and the pluggable distance and
//! merge functions are set here rather than hardcoded in the engine.

use std::sync::Arc;

use super::merge::{Mean, Merge};
use super::proximity::{Euclidean, Proximity};

/// Distance within which points are reported as nearby
pub const DEFAULT_PROXIMITY_THRESHOLD: f64 = 2.0;

/// Distance within which points are the same physical mark
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.15;

/// Invalid threshold combinations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} threshold must be finite and non-negative, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("merge threshold ({merge}) exceeds proximity threshold ({proximity})")]
    MergeExceedsProximity { merge: f64, proximity: f64 },
}

/// Consolidation configuration
#[derive(Clone)]
pub struct ConsolidationConfig {
    /// Points within this distance of an anchor are reported as nearby.
    /// Also gates the merge search: nothing nearby means nothing to merge.
    pub proximity_threshold: f64,

    /// Points within this distance (inclusive) of an anchor are merged
    pub merge_threshold: f64,

    /// Distance function
    pub proximity: Arc<dyn Proximity>,

    /// Cluster collapse function
    pub merge: Arc<dyn Merge>,
}

impl ConsolidationConfig {
    /// Create a configuration with explicit thresholds
    ///
    /// Uses Euclidean distance and mean merge.
    pub fn new(proximity_threshold: f64, merge_threshold: f64) -> Self {
        Self {
            proximity_threshold,
            merge_threshold,
            proximity: Arc::new(Euclidean),
            merge: Arc::new(Mean),
        }
    }

    pub fn with_proximity_threshold(mut self, threshold: f64) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    pub fn with_merge_threshold(mut self, threshold: f64) -> Self {
        self.merge_threshold = threshold;
        self
    }

    /// Set a custom distance function
    pub fn with_proximity<P: Proximity + 'static>(mut self, proximity: P) -> Self {
        self.proximity = Arc::new(proximity);
        self
    }

    /// Set a custom merge function
    pub fn with_merge<M: Merge + 'static>(mut self, merge: M) -> Self {
        self.merge = Arc::new(merge);
        self
    }

    /// Check thresholds are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("proximity", self.proximity_threshold),
            ("merge", self.merge_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        if self.merge_threshold > self.proximity_threshold {
            return Err(ConfigError::MergeExceedsProximity {
                merge: self.merge_threshold,
                proximity: self.proximity_threshold,
            });
        }
        Ok(())
    }
}

impl Default for ConsolidationConfig {
    /// 2.0 nearby, 0.15 merge, Euclidean distance, mean merge
    fn default() -> Self {
        Self::new(DEFAULT_PROXIMITY_THRESHOLD, DEFAULT_MERGE_THRESHOLD)
    }
}

impl std::fmt::Debug for ConsolidationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsolidationConfig")
            .field("proximity_threshold", &self.proximity_threshold)
            .field("merge_threshold", &self.merge_threshold)
            .field("proximity", &self.proximity.name())
            .field("merge", &self.merge.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::merge::Median;
    use crate::core::proximity::Horizontal;

    #[test]
    fn test_default_config() {
        let config = ConsolidationConfig::default();
        assert_eq!(config.proximity_threshold, 2.0);
        assert_eq!(config.merge_threshold, 0.15);
        assert_eq!(config.proximity.name(), "euclidean");
        assert_eq!(config.merge.name(), "mean");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = ConsolidationConfig::default()
            .with_proximity_threshold(5.0)
            .with_merge_threshold(0.5)
            .with_proximity(Horizontal)
            .with_merge(Median);

        assert_eq!(config.proximity_threshold, 5.0);
        assert_eq!(config.merge_threshold, 0.5);
        assert_eq!(config.proximity.name(), "horizontal");
        assert_eq!(config.merge.name(), "median");
    }

    #[test]
    fn test_merge_exceeds_proximity() {
        let config = ConsolidationConfig::new(0.1, 0.15);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MergeExceedsProximity {
                merge: 0.15,
                proximity: 0.1
            })
        );
    }

    #[test]
    fn test_negative_threshold() {
        let config = ConsolidationConfig::default().with_merge_threshold(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { name: "merge", .. })
        ));
    }

    #[test]
    fn test_nan_threshold() {
        let config = ConsolidationConfig::default().with_proximity_threshold(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { name: "proximity", .. })
        ));
    }

    #[test]
    fn test_debug_names_functions() {
        let dbg = format!("{:?}", ConsolidationConfig::default());
        assert!(dbg.contains("euclidean"));
        assert!(dbg.contains("mean"));
    }
}
