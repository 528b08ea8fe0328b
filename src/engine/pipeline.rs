//! # Pipeline
//!
//! Boundary filter (optional) followed by consolidation, the order the
//! point database is rebuilt in.

use serde::Serialize;

use super::consolidation::{Consolidation, ConsolidationEngine};
use super::filter::BoundaryFilter;
use crate::adapters::settings::Settings;
use crate::core::{Boundary, ConfigError, SurveyPoint};

/// Output of a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineOutcome {
    /// Points dropped by the boundary filter, in input order
    pub outside: Vec<SurveyPoint>,

    /// Consolidation of the points that passed the filter
    pub consolidation: Consolidation,
}

/// Filter-then-consolidate
pub struct Pipeline {
    filter: Option<BoundaryFilter>,
    engine: ConsolidationEngine,
}

impl Pipeline {
    pub fn new(engine: ConsolidationEngine) -> Self {
        Self {
            filter: None,
            engine,
        }
    }

    /// Build from settings, with an optional boundary
    pub fn from_settings(settings: &Settings, boundary: Option<Boundary>) -> Result<Self, ConfigError> {
        let engine =
            ConsolidationEngine::new(settings.consolidation_config()?)?.with_backend(settings.backend);
        let filter = boundary
            .map(|b| BoundaryFilter::new(b).with_rule(settings.containment.build()));

        Ok(Self { filter, engine })
    }

    pub fn with_filter(mut self, filter: BoundaryFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn engine(&self) -> &ConsolidationEngine {
        &self.engine
    }

    pub fn filter(&self) -> Option<&BoundaryFilter> {
        self.filter.as_ref()
    }

    pub fn run(&self, points: Vec<SurveyPoint>) -> PipelineOutcome {
        let (inside, outside) = match &self.filter {
            Some(filter) => {
                let split = filter.partition(points);
                (split.inside, split.outside)
            }
            None => (points, Vec::new()),
        };

        PipelineOutcome {
            outside,
            consolidation: self.engine.consolidate(&inside),
        }
    }
}
