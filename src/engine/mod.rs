//! # Engine
//!
//! The point consolidation engine and the boundary filter that runs ahead
//! of it. Both are synchronous and keep no state between calls.

mod consolidation;
mod filter;
mod pipeline;

pub use consolidation::{ClusterReport, Consolidation, ConsolidationEngine, ConsolidationSummary};
pub use filter::{BoundaryFilter, BoundaryPartition};
pub use pipeline::{Pipeline, PipelineOutcome};
