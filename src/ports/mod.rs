//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! - Ports define WHAT operations the engine needs
//! - Adapters define HOW they're implemented
//!
//! The core doesn't know about adapters.

mod neighbors;
mod containment;

pub use neighbors::{NeighborError, NeighborResult, NeighborSearch};
pub use containment::Containment;
