//! Adapters - Swappable implementations of port interfaces

pub mod index;
pub mod containment;
pub mod settings;
