//! Adapter implementations of checklist ports.

pub mod directory;
pub mod memory;
