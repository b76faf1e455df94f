//! Step definitions for checklist run scenarios.

pub mod world;

mod given;
mod then;
mod when;
