//! Checklist state management.
//!
//! Owns checklists, check history, and settings; applies actions through a
//! pure transition function; persists the result to key-value storage; and
//! derives statistics. The module follows hexagonal architecture:
//!
//! - Domain types, the transition function, and statistics in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store, persistence gateway, and selectors in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
