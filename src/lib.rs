//! Packcheck: state core for personal outing checklists.
//!
//! This crate keeps the checklists a user ticks through before leaving home,
//! records every completed run, persists everything as one JSON blob in a
//! key-value store, and derives statistics about what gets forgotten.
//!
//! # Architecture
//!
//! Packcheck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values, the transition function, and statistics
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete storage implementations (memory, directory)
//!
//! # Modules
//!
//! - [`checklist`]: Checklists, history, settings, and their persistence

pub mod checklist;
