//! Unit tests for the checklist module.

mod support;
