//! Integration test host for the seriecalc workspace.
//!
//! This package carries no code of its own; see `tests/`.
