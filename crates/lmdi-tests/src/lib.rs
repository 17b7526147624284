//! Shared helpers for LMDI integration tests.

pub mod helpers;
