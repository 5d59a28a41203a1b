//! Shared test inputs.

pub mod fixtures;
