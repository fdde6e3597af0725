//! Core tuning constants shared by the rule engines.

pub mod constants;

pub use constants::*;
