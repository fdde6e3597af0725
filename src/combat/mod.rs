//! Deterministic combat resolution over Health + CombatStats capabilities.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
