//! XP accounting, level thresholds, and level-up stat growth.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
