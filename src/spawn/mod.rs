//! Spawn-time factories: component bundles for players, monsters, and
//! item entities.

pub mod factories;
pub mod names;

pub use factories::*;
pub use names::*;
