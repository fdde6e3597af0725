//! Tag-based crafting, recipe discovery, and the immutable catalogs.

pub mod catalog;
pub mod logic;
pub mod spells;
pub mod types;

pub use catalog::*;
pub use logic::*;
pub use spells::*;
pub use types::*;
