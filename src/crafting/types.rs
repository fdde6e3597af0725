use serde::{Deserialize, Serialize};

use crate::inventory::{Item, ItemRef};

/// Stable string identifier of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable recipe definition: a tag requirement and a result item.
///
/// `required_tags` is a multiset: listing the same tag twice demands two
/// distinct items carrying it. Recipes are loaded once into the catalog
/// and shared read-only across all entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub required_tags: Vec<String>,
    pub result: Item,
}

/// How a craft attempt ended. Everything except `Crafted` is ordinary
/// game-state signaling for the turn loop, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CraftStatus {
    Crafted,
    /// No recipe with that id in the catalog.
    UnknownRecipe,
    /// The inventory cannot cover the recipe's tag requirements.
    MissingIngredients,
    /// No slot for the result, even counting slots freed by consumption.
    InventoryFull,
}

/// Structured outcome of a craft attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftResult {
    pub recipe: RecipeId,
    pub status: CraftStatus,
    /// Matched consumable items removed from the inventory, in slot order.
    pub consumed: Vec<ItemRef>,
    /// The item added to the inventory on success.
    pub produced: Option<Item>,
    /// True when this success discovered the recipe for the first time.
    pub newly_discovered: bool,
}

impl CraftResult {
    pub(crate) fn failure(recipe: RecipeId, status: CraftStatus) -> Self {
        Self {
            recipe,
            status,
            consumed: Vec::new(),
            produced: None,
            newly_discovered: false,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status == CraftStatus::Crafted
    }
}

/// One row of an entity's recipe book: the global catalog joined with the
/// entity's discovery set.
///
/// Discovery gates information, not just crafting: `required_tags` is None
/// until the entity has crafted the recipe once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBookEntry {
    pub id: RecipeId,
    pub name: String,
    pub discovered: bool,
    pub required_tags: Option<Vec<String>>,
}
