use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::entity::EntityId;

/// A lightweight value item: name plus crafting metadata, no entity
/// identity of its own. Potions, crafting materials and recipe results are
/// all plain values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Consumed when used as a crafting ingredient.
    #[serde(default)]
    pub consumable: bool,
    /// Eligible as a crafting ingredient at all.
    #[serde(default)]
    pub craftable: bool,
}

impl Item {
    /// A plain untagged consumable (e.g. a potion).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: BTreeSet::new(),
            consumable: true,
            craftable: false,
        }
    }

    pub fn with_tags(
        name: impl Into<String>,
        tags: &[&str],
        consumable: bool,
        craftable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            consumable,
            craftable,
        }
    }
}

/// A single inventory slot: either a lightweight value item or a full
/// component-entity (one carrying a `CraftingTags` component, say).
///
/// Everything that reads a slot (display, crafting, removal) accepts both
/// forms, so new item representations need no inventory changes. Equality
/// is structural for values and identity-based for entities, which is what
/// `remove` matches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemRef {
    Value(Item),
    Entity(EntityId),
}

impl ItemRef {
    /// Display name for a slot. Entity-backed slots resolve their name
    /// through the world; this returns what the slot itself knows.
    pub fn value_name(&self) -> Option<&str> {
        match self {
            ItemRef::Value(item) => Some(&item.name),
            ItemRef::Entity(_) => None,
        }
    }
}
