use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, World};

/// Stable string identifier of a spell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellId(String);

impl SpellId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpellId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for SpellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable spell definition. The core only accounts for the mana
/// cost; what a cast actually does is the turn loop's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    pub mp_cost: u32,
    pub power: u32,
}

/// Spends `cost` MP from the caster's mana pool. Returns false, with no
/// state change, when the pool is short or the entity has no Mana
/// component (non-spellcasters simply cannot pay).
pub fn spend_mana(world: &mut World, caster: EntityId, cost: u32) -> bool {
    match world.mana_mut(caster) {
        Some(mana) => mana.spend(cost),
        None => false,
    }
}

/// Applies one turn of mana regeneration. Returns the MP restored; zero
/// for entities without a Mana component.
pub fn regenerate_mana(world: &mut World, caster: EntityId) -> u32 {
    match world.mana_mut(caster) {
        Some(mana) => mana.regenerate(),
        None => 0,
    }
}
