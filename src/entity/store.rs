use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::{
    CombatStats, ComponentKind, CraftingTags, EntityAllocator, EntityId, Health, Mana,
    Progression, RecipeDiscovery,
};
use crate::inventory::Inventory;

/// An entity: a display attribute set plus one slot per component kind.
///
/// Entities never hold game logic. Cross-component behavior lives in the
/// rule engines, which reach components only through the [`World`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub glyph: char,
    health: Option<Health>,
    combat_stats: Option<CombatStats>,
    progression: Option<Progression>,
    inventory: Option<Inventory>,
    crafting_tags: Option<CraftingTags>,
    recipe_discovery: Option<RecipeDiscovery>,
    mana: Option<Mana>,
}

impl Entity {
    fn new(name: String, glyph: char) -> Self {
        Self {
            name,
            glyph,
            health: None,
            combat_stats: None,
            progression: None,
            inventory: None,
            crafting_tags: None,
            recipe_discovery: None,
            mana: None,
        }
    }

    /// Capability predicate: does this entity currently carry `kind`?
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Health => self.health.is_some(),
            ComponentKind::CombatStats => self.combat_stats.is_some(),
            ComponentKind::Progression => self.progression.is_some(),
            ComponentKind::Inventory => self.inventory.is_some(),
            ComponentKind::CraftingTags => self.crafting_tags.is_some(),
            ComponentKind::RecipeDiscovery => self.recipe_discovery.is_some(),
            ComponentKind::Mana => self.mana.is_some(),
        }
    }

    /// Capability-set check: all of `kinds` present at once.
    pub fn satisfies(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|kind| self.has(*kind))
    }
}

/// The entity/component store.
///
/// Owns every entity and its components. Attaching a component kind an
/// entity already has replaces the old instance; querying a kind an entity
/// lacks returns None, which is a normal state ("entity lacks this
/// capability"), never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    allocator: EntityAllocator,
    entities: BTreeMap<EntityId, Entity>,
}

impl World {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            entities: BTreeMap::new(),
        }
    }

    /// Creates a bare entity with no components.
    pub fn spawn(&mut self, name: impl Into<String>, glyph: char) -> EntityId {
        let id = self.allocator.allocate();
        self.entities.insert(id, Entity::new(name.into(), glyph));
        id
    }

    /// Removes an entity and everything attached to it. Returns false if
    /// the id is unknown (already despawned).
    pub fn despawn(&mut self, id: EntityId) -> bool {
        self.entities.remove(&id).is_some()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn name(&self, id: EntityId) -> Option<&str> {
        self.entities.get(&id).map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All live entity ids in spawn order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    // === Capability queries ===

    pub fn has(&self, id: EntityId, kind: ComponentKind) -> bool {
        self.entities.get(&id).is_some_and(|e| e.has(kind))
    }

    pub fn satisfies(&self, id: EntityId, kinds: &[ComponentKind]) -> bool {
        self.entities.get(&id).is_some_and(|e| e.satisfies(kinds))
    }

    /// All entities carrying every kind in `kinds`, in spawn order.
    ///
    /// This is the composition mechanism: "all combatants" is
    /// `entities_with(&[Health, CombatStats])`, never a type test, so an
    /// item entity can never slip into combat logic by accident.
    pub fn entities_with(&self, kinds: &[ComponentKind]) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, e)| e.satisfies(kinds))
            .map(|(id, _)| *id)
            .collect()
    }

    // === Attach (replace-on-attach) and typed access, one set per kind ===

    pub fn attach_health(&mut self, id: EntityId, health: Health) -> bool {
        match self.entities.get_mut(&id) {
            Some(e) => {
                e.health = Some(health);
                true
            }
            None => false,
        }
    }

    pub fn health(&self, id: EntityId) -> Option<&Health> {
        self.entities.get(&id)?.health.as_ref()
    }

    pub fn health_mut(&mut self, id: EntityId) -> Option<&mut Health> {
        self.entities.get_mut(&id)?.health.as_mut()
    }

    pub fn attach_combat_stats(&mut self, id: EntityId, stats: CombatStats) -> bool {
        match self.entities.get_mut(&id) {
            Some(e) => {
                e.combat_stats = Some(stats);
                true
            }
            None => false,
        }
    }

    pub fn combat_stats(&self, id: EntityId) -> Option<&CombatStats> {
        self.entities.get(&id)?.combat_stats.as_ref()
    }

    pub fn combat_stats_mut(&mut self, id: EntityId) -> Option<&mut CombatStats> {
        self.entities.get_mut(&id)?.combat_stats.as_mut()
    }

    pub fn attach_progression(&mut self, id: EntityId, progression: Progression) -> bool {
        match self.entities.get_mut(&id) {
            Some(e) => {
                e.progression = Some(progression);
                true
            }
            None => false,
        }
    }

    pub fn progression(&self, id: EntityId) -> Option<&Progression> {
        self.entities.get(&id)?.progression.as_ref()
    }

    pub fn progression_mut(&mut self, id: EntityId) -> Option<&mut Progression> {
        self.entities.get_mut(&id)?.progression.as_mut()
    }

    pub fn attach_inventory(&mut self, id: EntityId, inventory: Inventory) -> bool {
        match self.entities.get_mut(&id) {
            Some(e) => {
                e.inventory = Some(inventory);
                true
            }
            None => false,
        }
    }

    pub fn inventory(&self, id: EntityId) -> Option<&Inventory> {
        self.entities.get(&id)?.inventory.as_ref()
    }

    pub fn inventory_mut(&mut self, id: EntityId) -> Option<&mut Inventory> {
        self.entities.get_mut(&id)?.inventory.as_mut()
    }

    pub fn attach_crafting_tags(&mut self, id: EntityId, tags: CraftingTags) -> bool {
        match self.entities.get_mut(&id) {
            Some(e) => {
                e.crafting_tags = Some(tags);
                true
            }
            None => false,
        }
    }

    pub fn crafting_tags(&self, id: EntityId) -> Option<&CraftingTags> {
        self.entities.get(&id)?.crafting_tags.as_ref()
    }

    pub fn crafting_tags_mut(&mut self, id: EntityId) -> Option<&mut CraftingTags> {
        self.entities.get_mut(&id)?.crafting_tags.as_mut()
    }

    pub fn attach_recipe_discovery(&mut self, id: EntityId, discovery: RecipeDiscovery) -> bool {
        match self.entities.get_mut(&id) {
            Some(e) => {
                e.recipe_discovery = Some(discovery);
                true
            }
            None => false,
        }
    }

    pub fn recipe_discovery(&self, id: EntityId) -> Option<&RecipeDiscovery> {
        self.entities.get(&id)?.recipe_discovery.as_ref()
    }

    pub fn recipe_discovery_mut(&mut self, id: EntityId) -> Option<&mut RecipeDiscovery> {
        self.entities.get_mut(&id)?.recipe_discovery.as_mut()
    }

    pub fn attach_mana(&mut self, id: EntityId, mana: Mana) -> bool {
        match self.entities.get_mut(&id) {
            Some(e) => {
                e.mana = Some(mana);
                true
            }
            None => false,
        }
    }

    pub fn mana(&self, id: EntityId) -> Option<&Mana> {
        self.entities.get(&id)?.mana.as_ref()
    }

    pub fn mana_mut(&mut self, id: EntityId) -> Option<&mut Mana> {
        self.entities.get_mut(&id)?.mana.as_mut()
    }
}
