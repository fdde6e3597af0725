use rand::Rng;
use serde::{Deserialize, Serialize};

use super::names::generate_monster_name_with;
use crate::core::constants::*;
use crate::entity::{
    CombatStats, CraftingTags, EntityId, Health, Mana, Progression, RecipeDiscovery, World,
};
use crate::inventory::Inventory;

/// Monster archetypes with their base stat blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterArchetype {
    Rat,
    Goblin,
    SkeletalWarrior,
    CaveTroll,
}

impl MonsterArchetype {
    /// Base (hp, power, defense, xp_value) before spawn variance.
    pub fn base_stats(self) -> (u32, u32, u32, u64) {
        match self {
            MonsterArchetype::Rat => (6, 2, 0, 10),
            MonsterArchetype::Goblin => (12, 4, 1, 35),
            MonsterArchetype::SkeletalWarrior => (20, 6, 3, 80),
            MonsterArchetype::CaveTroll => (45, 9, 4, 220),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            MonsterArchetype::Rat => 'r',
            MonsterArchetype::Goblin => 'g',
            MonsterArchetype::SkeletalWarrior => 's',
            MonsterArchetype::CaveTroll => 'T',
        }
    }
}

/// Creates a player entity with the full capability set: health, combat
/// stats, progression, a bounded inventory, recipe discovery tracking,
/// and a mana pool.
pub fn spawn_player(world: &mut World, name: impl Into<String>) -> EntityId {
    let id = world.spawn(name, '@');
    world.attach_health(id, Health::new(PLAYER_BASE_HP));
    world.attach_combat_stats(
        id,
        CombatStats::new(PLAYER_BASE_POWER, PLAYER_BASE_DEFENSE),
    );
    world.attach_progression(id, Progression::new(0));
    world.attach_inventory(id, Inventory::new(DEFAULT_INVENTORY_CAPACITY));
    world.attach_recipe_discovery(id, RecipeDiscovery::new());
    world.attach_mana(id, Mana::new(PLAYER_BASE_MP, PLAYER_BASE_MANA_REGEN));
    id
}

/// Creates a monster from an archetype with spawn-time stat variance.
pub fn spawn_monster(world: &mut World, archetype: MonsterArchetype) -> EntityId {
    let mut rng = rand::thread_rng();
    spawn_monster_with(world, archetype, &mut rng)
}

/// Seedable variant for deterministic tests and simulations. Variance is
/// applied once at spawn; everything after that is deterministic rule
/// engine behavior.
pub fn spawn_monster_with(
    world: &mut World,
    archetype: MonsterArchetype,
    rng: &mut impl Rng,
) -> EntityId {
    let (base_hp, base_power, defense, xp_value) = archetype.base_stats();

    let hp_var = rng.gen_range(MONSTER_STAT_VARIANCE_MIN..MONSTER_STAT_VARIANCE_MAX);
    let power_var = rng.gen_range(MONSTER_STAT_VARIANCE_MIN..MONSTER_STAT_VARIANCE_MAX);
    let hp = ((base_hp as f64) * hp_var).max(1.0) as u32;
    let power = ((base_power as f64) * power_var).max(1.0) as u32;

    let id = world.spawn(generate_monster_name_with(rng), archetype.glyph());
    world.attach_health(id, Health::new(hp));
    world.attach_combat_stats(id, CombatStats::new(power, defense));
    world.attach_progression(id, Progression::new(xp_value));
    id
}

/// Creates a full component-entity item: crafting tags only, deliberately
/// no Health or CombatStats, so capability queries keep it out of combat.
pub fn spawn_item_entity(
    world: &mut World,
    name: impl Into<String>,
    tags: &[&str],
    consumable: bool,
    craftable: bool,
) -> EntityId {
    let id = world.spawn(name, '*');
    world.attach_crafting_tags(id, CraftingTags::new(tags, consumable, craftable));
    id
}
