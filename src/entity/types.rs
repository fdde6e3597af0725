use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::crafting::RecipeId;

/// A unique entity identifier.
///
/// Entities are pure identities; they carry no behavior of their own.
/// Components attached through the [`World`](crate::entity::World) give
/// them capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The null / invalid entity sentinel.
    pub const INVALID: EntityId = EntityId(0);

    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocates monotonically increasing entity IDs.
///
/// IDs start at 1; 0 is reserved for [`EntityId::INVALID`]. Destroyed IDs
/// are never recycled, so an ID observed once refers to the same entity
/// for the lifetime of the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn allocate(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        EntityId(id)
    }

    /// Number of IDs handed out so far.
    pub fn count(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// The component kinds an entity can carry, at most one instance each.
///
/// Rule engines express their preconditions as capability sets over these
/// kinds (e.g. combat needs `{Health, CombatStats}`) instead of testing
/// concrete entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Health,
    CombatStats,
    Progression,
    Inventory,
    CraftingTags,
    RecipeDiscovery,
    Mana,
}

/// Hit points. `hp` stays in `[0, max_hp]`; every write path clamps, so
/// callers can never observe an out-of-range value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    max_hp: u32,
    hp: u32,
}

impl Health {
    /// Creates a health pool starting at full.
    pub fn new(max_hp: u32) -> Self {
        Self { max_hp, hp: max_hp }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Restores up to `amount` HP. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Sets HP directly, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    /// Permanently raises the maximum. Current HP is unchanged.
    pub fn raise_max_hp(&mut self, amount: u32) {
        self.max_hp = self.max_hp.saturating_add(amount);
    }

    /// Restores HP to the maximum.
    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }
}

/// Attack and damage-reduction stats. Non-negative by type; zero is a
/// legitimate value for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub power: u32,
    pub defense: u32,
}

impl CombatStats {
    pub fn new(power: u32, defense: u32) -> Self {
        Self { power, defense }
    }
}

/// Level, accumulated XP, and the XP this entity yields when defeated.
///
/// `level` and `xp` only ever increase; both are mutated exclusively
/// through the progression engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    level: u32,
    xp: u64,
    xp_value: u64,
}

impl Progression {
    /// Starts at level 1 with zero XP.
    pub fn new(xp_value: u64) -> Self {
        Self::new_at_level(1, xp_value)
    }

    pub fn new_at_level(level: u32, xp_value: u64) -> Self {
        Self {
            level: level.max(1),
            xp: 0,
            xp_value,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn xp_value(&self) -> u64 {
        self.xp_value
    }

    pub fn add_xp(&mut self, amount: u64) {
        self.xp = self.xp.saturating_add(amount);
    }

    pub fn advance_level(&mut self) {
        self.level += 1;
    }
}

/// Crafting metadata carried by item entities: descriptive tags matched
/// against recipe requirements, plus consumption behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingTags {
    pub tags: BTreeSet<String>,
    /// Consumed when used as a crafting ingredient. Tools set this false.
    pub consumable: bool,
    /// Eligible as a crafting ingredient at all.
    pub craftable: bool,
}

impl CraftingTags {
    pub fn new(tags: &[&str], consumable: bool, craftable: bool) -> Self {
        Self {
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            consumable,
            craftable,
        }
    }
}

/// Per-entity record of recipes crafted at least once. Grow-only: there is
/// no way to forget a discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDiscovery {
    discovered: BTreeSet<RecipeId>,
}

impl RecipeDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful craft. Returns true if the recipe was newly
    /// discovered, false if it was already known (no-op).
    pub fn record(&mut self, id: RecipeId) -> bool {
        self.discovered.insert(id)
    }

    pub fn is_discovered(&self, id: &RecipeId) -> bool {
        self.discovered.contains(id)
    }

    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeId> {
        self.discovered.iter()
    }
}

/// Mana pool for spellcasters. `mp` stays in `[0, max_mp]` under the same
/// setter discipline as [`Health`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mana {
    max_mp: u32,
    mp: u32,
    regen_rate: u32,
}

impl Mana {
    /// Creates a mana pool starting at full.
    pub fn new(max_mp: u32, regen_rate: u32) -> Self {
        Self {
            max_mp,
            mp: max_mp,
            regen_rate,
        }
    }

    pub fn mp(&self) -> u32 {
        self.mp
    }

    pub fn max_mp(&self) -> u32 {
        self.max_mp
    }

    pub fn regen_rate(&self) -> u32 {
        self.regen_rate
    }

    /// Spends `cost` MP if available. Returns false (and changes nothing)
    /// when the pool is short.
    pub fn spend(&mut self, cost: u32) -> bool {
        if self.mp < cost {
            return false;
        }
        self.mp -= cost;
        true
    }

    /// Applies one turn of regeneration. Returns the MP actually restored.
    pub fn regenerate(&mut self) -> u32 {
        let before = self.mp;
        self.mp = self.mp.saturating_add(self.regen_rate).min(self.max_mp);
        self.mp - before
    }

    pub fn set_mp(&mut self, mp: u32) {
        self.mp = mp.min(self.max_mp);
    }
}
