use log::debug;
use std::collections::BTreeSet;

use super::catalog::RecipeCatalog;
use super::types::{CraftResult, CraftStatus, Recipe, RecipeBookEntry, RecipeId};
use crate::entity::{EntityId, World};
use crate::inventory::{Inventory, ItemRef};

/// Resolves the crafting tags of an inventory slot, whichever form it
/// takes: value items carry their tags inline, entity-backed items expose
/// them through their `CraftingTags` component. An entity without the
/// component simply has no tags.
pub fn item_tags(world: &World, item: &ItemRef) -> BTreeSet<String> {
    match item {
        ItemRef::Value(item) => item.tags.clone(),
        ItemRef::Entity(id) => world
            .crafting_tags(*id)
            .map(|tags| tags.tags.clone())
            .unwrap_or_default(),
    }
}

/// Whether a slot may be used as a crafting ingredient at all.
fn is_craft_eligible(world: &World, item: &ItemRef) -> bool {
    match item {
        ItemRef::Value(item) => item.craftable,
        ItemRef::Entity(id) => world.crafting_tags(*id).is_some_and(|tags| tags.craftable),
    }
}

/// Whether a matched slot is consumed by a successful craft. Tools
/// (non-consumables) stay in the inventory.
fn is_consumed_on_craft(world: &World, item: &ItemRef) -> bool {
    match item {
        ItemRef::Value(item) => item.consumable,
        ItemRef::Entity(id) => world.crafting_tags(*id).is_some_and(|tags| tags.consumable),
    }
}

/// Finds an assignment of distinct inventory slots to the recipe's
/// required-tag multiset, each assigned slot carrying its tag.
///
/// Returns the matched slot index per requirement (in requirement order),
/// or None when no assignment exists. This is a bipartite matching
/// (augmenting-path search), NOT an independent per-tag existence check:
/// one item tagged both "herbal" and "magical" can fill only one of two
/// slots, and a tag required twice needs two distinct items carrying it.
pub fn find_match(world: &World, inventory: &Inventory, recipe: &Recipe) -> Option<Vec<usize>> {
    let required = &recipe.required_tags;
    if required.is_empty() {
        return Some(Vec::new());
    }

    // Tag sets of the eligible slots; ineligible slots stay None.
    let slot_tags: Vec<Option<BTreeSet<String>>> = inventory
        .iter()
        .map(|item| is_craft_eligible(world, item).then(|| item_tags(world, item)))
        .collect();

    let mut requirement_of_slot: Vec<Option<usize>> = vec![None; slot_tags.len()];
    for requirement in 0..required.len() {
        let mut visited = vec![false; slot_tags.len()];
        if !try_assign(
            required,
            &slot_tags,
            requirement,
            &mut requirement_of_slot,
            &mut visited,
        ) {
            return None;
        }
    }

    let mut matched = vec![0usize; required.len()];
    for (slot, requirement) in requirement_of_slot.iter().enumerate() {
        if let Some(requirement) = requirement {
            matched[*requirement] = slot;
        }
    }
    Some(matched)
}

/// Kuhn's augmenting-path step: try to give `requirement` a slot, evicting
/// and re-seating earlier assignments where that opens one up.
fn try_assign(
    required: &[String],
    slot_tags: &[Option<BTreeSet<String>>],
    requirement: usize,
    requirement_of_slot: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for (slot, tags) in slot_tags.iter().enumerate() {
        let Some(tags) = tags else { continue };
        if visited[slot] || !tags.contains(&required[requirement]) {
            continue;
        }
        visited[slot] = true;
        let displaced = requirement_of_slot[slot];
        let claimable = match displaced {
            None => true,
            Some(other) => try_assign(required, slot_tags, other, requirement_of_slot, visited),
        };
        if claimable {
            requirement_of_slot[slot] = Some(requirement);
            return true;
        }
    }
    false
}

/// All recipes the entity's current inventory can satisfy, in catalog
/// order. An entity without an Inventory component satisfies none.
pub fn satisfiable_recipes(
    world: &World,
    entity: EntityId,
    catalog: &RecipeCatalog,
) -> Vec<RecipeId> {
    let Some(inventory) = world.inventory(entity) else {
        return Vec::new();
    };
    catalog
        .all()
        .filter(|recipe| find_match(world, inventory, recipe).is_some())
        .map(|recipe| recipe.id.clone())
        .collect()
}

/// Attempts to craft `recipe_id` from the entity's inventory.
///
/// On success: matched consumable ingredients are removed (tools stay),
/// the result item is added, and the recipe is recorded in the entity's
/// discovery set (a no-op re-recording when already known). Slots freed by
/// consumption count toward the capacity check for the result, and a
/// failed craft mutates nothing.
pub fn craft(
    world: &mut World,
    crafter: EntityId,
    recipe_id: &RecipeId,
    catalog: &RecipeCatalog,
) -> CraftResult {
    let Some(recipe) = catalog.get(recipe_id) else {
        return CraftResult::failure(recipe_id.clone(), CraftStatus::UnknownRecipe);
    };
    let Some(inventory) = world.inventory(crafter) else {
        return CraftResult::failure(recipe_id.clone(), CraftStatus::MissingIngredients);
    };
    let Some(matched) = find_match(world, inventory, recipe) else {
        return CraftResult::failure(recipe_id.clone(), CraftStatus::MissingIngredients);
    };

    let mut consumed_slots: Vec<usize> = matched
        .iter()
        .copied()
        .filter(|&slot| match inventory.get_by_index(slot) {
            Some(item) => is_consumed_on_craft(world, item),
            None => false,
        })
        .collect();

    // Slots freed by consumption are applied before the capacity check
    // for the result item.
    let len_after_consume = inventory.len() - consumed_slots.len();
    if len_after_consume >= inventory.capacity() {
        return CraftResult::failure(recipe_id.clone(), CraftStatus::InventoryFull);
    }

    let result_item = recipe.result.clone();
    let recipe_name = recipe.name.clone();

    let mut consumed = Vec::new();
    if let Some(inventory) = world.inventory_mut(crafter) {
        // Remove back-to-front so earlier indices stay valid.
        consumed_slots.sort_unstable_by(|a, b| b.cmp(a));
        for slot in consumed_slots {
            if let Some(item) = inventory.remove_at(slot) {
                consumed.push(item);
            }
        }
        consumed.reverse();
        inventory.add(ItemRef::Value(result_item.clone()));
    }

    let newly_discovered = match world.recipe_discovery_mut(crafter) {
        Some(discovery) => discovery.record(recipe_id.clone()),
        // Entities that track no discoveries can still craft.
        None => false,
    };

    debug!(
        "{} crafted {} (consumed {} items, newly discovered: {})",
        world.name(crafter).unwrap_or("<unknown>"),
        recipe_name,
        consumed.len(),
        newly_discovered
    );

    CraftResult {
        recipe: recipe_id.clone(),
        status: CraftStatus::Crafted,
        consumed,
        produced: Some(result_item),
        newly_discovered,
    }
}

/// The recipes an entity has discovered, in stable (sorted) order. An
/// entity that tracks no discoveries has discovered nothing.
pub fn discovered_recipes(world: &World, entity: EntityId) -> Vec<RecipeId> {
    world
        .recipe_discovery(entity)
        .map(|discovery| discovery.iter().cloned().collect())
        .unwrap_or_default()
}

/// The entity's recipe book: every catalog entry flagged
/// discovered/undiscovered. Required tags are withheld until the entity
/// has discovered the recipe; the book never leaks how to craft
/// something the entity has not crafted before.
pub fn recipe_book(
    world: &World,
    entity: EntityId,
    catalog: &RecipeCatalog,
) -> Vec<RecipeBookEntry> {
    let discovery = world.recipe_discovery(entity);
    catalog
        .all()
        .map(|recipe| {
            let discovered = discovery.is_some_and(|d| d.is_discovered(&recipe.id));
            RecipeBookEntry {
                id: recipe.id.clone(),
                name: recipe.name.clone(),
                discovered,
                required_tags: discovered.then(|| recipe.required_tags.clone()),
            }
        })
        .collect()
}
