use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use super::spells::{Spell, SpellId};
use super::types::{Recipe, RecipeId};

/// The global recipe catalog: load-time immutable snapshot, keyed by
/// stable string id, shared read-only across all entities.
///
/// Discovery state is deliberately NOT here: it is per-entity, mutable,
/// and lives in each entity's `RecipeDiscovery` component. Replacing the
/// catalog (a reload) is safe only between turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    index: HashMap<RecipeId, usize>,
}

impl RecipeCatalog {
    /// Builds a catalog from definitions. A later definition with a
    /// duplicate id replaces the earlier one in place.
    pub fn new(defs: Vec<Recipe>) -> Self {
        let mut catalog = Self::default();
        for recipe in defs {
            match catalog.index.get(&recipe.id) {
                Some(&slot) => catalog.recipes[slot] = recipe,
                None => {
                    catalog.index.insert(recipe.id.clone(), catalog.recipes.len());
                    catalog.recipes.push(recipe);
                }
            }
        }
        catalog
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.index.get(id).map(|&slot| &self.recipes[slot])
    }

    /// All recipes in load order.
    pub fn all(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// The global spell catalog. Same shape and lifecycle as
/// [`RecipeCatalog`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellCatalog {
    spells: Vec<Spell>,
    index: HashMap<SpellId, usize>,
}

impl SpellCatalog {
    pub fn new(defs: Vec<Spell>) -> Self {
        let mut catalog = Self::default();
        for spell in defs {
            match catalog.index.get(&spell.id) {
                Some(&slot) => catalog.spells[slot] = spell,
                None => {
                    catalog.index.insert(spell.id.clone(), catalog.spells.len());
                    catalog.spells.push(spell);
                }
            }
        }
        catalog
    }

    pub fn get(&self, id: &SpellId) -> Option<&Spell> {
        self.index.get(id).map(|&slot| &self.spells[slot])
    }

    pub fn all(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

/// On-disk shape of the definition file: one JSON document carrying both
/// catalogs. Either list may be omitted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogDefs {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub spells: Vec<Spell>,
}

/// Parses both catalogs from a JSON definition document.
pub fn load_catalogs_from_str(json: &str) -> io::Result<(RecipeCatalog, SpellCatalog)> {
    let defs: CatalogDefs = serde_json::from_str(json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok((RecipeCatalog::new(defs.recipes), SpellCatalog::new(defs.spells)))
}

/// Loads both catalogs from a JSON definition file. Intended to run once
/// at startup; loading again and swapping the result is a full catalog
/// replace.
pub fn load_catalogs(path: &Path) -> io::Result<(RecipeCatalog, SpellCatalog)> {
    let json = fs::read_to_string(path)?;
    load_catalogs_from_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Item;

    fn salve_recipe() -> Recipe {
        Recipe {
            id: RecipeId::from("healing_salve"),
            name: "Healing Salve".to_string(),
            required_tags: vec!["herbal".to_string(), "magical".to_string()],
            result: Item::new("Healing Salve"),
        }
    }

    #[test]
    fn test_catalog_lookup_by_id() {
        let catalog = RecipeCatalog::new(vec![salve_recipe()]);
        assert_eq!(catalog.len(), 1);
        let found = catalog.get(&RecipeId::from("healing_salve")).unwrap();
        assert_eq!(found.name, "Healing Salve");
        assert!(catalog.get(&RecipeId::from("unknown")).is_none());
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let mut replacement = salve_recipe();
        replacement.name = "Greater Healing Salve".to_string();
        let catalog = RecipeCatalog::new(vec![salve_recipe(), replacement]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(&RecipeId::from("healing_salve")).unwrap().name,
            "Greater Healing Salve"
        );
    }

    #[test]
    fn test_load_catalogs_from_json() {
        let json = r#"{
            "recipes": [
                {
                    "id": "healing_salve",
                    "name": "Healing Salve",
                    "required_tags": ["herbal", "magical"],
                    "result": { "name": "Healing Salve", "consumable": true }
                }
            ],
            "spells": [
                { "id": "firebolt", "name": "Firebolt", "mp_cost": 3, "power": 6 }
            ]
        }"#;

        let (recipes, spells) = load_catalogs_from_str(json).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(spells.len(), 1);
        let salve = recipes.get(&RecipeId::from("healing_salve")).unwrap();
        assert_eq!(salve.required_tags, vec!["herbal", "magical"]);
        assert!(salve.result.consumable);
        assert_eq!(spells.get(&SpellId::from("firebolt")).unwrap().mp_cost, 3);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = load_catalogs_from_str("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let (recipes, spells) = load_catalogs_from_str("{}").unwrap();
        assert!(recipes.is_empty());
        assert!(spells.is_empty());
    }
}
