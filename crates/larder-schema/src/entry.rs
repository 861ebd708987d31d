use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry type must be \"recipe\" or \"ingredient\", got \"{0}\"")]
    UnknownType(String),
    #[error("ingredient '{0}' must declare a cook time of at least 0")]
    InvalidIngredient(String),
    #[error("recipe '{recipe}' lists required item '{item}' more than once")]
    DuplicateRequiredItem { recipe: String, item: String },
}

/// A stored cookbook entry: a base ingredient or a composed recipe.
///
/// Consumers dispatch on the variant; the free-string `type` tag exists only
/// on [`EntryDraft`], before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// The unique name this entry is registered under.
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }
}

/// A leaf entry with a fixed preparation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Minutes to prepare one unit; validated non-negative at creation.
    pub cook_time: i64,
}

/// A composed entry referencing other entries by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    /// Ordered; no two items share a name within one recipe.
    pub required_items: Vec<RequiredItem>,
}

/// A reference from a recipe to another entry by name, with multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

/// An unvalidated candidate entry, exactly as it arrives on the wire.
///
/// `type` stays a free string here so that an unrecognized tag can be
/// reported as [`EntryError::UnknownType`] in the documented check order;
/// [`EntryDraft::into_entry`] is the only place a draft becomes a typed
/// [`Entry`]. Unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cook_time: Option<i64>,
    pub required_items: Option<Vec<RequiredItem>>,
}

impl EntryDraft {
    /// Validate the draft-local rules and convert into a typed [`Entry`].
    ///
    /// Covers the `type` tag, the cook-time bound, and required-item
    /// uniqueness. Name collisions against the store are the caller's
    /// concern.
    pub fn into_entry(self) -> Result<Entry, EntryError> {
        if self.kind == "ingredient" {
            let cook_time = match self.cook_time {
                Some(t) if t >= 0 => t,
                _ => return Err(EntryError::InvalidIngredient(self.name)),
            };
            Ok(Entry::Ingredient(Ingredient {
                name: self.name,
                cook_time,
            }))
        } else if self.kind == "recipe" {
            // Absent requiredItems is an empty recipe, not an error.
            let required_items = self.required_items.unwrap_or_default();
            let mut seen = HashSet::new();
            for item in &required_items {
                if !seen.insert(item.name.as_str()) {
                    return Err(EntryError::DuplicateRequiredItem {
                        recipe: self.name,
                        item: item.name.clone(),
                    });
                }
            }
            Ok(Entry::Recipe(Recipe {
                name: self.name,
                required_items,
            }))
        } else {
            Err(EntryError::UnknownType(self.kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient_draft(name: &str, cook_time: Option<i64>) -> EntryDraft {
        EntryDraft {
            name: name.to_owned(),
            kind: "ingredient".to_owned(),
            cook_time,
            required_items: None,
        }
    }

    fn recipe_draft(name: &str, items: Vec<RequiredItem>) -> EntryDraft {
        EntryDraft {
            name: name.to_owned(),
            kind: "recipe".to_owned(),
            cook_time: None,
            required_items: Some(items),
        }
    }

    fn item(name: &str, quantity: i64) -> RequiredItem {
        RequiredItem {
            name: name.to_owned(),
            quantity,
        }
    }

    #[test]
    fn ingredient_draft_converts() {
        let entry = ingredient_draft("Egg", Some(3)).into_entry().unwrap();
        assert_eq!(entry.name(), "Egg");
        match entry {
            Entry::Ingredient(ingredient) => assert_eq!(ingredient.cook_time, 3),
            Entry::Recipe(_) => panic!("expected an ingredient"),
        }
    }

    #[test]
    fn zero_cook_time_is_valid() {
        assert!(ingredient_draft("Water", Some(0)).into_entry().is_ok());
    }

    #[test]
    fn negative_cook_time_rejected() {
        let err = ingredient_draft("Egg", Some(-1)).into_entry().unwrap_err();
        assert!(matches!(err, EntryError::InvalidIngredient(name) if name == "Egg"));
    }

    #[test]
    fn missing_cook_time_rejected() {
        let err = ingredient_draft("Egg", None).into_entry().unwrap_err();
        assert!(matches!(err, EntryError::InvalidIngredient(_)));
    }

    #[test]
    fn recipe_draft_converts_in_order() {
        let entry = recipe_draft("Omelette", vec![item("Egg", 2), item("Butter", 1)])
            .into_entry()
            .unwrap();
        match entry {
            Entry::Recipe(recipe) => {
                assert_eq!(recipe.required_items[0].name, "Egg");
                assert_eq!(recipe.required_items[1].name, "Butter");
            }
            Entry::Ingredient(_) => panic!("expected a recipe"),
        }
    }

    #[test]
    fn duplicate_required_items_rejected() {
        let err = recipe_draft("Omelette", vec![item("Egg", 2), item("Egg", 1)])
            .into_entry()
            .unwrap_err();
        match err {
            EntryError::DuplicateRequiredItem { recipe, item } => {
                assert_eq!(recipe, "Omelette");
                assert_eq!(item, "Egg");
            }
            other => panic!("expected DuplicateRequiredItem, got {other}"),
        }
    }

    #[test]
    fn missing_required_items_is_empty_recipe() {
        let draft = EntryDraft {
            name: "Plain".to_owned(),
            kind: "recipe".to_owned(),
            cook_time: None,
            required_items: None,
        };
        match draft.into_entry().unwrap() {
            Entry::Recipe(recipe) => assert!(recipe.required_items.is_empty()),
            Entry::Ingredient(_) => panic!("expected a recipe"),
        }
    }

    #[test]
    fn unknown_type_rejected() {
        let draft = EntryDraft {
            name: "Pan".to_owned(),
            kind: "utensil".to_owned(),
            cook_time: None,
            required_items: None,
        };
        let err = draft.into_entry().unwrap_err();
        assert!(matches!(err, EntryError::UnknownType(kind) if kind == "utensil"));
    }

    #[test]
    fn draft_deserializes_wire_field_names() {
        let draft: EntryDraft =
            serde_json::from_str(r#"{"name": "Egg", "type": "ingredient", "cookTime": 3}"#)
                .unwrap();
        assert_eq!(draft.name, "Egg");
        assert_eq!(draft.kind, "ingredient");
        assert_eq!(draft.cook_time, Some(3));
        assert_eq!(draft.required_items, None);
    }

    #[test]
    fn draft_deserializes_required_items() {
        let draft: EntryDraft = serde_json::from_str(
            r#"{
                "name": "Omelette",
                "type": "recipe",
                "requiredItems": [{"name": "Egg", "quantity": 2}]
            }"#,
        )
        .unwrap();
        let items = draft.required_items.unwrap();
        assert_eq!(items, vec![item("Egg", 2)]);
    }

    #[test]
    fn draft_ignores_unknown_fields() {
        let draft: EntryDraft = serde_json::from_str(
            r#"{"name": "Egg", "type": "ingredient", "cookTime": 3, "color": "white"}"#,
        )
        .unwrap();
        assert_eq!(draft.name, "Egg");
    }

    #[test]
    fn entry_name_covers_both_variants() {
        let ingredient = ingredient_draft("Egg", Some(1)).into_entry().unwrap();
        let recipe = recipe_draft("Omelette", vec![]).into_entry().unwrap();
        assert_eq!(ingredient.name(), "Egg");
        assert_eq!(recipe.name(), "Omelette");
    }
}
