//! Recursive recipe expansion.
//!
//! A summary flattens a recipe's tree of required items down to base
//! ingredients. Quantities multiply along each path from the root, cook time
//! accumulates per ingredient unit, and ingredients are listed in the order
//! they are first reached. Resolution either succeeds against one pinned
//! cookbook state or fails without a partial result.

use crate::CoreError;
use larder_schema::{Entry, IngredientTotal, Recipe, Summary};
use larder_store::CookbookView;
use std::collections::{HashMap, HashSet};

/// Running accumulation for one resolution.
///
/// `order` remembers first-seen ingredient names so the final listing does
/// not depend on hash iteration order.
struct Totals {
    cook_time: i64,
    order: Vec<String>,
    quantities: HashMap<String, i64>,
}

impl Totals {
    fn new() -> Self {
        Self {
            cook_time: 0,
            order: Vec::new(),
            quantities: HashMap::new(),
        }
    }

    fn add_ingredient(&mut self, name: &str, quantity: i64, cook_time: i64) {
        self.cook_time += quantity * cook_time;
        if !self.quantities.contains_key(name) {
            self.order.push(name.to_owned());
        }
        *self.quantities.entry(name.to_owned()).or_insert(0) += quantity;
    }

    fn into_summary(self, root: &str) -> Summary {
        let Totals {
            cook_time,
            order,
            mut quantities,
        } = self;
        let ingredients = order
            .into_iter()
            .map(|name| {
                let quantity = quantities.remove(&name).unwrap_or(0);
                IngredientTotal { name, quantity }
            })
            .collect();
        Summary {
            name: root.to_owned(),
            cook_time,
            ingredients,
        }
    }
}

/// Expand the recipe registered under `name` into a flat [`Summary`].
///
/// The whole traversal runs against the single state pinned by `view`, so a
/// concurrent insert can never produce a half-updated summary. Fails with
/// [`CoreError::NotFound`] when `name` is unregistered,
/// [`CoreError::RootIsNotRecipe`] when it names an ingredient,
/// [`CoreError::MissingSubentry`] when a required item is unregistered, and
/// [`CoreError::CyclicRecipe`] when a recipe reaches itself through its own
/// required items.
pub fn resolve_summary(view: &CookbookView<'_>, name: &str) -> Result<Summary, CoreError> {
    let recipe = match view.get(name) {
        None => return Err(CoreError::NotFound(name.to_owned())),
        Some(Entry::Ingredient(_)) => return Err(CoreError::RootIsNotRecipe(name.to_owned())),
        Some(Entry::Recipe(recipe)) => recipe,
    };

    let mut totals = Totals::new();
    let mut path = HashSet::new();
    expand(view, recipe, 1, &mut totals, &mut path)?;
    Ok(totals.into_summary(name))
}

/// Walk one recipe's required items, scaling every contribution by
/// `multiplier`.
///
/// `path` holds the recipe names on the current descent; re-entering one of
/// them means the cookbook contains a reference cycle. Converging on a shared
/// sub-recipe along different paths is fine, the recipe is simply expanded
/// once per path.
fn expand(
    view: &CookbookView<'_>,
    recipe: &Recipe,
    multiplier: i64,
    totals: &mut Totals,
    path: &mut HashSet<String>,
) -> Result<(), CoreError> {
    if !path.insert(recipe.name.clone()) {
        return Err(CoreError::CyclicRecipe(recipe.name.clone()));
    }

    for item in &recipe.required_items {
        let entry = view
            .get(&item.name)
            .ok_or_else(|| CoreError::MissingSubentry(item.name.clone()))?;
        let quantity = multiplier * item.quantity;
        match entry {
            Entry::Ingredient(ingredient) => {
                totals.add_ingredient(&ingredient.name, quantity, ingredient.cook_time);
            }
            Entry::Recipe(sub_recipe) => {
                expand(view, sub_recipe, quantity, totals, path)?;
            }
        }
    }

    path.remove(&recipe.name);
    Ok(())
}
