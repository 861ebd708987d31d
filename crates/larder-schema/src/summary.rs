use serde::{Deserialize, Serialize};

/// Fully expanded view of a recipe: total cook time plus the base
/// ingredients it bottoms out in, with aggregated quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: i64,
    /// Ordered by first appearance during expansion.
    pub ingredients: Vec<IngredientTotal>,
}

/// One base ingredient's aggregated quantity within a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientTotal {
    pub name: String,
    pub quantity: i64,
}
