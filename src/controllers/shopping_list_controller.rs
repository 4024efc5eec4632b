use tracing::{debug, warn};

use super::unit_parser::parse_unit;
use crate::models::api::{Recipe, ShoppingList};

/// Merge the ingredients of every recipe into one shopping list.
///
/// Recipes and their ingredients are visited in order. Quantities for the
/// same ingredient name are summed and the unit label of the latest
/// occurrence is kept. A unit string without a numeric prefix contributes NaN
/// to its ingredient's total; it is logged, not rejected.
pub fn generate_shopping_list(recipes: &[Recipe]) -> ShoppingList {
    let mut shopping_list = ShoppingList::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let parsed = parse_unit(&ingredient.unit);

            if parsed.is_malformed() {
                warn!(
                    recipe = %recipe.title,
                    ingredient = %ingredient.name,
                    unit = %ingredient.unit,
                    "unit has no numeric quantity"
                );
            }

            shopping_list.add(&ingredient.name, parsed.quantity, &parsed.unit_label);
        }
    }

    debug!(
        recipes = recipes.len(),
        ingredients = shopping_list.len(),
        "generated shopping list"
    );

    shopping_list
}
