use std::collections::HashSet;
use std::path::Path;

use tracing::{error, info, warn};

use super::unit_parser::normalize_fractions;
use crate::error::{MealPrepError, Result};
use crate::models::api::Recipe;

/// Read the recipe catalog, a JSON array of recipes.
///
/// Recipes repeating an earlier title are dropped. With `normalize` set,
/// vulgar fractions in ingredient units and step text become decimals.
pub async fn load_catalog(path: &Path, normalize: bool) -> Result<Vec<Recipe>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MealPrepError::CatalogRead {
            path: path.display().to_string(),
            source,
        })?;

    let recipes: Vec<Recipe> =
        serde_json::from_str(&text).map_err(|source| MealPrepError::CatalogParse {
            path: path.display().to_string(),
            source,
        })?;

    let mut seen_titles = HashSet::new();
    let mut catalog = Vec::with_capacity(recipes.len());

    for mut recipe in recipes {
        if !seen_titles.insert(recipe.title.clone()) {
            warn!(title = %recipe.title, "dropping recipe with duplicate title");
            continue;
        }

        if normalize {
            normalize_recipe(&mut recipe);
        }

        catalog.push(recipe);
    }

    info!(path = %path.display(), recipes = catalog.len(), "loaded recipe catalog");

    Ok(catalog)
}

/// Load the catalog for the browser. Failures are logged and leave the catalog empty.
pub async fn fetch_catalog(path: &Path, normalize: bool) -> Vec<Recipe> {
    match load_catalog(path, normalize).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "error fetching recipes");
            Vec::new()
        }
    }
}

fn normalize_recipe(recipe: &mut Recipe) {
    for ingredient in &mut recipe.ingredients {
        ingredient.unit = normalize_fractions(&ingredient.unit);
    }
    for step in &mut recipe.instructions {
        step.text = normalize_fractions(&step.text);
    }
}
