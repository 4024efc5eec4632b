use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::models::api::{Ingredient, Recipe, Step};

/// Test fixture that creates an in-memory SQLite session store with migrations applied
#[fixture]
pub async fn test_db() -> SqlitePool {
    // A single connection, otherwise each connection gets its own memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Build a recipe with `(name, unit)` ingredients and no steps
pub fn recipe(title: &str, ingredients: &[(&str, &str)]) -> Recipe {
    Recipe {
        title: title.to_string(),
        hero_image_url: format!("https://img.example/{}.jpg", title.to_lowercase()),
        ingredients: ingredients
            .iter()
            .map(|(name, unit)| Ingredient {
                name: name.to_string(),
                unit: unit.to_string(),
                image_url: None,
            })
            .collect(),
        instructions: Vec::new(),
        tag: None,
        url: None,
    }
}

/// A small catalog: two pasta dishes sharing ingredients and a salad
#[fixture]
pub fn catalog() -> Vec<Recipe> {
    let mut carbonara = recipe(
        "Carbonara",
        &[("Spaghetti", "250 g"), ("Egg", "2 pcs"), ("Pecorino", "40 g")],
    );
    carbonara.instructions = vec![
        Step {
            text: "Boil the pasta".to_string(),
            image_url: "https://img.example/carbonara-1.jpg".to_string(),
        },
        Step {
            text: "Whisk eggs and cheese".to_string(),
            image_url: String::new(),
        },
    ];

    vec![
        carbonara,
        recipe(
            "Cacio e Pepe",
            &[("Spaghetti", "200 g"), ("Pecorino", "60 g"), ("Black Pepper", "1 tsp")],
        ),
        recipe("Green Salad", &[("Lettuce", "1 head"), ("Olive Oil", "2 tbsp")]),
    ]
}
