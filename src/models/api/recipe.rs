use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog recipe, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub hero_image_url: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<Step>,
    /// Catalog category the recipe was scraped from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Source page of the recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A single ingredient line, e.g. `{ name: "Garlic", unit: "1 clove" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Quantity and unit label in one free-form string
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub text: String,
    #[serde(default)]
    pub image_url: String,
}

impl fmt::Display for Recipe {
    /// Human-readable details: ingredients as `name: unit`, then numbered steps
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.title)?;
        if !self.hero_image_url.is_empty() {
            writeln!(f, "Image: {}", self.hero_image_url)?;
        }
        if let Some(tag) = &self.tag {
            writeln!(f, "Tag: {}", tag)?;
        }

        writeln!(f, "\nIngredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  - {}: {}", ingredient.name, ingredient.unit)?;
        }

        if !self.instructions.is_empty() {
            writeln!(f, "\nInstructions:")?;
            for (i, step) in self.instructions.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, step.text)?;
                if !step.image_url.is_empty() {
                    writeln!(f, "   ({})", step.image_url)?;
                }
            }
        }

        Ok(())
    }
}
