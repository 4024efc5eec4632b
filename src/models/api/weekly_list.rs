use serde::{Deserialize, Serialize};

use super::Recipe;

/// Recipes chosen for the week, unique by title, in the order they were added.
///
/// Serializes as a plain JSON array of recipes; that array is the hand-off
/// format between the browser and the summary page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Recipe>", into = "Vec<Recipe>")]
pub struct WeeklyList {
    recipes: Vec<Recipe>,
}

impl WeeklyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipe unless one with the same title is already present.
    /// Returns whether the recipe was inserted.
    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        if self.contains(&recipe.title) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    pub fn get_list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn contains(&self, title: &str) -> bool {
        self.recipes.iter().any(|r| r.title == title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|r| r.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl From<Vec<Recipe>> for WeeklyList {
    fn from(recipes: Vec<Recipe>) -> Self {
        let mut list = Self::new();
        for recipe in recipes {
            list.add_recipe(recipe);
        }
        list
    }
}

impl From<WeeklyList> for Vec<Recipe> {
    fn from(list: WeeklyList) -> Self {
        list.recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::recipe;

    #[test]
    fn test_add_recipe_preserves_insertion_order() {
        let mut list = WeeklyList::new();

        assert!(list.add_recipe(recipe("B", &[])));
        assert!(list.add_recipe(recipe("A", &[])));

        assert_eq!(list.titles().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn test_add_same_title_twice_is_noop() {
        let mut list = WeeklyList::new();

        assert!(list.add_recipe(recipe("Soup", &[("Leek", "1 pcs")])));
        assert!(!list.add_recipe(recipe("Soup", &[("Leek", "3 pcs")])));

        assert_eq!(list.len(), 1);
        // First version wins
        assert_eq!(list.get_list()[0].ingredients[0].unit, "1 pcs");
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = WeeklyList::new();

        assert!(list.is_empty());
        assert!(list.get_list().is_empty());
        assert!(!list.contains("Soup"));
    }

    #[test]
    fn test_serializes_as_recipe_array() {
        let mut list = WeeklyList::new();
        list.add_recipe(recipe("Soup", &[("Leek", "1 pcs")]));

        let json = serde_json::to_value(&list).expect("Failed to serialize");

        assert!(json.is_array());
        assert_eq!(json[0]["title"], "Soup");
        assert_eq!(json[0]["ingredients"][0]["unit"], "1 pcs");
    }

    #[test]
    fn test_deserialize_reconstructs_exact_recipes() {
        let mut list = WeeklyList::new();
        list.add_recipe(recipe("Soup", &[("Leek", "1 pcs")]));
        list.add_recipe(recipe("Stew", &[("Beef", "500 g")]));

        let text = serde_json::to_string(&list).expect("Failed to serialize");
        let restored: WeeklyList = serde_json::from_str(&text).expect("Failed to deserialize");

        assert_eq!(restored, list);
    }

    #[test]
    fn test_deserialize_drops_repeated_titles() {
        let text = r#"[
            {"title": "Soup", "hero_image_url": "", "ingredients": [], "instructions": []},
            {"title": "Soup", "hero_image_url": "", "ingredients": [], "instructions": []}
        ]"#;

        let restored: WeeklyList = serde_json::from_str(text).expect("Failed to deserialize");

        assert_eq!(restored.len(), 1);
    }
}
