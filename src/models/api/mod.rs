mod recipe;
mod shopping_list;
mod weekly_list;

pub use recipe::{Ingredient, Recipe, Step};
pub use shopping_list::{AggregatedIngredient, ShoppingList, format_quantity};
pub use weekly_list::WeeklyList;
