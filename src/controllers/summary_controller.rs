use tracing::info;

use super::shopping_list_controller::generate_shopping_list;
use crate::models::api::{Recipe, ShoppingList, WeeklyList};

/// What the summary page shows: the chosen recipes and their combined ingredients
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub recipes: Vec<Recipe>,
    pub shopping_list: ShoppingList,
    /// False when no weekly list was handed off
    pub found: bool,
}

impl Summary {
    /// Build the summary from the handed-off weekly list.
    /// A missing list is logged and shown as an empty selection.
    pub fn from_handoff(weekly_list: Option<WeeklyList>) -> Self {
        let Some(weekly_list) = weekly_list else {
            info!("no weekly list found in session storage");
            return Self::default();
        };

        let shopping_list = generate_shopping_list(weekly_list.get_list());

        Self {
            recipes: weekly_list.into(),
            shopping_list,
            found: true,
        }
    }

    /// Shopping list display lines, in first-encounter order
    pub fn lines(&self) -> Vec<String> {
        self.shopping_list.lines()
    }
}
