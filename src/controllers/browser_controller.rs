use tracing::{debug, info};

use crate::error::{MealPrepError, Result};
use crate::models::api::{Recipe, WeeklyList};

/// User actions on the recipe browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserCommand {
    /// Add the catalog recipe at this index to the weekly list
    AddRecipe(usize),
    /// Finish browsing and hand the weekly list to the summary page
    Proceed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Added(String),
    AlreadySelected(String),
    HandOff(WeeklyList),
}

/// State of one browsing session: the loaded catalog and the recipes picked so far
#[derive(Debug, Clone, Default)]
pub struct BrowserSession {
    catalog: Vec<Recipe>,
    weekly_list: WeeklyList,
}

impl BrowserSession {
    pub fn new(catalog: Vec<Recipe>) -> Self {
        Self {
            catalog,
            weekly_list: WeeklyList::new(),
        }
    }

    pub fn catalog(&self) -> &[Recipe] {
        &self.catalog
    }

    pub fn weekly_list(&self) -> &WeeklyList {
        &self.weekly_list
    }

    pub fn recipe(&self, index: usize) -> Result<&Recipe> {
        self.catalog
            .get(index)
            .ok_or(MealPrepError::RecipeIndexOutOfRange {
                index,
                len: self.catalog.len(),
            })
    }

    pub fn handle_command(&mut self, command: BrowserCommand) -> Result<CommandOutcome> {
        match command {
            BrowserCommand::AddRecipe(index) => {
                let recipe = self.recipe(index)?.clone();
                let title = recipe.title.clone();

                if self.weekly_list.add_recipe(recipe) {
                    info!(title = %title, "recipe added to weekly list");
                    Ok(CommandOutcome::Added(title))
                } else {
                    debug!(title = %title, "recipe already in weekly list");
                    Ok(CommandOutcome::AlreadySelected(title))
                }
            }
            BrowserCommand::Proceed => Ok(CommandOutcome::HandOff(self.weekly_list.clone())),
        }
    }
}
