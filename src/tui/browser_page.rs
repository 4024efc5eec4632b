use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::warn;

use super::app::{MenuContext, Page};
use crate::controllers::{BrowserCommand, CommandOutcome};

pub(crate) struct BrowserPage {
    selected: usize,
    show_details: bool,
}

impl BrowserPage {
    pub fn new() -> Self {
        Self {
            selected: 0,
            show_details: false,
        }
    }

    fn dispatch(&self, command: BrowserCommand, context: &mut MenuContext) {
        match context.session.handle_command(command) {
            Ok(CommandOutcome::Added(title)) => {
                context.status = Some(format!("Added {} to the weekly list", title));
            }
            Ok(CommandOutcome::AlreadySelected(title)) => {
                context.status = Some(format!("{} is already in the weekly list", title));
            }
            Ok(CommandOutcome::HandOff(weekly_list)) => {
                context.handoff = Some(weekly_list);
            }
            Err(e) => {
                warn!(error = %e, "browser command failed");
                context.status = Some(e.to_string());
            }
        }
    }

    fn render_details(&self, context: &MenuContext, frame: &mut Frame) {
        let Ok(recipe) = context.session.recipe(self.selected) else {
            return;
        };

        let area = frame.area().inner(Margin {
            horizontal: 4,
            vertical: 2,
        });
        let details = Paragraph::new(recipe.to_string())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} (Esc to close)", recipe.title)),
            );

        frame.render_widget(Clear, area);
        frame.render_widget(details, area);
    }
}

impl Page for BrowserPage {
    fn render(&self, context: &MenuContext, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(frame.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[0]);

        let catalog = context.session.catalog();
        let weekly_list = context.session.weekly_list();

        let recipe_lines: Vec<Line> = if catalog.is_empty() {
            vec![Line::from("No recipes loaded")]
        } else {
            catalog
                .iter()
                .enumerate()
                .map(|(i, recipe)| {
                    let marker = if weekly_list.contains(&recipe.title) {
                        "[x] "
                    } else {
                        "[ ] "
                    };
                    let title_style = if i == self.selected {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };

                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(recipe.title.clone(), title_style),
                        Span::raw(" "),
                        Span::styled(
                            recipe.hero_image_url.clone(),
                            Style::default().add_modifier(Modifier::DIM),
                        ),
                    ])
                })
                .collect()
        };

        let recipe_list = Paragraph::new(recipe_lines)
            .block(Block::default().borders(Borders::ALL).title("Recipes"));
        frame.render_widget(recipe_list, columns[0]);

        let weekly_lines: Vec<Line> = weekly_list.titles().map(Line::from).collect();
        let weekly = Paragraph::new(weekly_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Weekly List ({})", weekly_list.len())),
        );
        frame.render_widget(weekly, columns[1]);

        let help = "Up/Down select, + add, Enter details, n shopping list, q quit";
        let status = Paragraph::new(context.status.as_deref().unwrap_or(help))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, rows[1]);

        if self.show_details {
            self.render_details(context, frame);
        }
    }

    fn handle_key(&mut self, key: KeyCode, context: &mut MenuContext) {
        let len = context.session.catalog().len();

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char('+') | KeyCode::Char('a') => {
                self.dispatch(BrowserCommand::AddRecipe(self.selected), context);
            }
            KeyCode::Enter => {
                self.show_details = len > 0;
            }
            KeyCode::Esc => {
                self.show_details = false;
            }
            KeyCode::Char('n') => {
                self.dispatch(BrowserCommand::Proceed, context);
            }
            _ => {}
        }
    }
}
