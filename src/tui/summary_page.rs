use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{MenuContext, Page};
use crate::controllers::Summary;

pub(crate) struct SummaryPage {
    summary: Summary,
}

impl SummaryPage {
    pub fn new(summary: Summary) -> Self {
        Self { summary }
    }
}

impl Page for SummaryPage {
    fn render(&self, _context: &MenuContext, frame: &mut Frame) {
        if !self.summary.found {
            let message = Paragraph::new("No weekly list found (q to quit)")
                .block(Block::default().borders(Borders::ALL).title("Summary"));
            frame.render_widget(message, frame.area());
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40), // Selected recipes
                Constraint::Min(1),         // Shopping list
                Constraint::Length(3),      // Footer
            ])
            .split(frame.area());

        let recipe_lines: Vec<Line> = self
            .summary
            .recipes
            .iter()
            .map(|recipe| {
                Line::from(vec![
                    Span::raw(recipe.title.clone()),
                    Span::raw(" "),
                    Span::styled(
                        format!("({})", recipe.hero_image_url),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ])
            })
            .collect();
        let recipes = Paragraph::new(recipe_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Selected Recipes"),
        );
        frame.render_widget(recipes, chunks[0]);

        let shopping_lines: Vec<Line> = self.summary.lines().into_iter().map(Line::from).collect();
        let shopping_list = Paragraph::new(shopping_lines)
            .block(Block::default().borders(Borders::ALL).title("Shopping List"));
        frame.render_widget(shopping_list, chunks[1]);

        let malformed = self.summary.shopping_list.malformed();
        let footer = if malformed.is_empty() {
            "q to quit".to_string()
        } else {
            format!("Quantities could not be read for: {}", malformed.join(", "))
        };
        let footer = Paragraph::new(footer).block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_key(&mut self, _key: KeyCode, _context: &mut MenuContext) {}
}
