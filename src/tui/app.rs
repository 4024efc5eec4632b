use crossterm::event::KeyCode;
use ratatui::Frame;

use super::browser_page::BrowserPage;
use super::summary_page::SummaryPage;
use crate::controllers::{BrowserSession, Summary};
use crate::models::api::WeeklyList;

pub enum AppAction {
    Continue,
    HandOff(WeeklyList), // Browser finished - store list and show summary
    Exit,
}

pub struct MenuContext {
    pub session: BrowserSession,
    pub handoff: Option<WeeklyList>,
    pub status: Option<String>,
}

impl MenuContext {
    pub fn new(session: BrowserSession) -> Self {
        Self {
            session,
            handoff: None,
            status: None,
        }
    }
}

pub(crate) trait Page {
    fn render(&self, context: &MenuContext, frame: &mut Frame);
    /// Page changes go through `MenuApp::show_summary` after the async hand-off
    fn handle_key(&mut self, key: KeyCode, context: &mut MenuContext);
}

pub struct MenuApp {
    page: Box<dyn Page>,
    context: MenuContext,
}

impl MenuApp {
    pub fn new(session: BrowserSession) -> Self {
        Self {
            page: Box::new(BrowserPage::new()),
            context: MenuContext::new(session),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        self.page.render(&self.context, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // global exit behavior
        if key == KeyCode::Char('q') {
            return AppAction::Exit;
        }

        self.page.handle_key(key, &mut self.context);

        match self.context.handoff.take() {
            Some(weekly_list) => AppAction::HandOff(weekly_list),
            None => AppAction::Continue,
        }
    }

    /// Switch to the summary page once the hand-off has been read back
    pub fn show_summary(&mut self, summary: Summary) {
        self.context.status = None;
        self.page = Box::new(SummaryPage::new(summary));
    }
}
