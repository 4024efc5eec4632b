mod browser_controller;
mod catalog_controller;
mod session_controller;
mod shopping_list_controller;
mod summary_controller;
mod unit_parser;

pub use browser_controller::{BrowserCommand, BrowserSession, CommandOutcome};
pub use catalog_controller::{fetch_catalog, load_catalog};
pub use session_controller::{
    WEEKLY_LIST_KEY, load_weekly_list, open_session_store, save_weekly_list,
};
pub use shopping_list_controller::generate_shopping_list;
pub use summary_controller::Summary;
pub use unit_parser::{ParsedUnit, normalize_fractions, parse_unit};
