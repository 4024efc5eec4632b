pub mod app;
mod browser_page;
mod summary_page;
