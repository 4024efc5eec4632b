mod session_entry;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use session_entry::SessionEntryRecord;
