use sqlx::prelude::FromRow;

/// One row of the session-scoped key/value store
#[derive(Debug, Clone, FromRow)]
pub struct SessionEntryRecord {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}
