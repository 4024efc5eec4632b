use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::SessionEntryRecord;
use crate::models::api::WeeklyList;

/// Session storage key the weekly list is handed off under
pub const WEEKLY_LIST_KEY: &str = "weeklyList";

/// Open the session store, creating the database and running migrations as needed
pub async fn open_session_store(database_url: &str) -> Result<SqlitePool> {
    if !sqlx::Sqlite::database_exists(database_url).await? {
        info!(database_url, "creating session database");
        sqlx::Sqlite::create_database(database_url).await?;
    }

    // One connection: an in-memory database is private to its connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Store the weekly list as JSON text under [`WEEKLY_LIST_KEY`], replacing any earlier value
pub async fn save_weekly_list(pool: &SqlitePool, weekly_list: &WeeklyList) -> Result<()> {
    let value = serde_json::to_string(weekly_list)?;

    sqlx::query(
        r#"
        INSERT INTO session_storage (key, value) VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(WEEKLY_LIST_KEY)
    .bind(&value)
    .execute(pool)
    .await?;

    info!(recipes = weekly_list.len(), "saved weekly list to session storage");
    debug!(%value, "weekly list payload");

    Ok(())
}

/// Fetch the handed-off weekly list, `None` if nothing was saved this session
pub async fn load_weekly_list(pool: &SqlitePool) -> Result<Option<WeeklyList>> {
    let entry = sqlx::query_as::<_, SessionEntryRecord>(
        "SELECT key, value, updated_at FROM session_storage WHERE key = ?",
    )
    .bind(WEEKLY_LIST_KEY)
    .fetch_optional(pool)
    .await?;

    let Some(entry) = entry else {
        return Ok(None);
    };

    let weekly_list: WeeklyList = serde_json::from_str(&entry.value)?;
    info!(
        recipes = weekly_list.len(),
        saved_at = %entry.updated_at,
        "retrieved weekly list from session storage"
    );

    Ok(Some(weekly_list))
}
