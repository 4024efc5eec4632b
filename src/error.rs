use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealPrepError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No recipe at index {index} (catalog has {len})")]
    RecipeIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MealPrepError>;
