use std::io::Write;

use mealprep::controllers::{
    BrowserCommand, BrowserSession, CommandOutcome, Summary, load_catalog, load_weekly_list,
    open_session_store, save_weekly_list,
};
use mealprep::models::api::WeeklyList;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"[
    {
        "title": "A",
        "hero_image_url": "https://img.example/a.jpg",
        "ingredients": [{"name": "Flour", "unit": "200 g"}],
        "instructions": [{"text": "Sift the flour", "image_url": ""}]
    },
    {
        "title": "B",
        "hero_image_url": "https://img.example/b.jpg",
        "ingredients": [
            {"name": "Flour", "unit": "300 g"},
            {"name": "Egg", "unit": "2 pcs"}
        ],
        "instructions": []
    },
    {
        "title": "C",
        "hero_image_url": "",
        "ingredients": [
            {"name": "Milk", "unit": "½ cup"},
            {"name": "Salt", "unit": "a pinch"}
        ],
        "instructions": []
    }
]"#;

fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write catalog");
    file
}

async fn browse(catalog_file: &NamedTempFile, picks: &[usize]) -> WeeklyList {
    let catalog = load_catalog(catalog_file.path(), true)
        .await
        .expect("Failed to load catalog");

    let mut session = BrowserSession::new(catalog);
    for &index in picks {
        session
            .handle_command(BrowserCommand::AddRecipe(index))
            .expect("Failed to add recipe");
    }

    match session
        .handle_command(BrowserCommand::Proceed)
        .expect("Failed to proceed")
    {
        CommandOutcome::HandOff(list) => list,
        other => panic!("Expected HandOff, got {:?}", other),
    }
}

#[tokio::test]
async fn test_browse_handoff_and_summarize() {
    let catalog_file = write_catalog(CATALOG);
    let weekly_list = browse(&catalog_file, &[0, 1, 0]).await;
    assert_eq!(weekly_list.len(), 2);

    let pool = open_session_store("sqlite::memory:")
        .await
        .expect("Failed to open session store");

    save_weekly_list(&pool, &weekly_list)
        .await
        .expect("Failed to save weekly list");

    let restored = load_weekly_list(&pool)
        .await
        .expect("Failed to load weekly list");

    let summary = Summary::from_handoff(restored);

    assert_eq!(
        summary
            .recipes
            .iter()
            .map(|r| r.title.as_str())
            .collect::<Vec<_>>(),
        vec!["A", "B"]
    );
    assert_eq!(summary.recipes[0].instructions[0].text, "Sift the flour");
    assert_eq!(summary.lines(), vec!["Flour: 500 g", "Egg: 2 pcs"]);
}

#[tokio::test]
async fn test_summary_without_handoff() {
    let pool = open_session_store("sqlite::memory:")
        .await
        .expect("Failed to open session store");

    let restored = load_weekly_list(&pool)
        .await
        .expect("Failed to load weekly list");

    let summary = Summary::from_handoff(restored);

    assert!(!summary.found);
    assert!(summary.lines().is_empty());
}

#[tokio::test]
async fn test_fractions_and_unreadable_quantities() {
    let catalog_file = write_catalog(CATALOG);
    let weekly_list = browse(&catalog_file, &[2]).await;

    let summary = Summary::from_handoff(Some(weekly_list));

    assert_eq!(summary.lines(), vec!["Milk: 0.5 cup", "Salt: NaN pinch"]);
    assert_eq!(summary.shopping_list.malformed(), vec!["Salt"]);
}

#[tokio::test]
async fn test_file_backed_session_store() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("session.db").display());

    let catalog_file = write_catalog(CATALOG);
    let weekly_list = browse(&catalog_file, &[1]).await;

    {
        let pool = open_session_store(&url)
            .await
            .expect("Failed to open session store");
        save_weekly_list(&pool, &weekly_list)
            .await
            .expect("Failed to save weekly list");
        pool.close().await;
    }

    let pool = open_session_store(&url)
        .await
        .expect("Failed to reopen session store");
    let restored = load_weekly_list(&pool)
        .await
        .expect("Failed to load weekly list");

    assert_eq!(restored, Some(weekly_list));
}
