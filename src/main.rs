use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mealprep::{
    config::Config,
    controllers::{
        BrowserSession, Summary, fetch_catalog, load_weekly_list, open_session_store,
        save_weekly_list,
    },
    logging::init_logging,
    tui::app::{AppAction, MenuApp},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::SqlitePool;
use tracing::{error, info};

type Tui = Terminal<CrosstermBackend<std::io::Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    info!(?config, "starting mealprep");

    let pool = open_session_store(&config.session_url).await?;

    // One-shot load; an unreadable catalog leaves the browser empty
    let catalog = fetch_catalog(&config.catalog_path, config.normalize_fractions).await;
    let mut app = MenuApp::new(BrowserSession::new(catalog));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &pool).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = &result {
        error!(error = %e, "mealprep exited with an error");
    }
    result
}

async fn run(terminal: &mut Tui, app: &mut MenuApp, pool: &SqlitePool) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            AppAction::Continue => {}
            AppAction::HandOff(weekly_list) => {
                if let Err(e) = save_weekly_list(pool, &weekly_list).await {
                    error!(error = %e, "failed to save weekly list");
                }

                // The summary page only sees what came back out of session storage
                let restored = load_weekly_list(pool).await.unwrap_or_else(|e| {
                    error!(error = %e, "failed to read weekly list");
                    None
                });
                app.show_summary(Summary::from_handoff(restored));
            }
            AppAction::Exit => return Ok(()),
        }
    }
}
