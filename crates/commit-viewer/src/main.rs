use anyhow::Result;
use clap::Parser;
use commit_client::{ClientConfig, CommitRoute, HttpCommitClient};
use commit_viewer_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod theme;
mod views;

use actions::{Action, CommitAction, DiffAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use middleware::{CommitMiddleware, KeyboardMiddleware, LoggingMiddleware, Middleware};
use reducers::reduce;
use state::AppState;

/// Browse a single commit: message, authorship and the diff of every changed file
#[derive(Debug, Parser)]
#[command(name = "commit-viewer", version, about)]
struct Args {
    /// Repository owner
    owner: String,

    /// Repository name
    repo: String,

    /// Commit to show
    commit_oid: String,

    /// Backend base URL (overrides COMMIT_VIEWER_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // A missing .env is fine
    dotenvy::dotenv().ok();

    let log_file = logger::init()?;
    log::info!("Starting commit-viewer (log: {})", log_file.display());

    let config = AppConfig::load();
    let api_url = config.resolve_api_url(args.api_url.as_deref());

    let client = HttpCommitClient::new(ClientConfig::new(api_url)?)?;
    log::info!("Using API at {}", client.config().base_url());
    let route = CommitRoute::new(args.owner, args.repo, args.commit_oid);

    // Channels: main -> background (actions), background -> main (results)
    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();

    let shared_state: SharedState = Arc::new(RwLock::new(AppState::new(route.clone())));

    // Middleware executes in this order
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(CommitMiddleware::new(Arc::new(client))?),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared_state),
        middleware,
    );

    send(&action_tx, Action::Commit(CommitAction::Open(route)))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &action_tx, &result_rx, &shared_state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Make sure the worker stops even if the loop ended with an error
    action_tx.send(Action::Global(GlobalAction::Quit)).ok();
    drop(action_tx);
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    log::info!("Exiting commit-viewer");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
    shared_state: &SharedState,
) -> Result<()> {
    let mut state = match shared_state.read() {
        Ok(s) => s.clone(),
        Err(e) => anyhow::bail!("Shared state poisoned: {}", e),
    };

    loop {
        // Apply everything the middleware chain let through
        let mut changed = false;
        while let Ok(action) = result_rx.try_recv() {
            state = reduce(state, &action);
            changed = true;
        }
        if changed {
            match shared_state.write() {
                Ok(mut shared) => *shared = state.clone(),
                Err(e) => log::error!("Failed to update shared state: {}", e),
            }
        }

        if !state.running {
            break;
        }

        let mut viewport = state.viewport;
        terminal.draw(|frame| {
            viewport = views::render(&state, frame.area(), frame);
        })?;
        if viewport != state.viewport {
            let action = DiffAction::SetViewport {
                height: viewport.height,
                width: viewport.width,
            };
            send(action_tx, Action::Diff(action))?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    send(action_tx, Action::Global(GlobalAction::KeyPressed(key)))?;
                }
            }
        }
    }

    Ok(())
}

fn send(action_tx: &Sender<Action>, action: Action) -> Result<()> {
    action_tx
        .send(action)
        .map_err(|_| anyhow::anyhow!("Background worker stopped"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_require_route() {
        assert!(Args::try_parse_from(["commit-viewer", "acme", "widgets"]).is_err());
    }

    #[test]
    fn test_args_with_api_url() {
        let args = Args::try_parse_from([
            "commit-viewer",
            "acme",
            "widgets",
            "abc123",
            "--api-url",
            "http://localhost:4000",
        ])
        .unwrap();
        assert_eq!(args.owner, "acme");
        assert_eq!(args.repo, "widgets");
        assert_eq!(args.commit_oid, "abc123");
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:4000"));
    }
}
