use addrscan::api::{ExplorerApi, HttpApiClient};
use addrscan::app::App;
use addrscan::config::Config;
use addrscan::search::{self, SearchEvent, SearchRequest};
use addrscan::{logging, ui};

use anyhow::Result;
use clap::Parser;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

#[derive(Debug, Parser)]
#[command(
    name = "addrscan",
    version,
    about = "Look up an Ethereum address: balance, transactions and internal transactions"
)]
struct Args {
    /// Address to search immediately on start-up
    address: Option<String>,

    /// Base URL of the explorer API (e.g. http://127.0.0.1:8080/api)
    #[arg(long)]
    api_url: Option<String>,

    /// Config file to read instead of ~/.config/addrscan/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the diagnostic log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = args.api_url {
        config.api_url = url.trim_end_matches('/').to_string();
    }
    if let Some(path) = args.log_file {
        config.log_file = Some(path);
    }

    logging::init(&config.log_path()?)?;
    info!(api_url = %config.api_url, offset = config.offset, "starting addrscan");

    let api: Arc<dyn ExplorerApi> = Arc::new(HttpApiClient::new(&config.api_url));

    run_tui(config, api, args.address).await
}

async fn run_tui(
    config: Config,
    api: Arc<dyn ExplorerApi>,
    initial_address: Option<String>,
) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);

    let (tx, mut rx) = mpsc::channel::<SearchEvent>(32);

    if let Some(address) = initial_address {
        app.search_input = Input::new(address);
        if let Some(request) = app.submit_search() {
            spawn_search(&api, request, tx.clone());
        }
    }

    let result = run_event_loop(&mut terminal, &mut app, &api, tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    api: &Arc<dyn ExplorerApi>,
    tx: mpsc::Sender<SearchEvent>,
    rx: &mut mpsc::Receiver<SearchEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for async results
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }

        // Poll for input events
        if event::poll(std::time::Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        if let Some(request) = app.submit_search() {
                            spawn_search(api, request, tx.clone());
                        }
                    }
                    KeyCode::Tab => app.next_tab(),
                    KeyCode::BackTab => app.prev_tab(),
                    KeyCode::Up => app.select_prev(),
                    KeyCode::Down => app.select_next(),
                    _ => {
                        app.search_input.handle_event(&ev);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run a search in the background. Earlier searches keep running; their
/// results are discarded by generation when they arrive.
fn spawn_search(api: &Arc<dyn ExplorerApi>, request: SearchRequest, tx: mpsc::Sender<SearchEvent>) {
    tokio::spawn(search::execute_search(Arc::clone(api), request, tx));
}
