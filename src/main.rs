use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

mod app;
mod client;
mod constants;
mod event;
mod handler;
mod meal;
mod network;
#[cfg(test)]
mod test_utils;
mod tui;
mod ui;

use crate::{
    app::App,
    client::{DEFAULT_API_BASE, MealClient},
    constants::TICK_RATE,
    event::{Action, FetchUpdateEvent},
    handler::handle_event,
    network::FetchManager,
    tui::Tui,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ASCII art logo
const LOGO: &str = r#"
██╗      █████╗ ███████╗██╗   ██╗███╗   ███╗███████╗ █████╗ ██╗
██║     ██╔══██╗╚══███╔╝╚██╗ ██╔╝████╗ ████║██╔════╝██╔══██╗██║
██║     ███████║  ███╔╝  ╚████╔╝ ██╔████╔██║█████╗  ███████║██║
██║     ██╔══██║ ███╔╝    ╚██╔╝  ██║╚██╔╝██║██╔══╝  ██╔══██║██║
███████╗██║  ██║███████╗   ██║   ██║ ╚═╝ ██║███████╗██║  ██║███████╗
╚══════╝╚═╝  ╚═╝╚══════╝   ╚═╝   ╚═╝     ╚═╝╚══════╝╚═╝  ╚═╝╚══════╝
"#;

/// lazymeal - Terminal UI for searching TheMealDB recipes
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Recipe to search for at startup (e.g. `lazymeal chicken soup`)
    query: Vec<String>,

    /// Base URL of the meal API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr and is off unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(Commands::Version) = cli.command {
        println!("{LOGO}");
        println!("lazymeal v{VERSION}");
        println!("A terminal UI for searching TheMealDB recipes");
        return Ok(());
    }

    color_eyre::install()?;
    let mut terminal = tui::init()?;
    let mut app = App::new();

    // Channel for fetch results -> main loop.
    let (fetch_event_sender, mut fetch_event_receiver) = mpsc::channel::<FetchUpdateEvent>(100);
    let fetch_manager = FetchManager::new(
        MealClient::new(cli.api_url),
        tokio::runtime::Handle::current(),
        fetch_event_sender,
    );

    // An initial query from the command line is searched right away.
    let initial_query = cli.query.join(" ");
    if !initial_query.trim().is_empty() {
        app.search_input = initial_query;
        app.update(Action::PerformSearch, &fetch_manager)?;
    }

    let result = run_app(
        &mut terminal,
        &mut app,
        &fetch_manager,
        &mut fetch_event_receiver,
    )
    .await;

    tui::restore()?;
    result
}

/// Main application loop: draw, poll terminal input, drain fetch events.
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    fetch_manager: &FetchManager,
    fetch_event_receiver: &mut mpsc::Receiver<FetchUpdateEvent>,
) -> Result<()> {
    loop {
        if app.exit {
            break;
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        // Poll terminal events with a small timeout so fetch events are
        // picked up promptly while input stays responsive.
        let mut saw_terminal_event = false;
        if crossterm::event::poll(Duration::from_millis(1))? {
            saw_terminal_event = true;
            match crossterm::event::read() {
                Ok(event) => {
                    if let Some(action) = handle_event(app, event) {
                        dispatch(app, action, fetch_manager)?;
                    }
                }
                Err(_) => {
                    app.exit = true;
                }
            }
        }

        match fetch_event_receiver.try_recv() {
            Ok(FetchUpdateEvent::SearchResults { seq, result }) => {
                dispatch(app, Action::UpdateSearchResults { seq, result }, fetch_manager)?;
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                app.exit = true;
            }
        }

        if !saw_terminal_event {
            tokio::time::sleep(TICK_RATE).await;
        }
    }
    Ok(())
}

/// Applies an action; an update failure becomes a message popup instead of
/// tearing down the loop.
fn dispatch(app: &mut App, action: Action, fetch_manager: &FetchManager) -> Result<()> {
    if let Err(e) = app.update(action, fetch_manager) {
        app.update(Action::ShowMessage(format!("Error: {e}")), fetch_manager)?;
    }
    Ok(())
}
