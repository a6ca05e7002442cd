//! signup-tui - Terminal Registration Client
//!
//! Registers an account against the reqres.in demo API and then lists the
//! users it knows about. Diagnostics go to stderr and are filtered through
//! `RUST_LOG` (default `warn`), e.g. `RUST_LOG=debug signup-tui 2>app.log`.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

use signup_tui::application::{App, Dispatcher, Outcome};
use signup_tui::domain::UserApi;
use signup_tui::infrastructure::{ApiClient, ClientConfig};
use signup_tui::presentation::{render_ui, InputHandler};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Entry point.
///
/// Builds the one shared API client, sets up the terminal, and runs the UI
/// loop until the user quits. The terminal is restored before any error is
/// reported.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let client = ApiClient::new(&ClientConfig::default())?;
    let api: Arc<dyn UserApi> = Arc::new(client);
    let (dispatcher, outcomes) = Dispatcher::new(api);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, &dispatcher, outcomes);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "ui loop failed");
        println!("{err:?}");
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

/// Main UI loop.
///
/// Each pass applies finished requests, hands newly queued commands to the
/// dispatcher, draws, and waits briefly for a key press. All screen state is
/// touched from this loop only.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut outcomes: UnboundedReceiver<Outcome>,
) -> io::Result<()> {
    loop {
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply(outcome);
        }
        for command in app.take_commands() {
            dispatcher.dispatch(command);
        }

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
