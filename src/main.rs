mod app;
mod components;
mod draw;
mod keys;
mod route;
mod state;
mod ui;
mod views;

use crate::app::App;
use crate::keys::KeyOutcome;
use crate::state::app_settings::AppSettings;
use crate::state::messages::{NetworkRequest, NetworkResponse, UiEvent};
use crate::state::network::{LoadingState, NetworkWorker, send_all};
use crate::state::refresher::PeriodicRefresher;
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::warn;
use scoreboard_api::client::ScoresApi;
use std::io::Stdout;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(initial_route) = handle_cli_args() else {
        return Ok(());
    };

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal();

    tui_logger::init_logger(log::LevelFilter::Error)?;
    tui_logger::set_default_level(log::LevelFilter::Error);

    let settings = AppSettings::load();
    let client = ScoresApi::new(settings.endpoints.clone());
    let refresh_every = settings.refresh_interval;
    let app = Arc::new(Mutex::new(App::new(settings)));

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(100);
    let (network_resp_tx, network_resp_rx) = mpsc::channel::<NetworkResponse>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Network thread
    let network_worker = NetworkWorker::new(client, network_req_rx, network_resp_tx);
    let network_task = tokio::spawn(network_worker.run());

    // Periodic score refresh thread
    let periodic_updater = PeriodicRefresher::new(ui_event_tx.clone(), refresh_every);
    let periodic_task = tokio::spawn(periodic_updater.run());

    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(
        terminal,
        app,
        initial_route,
        ui_event_rx,
        network_req_tx,
        network_resp_rx,
    )
    .await;

    input_handler.abort();
    network_task.abort();
    periodic_task.abort();
    cleanup_terminal();

    Ok(())
}

/// Returns the route to open, or None when the process should exit.
fn handle_cli_args() -> Option<String> {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return Some("/".to_owned());
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            None
        }
        "-V" | "--version" => {
            println!("scoreboard {}", env!("CARGO_PKG_VERSION"));
            None
        }
        route if !route.starts_with('-') => Some(route.to_owned()),
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "scoreboard - MLB, NBA, NFL and NHL scores in the terminal

Usage:
  scoreboard [ROUTE]
  scoreboard --help
  scoreboard --version

Routes:
  /mlb  /nba/scores/2021-04-10  /nfl/scores/week/5  /nhl  /about  /test

Environment:
  SCOREBOARD_API_BASE          Score proxy for mlb, nba and nfl (default http://localhost:3000)
  SCOREBOARD_NHL_API           NHL stats API (default https://statsapi.web.nhl.com/api/v1)
  SCOREBOARD_NBA_DATA          NBA box score feed
  SCOREBOARD_CORS_PROXY        Prefix for the NBA box score URL
  SCOREBOARD_REFRESH_SECS      Seconds between refreshes (default 30, minimum 5)
  SCOREBOARD_LOG               Log level shown in the log pane (error, warn, info, debug, trace)"
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    initial_route: String,
    mut ui_events: mpsc::Receiver<UiEvent>,
    network_requests: mpsc::Sender<NetworkRequest>,
    mut network_responses: mpsc::Receiver<NetworkResponse>,
) {
    let mut loading = LoadingState::default();

    loop {
        tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                let outcome = handle_ui_event(ui_event, &app, &initial_route, &network_requests).await;
                if outcome == KeyOutcome::Quit {
                    break;
                }
                let mut app_guard = app.lock().await;
                draw::draw(&mut terminal, &mut app_guard, loading);
            }

            Some(response) = network_responses.recv() => {
                handle_network_response(response, &app, &network_requests, &mut loading).await;
                let mut app_guard = app.lock().await;
                draw::draw(&mut terminal, &mut app_guard, loading);
            }

            else => break,
        }
    }
}

async fn handle_ui_event(
    ui_event: UiEvent,
    app: &Arc<Mutex<App>>,
    initial_route: &str,
    network_requests: &mpsc::Sender<NetworkRequest>,
) -> KeyOutcome {
    let requests = match ui_event {
        UiEvent::AppStarted => {
            let mut guard = app.lock().await;
            guard.navigate_path(initial_route).into_iter().collect()
        }
        UiEvent::KeyPressed(key_event) => {
            return keys::handle_key_bindings(key_event, app, network_requests).await;
        }
        UiEvent::Resize => Vec::new(),
        UiEvent::RefreshTick => app.lock().await.refresh(),
    };

    send_all(network_requests, requests).await;
    KeyOutcome::Continue
}

async fn handle_network_response(
    response: NetworkResponse,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
    loading: &mut LoadingState,
) {
    let mut guard = app.lock().await;
    let follow_up = match response {
        NetworkResponse::LoadingStateChanged { loading_state } => {
            *loading = loading_state;
            None
        }
        NetworkResponse::ScoresLoaded { generation, scoreboard } => {
            guard.on_scores_loaded(generation, scoreboard)
        }
        NetworkResponse::ScoresFailed { generation, error } => {
            guard.on_scores_failed(generation, &error);
            None
        }
        NetworkResponse::NbaDetailsLoaded { generation, game_id, details } => {
            guard.on_nba_details_loaded(generation, game_id, details);
            None
        }
        NetworkResponse::NbaDetailsFailed { generation, game_id, error } => {
            guard.on_nba_details_failed(generation, &game_id, &error);
            None
        }
    };
    drop(guard);

    send_all(network_requests, follow_up).await;
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        if let Ok(event) = crossterm_event::read() {
            let ui_event = match event {
                Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
                Event::Resize(_, _) => Some(UiEvent::Resize),
                _ => None,
            };

            if let Some(ui_event) = ui_event
                && ui_events.send(ui_event).await.is_err()
            {
                break;
            }
        }
    }
}

fn setup_terminal() {
    let mut stdout = io::stdout();
    let result = execute!(
        stdout,
        cursor::Hide,
        terminal::EnterAlternateScreen,
        terminal::Clear(terminal::ClearType::All)
    )
    .and_then(|_| terminal::enable_raw_mode());
    if let Err(e) = result {
        warn!("terminal setup failed: {e}");
    }
}

pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All),
        terminal::LeaveAlternateScreen,
        cursor::Show
    );
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
