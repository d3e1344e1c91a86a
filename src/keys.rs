use crate::app::App;
use crate::state::messages::NetworkRequest;
use crate::state::network::send_all;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scoreboard_api::League;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// What a key press asks the loop to do after the app has been updated.
#[derive(Debug, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) -> KeyOutcome {
    let mut guard = app.lock().await;
    let (outcome, requests) = apply_key(&mut guard, key_event);
    drop(guard);

    send_all(network_requests, requests).await;
    outcome
}

/// Update the app for one key press and collect the fetches it triggers.
pub fn apply_key(app: &mut App, key_event: KeyEvent) -> (KeyOutcome, Vec<NetworkRequest>) {
    let mut requests = Vec::new();

    if app.state.prompt.is_some() {
        match key_event.code {
            KeyCode::Enter => requests.extend(app.submit_prompt()),
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.prompt_pop(),
            Char(c) => app.prompt_push(c),
            _ => {}
        }
        return (KeyOutcome::Continue, requests);
    }

    match (key_event.code, key_event.modifiers) {
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => return (KeyOutcome::Quit, requests),

        (KeyCode::Esc, _) => app.exit_help(),
        (Char('?'), _) => app.toggle_help(),
        (Char(':'), _) => app.open_prompt(),

        // Screens
        (Char('0'), _) => requests.extend(app.navigate_path("/")),
        (Char('1'), _) => requests.extend(app.go_to_league(League::Mlb)),
        (Char('2'), _) => requests.extend(app.go_to_league(League::Nba)),
        (Char('3'), _) => requests.extend(app.go_to_league(League::Nfl)),
        (Char('4'), _) => requests.extend(app.go_to_league(League::Nhl)),
        (Char('a'), _) => requests.extend(app.navigate_path("/about")),

        // Scores screen
        (Char('j') | KeyCode::Down, _) => requests.extend(app.select_next_game()),
        (Char('k') | KeyCode::Up, _) => requests.extend(app.select_prev_game()),
        (Char('h') | KeyCode::Left, _) => requests.extend(app.shift_context(-1)),
        (Char('l') | KeyCode::Right, _) => requests.extend(app.shift_context(1)),
        (Char('t'), _) => requests.extend(app.jump_to_today()),
        (KeyCode::Tab, _) => app.next_panel(),
        (Char('r'), _) => requests.extend(app.refresh()),

        // Global
        (Char('f'), _) => app.toggle_full_screen(),
        (Char('"'), _) => app.toggle_show_logs(),

        _ => {}
    }

    (KeyOutcome::Continue, requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::state::app_settings::AppSettings;
    use crate::views::Panel;

    fn press(app: &mut App, code: KeyCode) -> (KeyOutcome, Vec<NetworkRequest>) {
        apply_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(AppSettings::default())
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, Char('q')).0, KeyOutcome::Quit);
        let ctrl_c = KeyEvent::new(Char('c'), KeyModifiers::CONTROL);
        assert_eq!(apply_key(&mut app, ctrl_c).0, KeyOutcome::Quit);
    }

    #[test]
    fn number_keys_switch_leagues() {
        let mut app = app();
        let (_, requests) = press(&mut app, Char('2'));
        assert_eq!(requests.len(), 1);
        assert_eq!(app.state.scores.as_ref().map(|s| s.context.league()), Some(League::Nba));
        let (_, requests) = press(&mut app, Char('0'));
        assert!(requests.is_empty());
        assert_eq!(app.state.route, Route::Home);
    }

    #[test]
    fn tab_cycles_panels_without_fetching() {
        let mut app = app();
        press(&mut app, Char('1'));
        let (_, requests) = press(&mut app, KeyCode::Tab);
        assert!(requests.is_empty());
        assert_eq!(app.state.scores.as_ref().map(|s| s.panel), Some(Panel::Summary));
    }

    #[test]
    fn prompt_captures_keys_until_enter() {
        let mut app = app();
        press(&mut app, Char(':'));
        for c in "nhl".chars() {
            press(&mut app, Char(c));
        }
        assert_eq!(app.state.route, Route::Home, "q/h/l are typed, not handled");
        let (_, requests) = press(&mut app, KeyCode::Enter);
        assert_eq!(requests.len(), 1);
        assert_eq!(app.state.scores.as_ref().map(|s| s.context.league()), Some(League::Nhl));
    }

    #[test]
    fn escape_closes_prompt_without_navigating() {
        let mut app = app();
        press(&mut app, Char(':'));
        press(&mut app, Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(app.state.prompt.is_none());
        assert_eq!(app.state.route, Route::Home);
    }

    #[tokio::test]
    async fn key_fetches_reach_the_worker_channel() {
        let app = Arc::new(Mutex::new(app()));
        let (tx, mut rx) = mpsc::channel(4);

        let outcome = handle_key_bindings(KeyEvent::new(Char('2'), KeyModifiers::NONE), &app, &tx).await;
        assert_eq!(outcome, KeyOutcome::Continue);
        match rx.recv().await {
            Some(NetworkRequest::LoadScores { context, .. }) => assert_eq!(context.league(), League::Nba),
            other => panic!("unexpected request: {other:?}"),
        }

        drop(rx);
        let outcome = handle_key_bindings(KeyEvent::new(Char('1'), KeyModifiers::NONE), &app, &tx).await;
        assert_eq!(outcome, KeyOutcome::Continue, "a closed worker channel is logged, not fatal");
    }

    #[test]
    fn refresh_on_home_is_a_no_op() {
        let mut app = app();
        assert!(press(&mut app, Char('r')).1.is_empty());
    }
}
