use crate::route::Route;
use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, ScoresState};
use crate::state::messages::NetworkRequest;
use crate::views::{self, DetailsContext, GamePayload, Section};
use chrono::{Local, NaiveDate};
use log::debug;
use scoreboard_api::client::ApiError;
use scoreboard_api::mlb::MlbGame;
use scoreboard_api::nba::{NbaBoxscore, NbaGame};
use scoreboard_api::nhl::NhlGame;
use scoreboard_api::{League, ScoreContext, Scoreboard};

/// Entries of the tab bar. Derived from the route, never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MenuItem {
    Home,
    League(League),
    About,
    Other,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let app = Self { state: AppState::new(), settings };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn active_menu(&self) -> MenuItem {
        match &self.state.route {
            Route::Home => MenuItem::Home,
            Route::Scores(ctx) => MenuItem::League(ctx.league()),
            Route::About => MenuItem::About,
            Route::Test | Route::NotFound(_) => MenuItem::Other,
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Switch screens. A scores route starts a new generation and returns the
    /// fetch for it; the panel survives only when the league is unchanged.
    pub fn navigate(&mut self, route: Route) -> Option<NetworkRequest> {
        self.state.generation += 1;
        let previous = self.state.scores.take();
        self.state.route = route.clone();

        let Route::Scores(context) = route else {
            return None;
        };

        let panel = match previous {
            Some(prev) if prev.context.league() == context.league() => prev.panel,
            _ => views::default_panel(context.league()),
        };
        debug!("navigating to {} (generation {})", self.state.route, self.state.generation);
        self.state.scores = Some(ScoresState::new(context.clone(), self.state.generation, panel));
        Some(NetworkRequest::LoadScores { generation: self.state.generation, context })
    }

    pub fn navigate_path(&mut self, path: &str) -> Option<NetworkRequest> {
        self.navigate(Route::parse(path))
    }

    pub fn go_to_league(&mut self, league: League) -> Option<NetworkRequest> {
        self.navigate(Route::Scores(ScoreContext::current(league)))
    }

    /// Previous/next day, or week for nfl.
    pub fn shift_context(&mut self, delta: i32) -> Option<NetworkRequest> {
        let today = self.today();
        let next = self.state.scores.as_ref()?.context.shift(today, delta);
        self.navigate(Route::Scores(next))
    }

    pub fn jump_to_today(&mut self) -> Option<NetworkRequest> {
        let league = self.state.scores.as_ref()?.context.league();
        self.go_to_league(league)
    }

    /// Re-request the current context without starting a new generation.
    pub fn refresh(&self) -> Vec<NetworkRequest> {
        let Some(scores) = &self.state.scores else {
            return Vec::new();
        };
        let mut requests = vec![NetworkRequest::LoadScores {
            generation: scores.generation,
            context: scores.context.clone(),
        }];
        requests.extend(nba_details_request(scores, true));
        requests
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    fn current_scores(&mut self, generation: u64) -> Option<&mut ScoresState> {
        match self.state.scores.as_mut() {
            Some(scores) if scores.generation == generation => Some(scores),
            _ => {
                debug!("discarding response from stale generation {generation}");
                None
            }
        }
    }

    /// Store a payload. Returns the nba details fetch for the selected game
    /// when one is still missing.
    pub fn on_scores_loaded(&mut self, generation: u64, scoreboard: Scoreboard) -> Option<NetworkRequest> {
        let at = Local::now().format("%-I:%M:%S %p").to_string();
        let scores = self.current_scores(generation)?;
        if scoreboard.league() != scores.context.league() {
            debug!("discarding {} payload for {} screen", scoreboard.league(), scores.context.league());
            return None;
        }
        scores.load(scoreboard, at);
        let scores = self.state.scores.as_ref()?;
        nba_details_request(scores, false)
    }

    /// Keep whatever is on screen and surface the failure on the status line.
    pub fn on_scores_failed(&mut self, generation: u64, error: &ApiError) {
        if let Some(scores) = self.current_scores(generation) {
            scores.last_error = Some(error.summary());
        }
    }

    pub fn on_nba_details_loaded(&mut self, generation: u64, game_id: String, details: NbaBoxscore) {
        if let Some(scores) = self.current_scores(generation) {
            scores.nba_details.insert(game_id, details);
        }
    }

    pub fn on_nba_details_failed(&mut self, generation: u64, game_id: &str, error: &ApiError) {
        if let Some(scores) = self.current_scores(generation) {
            scores.last_error = Some(format!("{} for game {game_id}", error.summary()));
        }
    }

    // -----------------------------------------------------------------------
    // Scores screen interaction
    // -----------------------------------------------------------------------

    pub fn select_next_game(&mut self) -> Option<NetworkRequest> {
        let moved = self.state.scores.as_mut()?.select_next();
        self.after_selection(moved)
    }

    pub fn select_prev_game(&mut self) -> Option<NetworkRequest> {
        let moved = self.state.scores.as_mut()?.select_prev();
        self.after_selection(moved)
    }

    fn after_selection(&self, moved: bool) -> Option<NetworkRequest> {
        if !moved {
            return None;
        }
        nba_details_request(self.state.scores.as_ref()?, false)
    }

    /// Cycle the league's panel menu. Never fetches.
    pub fn next_panel(&mut self) {
        if let Some(scores) = self.state.scores.as_mut() {
            scores.panel = views::next_panel(scores.context.league(), scores.panel);
        }
    }

    /// Sections for the selected game's details. Before any payload has
    /// arrived (or when the fetch failed) the league's layout is composed
    /// from an empty game so every field shows blank. Empty when the payload
    /// has no games.
    pub fn details_sections(&self) -> Vec<Section> {
        let Some(scores) = &self.state.scores else {
            return Vec::new();
        };
        let date = scores.date_label(self.today());
        let ctx = DetailsContext {
            date: &date,
            panel: scores.panel,
            last_updated: scores.last_updated.as_deref(),
        };
        match (scores.selected_payload(), &scores.scoreboard) {
            (Some(game), _) => views::compose(game, &ctx),
            (None, Some(_)) => Vec::new(),
            (None, None) => blank_sections(scores.context.league(), &ctx),
        }
    }

    // -----------------------------------------------------------------------
    // Route prompt
    // -----------------------------------------------------------------------

    pub fn open_prompt(&mut self) {
        self.state.prompt = Some(String::from("/"));
    }

    pub fn prompt_push(&mut self, c: char) {
        if let Some(input) = self.state.prompt.as_mut() {
            input.push(c);
        }
    }

    pub fn prompt_pop(&mut self) {
        if let Some(input) = self.state.prompt.as_mut() {
            input.pop();
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.state.prompt = None;
    }

    pub fn submit_prompt(&mut self) -> Option<NetworkRequest> {
        let input = self.state.prompt.take()?;
        self.navigate_path(input.trim())
    }

    // -----------------------------------------------------------------------
    // Toggles
    // -----------------------------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.state.show_help = !self.state.show_help;
    }

    pub fn exit_help(&mut self) {
        self.state.show_help = false;
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}

fn blank_sections(league: League, ctx: &DetailsContext<'_>) -> Vec<Section> {
    match league {
        League::Mlb => views::compose(GamePayload::Mlb(&MlbGame::default()), ctx),
        League::Nba => views::compose(GamePayload::Nba { game: &NbaGame::default(), details: None }, ctx),
        League::Nfl => views::compose(GamePayload::Nfl, ctx),
        League::Nhl => views::compose(GamePayload::Nhl(&NhlGame::default()), ctx),
    }
}

fn nba_details_request(scores: &ScoresState, force: bool) -> Option<NetworkRequest> {
    let game_id = scores.selected_nba_game()?;
    if game_id.is_empty() || (!force && scores.nba_details.contains_key(game_id)) {
        return None;
    }
    let day = scores.context.day()?.clone();
    Some(NetworkRequest::LoadNbaDetails {
        generation: scores.generation,
        day,
        game_id: game_id.to_owned(),
    })
}
