use crate::route::Route;
use crate::views::{self, GamePayload, GameSummary, Panel};
use chrono::NaiveDate;
use scoreboard_api::nba::NbaBoxscore;
use scoreboard_api::{ScoreContext, Scoreboard};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Scores screen state
// ---------------------------------------------------------------------------

/// Everything the scores screen shows for one context. Replaced wholesale
/// whenever the context changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoresState {
    pub context: ScoreContext,
    /// Stamped on every request issued for this context.
    pub generation: u64,
    pub scoreboard: Option<Scoreboard>,
    pub selected_game: usize,
    /// nba box score documents by game id, fetched on demand.
    pub nba_details: HashMap<String, NbaBoxscore>,
    pub panel: Panel,
    pub last_updated: Option<String>,
    pub last_error: Option<String>,
}

impl ScoresState {
    pub fn new(context: ScoreContext, generation: u64, panel: Panel) -> Self {
        Self {
            context,
            generation,
            scoreboard: None,
            selected_game: 0,
            nba_details: HashMap::new(),
            panel,
            last_updated: None,
            last_error: None,
        }
    }

    pub fn rows(&self) -> Vec<GameSummary> {
        self.scoreboard.as_ref().map(views::scoreboard_rows).unwrap_or_default()
    }

    pub fn game_count(&self) -> usize {
        self.scoreboard.as_ref().map(Scoreboard::game_count).unwrap_or(0)
    }

    /// Store a fresh payload, keeping the selection when it still fits.
    pub fn load(&mut self, scoreboard: Scoreboard, at: String) {
        self.scoreboard = Some(scoreboard);
        self.selected_game = self.selected_game.min(self.game_count().saturating_sub(1));
        self.last_updated = Some(at);
        self.last_error = None;
    }

    pub fn select_next(&mut self) -> bool {
        if self.selected_game + 1 < self.game_count() {
            self.selected_game += 1;
            return true;
        }
        false
    }

    pub fn select_prev(&mut self) -> bool {
        if self.selected_game > 0 {
            self.selected_game -= 1;
            return true;
        }
        false
    }

    /// The selected game, tagged by league.
    pub fn selected_payload(&self) -> Option<GamePayload<'_>> {
        let idx = self.selected_game;
        match self.scoreboard.as_ref()? {
            Scoreboard::Mlb(s) => s.games.get(idx).map(GamePayload::Mlb),
            Scoreboard::Nba(s) => s.games.get(idx).map(|game| GamePayload::Nba {
                game,
                details: self.nba_details.get(&game.game_id),
            }),
            Scoreboard::Nfl(s) => s.games.get(idx).map(|_| GamePayload::Nfl),
            Scoreboard::Nhl(s) => s.games().nth(idx).map(GamePayload::Nhl),
        }
    }

    /// Id of the selected nba game, if the current payload is nba.
    pub fn selected_nba_game(&self) -> Option<&str> {
        match self.scoreboard.as_ref()? {
            Scoreboard::Nba(s) => s.games.get(self.selected_game).map(|g| g.game_id.as_str()),
            _ => None,
        }
    }

    /// "Sat, Apr 10, 2021" or "Week 5".
    pub fn date_label(&self, today: NaiveDate) -> String {
        match &self.context {
            ScoreContext::Mlb(day) | ScoreContext::Nba(day) | ScoreContext::Nhl(day) => {
                views::display_date(&day.resolve(today))
            }
            ScoreContext::Nfl(week) => format!("Week {}", week.resolve(today)),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppState {
    pub route: Route,
    /// Present while the route is a scores screen.
    pub scores: Option<ScoresState>,
    /// Bumped on every navigation.
    pub generation: u64,
    /// Text typed after `:`; None when the prompt is closed.
    pub prompt: Option<String>,
    pub show_logs: bool,
    pub show_help: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            scores: None,
            generation: 0,
            prompt: None,
            show_logs: false,
            show_help: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_api::nba::NbaScoreboard;
    use scoreboard_api::nhl::NhlSchedule;
    use scoreboard_api::{GameDay, GameWeek};
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nba_board() -> Scoreboard {
        let board: NbaScoreboard = serde_json::from_value(json!({
            "games": [ { "gameId": "a" }, { "gameId": "b" }, { "gameId": "c" } ]
        }))
        .unwrap();
        Scoreboard::Nba(board)
    }

    fn state() -> ScoresState {
        ScoresState::new(ScoreContext::Nba(GameDay::Date("2021-04-10".into())), 1, Panel::BoxScore)
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut s = state();
        assert!(!s.select_next());
        s.load(nba_board(), "now".into());
        assert!(s.select_next());
        assert!(s.select_next());
        assert!(!s.select_next());
        assert_eq!(s.selected_nba_game(), Some("c"));
        assert!(s.select_prev());
        assert_eq!(s.selected_game, 1);
    }

    #[test]
    fn reload_clamps_selection() {
        let mut s = state();
        s.load(nba_board(), "first".into());
        s.selected_game = 2;
        s.load(Scoreboard::Nba(NbaScoreboard::default()), "second".into());
        assert_eq!(s.selected_game, 0);
        assert_eq!(s.last_updated.as_deref(), Some("second"));
        assert!(s.selected_payload().is_none());
    }

    #[test]
    fn nba_payload_carries_cached_details() {
        let mut s = state();
        s.load(nba_board(), "now".into());
        s.nba_details.insert("a".into(), NbaBoxscore { id: "a".into(), ..Default::default() });
        match s.selected_payload() {
            Some(GamePayload::Nba { game, details }) => {
                assert_eq!(game.game_id, "a");
                assert_eq!(details.map(|d| d.id.as_str()), Some("a"));
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn nhl_payload_spans_dates() {
        let schedule: NhlSchedule = serde_json::from_value(json!({
            "dates": [ { "games": [ { "gamePk": 1 } ] }, { "games": [ { "gamePk": 2 } ] } ]
        }))
        .unwrap();
        let mut s = ScoresState::new(ScoreContext::Nhl(GameDay::Today), 1, Panel::BoxScore);
        s.load(Scoreboard::Nhl(schedule), "now".into());
        s.select_next();
        assert!(matches!(s.selected_payload(), Some(GamePayload::Nhl(g)) if g.game_pk == 2));
        assert_eq!(s.selected_nba_game(), None);
    }

    #[test]
    fn date_labels() {
        assert_eq!(state().date_label(ymd(2030, 1, 1)), "Sat, Apr 10, 2021");
        let nfl = ScoresState::new(ScoreContext::Nfl(GameWeek::Week(5)), 1, Panel::BoxScore);
        assert_eq!(nfl.date_label(ymd(2021, 4, 10)), "Week 5");
    }
}
