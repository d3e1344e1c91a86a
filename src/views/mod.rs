//! League-specific view composition.
//!
//! A selected game arrives as a [`GamePayload`], tagged with its league.
//! [`compose`] picks the sections that league shows for the active panel and
//! runs the matching shape adapter for each one.

pub mod mlb;
pub mod nba;
pub mod nfl;
pub mod nhl;
pub mod props;

use scoreboard_api::mlb::MlbGame;
use scoreboard_api::nba::{NbaBoxscore, NbaGame};
use scoreboard_api::nhl::NhlGame;
use scoreboard_api::{League, Scoreboard, parse_date};

pub use props::*;

/// A borrowed game, tagged by league. nba carries its box score document once
/// it has been fetched. nfl details are a placeholder, so only the tag is kept.
#[derive(Debug, Clone, Copy)]
pub enum GamePayload<'a> {
    Mlb(&'a MlbGame),
    Nba { game: &'a NbaGame, details: Option<&'a NbaBoxscore> },
    Nfl,
    Nhl(&'a NhlGame),
}

impl GamePayload<'_> {
    pub fn league(&self) -> League {
        match self {
            GamePayload::Mlb(_) => League::Mlb,
            GamePayload::Nba { .. } => League::Nba,
            GamePayload::Nfl => League::Nfl,
            GamePayload::Nhl(_) => League::Nhl,
        }
    }
}

/// Inputs shared by every league's details view.
#[derive(Debug, Clone, Copy)]
pub struct DetailsContext<'a> {
    /// Display date ("Sat, Apr 10, 2021") or week ("Week 5").
    pub date: &'a str,
    pub panel: Panel,
    pub last_updated: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Matchup(MatchupProps),
    PanelMenu(PanelMenuProps),
    BoxScore(BoxScoreProps),
    Stats(StatsProps),
    Placeholder,
    UpdateTime(UpdateTimeProps),
}

const MLB_PANELS: &[Panel] = &[Panel::BoxScore, Panel::Summary];
const NBA_PANELS: &[Panel] = &[Panel::BoxScore, Panel::TeamStats, Panel::Summary];

/// Panels a league's menu offers. Empty when the league has no menu.
pub fn panels_for(league: League) -> &'static [Panel] {
    match league {
        League::Mlb => MLB_PANELS,
        League::Nba => NBA_PANELS,
        League::Nfl | League::Nhl => &[],
    }
}

pub fn default_panel(league: League) -> Panel {
    panels_for(league).first().copied().unwrap_or_default()
}

/// The panel after `current` in `league`'s menu, wrapping around.
pub fn next_panel(league: League, current: Panel) -> Panel {
    let panels = panels_for(league);
    match panels.iter().position(|p| *p == current) {
        Some(idx) => panels[(idx + 1) % panels.len()],
        None => default_panel(league),
    }
}

/// Sections for one game's details, top to bottom.
pub fn compose(game: GamePayload<'_>, ctx: &DetailsContext<'_>) -> Vec<Section> {
    let update_time = Section::UpdateTime(UpdateTimeProps {
        last_updated: ctx.last_updated.map(str::to_owned),
    });

    let league = game.league();
    match game {
        GamePayload::Mlb(game) => {
            let mut sections = vec![
                Section::Matchup(mlb::matchup(game, ctx.date)),
                panel_menu(league, ctx.panel),
            ];
            if ctx.panel == Panel::BoxScore {
                let mut box_score = mlb::box_score(game);
                box_score.diamond = Some(mlb::diamond(game));
                sections.push(Section::BoxScore(box_score));
            }
            sections.push(update_time);
            sections
        }
        GamePayload::Nba { game, details } => {
            let mut sections = vec![
                Section::Matchup(nba::matchup(game, ctx.date)),
                panel_menu(league, ctx.panel),
            ];
            match ctx.panel {
                Panel::BoxScore => sections.push(Section::BoxScore(nba::box_score(game))),
                Panel::TeamStats => sections.push(Section::Stats(nba::stats(game, details))),
                Panel::Summary => {}
            }
            sections.push(update_time);
            sections
        }
        GamePayload::Nfl => vec![Section::Placeholder, update_time],
        GamePayload::Nhl(game) => vec![
            Section::Matchup(nhl::matchup(game, ctx.date)),
            Section::BoxScore(nhl::box_score(game)),
            update_time,
        ],
    }
}

fn panel_menu(league: League, active: Panel) -> Section {
    Section::PanelMenu(PanelMenuProps {
        panels: panels_for(league).to_vec(),
        active,
    })
}

/// One summary row per game, in feed order.
pub fn scoreboard_rows(board: &Scoreboard) -> Vec<GameSummary> {
    match board {
        Scoreboard::Mlb(s) => s.games.iter().map(mlb::summary).collect(),
        Scoreboard::Nba(s) => s.games.iter().map(nba::summary).collect(),
        Scoreboard::Nfl(s) => s.games.iter().map(nfl::summary).collect(),
        Scoreboard::Nhl(s) => s.games().map(nhl::summary).collect(),
    }
}

/// "Sat, Apr 10, 2021" for parseable dates, the raw string otherwise.
pub fn display_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%a, %b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_owned())
}

// Shared formatting for the adapters.

pub(crate) fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

pub(crate) fn number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub(crate) fn record(wins: Option<String>, losses: Option<String>) -> String {
    match (wins, losses) {
        (Some(w), Some(l)) => format!("{w}-{l}"),
        _ => String::new(),
    }
}
