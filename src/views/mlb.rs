use crate::views::props::{
    BoxScoreLine, BoxScoreProps, DiamondProps, GameSummary, MatchupProps, MatchupSide,
};
use crate::views::{number, text};
use scoreboard_api::League;
use scoreboard_api::mlb::{MlbGame, MlbStatus, MlbTeam};

const REGULATION_INNINGS: u8 = 9;

pub fn summary(game: &MlbGame) -> GameSummary {
    GameSummary {
        id: game.id.clone(),
        away: text(game.teams.away.abbreviation.as_ref()),
        home: text(game.teams.home.abbreviation.as_ref()),
        away_score: number(game.teams.away.runs),
        home_score: number(game.teams.home.runs),
        status: status_line(game),
        live: game.status.is_live(),
    }
}

pub fn matchup(game: &MlbGame, date: &str) -> MatchupProps {
    let (away_runs, home_runs) = (game.teams.away.runs, game.teams.home.runs);
    let is_final = is_final(&game.status);
    MatchupProps {
        date: date.to_owned(),
        status: status_line(game),
        detail: text(game.venue.as_ref()),
        away: side(&game.teams.away, is_final && away_runs > home_runs),
        home: side(&game.teams.home, is_final && home_runs > away_runs),
    }
}

/// Line score with at least nine innings and R/H/E totals. A bottom half
/// that was never played in a finished game shows as "x".
pub fn box_score(game: &MlbGame) -> BoxScoreProps {
    let played = game
        .linescore
        .innings
        .iter()
        .filter_map(|i| i.num)
        .max()
        .unwrap_or(0);
    let innings = played.max(REGULATION_INNINGS);
    let is_final = is_final(&game.status);

    let mut away = Vec::with_capacity(innings as usize);
    let mut home = Vec::with_capacity(innings as usize);
    for num in 1..=innings {
        let inning = game.linescore.innings.iter().find(|i| i.num == Some(num));
        away.push(number(inning.and_then(|i| i.away)));
        home.push(match inning {
            Some(i) if i.home.is_none() && is_final && num == played => "x".to_owned(),
            Some(i) => number(i.home),
            None => String::new(),
        });
    }

    BoxScoreProps {
        league: League::Mlb,
        periods: (1..=innings).map(|n| n.to_string()).collect(),
        totals: vec!["R", "H", "E"],
        away: line(&game.teams.away, away),
        home: line(&game.teams.home, home),
        diamond: None,
    }
}

pub fn diamond(game: &MlbGame) -> DiamondProps {
    let status = &game.status;
    let live = status.is_live();
    DiamondProps {
        first: game.runners.first.is_some(),
        second: game.runners.second.is_some(),
        third: game.runners.third.is_some(),
        balls: status.balls.unwrap_or(0),
        strikes: status.strikes.unwrap_or(0),
        outs: status.outs.unwrap_or(0),
        inning: if live { inning_label(status) } else { String::new() },
        pitcher: text(game.pitcher.as_ref()),
        batter: text(game.batter.as_ref()),
    }
}

fn side(team: &MlbTeam, winner: bool) -> MatchupSide {
    MatchupSide {
        name: text(team.name.as_ref()),
        abbreviation: text(team.abbreviation.as_ref()),
        record: match (team.wins, team.losses) {
            (Some(w), Some(l)) => format!("{w}-{l}"),
            _ => String::new(),
        },
        score: number(team.runs),
        winner,
    }
}

fn line(team: &MlbTeam, periods: Vec<String>) -> BoxScoreLine {
    BoxScoreLine {
        team: text(team.abbreviation.as_ref()),
        periods,
        totals: vec![number(team.runs), number(team.hits), number(team.errors)],
    }
}

fn is_final(status: &MlbStatus) -> bool {
    status
        .state
        .as_deref()
        .is_some_and(|s| s.starts_with("Final") || s == "Game Over")
}

fn inning_label(status: &MlbStatus) -> String {
    let Some(inning) = status.inning else {
        return String::new();
    };
    match status.is_top_inning {
        Some(true) => format!("Top {inning}"),
        Some(false) => format!("Bot {inning}"),
        None => inning.to_string(),
    }
}

fn status_line(game: &MlbGame) -> String {
    if game.status.is_live() {
        return inning_label(&game.status);
    }
    match game.status.state.as_deref() {
        Some("Preview" | "Pre-Game" | "Scheduled") | None => text(game.start_time.as_ref()),
        Some(state) => state.to_owned(),
    }
}
