use crate::views::props::{
    BoxScoreLine, BoxScoreProps, GameSummary, MatchupProps, MatchupSide, StatRow, StatsProps,
};
use crate::views::{record, text};
use scoreboard_api::League;
use scoreboard_api::nba::{NbaBoxscore, NbaBoxscoreTeam, NbaGame, NbaPlayer, NbaTeamLine, NbaTeamStats};

const REGULATION_QUARTERS: usize = 4;
const BLANK: &str = "-";

pub fn summary(game: &NbaGame) -> GameSummary {
    GameSummary {
        id: game.game_id.clone(),
        away: text(game.v_team.tri_code.as_ref()),
        home: text(game.h_team.tri_code.as_ref()),
        away_score: text(game.v_team.score.as_ref()),
        home_score: text(game.h_team.score.as_ref()),
        status: status_line(game),
        live: game.status.state.as_deref() == Some("live"),
    }
}

pub fn matchup(game: &NbaGame, date: &str) -> MatchupProps {
    let is_final = game.status.state.as_deref() == Some("final");
    let away_pts = points(&game.v_team);
    let home_pts = points(&game.h_team);
    MatchupProps {
        date: date.to_owned(),
        status: status_line(game),
        detail: text(game.arena.as_ref()),
        away: side(&game.v_team, is_final && away_pts > home_pts),
        home: side(&game.h_team, is_final && home_pts > away_pts),
    }
}

/// Quarters 1-4, then "OT", "2OT", ... for each overtime, and the total.
pub fn box_score(game: &NbaGame) -> BoxScoreProps {
    let periods = game
        .v_team
        .linescore
        .len()
        .max(game.h_team.linescore.len())
        .max(REGULATION_QUARTERS);

    BoxScoreProps {
        league: League::Nba,
        periods: (1..=periods).map(period_label).collect(),
        totals: vec!["T"],
        away: line(&game.v_team, periods),
        home: line(&game.h_team, periods),
        diamond: None,
    }
}

/// Team totals and leaders from the details document. Every value is "-"
/// until that document has been fetched.
pub fn stats(game: &NbaGame, details: Option<&NbaBoxscore>) -> StatsProps {
    let visitor = details.map(|d| &d.visitor);
    let home = details.map(|d| &d.home);

    let rows = STAT_LABELS
        .iter()
        .map(|&label| StatRow {
            label,
            away: cell(visitor, |t| team_stat(label, &t.stats)),
            home: cell(home, |t| team_stat(label, &t.stats)),
        })
        .collect();

    let leaders = LEADER_LABELS
        .iter()
        .map(|&label| StatRow {
            label,
            away: cell(visitor, |t| leader(t, label)),
            home: cell(home, |t| leader(t, label)),
        })
        .collect();

    StatsProps {
        away: text(game.v_team.tri_code.as_ref()),
        home: text(game.h_team.tri_code.as_ref()),
        rows,
        leaders,
    }
}

fn cell(team: Option<&NbaBoxscoreTeam>, f: impl Fn(&NbaBoxscoreTeam) -> Option<String>) -> String {
    team.and_then(f).unwrap_or_else(|| BLANK.to_owned())
}

const STAT_LABELS: [&str; 12] =
    ["FG", "FG%", "3PT", "3P%", "FT", "FT%", "REB", "AST", "STL", "BLK", "TO", "PF"];

const LEADER_LABELS: [&str; 3] = ["PTS", "REB", "AST"];

fn team_stat(label: &str, s: &NbaTeamStats) -> Option<String> {
    match label {
        "FG" => made_attempted(&s.field_goals_made, &s.field_goals_attempted),
        "FG%" => percentage(&s.field_goals_made, &s.field_goals_attempted),
        "3PT" => made_attempted(&s.three_pointers_made, &s.three_pointers_attempted),
        "3P%" => percentage(&s.three_pointers_made, &s.three_pointers_attempted),
        "FT" => made_attempted(&s.free_throws_made, &s.free_throws_attempted),
        "FT%" => percentage(&s.free_throws_made, &s.free_throws_attempted),
        "REB" => Some((int(&s.rebounds_offensive)? + int(&s.rebounds_defensive)?).to_string()),
        "AST" => s.assists.clone(),
        "STL" => s.steals.clone(),
        "BLK" => s.blocks.clone(),
        "TO" => s.turnovers.clone(),
        "PF" => s.fouls.clone(),
        _ => None,
    }
}

fn player_stat(label: &str, p: &NbaPlayer) -> Option<u32> {
    match label {
        "PTS" => int(&p.points),
        "REB" => Some(int(&p.rebounds_offensive)? + int(&p.rebounds_defensive)?),
        "AST" => int(&p.assists),
        _ => None,
    }
}

/// "L. James 31" for the team's top player in `label`; first listed wins ties.
fn leader(team: &NbaBoxscoreTeam, label: &str) -> Option<String> {
    let mut best: Option<(&NbaPlayer, u32)> = None;
    for player in &team.players.player {
        let Some(value) = player_stat(label, player) else {
            continue;
        };
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((player, value));
        }
    }
    best.map(|(player, value)| format!("{} {value}", player.display_name()))
}

fn int(value: &Option<String>) -> Option<u32> {
    value.as_deref()?.trim().parse().ok()
}

fn made_attempted(made: &Option<String>, attempted: &Option<String>) -> Option<String> {
    Some(format!("{}-{}", int(made)?, int(attempted)?))
}

fn percentage(made: &Option<String>, attempted: &Option<String>) -> Option<String> {
    let made = int(made)?;
    let attempted = int(attempted)?;
    if attempted == 0 {
        return Some("0.0".to_owned());
    }
    Some(format!("{:.1}", f64::from(made) * 100.0 / f64::from(attempted)))
}

fn period_label(n: usize) -> String {
    match n {
        0 => String::new(),
        1..=REGULATION_QUARTERS => n.to_string(),
        n if n == REGULATION_QUARTERS + 1 => "OT".to_owned(),
        n => format!("{}OT", n - REGULATION_QUARTERS),
    }
}

fn line(team: &NbaTeamLine, periods: usize) -> BoxScoreLine {
    BoxScoreLine {
        team: text(team.tri_code.as_ref()),
        periods: (0..periods)
            .map(|i| {
                team.linescore
                    .get(i)
                    .and_then(|p| p.score.clone())
                    .unwrap_or_default()
            })
            .collect(),
        totals: vec![text(team.score.as_ref())],
    }
}

fn side(team: &NbaTeamLine, winner: bool) -> MatchupSide {
    let name = match (team.city.as_deref(), team.nickname.as_deref()) {
        (Some(city), Some(nick)) => format!("{city} {nick}"),
        (Some(only), None) | (None, Some(only)) => only.to_owned(),
        (None, None) => String::new(),
    };
    MatchupSide {
        name,
        abbreviation: text(team.tri_code.as_ref()),
        record: record(team.win.clone(), team.loss.clone()),
        score: text(team.score.as_ref()),
        winner,
    }
}

fn points(team: &NbaTeamLine) -> Option<u32> {
    int(&team.score)
}

fn status_line(game: &NbaGame) -> String {
    let status = &game.status;
    match status.state.as_deref() {
        Some("final") => {
            let period = status.period.unwrap_or(0) as usize;
            if period > REGULATION_QUARTERS {
                format!("Final/{}", period_label(period))
            } else {
                "Final".to_owned()
            }
        }
        Some("live") if status.is_halftime == Some(true) => "Halftime".to_owned(),
        Some("live") => {
            let period = status.period.map(|p| period_label(p as usize)).unwrap_or_default();
            let period = if period.len() == 1 { format!("Q{period}") } else { period };
            match status.clock.as_deref() {
                Some(clock) if !clock.is_empty() => format!("{period} {clock}"),
                _ => period,
            }
        }
        _ => text(game.start_time_eastern.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_api::nba::NbaBoxscoreResponse;
    use serde_json::json;

    fn overtime_final() -> NbaGame {
        serde_json::from_value(json!({
            "gameId": "0022000839",
            "startTimeEastern": "7:30 PM ET",
            "arena": "Madison Square Garden",
            "status": { "state": "final", "period": 6 },
            "vTeam": { "triCode": "LAL", "city": "Los Angeles", "nickname": "Lakers",
                       "win": "30", "loss": "18", "score": "128",
                       "linescore": [ {"score": "30"}, {"score": "28"}, {"score": "25"},
                                      {"score": "27"}, {"score": "10"}, {"score": "8"} ] },
            "hTeam": { "triCode": "NYK", "city": "New York", "nickname": "Knicks",
                       "win": "25", "loss": "24", "score": "130",
                       "linescore": [ {"score": "27"}, {"score": "26"}, {"score": "30"},
                                      {"score": "27"}, {"score": "10"}, {"score": "10"} ] }
        }))
        .unwrap()
    }

    fn details() -> NbaBoxscore {
        let response: NbaBoxscoreResponse = serde_json::from_value(json!({
            "sports_content": { "game": {
                "id": "0022000839",
                "visitor": {
                    "abbreviation": "LAL",
                    "stats": { "field_goals_made": "45", "field_goals_attempted": "90",
                               "three_pointers_made": "12", "three_pointers_attempted": "30",
                               "free_throws_made": "26", "free_throws_attempted": "32",
                               "rebounds_offensive": "10", "rebounds_defensive": "35",
                               "assists": "25", "steals": "7", "blocks": "5",
                               "turnovers": "14", "fouls": "20" },
                    "players": { "player": [
                        { "first_name": "LeBron", "last_name": "James", "points": "31",
                          "rebounds_offensive": "1", "rebounds_defensive": "7", "assists": "10" },
                        { "first_name": "Anthony", "last_name": "Davis", "points": "24",
                          "rebounds_offensive": "4", "rebounds_defensive": "9", "assists": "3" }
                    ]}
                },
                "home": { "abbreviation": "NYK", "stats": { "assists": "20" } }
            }}
        }))
        .unwrap();
        response.sports_content.game
    }

    #[test]
    fn box_score_labels_overtimes() {
        let props = box_score(&overtime_final());
        assert_eq!(props.periods, vec!["1", "2", "3", "4", "OT", "2OT"]);
        assert_eq!(props.totals, vec!["T"]);
        assert_eq!(props.away.periods[4], "10");
        assert_eq!(props.home.totals, vec!["130"]);
    }

    #[test]
    fn box_score_pads_to_four_quarters() {
        let game = NbaGame::default();
        let props = box_score(&game);
        assert_eq!(props.periods, vec!["1", "2", "3", "4"]);
        assert!(props.away.periods.iter().all(String::is_empty));
    }

    #[test]
    fn matchup_reports_overtime_final_and_winner() {
        let props = matchup(&overtime_final(), "Tue, Apr 6, 2021");
        assert_eq!(props.status, "Final/2OT");
        assert_eq!(props.away.name, "Los Angeles Lakers");
        assert_eq!(props.away.record, "30-18");
        assert!(props.home.winner);
        assert!(!props.away.winner);
    }

    #[test]
    fn live_status_shows_quarter_and_clock() {
        let mut game = overtime_final();
        game.status.state = Some("live".into());
        game.status.period = Some(3);
        game.status.clock = Some("4:12".into());
        assert_eq!(summary(&game).status, "Q3 4:12");
        assert!(summary(&game).live);
        game.status.is_halftime = Some(true);
        assert_eq!(summary(&game).status, "Halftime");
    }

    #[test]
    fn live_game_before_tip_off_has_no_period() {
        let game: NbaGame = serde_json::from_value(json!({
            "gameId": "1",
            "status": { "state": "live", "period": 0, "clock": "" }
        }))
        .unwrap();
        assert_eq!(summary(&game).status, "");
        assert_eq!(period_label(0), "");
        assert_eq!(period_label(7), "3OT");
    }

    #[test]
    fn stats_without_details_are_blank() {
        let props = stats(&overtime_final(), None);
        assert_eq!(props.away, "LAL");
        assert!(!props.rows.is_empty());
        assert!(props.rows.iter().all(|r| r.away == "-" && r.home == "-"));
        assert!(props.leaders.iter().all(|r| r.away == "-" && r.home == "-"));
    }

    #[test]
    fn stats_project_team_totals() {
        let details = details();
        let props = stats(&overtime_final(), Some(&details));
        let row = |label: &str| props.rows.iter().find(|r| r.label == label).unwrap().clone();
        assert_eq!(row("FG").away, "45-90");
        assert_eq!(row("FG%").away, "50.0");
        assert_eq!(row("3P%").away, "40.0");
        assert_eq!(row("REB").away, "45");
        assert_eq!(row("AST").home, "20");
        assert_eq!(row("FG").home, "-");
    }

    #[test]
    fn stats_pick_leaders() {
        let details = details();
        let props = stats(&overtime_final(), Some(&details));
        let leaders: Vec<_> = props.leaders.iter().map(|r| (r.label, r.away.as_str())).collect();
        assert_eq!(
            leaders,
            vec![("PTS", "L. James 31"), ("REB", "A. Davis 13"), ("AST", "L. James 10")]
        );
        assert!(props.leaders.iter().all(|r| r.home == "-"));
    }

    #[test]
    fn adapters_are_pure() {
        let game = overtime_final();
        let details = details();
        let before = (game.clone(), details.clone());
        assert_eq!(stats(&game, Some(&details)), stats(&game, Some(&details)));
        assert_eq!(box_score(&game), box_score(&game));
        assert_eq!((game, details), before);
    }
}
