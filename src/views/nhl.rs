use crate::views::props::{
    BoxScoreLine, BoxScoreProps, GameSummary, MatchupProps, MatchupSide,
};
use crate::views::{number, text};
use scoreboard_api::League;
use scoreboard_api::nhl::{NhlGame, NhlScheduleTeam};

const REGULATION_PERIODS: usize = 3;
const ORDINALS: [&str; REGULATION_PERIODS] = ["1st", "2nd", "3rd"];

pub fn summary(game: &NhlGame) -> GameSummary {
    GameSummary {
        id: game.game_pk.to_string(),
        away: abbreviation(&game.teams.away),
        home: abbreviation(&game.teams.home),
        away_score: number(game.teams.away.score),
        home_score: number(game.teams.home.score),
        status: status_line(game),
        live: game.status.abstract_game_state.as_deref() == Some("Live"),
    }
}

/// Series status takes the detail line during the playoffs, the venue otherwise.
pub fn matchup(game: &NhlGame, date: &str) -> MatchupProps {
    let is_final = is_final(game);
    let (away, home) = (game.teams.away.score, game.teams.home.score);
    let series = game
        .series_summary
        .as_ref()
        .and_then(|s| s.series_status.clone())
        .filter(|s| !s.is_empty());
    MatchupProps {
        date: date.to_owned(),
        status: status_line(game),
        detail: series.unwrap_or_else(|| text(game.venue.name.as_ref())),
        away: side(&game.teams.away, is_final && away > home),
        home: side(&game.teams.home, is_final && home > away),
    }
}

/// Goals by period, then total goals and shots on goal.
pub fn box_score(game: &NhlGame) -> BoxScoreProps {
    let played = &game.linescore.periods;
    let count = played.len().max(REGULATION_PERIODS);

    let periods = (0..count)
        .map(|i| {
            played
                .get(i)
                .and_then(|p| p.ordinal_num.clone())
                .unwrap_or_else(|| ordinal(i + 1))
        })
        .collect();
    let goals = |home: bool| -> Vec<String> {
        (0..count)
            .map(|i| {
                let period = played.get(i)?;
                if home { period.home.goals } else { period.away.goals }
            })
            .map(number)
            .collect()
    };

    BoxScoreProps {
        league: League::Nhl,
        periods,
        totals: vec!["T", "SOG"],
        away: BoxScoreLine {
            team: abbreviation(&game.teams.away),
            periods: goals(false),
            totals: vec![
                number(game.teams.away.score),
                number(game.linescore.teams.away.shots_on_goal),
            ],
        },
        home: BoxScoreLine {
            team: abbreviation(&game.teams.home),
            periods: goals(true),
            totals: vec![
                number(game.teams.home.score),
                number(game.linescore.teams.home.shots_on_goal),
            ],
        },
        diamond: None,
    }
}

fn ordinal(n: usize) -> String {
    match n {
        1..=REGULATION_PERIODS => ORDINALS[n - 1].to_owned(),
        n if n == REGULATION_PERIODS + 1 => "OT".to_owned(),
        n => format!("{}OT", n - REGULATION_PERIODS),
    }
}

fn abbreviation(team: &NhlScheduleTeam) -> String {
    team.team
        .abbreviation
        .clone()
        .or_else(|| team.team.team_name.clone())
        .unwrap_or_default()
}

fn side(team: &NhlScheduleTeam, winner: bool) -> MatchupSide {
    let rec = &team.league_record;
    let record = match (rec.wins, rec.losses, rec.ot) {
        (Some(w), Some(l), Some(ot)) => format!("{w}-{l}-{ot}"),
        (Some(w), Some(l), None) => format!("{w}-{l}"),
        _ => String::new(),
    };
    MatchupSide {
        name: text(team.team.name.as_ref()),
        abbreviation: abbreviation(team),
        record,
        score: number(team.score),
        winner,
    }
}

fn is_final(game: &NhlGame) -> bool {
    game.status.abstract_game_state.as_deref() == Some("Final")
}

fn status_line(game: &NhlGame) -> String {
    let linescore = &game.linescore;
    match game.status.abstract_game_state.as_deref() {
        Some("Final") => {
            if linescore.has_shootout == Some(true) {
                "Final/SO".to_owned()
            } else if linescore.periods.len() > REGULATION_PERIODS {
                format!("Final/{}", ordinal(linescore.periods.len()))
            } else {
                "Final".to_owned()
            }
        }
        Some("Live") => {
            let period = text(linescore.current_period_ordinal.as_ref());
            match linescore.current_period_time_remaining.as_deref() {
                Some(time) if !time.is_empty() => format!("{period} {time}").trim().to_owned(),
                _ => period,
            }
        }
        _ => text(game.status.detailed_state.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn playoff_overtime() -> NhlGame {
        serde_json::from_value(json!({
            "gamePk": 2020030111,
            "gameDate": "2021-05-16T23:00:00Z",
            "status": { "abstractGameState": "Final", "detailedState": "Final" },
            "teams": {
                "away": { "leagueRecord": { "wins": 1, "losses": 0 }, "score": 4,
                          "team": { "name": "Montréal Canadiens", "abbreviation": "MTL" } },
                "home": { "leagueRecord": { "wins": 0, "losses": 1 }, "score": 3,
                          "team": { "name": "Toronto Maple Leafs", "abbreviation": "TOR" } }
            },
            "linescore": {
                "currentPeriod": 4,
                "currentPeriodOrdinal": "OT",
                "periods": [
                    { "num": 1, "ordinalNum": "1st", "away": { "goals": 1, "shotsOnGoal": 8 }, "home": { "goals": 0, "shotsOnGoal": 12 } },
                    { "num": 2, "ordinalNum": "2nd", "away": { "goals": 1 }, "home": { "goals": 2 } },
                    { "num": 3, "ordinalNum": "3rd", "away": { "goals": 1 }, "home": { "goals": 1 } },
                    { "num": 4, "ordinalNum": "OT", "away": { "goals": 1 }, "home": { "goals": 0 } }
                ],
                "hasShootout": false,
                "teams": { "away": { "goals": 4, "shotsOnGoal": 31 }, "home": { "goals": 3, "shotsOnGoal": 40 } }
            },
            "venue": { "name": "Scotiabank Arena" },
            "seriesSummary": { "seriesStatus": "MTL leads 1-0", "seriesStatusShort": "MTL 1-0" }
        }))
        .unwrap()
    }

    #[test]
    fn box_score_uses_period_ordinals_and_shots() {
        let props = box_score(&playoff_overtime());
        assert_eq!(props.periods, vec!["1st", "2nd", "3rd", "OT"]);
        assert_eq!(props.totals, vec!["T", "SOG"]);
        assert_eq!(props.away.periods, vec!["1", "1", "1", "1"]);
        assert_eq!(props.home.totals, vec!["3", "40"]);
    }

    #[test]
    fn box_score_pads_to_three_periods() {
        let props = box_score(&NhlGame::default());
        assert_eq!(props.periods, vec!["1st", "2nd", "3rd"]);
        assert!(props.home.periods.iter().all(String::is_empty));
    }

    #[test]
    fn matchup_prefers_series_status() {
        let game = playoff_overtime();
        let props = matchup(&game, "Sun, May 16, 2021");
        assert_eq!(props.detail, "MTL leads 1-0");
        assert_eq!(props.status, "Final/OT");
        assert!(props.away.winner);
        assert_eq!(props.home.record, "0-1");

        let mut regular = game.clone();
        regular.series_summary = None;
        assert_eq!(matchup(&regular, "").detail, "Scotiabank Arena");
    }

    #[test]
    fn live_status_shows_period_and_time() {
        let mut game = playoff_overtime();
        game.status.abstract_game_state = Some("Live".into());
        game.linescore.current_period_ordinal = Some("2nd".into());
        game.linescore.current_period_time_remaining = Some("12:04".into());
        let row = summary(&game);
        assert_eq!(row.status, "2nd 12:04");
        assert!(row.live);
        assert_eq!(row.id, "2020030111");
    }

    #[test]
    fn adapters_are_pure() {
        let game = playoff_overtime();
        let before = game.clone();
        assert_eq!(box_score(&game), box_score(&game));
        assert_eq!(matchup(&game, "d"), matchup(&game, "d"));
        assert_eq!(game, before);
    }
}
