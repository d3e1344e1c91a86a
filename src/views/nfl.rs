use crate::views::props::GameSummary;
use crate::views::{number, text};
use scoreboard_api::nfl::NflGame;

pub fn summary(game: &NflGame) -> GameSummary {
    GameSummary {
        id: game.id.clone(),
        away: text(game.away.abbreviation.as_ref()),
        home: text(game.home.abbreviation.as_ref()),
        away_score: number(game.away.score),
        home_score: number(game.home.score),
        status: status_line(game),
        live: matches!(game.quarter.as_deref(), Some("1" | "2" | "3" | "4" | "5" | "H")),
    }
}

fn status_line(game: &NflGame) -> String {
    let clock = game.clock.as_deref().unwrap_or_default();
    let with_clock = |period: &str| {
        if clock.is_empty() {
            period.to_owned()
        } else {
            format!("{period} {clock}")
        }
    };
    match game.quarter.as_deref() {
        Some(q @ ("1" | "2" | "3" | "4")) => with_clock(&format!("Q{q}")),
        Some("5") => with_clock("OT"),
        Some("H") => "Halftime".to_owned(),
        Some("F") => "Final".to_owned(),
        Some("FO") => "Final/OT".to_owned(),
        Some("P") | None => {
            let kickoff = [game.day.as_deref(), game.time.as_deref()];
            kickoff.into_iter().flatten().collect::<Vec<_>>().join(" ")
        }
        Some(other) => other.to_owned(),
    }
}
