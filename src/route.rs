use scoreboard_api::{FIRST_WEEK, GameDay, GameWeek, LAST_WEEK, League, ScoreContext};
use std::fmt;

/// A screen reachable by path. Unknown leagues and malformed paths land on
/// `NotFound`, which keeps the path for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Scores(ScoreContext),
    About,
    Test,
    NotFound(String),
}

impl Route {
    /// `/{league}[/scores[/{date}]]` for mlb, nba and nhl, and
    /// `/nfl[/scores[/week/{n}]]`. League matching ignores case; trailing
    /// slashes are ignored. Dates are kept as typed.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            [page] if page.eq_ignore_ascii_case("about") => Route::About,
            [page] if page.eq_ignore_ascii_case("test") => Route::Test,
            [league, rest @ ..] => match league.parse::<League>() {
                Ok(league) => scores(league, rest).unwrap_or_else(|| not_found(path)),
                Err(_) => not_found(path),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_owned(),
            Route::About => "/about".to_owned(),
            Route::Test => "/test".to_owned(),
            Route::NotFound(path) => path.clone(),
            Route::Scores(ctx) => {
                let league = ctx.league().slug();
                match ctx {
                    ScoreContext::Mlb(day) | ScoreContext::Nba(day) | ScoreContext::Nhl(day) => {
                        match day {
                            GameDay::Today => format!("/{league}/scores"),
                            GameDay::Date(date) => format!("/{league}/scores/{date}"),
                        }
                    }
                    ScoreContext::Nfl(GameWeek::Current) => format!("/{league}/scores"),
                    ScoreContext::Nfl(GameWeek::Week(week)) => {
                        format!("/{league}/scores/week/{week}")
                    }
                }
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Regular-season week, 1 through 18.
fn week_number(raw: &str) -> Option<u8> {
    raw.parse().ok().filter(|n| (FIRST_WEEK..=LAST_WEEK).contains(n))
}

fn not_found(path: &str) -> Route {
    Route::NotFound(path.to_owned())
}

fn scores(league: League, rest: &[&str]) -> Option<Route> {
    let context = match (league, rest) {
        (_, []) => ScoreContext::current(league),
        (_, [scores]) if is_scores(scores) => ScoreContext::current(league),
        (League::Nfl, [scores, week, n]) if is_scores(scores) && week.eq_ignore_ascii_case("week") => {
            ScoreContext::Nfl(GameWeek::Week(week_number(n)?))
        }
        (League::Nfl, _) => return None,
        (League::Mlb, [scores, date]) if is_scores(scores) => ScoreContext::Mlb(day(date)?),
        (League::Nba, [scores, date]) if is_scores(scores) => ScoreContext::Nba(day(date)?),
        (League::Nhl, [scores, date]) if is_scores(scores) => ScoreContext::Nhl(day(date)?),
        _ => return None,
    };
    Some(Route::Scores(context))
}

fn is_scores(segment: &str) -> bool {
    segment.eq_ignore_ascii_case("scores")
}

/// A day segment, unless it is the nfl-only `week` keyword.
fn day(segment: &str) -> Option<GameDay> {
    if segment.eq_ignore_ascii_case("week") {
        return None;
    }
    Some(GameDay::Date(segment.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_with_date() {
        assert_eq!(
            Route::parse("/mlb/scores/2021-05-01"),
            Route::Scores(ScoreContext::Mlb(GameDay::Date("2021-05-01".into())))
        );
    }

    #[test]
    fn nfl_with_week() {
        assert_eq!(
            Route::parse("/nfl/scores/week/5"),
            Route::Scores(ScoreContext::Nfl(GameWeek::Week(5)))
        );
    }

    #[test]
    fn bare_league_means_today() {
        assert_eq!(Route::parse("/mlb"), Route::Scores(ScoreContext::Mlb(GameDay::Today)));
        assert_eq!(Route::parse("/nhl/scores"), Route::Scores(ScoreContext::Nhl(GameDay::Today)));
        assert_eq!(Route::parse("/nfl"), Route::Scores(ScoreContext::Nfl(GameWeek::Current)));
    }

    #[test]
    fn case_and_trailing_slashes_are_ignored() {
        assert_eq!(Route::parse("/NBA/Scores/"), Route::Scores(ScoreContext::Nba(GameDay::Today)));
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/test"), Route::Test);
    }

    #[test]
    fn unknown_league_is_not_found() {
        assert_eq!(Route::parse("/xfl/scores"), Route::NotFound("/xfl/scores".into()));
    }

    #[test]
    fn mismatched_context_is_not_found() {
        assert!(matches!(Route::parse("/nfl/scores/2021-05-01"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/mlb/scores/week/5"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/nfl/scores/week/five"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/nfl/scores/week/0"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/nfl/scores/week/19"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/nfl/scores/week/200"), Route::NotFound(_)));
        assert_eq!(
            Route::parse("/nfl/scores/week/18"),
            Route::Scores(ScoreContext::Nfl(GameWeek::Week(18)))
        );
        assert!(matches!(Route::parse("/mlb/standings"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/mlb/scores/2021-05-01/extra"), Route::NotFound(_)));
    }

    #[test]
    fn dates_are_not_validated() {
        assert_eq!(
            Route::parse("/nhl/scores/yesterday"),
            Route::Scores(ScoreContext::Nhl(GameDay::Date("yesterday".into())))
        );
    }

    #[test]
    fn path_reverses_parse() {
        for path in ["/", "/about", "/test", "/mlb/scores", "/nba/scores/2021-04-10", "/nfl/scores/week/5"] {
            assert_eq!(Route::parse(path).path(), path);
        }
        assert_eq!(Route::Scores(ScoreContext::current(League::Nfl)).path(), "/nfl/scores");
    }
}
