pub mod client;
pub mod mlb;
pub mod nba;
pub mod nfl;
pub mod nhl;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// League tag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    Mlb,
    Nba,
    Nfl,
    Nhl,
}

impl League {
    pub const ALL: [League; 4] = [League::Mlb, League::Nba, League::Nfl, League::Nhl];

    /// Path segment used by routes and the score proxy.
    pub fn slug(self) -> &'static str {
        match self {
            League::Mlb => "mlb",
            League::Nba => "nba",
            League::Nfl => "nfl",
            League::Nhl => "nhl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            League::Mlb => "MLB",
            League::Nba => "NBA",
            League::Nfl => "NFL",
            League::Nhl => "NHL",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLeague(pub String);

impl fmt::Display for UnknownLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown league: {}", self.0)
    }
}

impl std::error::Error for UnknownLeague {}

impl FromStr for League {
    type Err = UnknownLeague;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::ALL
            .into_iter()
            .find(|league| league.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLeague(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Date / week context
// ---------------------------------------------------------------------------

pub const FIRST_WEEK: u8 = 1;
pub const LAST_WEEK: u8 = 18;

/// Calendar day for mlb/nba/nhl. Explicit dates are kept as typed so that a
/// malformed value reaches the endpoint unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameDay {
    #[default]
    Today,
    Date(String),
}

impl GameDay {
    pub fn resolve(&self, today: NaiveDate) -> String {
        match self {
            GameDay::Today => today.format("%Y-%m-%d").to_string(),
            GameDay::Date(raw) => raw.clone(),
        }
    }

    /// Step by `days`. Returns None when the date cannot be parsed.
    pub fn shift(&self, today: NaiveDate, days: i64) -> Option<GameDay> {
        let base = match self {
            GameDay::Today => today,
            GameDay::Date(raw) => parse_date(raw)?,
        };
        let next = base.checked_add_signed(TimeDelta::days(days))?;
        Some(GameDay::Date(next.format("%Y-%m-%d").to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameWeek {
    #[default]
    Current,
    Week(u8),
}

impl GameWeek {
    pub fn resolve(self, today: NaiveDate) -> u8 {
        match self {
            GameWeek::Current => nfl_week_for(today),
            GameWeek::Week(week) => week,
        }
    }

    pub fn shift(self, today: NaiveDate, delta: i32) -> GameWeek {
        let week = i32::from(self.resolve(today)) + delta;
        GameWeek::Week(week.clamp(i32::from(FIRST_WEEK), i32::from(LAST_WEEK)) as u8)
    }
}

/// The (league, date-or-week) pair a scores screen is showing. NFL carries a
/// week, the other leagues a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreContext {
    Mlb(GameDay),
    Nba(GameDay),
    Nfl(GameWeek),
    Nhl(GameDay),
}

impl ScoreContext {
    /// Today (or the current week) for `league`.
    pub fn current(league: League) -> Self {
        match league {
            League::Mlb => ScoreContext::Mlb(GameDay::Today),
            League::Nba => ScoreContext::Nba(GameDay::Today),
            League::Nfl => ScoreContext::Nfl(GameWeek::Current),
            League::Nhl => ScoreContext::Nhl(GameDay::Today),
        }
    }

    pub fn league(&self) -> League {
        match self {
            ScoreContext::Mlb(_) => League::Mlb,
            ScoreContext::Nba(_) => League::Nba,
            ScoreContext::Nfl(_) => League::Nfl,
            ScoreContext::Nhl(_) => League::Nhl,
        }
    }

    pub fn day(&self) -> Option<&GameDay> {
        match self {
            ScoreContext::Mlb(day) | ScoreContext::Nba(day) | ScoreContext::Nhl(day) => Some(day),
            ScoreContext::Nfl(_) => None,
        }
    }

    /// Move `delta` days (or weeks for nfl). An unparseable date stays put.
    pub fn shift(&self, today: NaiveDate, delta: i32) -> ScoreContext {
        let step = |day: &GameDay| day.shift(today, i64::from(delta)).unwrap_or_else(|| day.clone());
        match self {
            ScoreContext::Mlb(day) => ScoreContext::Mlb(step(day)),
            ScoreContext::Nba(day) => ScoreContext::Nba(step(day)),
            ScoreContext::Nhl(day) => ScoreContext::Nhl(step(day)),
            ScoreContext::Nfl(week) => ScoreContext::Nfl(week.shift(today, delta)),
        }
    }

    /// "2021-04-10" or "week 5", resolved against `today`.
    pub fn describe(&self, today: NaiveDate) -> String {
        match self {
            ScoreContext::Mlb(day) | ScoreContext::Nba(day) | ScoreContext::Nhl(day) => {
                day.resolve(today)
            }
            ScoreContext::Nfl(week) => format!("week {}", week.resolve(today)),
        }
    }
}

/// Accepts `YYYY-MM-DD` and `YYYYMMDD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .ok()
}

/// Thursday after Labor Day.
pub fn nfl_kickoff(season: i32) -> Option<NaiveDate> {
    let labor_day = NaiveDate::from_weekday_of_month_opt(season, 9, Weekday::Mon, 1)?;
    labor_day.checked_add_signed(TimeDelta::days(3))
}

/// Regular-season week for `today`. Weeks roll over on Tuesday; January and
/// February belong to the previous season and pin to the last week.
pub fn nfl_week_for(today: NaiveDate) -> u8 {
    let season = if today.month() <= 2 { today.year() - 1 } else { today.year() };
    let Some(week_one) = nfl_kickoff(season).and_then(|k| k.checked_sub_signed(TimeDelta::days(2)))
    else {
        return FIRST_WEEK;
    };
    if today < week_one {
        return FIRST_WEEK;
    }
    let week = (today - week_one).num_days() / 7 + 1;
    week.clamp(i64::from(FIRST_WEEK), i64::from(LAST_WEEK)) as u8
}

// ---------------------------------------------------------------------------
// Fetched payloads
// ---------------------------------------------------------------------------

/// One decoded scores payload, tagged by the league it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Scoreboard {
    Mlb(mlb::MlbScoreboard),
    Nba(nba::NbaScoreboard),
    Nfl(nfl::NflScoreboard),
    Nhl(nhl::NhlSchedule),
}

impl Scoreboard {
    pub fn league(&self) -> League {
        match self {
            Scoreboard::Mlb(_) => League::Mlb,
            Scoreboard::Nba(_) => League::Nba,
            Scoreboard::Nfl(_) => League::Nfl,
            Scoreboard::Nhl(_) => League::Nhl,
        }
    }

    pub fn game_count(&self) -> usize {
        match self {
            Scoreboard::Mlb(s) => s.games.len(),
            Scoreboard::Nba(s) => s.games.len(),
            Scoreboard::Nfl(s) => s.games.len(),
            Scoreboard::Nhl(s) => s.games().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn league_parses_case_insensitively() {
        assert_eq!("mlb".parse::<League>(), Ok(League::Mlb));
        assert_eq!("NHL".parse::<League>(), Ok(League::Nhl));
        assert_eq!("xfl".parse::<League>(), Err(UnknownLeague("xfl".into())));
    }

    #[test]
    fn parse_date_accepts_dashed_and_compact() {
        assert_eq!(parse_date("2021-04-10"), Some(ymd(2021, 4, 10)));
        assert_eq!(parse_date("20210410"), Some(ymd(2021, 4, 10)));
        assert_eq!(parse_date("04/10/2021"), None);
    }

    #[test]
    fn today_resolves_to_dashed_date() {
        assert_eq!(GameDay::Today.resolve(ymd(2021, 5, 1)), "2021-05-01");
        assert_eq!(GameDay::Date("garbage".into()).resolve(ymd(2021, 5, 1)), "garbage");
    }

    #[test]
    fn day_shift_crosses_month_boundary() {
        let day = GameDay::Date("2021-04-30".into());
        assert_eq!(day.shift(ymd(2021, 1, 1), 1), Some(GameDay::Date("2021-05-01".into())));
        assert_eq!(GameDay::Today.shift(ymd(2021, 5, 1), -1), Some(GameDay::Date("2021-04-30".into())));
    }

    #[test]
    fn malformed_date_does_not_shift() {
        let ctx = ScoreContext::Mlb(GameDay::Date("not-a-date".into()));
        assert_eq!(ctx.shift(ymd(2021, 5, 1), 1), ctx);
    }

    #[test]
    fn kickoff_is_thursday_after_labor_day() {
        assert_eq!(nfl_kickoff(2021), Some(ymd(2021, 9, 9)));
        assert_eq!(nfl_kickoff(2023), Some(ymd(2023, 9, 7)));
    }

    #[test]
    fn nfl_week_tracks_the_calendar() {
        assert_eq!(nfl_week_for(ymd(2021, 7, 1)), 1);
        assert_eq!(nfl_week_for(ymd(2021, 9, 12)), 1);
        assert_eq!(nfl_week_for(ymd(2021, 9, 14)), 2);
        assert_eq!(nfl_week_for(ymd(2021, 10, 10)), 5);
        assert_eq!(nfl_week_for(ymd(2022, 1, 20)), LAST_WEEK);
    }

    #[test]
    fn week_shift_is_clamped() {
        let today = ymd(2021, 10, 10);
        assert_eq!(GameWeek::Week(1).shift(today, -1), GameWeek::Week(1));
        assert_eq!(GameWeek::Week(18).shift(today, 1), GameWeek::Week(18));
        assert_eq!(GameWeek::Current.shift(today, 1), GameWeek::Week(6));
    }

    #[test]
    fn context_reports_league_and_description() {
        let today = ymd(2021, 10, 10);
        assert_eq!(ScoreContext::current(League::Nfl).describe(today), "week 5");
        assert_eq!(ScoreContext::Nhl(GameDay::Date("2021-04-10".into())).league(), League::Nhl);
    }
}
