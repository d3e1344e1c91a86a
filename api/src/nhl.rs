/// NHL stats API wire types for `/schedule` with the teams, linescore,
/// scoring plays and series summary expansions.
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlSchedule {
    pub total_games: Option<u32>,
    pub dates: Vec<NhlDate>,
}

impl NhlSchedule {
    /// Games across every date in the window, in feed order.
    pub fn games(&self) -> impl Iterator<Item = &NhlGame> {
        self.dates.iter().flat_map(|d| d.games.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NhlDate {
    pub date: Option<String>,
    pub games: Vec<NhlGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlGame {
    pub game_pk: u64,
    /// ISO 8601, UTC.
    pub game_date: Option<String>,
    pub status: NhlStatus,
    pub teams: NhlTeams,
    pub linescore: NhlLinescore,
    pub venue: NhlVenue,
    pub series_summary: Option<NhlSeriesSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlStatus {
    /// "Preview", "Live", "Final"
    pub abstract_game_state: Option<String>,
    pub detailed_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NhlTeams {
    pub away: NhlScheduleTeam,
    pub home: NhlScheduleTeam,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlScheduleTeam {
    pub league_record: NhlRecord,
    pub score: Option<u16>,
    pub team: NhlTeam,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NhlRecord {
    pub wins: Option<u16>,
    pub losses: Option<u16>,
    pub ot: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlTeam {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlLinescore {
    pub current_period: Option<u8>,
    pub current_period_ordinal: Option<String>,
    pub current_period_time_remaining: Option<String>,
    pub periods: Vec<NhlPeriod>,
    pub has_shootout: Option<bool>,
    pub teams: NhlLinescoreTeams,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlPeriod {
    pub num: Option<u8>,
    pub ordinal_num: Option<String>,
    pub away: NhlPeriodLine,
    pub home: NhlPeriodLine,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlPeriodLine {
    pub goals: Option<u16>,
    pub shots_on_goal: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NhlLinescoreTeams {
    pub away: NhlPeriodLine,
    pub home: NhlPeriodLine,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NhlVenue {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NhlSeriesSummary {
    pub series_status: Option<String>,
    pub series_status_short: Option<String>,
}
