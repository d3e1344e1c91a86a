/// NFL wire types for the weekly score strip at `/api/nfl/scores/week/{week}`.
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NflScoreboard {
    pub season: Option<u16>,
    pub week: Option<u8>,
    pub games: Vec<NflGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NflGame {
    pub id: String,
    /// "Sun", "Mon", "Thu"
    pub day: Option<String>,
    pub time: Option<String>,
    /// "P" (pregame), "1".."4", "H", "5" (overtime), "F", "FO"
    pub quarter: Option<String>,
    pub clock: Option<String>,
    pub away: NflTeam,
    pub home: NflTeam,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NflTeam {
    pub abbreviation: Option<String>,
    pub name: Option<String>,
    pub score: Option<u16>,
}
