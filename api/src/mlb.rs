/// MLB wire types, as served by the score proxy at `/api/mlb/scores/{date}`.
/// Every field is defaulted: the proxy drops keys for games that have not
/// started, and a partial game must still decode.
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MlbScoreboard {
    pub date: Option<String>,
    pub games: Vec<MlbGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MlbGame {
    pub id: String,
    pub status: MlbStatus,
    pub teams: MlbTeams,
    pub linescore: MlbLinescore,
    pub runners: MlbRunners,
    pub venue: Option<String>,
    /// Local first-pitch time, e.g. "7:05 PM".
    pub start_time: Option<String>,
    pub pitcher: Option<String>,
    pub batter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MlbStatus {
    /// "Preview", "Pre-Game", "In Progress", "Final", "Postponed"
    pub state: Option<String>,
    pub inning: Option<u8>,
    pub is_top_inning: Option<bool>,
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    pub outs: Option<u8>,
}

impl MlbStatus {
    pub fn is_live(&self) -> bool {
        self.state.as_deref() == Some("In Progress")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MlbTeams {
    pub away: MlbTeam,
    pub home: MlbTeam,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MlbTeam {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub wins: Option<u16>,
    pub losses: Option<u16>,
    pub runs: Option<u16>,
    pub hits: Option<u16>,
    pub errors: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MlbLinescore {
    pub innings: Vec<MlbInning>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MlbInning {
    pub num: Option<u8>,
    pub away: Option<u16>,
    /// None for the unplayed bottom half of a walk-off or a game in progress.
    pub home: Option<u16>,
}

/// Runner names by base; None when the base is empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MlbRunners {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}
