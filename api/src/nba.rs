/// NBA wire types.
///
/// Two sources: the score proxy (`/api/nba/scores/{date}`), which relays the
/// league's daily scoreboard with its string-typed numbers, and the per-game
/// `boxscore.json` document, which nests everything under
/// `sports_content.game`.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Daily scoreboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaScoreboard {
    pub games: Vec<NbaGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NbaGame {
    pub game_id: String,
    pub start_time_eastern: Option<String>,
    pub status: NbaStatus,
    pub arena: Option<String>,
    #[serde(rename = "vTeam")]
    pub v_team: NbaTeamLine,
    #[serde(rename = "hTeam")]
    pub h_team: NbaTeamLine,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NbaStatus {
    /// "pre", "live", "final"
    pub state: Option<String>,
    pub period: Option<u8>,
    pub clock: Option<String>,
    pub is_halftime: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NbaTeamLine {
    pub tri_code: Option<String>,
    pub city: Option<String>,
    pub nickname: Option<String>,
    pub win: Option<String>,
    pub loss: Option<String>,
    pub score: Option<String>,
    pub linescore: Vec<NbaPeriodScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaPeriodScore {
    pub score: Option<String>,
}

// ---------------------------------------------------------------------------
// Per-game box score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaBoxscoreResponse {
    pub sports_content: NbaSportsContent,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaSportsContent {
    pub game: NbaBoxscore,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaBoxscore {
    pub id: String,
    pub visitor: NbaBoxscoreTeam,
    pub home: NbaBoxscoreTeam,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaBoxscoreTeam {
    pub abbreviation: Option<String>,
    pub city: Option<String>,
    pub nickname: Option<String>,
    pub score: Option<String>,
    pub stats: NbaTeamStats,
    pub players: NbaPlayers,
}

/// Team totals. The feed sends every number as a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaTeamStats {
    pub points: Option<String>,
    pub field_goals_made: Option<String>,
    pub field_goals_attempted: Option<String>,
    pub three_pointers_made: Option<String>,
    pub three_pointers_attempted: Option<String>,
    pub free_throws_made: Option<String>,
    pub free_throws_attempted: Option<String>,
    pub rebounds_offensive: Option<String>,
    pub rebounds_defensive: Option<String>,
    pub assists: Option<String>,
    pub steals: Option<String>,
    pub blocks: Option<String>,
    pub turnovers: Option<String>,
    pub fouls: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaPlayers {
    pub player: Vec<NbaPlayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NbaPlayer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub minutes: Option<String>,
    pub points: Option<String>,
    pub rebounds_offensive: Option<String>,
    pub rebounds_defensive: Option<String>,
    pub assists: Option<String>,
}

impl NbaPlayer {
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() => {
                let initial: String = first.chars().take(1).collect();
                format!("{initial}. {last}")
            }
            (_, Some(last)) => last.to_owned(),
            (Some(first), None) => first.to_owned(),
            (None, None) => String::new(),
        }
    }
}
