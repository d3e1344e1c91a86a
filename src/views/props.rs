use scoreboard_api::League;

/// User-selectable sub-view within a league's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    BoxScore,
    TeamStats,
    Summary,
}

impl Panel {
    pub fn label(self) -> &'static str {
        match self {
            Panel::BoxScore => "box score",
            Panel::TeamStats => "team stats",
            Panel::Summary => "summary",
        }
    }
}

/// One row of the scoreboard list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub id: String,
    pub away: String,
    pub home: String,
    pub away_score: String,
    pub home_score: String,
    pub status: String,
    pub live: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchupSide {
    pub name: String,
    pub abbreviation: String,
    pub record: String,
    pub score: String,
    pub winner: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchupProps {
    pub date: String,
    pub status: String,
    /// Venue, arena or series status.
    pub detail: String,
    pub away: MatchupSide,
    pub home: MatchupSide,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxScoreLine {
    pub team: String,
    pub periods: Vec<String>,
    pub totals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScoreProps {
    pub league: League,
    pub periods: Vec<String>,
    pub totals: Vec<&'static str>,
    pub away: BoxScoreLine,
    pub home: BoxScoreLine,
    /// Field diagram drawn inside the box score (mlb only).
    pub diamond: Option<DiamondProps>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiamondProps {
    pub first: bool,
    pub second: bool,
    pub third: bool,
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub inning: String,
    pub pitcher: String,
    pub batter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatRow {
    pub label: &'static str,
    pub away: String,
    pub home: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsProps {
    pub away: String,
    pub home: String,
    pub rows: Vec<StatRow>,
    pub leaders: Vec<StatRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelMenuProps {
    pub panels: Vec<Panel>,
    pub active: Panel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTimeProps {
    pub last_updated: Option<String>,
}
