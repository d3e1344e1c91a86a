use crate::mlb::MlbScoreboard;
use crate::nba::{NbaBoxscore, NbaBoxscoreResponse, NbaScoreboard};
use crate::nfl::NflScoreboard;
use crate::nhl::NhlSchedule;
use crate::{GameDay, GameWeek, ScoreContext, Scoreboard, parse_date};
use chrono::NaiveDate;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const DEFAULT_PROXY_BASE: &str = "http://localhost:3000";
pub const DEFAULT_NHL_BASE: &str = "https://statsapi.web.nhl.com/api/v1";
pub const DEFAULT_NBA_DATA_BASE: &str = "http://data.nba.com/data/10s/json/cms/noseason/game";
const NHL_EXPAND: &str = "schedule.teams,schedule.linescore,schedule.scoringplays,schedule.game.seriesSummary,seriesSummary.series";

/// Where each league's data lives. The mlb/nba/nfl feeds go through the score
/// proxy; nhl and the nba per-game box score are fetched from their sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub proxy_base: String,
    pub nhl_base: String,
    pub nba_data_base: String,
    /// Prepended verbatim to the nba box score URL. Empty = direct.
    pub cors_proxy: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            proxy_base: DEFAULT_PROXY_BASE.to_owned(),
            nhl_base: DEFAULT_NHL_BASE.to_owned(),
            nba_data_base: DEFAULT_NBA_DATA_BASE.to_owned(),
            cors_proxy: String::new(),
        }
    }
}

impl Endpoints {
    /// Point every league at one server. Used by tests against a mock.
    pub fn single_host(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            proxy_base: base.to_owned(),
            nhl_base: format!("{base}/nhl"),
            nba_data_base: format!("{base}/nba-data"),
            cors_proxy: String::new(),
        }
    }

    pub fn mlb_scores(&self, date: &str) -> String {
        format!("{}/api/mlb/scores/{date}", trim(&self.proxy_base))
    }

    pub fn nba_scores(&self, date: &str) -> String {
        format!("{}/api/nba/scores/{date}", trim(&self.proxy_base))
    }

    pub fn nba_game_details(&self, date: &str, game_id: &str) -> String {
        format!(
            "{}{}/{}/{game_id}/boxscore.json",
            self.cors_proxy,
            trim(&self.nba_data_base),
            compact_date(date)
        )
    }

    pub fn nfl_scores(&self, week: u8) -> String {
        format!("{}/api/nfl/scores/week/{week}", trim(&self.proxy_base))
    }

    pub fn nhl_schedule(&self, date: &str) -> String {
        let day = dashed_date(date);
        format!(
            "{}/schedule?startDate={day}&endDate={day}&expand={NHL_EXPAND}",
            trim(&self.nhl_base)
        )
    }

    /// The URL `fetch_scores` would hit for `context`.
    pub fn scores_url(&self, context: &ScoreContext, today: NaiveDate) -> String {
        match context {
            ScoreContext::Mlb(day) => self.mlb_scores(&day.resolve(today)),
            ScoreContext::Nba(day) => self.nba_scores(&day.resolve(today)),
            ScoreContext::Nfl(week) => self.nfl_scores(week.resolve(today)),
            ScoreContext::Nhl(day) => self.nhl_schedule(&day.resolve(today)),
        }
    }
}

fn trim(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// `YYYYMMDD` when the date parses, otherwise the input unchanged.
fn compact_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%Y%m%d").to_string())
        .unwrap_or_else(|| raw.to_owned())
}

/// `YYYY-MM-DD` when the date parses, otherwise the input unchanged.
fn dashed_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_owned())
}

/// Scores client for every supported league.
#[derive(Debug, Clone)]
pub struct ScoresApi {
    client: Client,
    endpoints: Endpoints,
    timeout: Duration,
}

impl Default for ScoresApi {
    fn default() -> Self {
        Self::new(Endpoints::default())
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    Network(reqwest::Error, String),
    /// The server answered with a non-success status.
    Status(u16, String),
    /// The body was not the expected JSON.
    Parsing(reqwest::Error, String),
}

impl ApiError {
    /// Transport status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code, _) => Some(*code),
            ApiError::Network(e, _) | ApiError::Parsing(e, _) => e.status().map(|s| s.as_u16()),
        }
    }

    /// One-line form for status bars.
    pub fn summary(&self) -> String {
        match self {
            ApiError::Status(code, _) => format!("fetch failed ({code})"),
            ApiError::Network(..) => "fetch failed (network)".to_owned(),
            ApiError::Parsing(..) => "fetch failed (bad response)".to_owned(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Status(code, url) => write!(f, "HTTP {code} for {url}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Parsing(e, _) => Some(e),
            ApiError::Status(..) => None,
        }
    }
}

impl ScoresApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("scoreboard/", env!("CARGO_PKG_VERSION"), " (terminal scores)"))
                .build()
                .unwrap_or_default(),
            endpoints,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the scores payload for whatever league `context` names.
    pub async fn fetch_scores(&self, context: &ScoreContext, today: NaiveDate) -> ApiResult<Scoreboard> {
        match context {
            ScoreContext::Mlb(day) => self.fetch_mlb_scores(day, today).await.map(Scoreboard::Mlb),
            ScoreContext::Nba(day) => self.fetch_nba_scores(day, today).await.map(Scoreboard::Nba),
            ScoreContext::Nfl(week) => self.fetch_nfl_scores(*week, today).await.map(Scoreboard::Nfl),
            ScoreContext::Nhl(day) => self.fetch_nhl_scores(day, today).await.map(Scoreboard::Nhl),
        }
    }

    pub async fn fetch_mlb_scores(&self, day: &GameDay, today: NaiveDate) -> ApiResult<MlbScoreboard> {
        self.get(&self.endpoints.mlb_scores(&day.resolve(today))).await
    }

    pub async fn fetch_nba_scores(&self, day: &GameDay, today: NaiveDate) -> ApiResult<NbaScoreboard> {
        self.get(&self.endpoints.nba_scores(&day.resolve(today))).await
    }

    /// Box score and team totals for one nba game.
    pub async fn fetch_nba_game_details(
        &self,
        day: &GameDay,
        today: NaiveDate,
        game_id: &str,
    ) -> ApiResult<NbaBoxscore> {
        let url = self.endpoints.nba_game_details(&day.resolve(today), game_id);
        let raw: NbaBoxscoreResponse = self.get(&url).await?;
        Ok(raw.sports_content.game)
    }

    pub async fn fetch_nfl_scores(&self, week: GameWeek, today: NaiveDate) -> ApiResult<NflScoreboard> {
        self.get(&self.endpoints.nfl_scores(week.resolve(today))).await
    }

    pub async fn fetch_nhl_scores(&self, day: &GameDay, today: NaiveDate) -> ApiResult<NhlSchedule> {
        self.get(&self.endpoints.nhl_schedule(&day.resolve(today))).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), url.to_owned()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}
