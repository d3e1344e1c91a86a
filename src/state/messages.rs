use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use scoreboard_api::client::ApiError;
use scoreboard_api::nba::NbaBoxscore;
use scoreboard_api::{GameDay, ScoreContext, Scoreboard};

/// Every request carries the generation of the context that issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkRequest {
    LoadScores { generation: u64, context: ScoreContext },
    LoadNbaDetails { generation: u64, day: GameDay, game_id: String },
}

impl NetworkRequest {
    pub fn generation(&self) -> u64 {
        match self {
            NetworkRequest::LoadScores { generation, .. }
            | NetworkRequest::LoadNbaDetails { generation, .. } => *generation,
        }
    }
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    ScoresLoaded { generation: u64, scoreboard: Scoreboard },
    ScoresFailed { generation: u64, error: ApiError },
    NbaDetailsLoaded { generation: u64, game_id: String, details: NbaBoxscore },
    NbaDetailsFailed { generation: u64, game_id: String, error: ApiError },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    RefreshTick,
}
