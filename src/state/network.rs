use crate::state::messages::{NetworkRequest, NetworkResponse};
use chrono::{Local, NaiveDate};
use log::{debug, error};
use scoreboard_api::client::ScoresApi;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Runs each request as its own task so fetches overlap and finish in any
/// order. A request from a newer generation aborts everything still running
/// for older ones.
pub struct NetworkWorker {
    client: Arc<ScoresApi>,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    in_flight: Vec<(u64, JoinHandle<()>)>,
    pending: Arc<AtomicUsize>,
    spinning: Arc<AtomicBool>,
    last_failed: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        client: ScoresApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: Arc::new(client),
            requests,
            responses,
            in_flight: Vec::new(),
            pending: Arc::new(AtomicUsize::new(0)),
            spinning: Arc::new(AtomicBool::new(false)),
            last_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let generation = request.generation();
            self.abort_older_than(generation);

            self.pending.fetch_add(1, Ordering::SeqCst);
            self.start_loading_animation();

            let guard = PendingGuard(self.pending.clone());
            let client = self.client.clone();
            let responses = self.responses.clone();
            let last_failed = self.last_failed.clone();

            let handle = tokio::spawn(async move {
                let _guard = guard;
                let response = execute(&client, request, Local::now().date_naive()).await;
                last_failed.store(is_failure(&response), Ordering::SeqCst);
                if let Err(e) = responses.send(response).await {
                    error!("Failed to send network response: {e}");
                }
            });
            self.in_flight.push((generation, handle));
        }

        for (_, handle) in self.in_flight.drain(..) {
            handle.abort();
        }
    }

    fn abort_older_than(&mut self, generation: u64) {
        self.in_flight.retain(|(task_generation, handle)| {
            if handle.is_finished() {
                return false;
            }
            if *task_generation < generation {
                debug!("aborting request from generation {task_generation}");
                handle.abort();
                return false;
            }
            true
        });
    }

    fn start_loading_animation(&self) {
        if self.spinning.swap(true, Ordering::SeqCst) {
            return;
        }

        let responses = self.responses.clone();
        let pending = self.pending.clone();
        let spinning = self.spinning.clone();
        let last_failed = self.last_failed.clone();

        tokio::spawn(async move {
            let mut spinner_index = 0;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if pending.load(Ordering::SeqCst) == 0 {
                    spinning.store(false, Ordering::SeqCst);
                    // A request may have slipped in after the check above.
                    if pending.load(Ordering::SeqCst) > 0 && !spinning.swap(true, Ordering::SeqCst) {
                        continue;
                    }
                    let spinner_char =
                        if last_failed.load(Ordering::SeqCst) { ERROR_CHAR } else { ' ' };
                    let _ = responses
                        .send(NetworkResponse::LoadingStateChanged {
                            loading_state: LoadingState { is_loading: false, spinner_char },
                        })
                        .await;
                    break;
                }
                let loading_state =
                    LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[spinner_index] };
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }
}

/// Queue requests for the worker, logging if it has gone away.
pub async fn send_all(
    network_requests: &mpsc::Sender<NetworkRequest>,
    requests: impl IntoIterator<Item = NetworkRequest>,
) {
    for request in requests {
        if let Err(e) = network_requests.send(request).await {
            error!("Network worker is gone: {e}");
        }
    }
}

/// Counts a request as pending until its task finishes or is aborted.
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn is_failure(response: &NetworkResponse) -> bool {
    matches!(
        response,
        NetworkResponse::ScoresFailed { .. } | NetworkResponse::NbaDetailsFailed { .. }
    )
}

async fn execute(client: &ScoresApi, request: NetworkRequest, today: NaiveDate) -> NetworkResponse {
    match request {
        NetworkRequest::LoadScores { generation, context } => {
            debug!("loading {} scores for {}", context.league(), context.describe(today));
            match client.fetch_scores(&context, today).await {
                Ok(scoreboard) => {
                    debug!("{} scores loaded: {} games", context.league(), scoreboard.game_count());
                    NetworkResponse::ScoresLoaded { generation, scoreboard }
                }
                Err(error) => {
                    error!("{} scores: {error}", context.league());
                    NetworkResponse::ScoresFailed { generation, error }
                }
            }
        }
        NetworkRequest::LoadNbaDetails { generation, day, game_id } => {
            debug!("loading nba details for game {game_id}");
            match client.fetch_nba_game_details(&day, today, &game_id).await {
                Ok(details) => NetworkResponse::NbaDetailsLoaded { generation, game_id, details },
                Err(error) => {
                    error!("nba details for {game_id}: {error}");
                    NetworkResponse::NbaDetailsFailed { generation, game_id, error }
                }
            }
        }
    }
}
