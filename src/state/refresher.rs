use crate::state::messages::UiEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Periodic score refresh. Sends a tick to the UI loop, which re-requests the
/// current context under its current generation.
pub struct PeriodicRefresher {
    ui_events: mpsc::Sender<UiEvent>,
    every: Duration,
}

impl PeriodicRefresher {
    pub fn new(ui_events: mpsc::Sender<UiEvent>, every: Duration) -> Self {
        Self { ui_events, every }
    }

    pub async fn run(self) {
        let mut scores_interval = interval(self.every);
        // Skip the immediate first tick so startup loading isn't double-triggered.
        scores_interval.tick().await;

        loop {
            scores_interval.tick().await;
            if self.ui_events.send(UiEvent::RefreshTick).await.is_err() {
                break;
            }
        }
    }
}
