//! Store fetch worker
//!
//! Receives fetch requests from the UI and serves each with its own spawned
//! store query. In-flight queries are never cancelled; whichever settles
//! later wins in the dashboard, in arrival order.

use super::core::EventSender;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::store::WorkoutStore;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// A single store query requested by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    /// Resolve the workout of the day for a date.
    Wod { date: chrono::NaiveDate },
    /// Resolve the recent-workouts list.
    Recent { limit: u32 },
}

/// Fetch worker that turns [`FetchRequest`]s into store queries and reports
/// the results back as events.
pub struct WodFetcher {
    store: Arc<dyn WorkoutStore>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
}

impl WodFetcher {
    pub fn new(store: Arc<dyn WorkoutStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Drains fetch requests until shutdown or until the request channel
    /// closes.
    pub async fn run(
        self,
        mut requests: mpsc::Receiver<FetchRequest>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        loop {
            tokio::select! {
                request = requests.recv() => match request {
                    Some(request) => self.dispatch(request),
                    None => break,
                },
                _ = shutdown.recv() => break,
            }
        }
    }

    /// Serve one request on its own task so a slow query never blocks the
    /// request channel.
    fn dispatch(&self, request: FetchRequest) {
        let store = self.store.clone();
        let event_sender = self.event_sender.clone();
        let classifier = self.classifier.clone();

        tokio::spawn(async move {
            match request {
                FetchRequest::Wod { date } => {
                    event_sender
                        .send_wod_event(
                            format!("Fetching workout of the day for {}...", date),
                            EventType::Refresh,
                            LogLevel::Info,
                        )
                        .await;

                    match store.wod_for_date(date).await {
                        Ok(workout) => {
                            event_sender.send_event(Event::wod_settled(date, workout)).await;
                        }
                        Err(e) => {
                            let log_level = classifier.classify_fetch_error(&e);
                            let facade_level: log::Level = log_level.into();
                            log::log!(facade_level, "Error fetching WOD: {}", e);
                            event_sender
                                .send_wod_event(
                                    format!("Error fetching WOD: {}", e),
                                    EventType::Error,
                                    log_level,
                                )
                                .await;
                        }
                    }
                }
                FetchRequest::Recent { limit } => {
                    event_sender
                        .send_recent_event(
                            format!("Fetching {} recent workouts...", limit),
                            EventType::Refresh,
                            LogLevel::Debug,
                        )
                        .await;

                    match store.recent_workouts(limit).await {
                        Ok(workouts) => {
                            event_sender.send_event(Event::recent_settled(workouts)).await;
                        }
                        Err(e) => {
                            let log_level = classifier.classify_fetch_error(&e);
                            let facade_level: log::Level = log_level.into();
                            log::log!(facade_level, "Error fetching recent workouts: {}", e);
                            event_sender
                                .send_recent_event(
                                    format!("Error fetching recent workouts: {}", e),
                                    EventType::Error,
                                    log_level,
                                )
                                .await;
                        }
                    }
                }
            }
        });
    }
}
