//! Simplified runtime for coordinating the fetch worker

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, FETCH_QUEUE_SIZE};
use crate::events::Event;
use crate::store::WorkoutStore;
use crate::workers::core::EventSender;
use crate::workers::fetcher::{FetchRequest, WodFetcher};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the fetch worker. Returns the request sender the UI dispatches
/// fetches on, the event receiver it drains, and the worker handle.
pub fn start_fetch_worker(
    store: Arc<dyn WorkoutStore>,
    shutdown: broadcast::Receiver<()>,
) -> (
    mpsc::Sender<FetchRequest>,
    mpsc::Receiver<Event>,
    Vec<JoinHandle<()>>,
) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (request_sender, request_receiver) = mpsc::channel::<FetchRequest>(FETCH_QUEUE_SIZE);

    let fetcher = WodFetcher::new(store, EventSender::new(event_sender));
    let handle = tokio::spawn(fetcher.run(request_receiver, shutdown));

    (request_sender, event_receiver, vec![handle])
}
