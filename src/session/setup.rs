//! Session setup and initialization

use crate::config::Config;
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_fetch_worker;
use crate::store::StoreClient;
use crate::workers::fetcher::FetchRequest;
use chrono::NaiveDate;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Sender for fetch requests to the worker
    pub fetch_sender: mpsc::Sender<FetchRequest>,
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// The environment the session talks to
    pub environment: Environment,
    /// The date the dashboard mounts with
    pub start_date: NaiveDate,
}

/// Sets up a dashboard session
///
/// This function handles the common setup required for both TUI and
/// headless modes:
/// 1. Creates the store client (with credentials, when configured)
/// 2. Sets up the shutdown channel
/// 3. Starts the fetch worker
/// 4. Returns session data for mode-specific handling
///
/// # Arguments
/// * `config` - Optional saved credentials for the store
/// * `env` - Environment to connect to
/// * `start_date` - The date the dashboard mounts with
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub async fn setup_session(
    config: Option<Config>,
    env: Environment,
    start_date: NaiveDate,
) -> Result<SessionData, Box<dyn Error>> {
    let api_key = config.map(|c| c.api_key);
    let store = Arc::new(StoreClient::new(env.clone(), api_key));

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (fetch_sender, event_receiver, join_handles) =
        start_fetch_worker(store, shutdown_sender.subscribe());

    Ok(SessionData {
        fetch_sender,
        event_receiver,
        join_handles,
        shutdown_sender,
        environment: env,
        start_date,
    })
}
