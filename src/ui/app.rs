//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui as ui_consts;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::state::Page;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::fetcher::FetchRequest;
use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub update_available: bool,
    pub latest_version: Option<String>,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        update_available: bool,
        latest_version: Option<String>,
    ) -> Self {
        Self {
            with_background_color,
            update_available,
            latest_version,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the WOD and summary panels.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The date the dashboard mounts with.
    start_date: NaiveDate,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from the fetch worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Forwards fetch requests to the fetch worker.
    fetch_sender: mpsc::Sender<FetchRequest>,

    /// Broadcasts shutdown signal to worker threads.
    shutdown_sender: broadcast::Sender<()>,

    /// Whether to disable background colors
    with_background_color: bool,

    /// Whether a version update is available.
    version_update_available: bool,

    /// Latest version available, if any.
    latest_version: Option<String>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        start_date: NaiveDate,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        fetch_sender: mpsc::Sender<FetchRequest>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            start_date,
            current_screen: Screen::Splash,
            event_receiver,
            fetch_sender,
            shutdown_sender,
            with_background_color: ui_config.with_background_color,
            version_update_available: ui_config.update_available,
            latest_version: ui_config.latest_version,
        }
    }

    fn ui_config(&self) -> UIConfig {
        UIConfig::new(
            self.with_background_color,
            self.version_update_available,
            self.latest_version.clone(),
        )
    }

    /// Mount the dashboard. Its initial fetches are queued by the state
    /// constructor and forwarded on the next loop pass.
    fn mount_dashboard(&mut self) {
        let state = DashboardState::new(
            self.environment.clone(),
            self.start_date,
            self.start_time,
            self.ui_config(),
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            // Add event to dashboard queue if it exists
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state and forward queued fetch requests to the worker
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
            while let Some(request) = state.take_fetch_request() {
                let _ = app.fetch_sender.try_send(request);
            }
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= ui_consts::splash_duration() {
                app.mount_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui_consts::key_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Esc leaves the workouts page before it means quit
                if key.code == KeyCode::Esc {
                    if let Screen::Dashboard(state) = &mut app.current_screen {
                        if state.page == Page::Workouts {
                            state.close_workouts_page();
                            continue;
                        }
                    }
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    // Send shutdown signal to workers
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.mount_dashboard();
                    }
                    Screen::Dashboard(state) => match key.code {
                        KeyCode::Left => {
                            let date = state.selected_date - chrono::Duration::days(1);
                            state.on_date_change(date);
                        }
                        KeyCode::Right => {
                            let date = state.selected_date + chrono::Duration::days(1);
                            state.on_date_change(date);
                        }
                        KeyCode::Char('t') | KeyCode::Char('T') => {
                            state.on_date_change(chrono::Local::now().date_naive());
                        }
                        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Down => {
                            state.recent_cursor_down();
                        }
                        KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Up => {
                            state.recent_cursor_up();
                        }
                        KeyCode::Char('c') | KeyCode::Char('C') => {
                            state.complete_selected_workout();
                        }
                        KeyCode::Char('w') | KeyCode::Char('W') => {
                            state.open_workouts_page();
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
