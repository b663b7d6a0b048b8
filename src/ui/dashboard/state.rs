//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, recent_workouts};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;
use crate::workers::fetcher::FetchRequest;
use crate::workout::{CompletedExercise, Workout};
use chrono::NaiveDate;

use std::collections::VecDeque;
use std::time::Instant;

/// State of the workout-of-the-day fetch. `Loading` is the only initial
/// state; every settle (success, empty, or error) lands in `Loaded`, so
/// stale data never survives a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WodState {
    Loading,
    Loaded(Option<Workout>),
}

/// State of the recent-workouts panel. Panel-local: `Loading` here never
/// blanks the whole dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentState {
    Loading,
    Loaded(Vec<Workout>),
}

/// Which full-frame page the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The dashboard overview with all panels.
    Overview,
    /// The workouts page reached from the WOD panel link.
    Workouts,
}

/// Dashboard state: selected date, fetch state unions, completions, and the
/// activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The date the WOD panel is showing.
    pub selected_date: NaiveDate,
    /// Current page being displayed.
    pub page: Page,
    /// Cursor into the recent-workouts list.
    pub recent_cursor: usize,
    /// Exercises the user completed, as reported by the recent panel.
    pub completed_exercises: Vec<CompletedExercise>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether a new version is available.
    pub update_available: bool,
    /// The latest version string, if known.
    pub latest_version: Option<String>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Current WOD fetch state.
    wod: WodState,
    /// Current recent-workouts fetch state.
    recent: RecentState,
    /// Monotonically incremented on every completion-driven refresh.
    refresh_count: u64,
    /// Fetch requests waiting to be forwarded to the worker.
    pending_fetches: VecDeque<FetchRequest>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state. Mounting queues the
    /// initial WOD and recent-workouts fetches.
    pub fn new(
        environment: Environment,
        start_date: NaiveDate,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        let mut pending_fetches = VecDeque::new();
        pending_fetches.push_back(FetchRequest::Wod { date: start_date });
        pending_fetches.push_back(FetchRequest::Recent {
            limit: recent_workouts::PANEL_LIMIT,
        });

        Self {
            environment,
            start_time,
            selected_date: start_date,
            page: Page::Overview,
            recent_cursor: 0,
            completed_exercises: Vec::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            update_available: ui_config.update_available,
            latest_version: ui_config.latest_version,
            with_background_color: ui_config.with_background_color,
            tick: 0,
            wod: WodState::Loading,
            recent: RecentState::Loading,
            refresh_count: 0,
            pending_fetches,
        }
    }

    // Getter methods for private fields
    pub fn wod(&self) -> &WodState {
        &self.wod
    }

    pub fn recent(&self) -> &RecentState {
        &self.recent
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    // Setter methods for private fields (for updaters)
    pub fn set_wod(&mut self, state: WodState) {
        self.wod = state;
    }

    pub fn set_recent(&mut self, state: RecentState) {
        self.recent = state;
    }

    pub fn bump_refresh_count(&mut self) {
        self.refresh_count += 1;
    }

    /// The workouts currently shown by the recent panel.
    pub fn recent_workouts(&self) -> &[Workout] {
        match &self.recent {
            RecentState::Loading => &[],
            RecentState::Loaded(workouts) => workouts,
        }
    }

    /// The workout under the recent-panel cursor, if any.
    pub fn selected_recent_workout(&self) -> Option<&Workout> {
        self.recent_workouts().get(self.recent_cursor)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Queue a fetch request for the app loop to forward to the worker.
    pub fn queue_fetch(&mut self, request: FetchRequest) {
        self.pending_fetches.push_back(request);
    }

    /// Take the next queued fetch request, if any.
    pub fn take_fetch_request(&mut self) -> Option<FetchRequest> {
        self.pending_fetches.pop_front()
    }
}
