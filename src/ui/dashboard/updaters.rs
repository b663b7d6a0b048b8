//! Dashboard state update logic
//!
//! Contains the typed operations the UI invokes and the event handlers that
//! apply fetch results to state.

use super::state::{DashboardState, Page, RecentState, WodState};

use crate::consts::cli_consts::recent_workouts;
use crate::events::{Event as WorkerEvent, EventType, FetchPayload, Worker};
use crate::workers::fetcher::FetchRequest;
use crate::workout::CompletedExercise;
use chrono::NaiveDate;

impl DashboardState {
    /// Update the dashboard state with a new tick, draining queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.worker {
            Worker::WodFetcher => self.handle_wod_event(event),
            Worker::RecentFetcher => self.handle_recent_event(event),
        }
    }

    /// Apply a WOD fetch event. Settles arrive in resolution order; when
    /// fetches overlap, the later arrival wins.
    fn handle_wod_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::Success => {
                if let Some(FetchPayload::Wod { workout, .. }) = &event.payload {
                    self.set_wod(WodState::Loaded(workout.clone()));
                }
            }
            // A failed fetch still clears loading; no stale workout survives.
            EventType::Error => self.set_wod(WodState::Loaded(None)),
            EventType::Refresh => {}
        }
    }

    /// Apply a recent-list fetch event.
    fn handle_recent_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::Success => {
                if let Some(FetchPayload::Recent { workouts }) = &event.payload {
                    self.set_recent(RecentState::Loaded(workouts.clone()));
                    let len = self.recent_workouts().len();
                    self.recent_cursor = self.recent_cursor.min(len.saturating_sub(1));
                }
            }
            EventType::Error => self.set_recent(RecentState::Loaded(Vec::new())),
            EventType::Refresh => {}
        }
    }

    /// Typed date-selector contract: select a new date and queue exactly one
    /// WOD fetch keyed on it.
    pub fn on_date_change(&mut self, date: NaiveDate) {
        if date == self.selected_date {
            return;
        }
        self.selected_date = date;
        self.set_wod(WodState::Loading);
        self.queue_fetch(FetchRequest::Wod { date });
    }

    /// Typed recent-panel contract: the user completed these exercises.
    /// Replaces the completed list and forces a refetch.
    pub fn on_workout_complete(&mut self, completed: Vec<CompletedExercise>) {
        self.completed_exercises = completed;
        self.refresh();
    }

    /// Bump the refresh counter and refetch both the WOD and the recent
    /// list.
    pub fn refresh(&mut self) {
        self.bump_refresh_count();
        self.set_wod(WodState::Loading);
        self.queue_fetch(FetchRequest::Wod {
            date: self.selected_date,
        });
        self.queue_fetch(FetchRequest::Recent {
            limit: recent_workouts::PANEL_LIMIT,
        });
    }

    /// Move the recent-panel cursor down.
    pub fn recent_cursor_down(&mut self) {
        let len = self.recent_workouts().len();
        if len > 0 && self.recent_cursor + 1 < len {
            self.recent_cursor += 1;
        }
    }

    /// Move the recent-panel cursor up.
    pub fn recent_cursor_up(&mut self) {
        self.recent_cursor = self.recent_cursor.saturating_sub(1);
    }

    /// Mark every exercise of the workout under the cursor complete "now"
    /// and deliver the list through the completion contract.
    pub fn complete_selected_workout(&mut self) {
        let Some(workout) = self.selected_recent_workout() else {
            return;
        };
        let now = chrono::Local::now();
        let completed: Vec<CompletedExercise> = workout
            .workout_exercises
            .iter()
            .map(|we| CompletedExercise {
                exercise_id: we.exercise_id.clone(),
                completed_at: now,
            })
            .collect();
        self.on_workout_complete(completed);
    }

    /// Navigate to the workouts page (the WOD panel's link target).
    pub fn open_workouts_page(&mut self) {
        self.page = Page::Workouts;
    }

    /// Return from the workouts page to the overview.
    pub fn close_workouts_page(&mut self) {
        self.page = Page::Overview;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::Event;
    use crate::ui::app::UIConfig;
    use crate::workout::{Exercise, Workout, WorkoutExercise};
    use chrono::Local;
    use std::time::Instant;

    fn test_state(date: NaiveDate) -> DashboardState {
        DashboardState::new(
            Environment::Production,
            date,
            Instant::now(),
            UIConfig::new(false, false, None),
        )
    }

    fn leg_day(date: NaiveDate) -> Workout {
        let exercise = |id: &str, name: &str| WorkoutExercise {
            id: format!("we-{}", id),
            exercise_id: id.to_string(),
            exercise: Exercise {
                id: id.to_string(),
                name: name.to_string(),
                description: None,
            },
        };
        Workout {
            id: "w-1".to_string(),
            name: "Leg Day".to_string(),
            description: None,
            is_wod: true,
            scheduled_date: date,
            workout_exercises: vec![exercise("ex-1", "Squat"), exercise("ex-2", "Lunge")],
        }
    }

    fn drain_fetches(state: &mut DashboardState) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        while let Some(request) = state.take_fetch_request() {
            requests.push(request);
        }
        requests
    }

    #[test]
    /// Mounting starts in Loading and queues the initial WOD and recent
    /// fetches.
    fn test_mount_queues_initial_fetches() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = test_state(date);

        assert_eq!(*state.wod(), WodState::Loading);
        let requests = drain_fetches(&mut state);
        assert_eq!(
            requests,
            vec![
                FetchRequest::Wod { date },
                FetchRequest::Recent {
                    limit: recent_workouts::PANEL_LIMIT
                },
            ]
        );
    }

    #[test]
    /// A successful settle stores the workout; an empty settle stores none.
    fn test_wod_settle_applies_payload() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = test_state(date);
        let workout = leg_day(date);

        state.add_event(Event::wod_settled(date, Some(workout.clone())));
        state.update();
        assert_eq!(*state.wod(), WodState::Loaded(Some(workout)));

        state.add_event(Event::wod_settled(date, None));
        state.update();
        assert_eq!(*state.wod(), WodState::Loaded(None));
    }

    #[test]
    /// A failed fetch clears loading without leaving a stale workout.
    fn test_wod_error_settles_to_none() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = test_state(date);

        // A workout from a previous settle is on screen.
        state.add_event(Event::wod_settled(date, Some(leg_day(date))));
        state.update();

        state.add_event(Event::wod_fetcher_with_level(
            "Error fetching WOD: boom".to_string(),
            EventType::Error,
            crate::logging::LogLevel::Warn,
        ));
        state.update();

        assert_eq!(*state.wod(), WodState::Loaded(None));
        assert!(state.activity_logs.iter().any(|e| e.msg.contains("boom")));
    }

    #[test]
    /// Changing the date re-enters Loading and queues exactly one fetch
    /// keyed on the new date.
    fn test_date_change_queues_one_fetch() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = test_state(date);
        drain_fetches(&mut state);
        state.add_event(Event::wod_settled(date, Some(leg_day(date))));
        state.update();

        let next = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        state.on_date_change(next);

        assert_eq!(state.selected_date, next);
        assert_eq!(*state.wod(), WodState::Loading);
        assert_eq!(drain_fetches(&mut state), vec![FetchRequest::Wod { date: next }]);

        // Re-selecting the same date fetches nothing.
        state.on_date_change(next);
        assert!(drain_fetches(&mut state).is_empty());
    }

    #[test]
    /// Completing exercises replaces the completed list, bumps the refresh
    /// counter by exactly one, and refetches.
    fn test_workout_complete_bumps_refresh() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = test_state(date);
        drain_fetches(&mut state);

        let completed = vec![
            CompletedExercise {
                exercise_id: "ex-1".to_string(),
                completed_at: Local::now(),
            },
            CompletedExercise {
                exercise_id: "ex-2".to_string(),
                completed_at: Local::now(),
            },
        ];
        state.on_workout_complete(completed.clone());

        assert_eq!(state.completed_exercises, completed);
        assert_eq!(state.refresh_count(), 1);
        assert_eq!(*state.wod(), WodState::Loading);
        assert_eq!(
            drain_fetches(&mut state),
            vec![
                FetchRequest::Wod { date },
                FetchRequest::Recent {
                    limit: recent_workouts::PANEL_LIMIT
                },
            ]
        );
    }

    #[test]
    /// Completing the selected recent workout reports one completion per
    /// exercise.
    fn test_complete_selected_workout_reports_all_exercises() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = test_state(date);
        state.add_event(Event::recent_settled(vec![leg_day(date)]));
        state.update();

        state.complete_selected_workout();

        let ids: Vec<&str> = state
            .completed_exercises
            .iter()
            .map(|c| c.exercise_id.as_str())
            .collect();
        assert_eq!(ids, vec!["ex-1", "ex-2"]);
        assert_eq!(state.refresh_count(), 1);
    }

    #[test]
    /// When fetches overlap, whichever settle arrives last wins.
    fn test_later_settle_wins() {
        let date_a = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let date_b = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let mut state = test_state(date_a);

        state.add_event(Event::wod_settled(date_a, Some(leg_day(date_a))));
        state.add_event(Event::wod_settled(date_b, None));
        state.update();

        assert_eq!(*state.wod(), WodState::Loaded(None));
    }

    #[test]
    /// The recent cursor stays within bounds as the list shrinks.
    fn test_recent_cursor_clamped() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = test_state(date);
        state.add_event(Event::recent_settled(vec![leg_day(date), leg_day(date)]));
        state.update();

        state.recent_cursor_down();
        assert_eq!(state.recent_cursor, 1);
        state.recent_cursor_down();
        assert_eq!(state.recent_cursor, 1);

        state.add_event(Event::recent_settled(vec![leg_day(date)]));
        state.update();
        assert_eq!(state.recent_cursor, 0);

        state.recent_cursor_up();
        assert_eq!(state.recent_cursor, 0);
    }

    #[test]
    /// The workouts-page link navigates there and Esc-equivalent returns.
    fn test_workouts_page_navigation() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = test_state(date);

        assert_eq!(state.page, Page::Overview);
        state.open_workouts_page();
        assert_eq!(state.page, Page::Workouts);
        state.close_workouts_page();
        assert_eq!(state.page, Page::Overview);
    }
}
