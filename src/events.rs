//! Event System
//!
//! Types and implementations for worker events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::workout::Workout;
use chrono::{Local, NaiveDate};
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker queries that resolve the workout of the day for a date.
    WodFetcher,
    /// Worker queries that resolve the recent-workouts list.
    RecentFetcher,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Typed result data carried by fetch settle events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPayload {
    /// The WOD query for `date` settled with zero or one matching workout.
    Wod {
        date: NaiveDate,
        workout: Option<Workout>,
    },
    /// The recent-workouts query settled with the returned rows, in store
    /// order.
    Recent { workouts: Vec<Workout> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Typed result data for settle events.
    pub payload: Option<FetchPayload>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    pub fn wod_fetcher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::WodFetcher, msg, event_type, log_level)
    }

    pub fn recent_fetcher_with_level(
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Worker::RecentFetcher, msg, event_type, log_level)
    }

    /// Successful WOD settle: zero or one workout for the given date.
    pub fn wod_settled(date: NaiveDate, workout: Option<Workout>) -> Self {
        let msg = match &workout {
            Some(w) => format!("Workout of the day for {}: {}", date, w.name),
            None => format!("No workout scheduled for {}", date),
        };
        let mut event = Self::new(Worker::WodFetcher, msg, EventType::Success, LogLevel::Info);
        event.payload = Some(FetchPayload::Wod { date, workout });
        event
    }

    /// Successful recent-list settle.
    pub fn recent_settled(workouts: Vec<Workout>) -> Self {
        let msg = format!("Loaded {} recent workouts", workouts.len());
        let mut event = Self::new(
            Worker::RecentFetcher,
            msg,
            EventType::Success,
            LogLevel::Debug,
        );
        event.payload = Some(FetchPayload::Recent { workouts });
        event
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wod_settled_carries_payload() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let event = Event::wod_settled(date, None);
        assert_eq!(event.worker, Worker::WodFetcher);
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(
            event.payload,
            Some(FetchPayload::Wod {
                date,
                workout: None
            })
        );
        assert!(event.msg.contains("2024-06-02"));
    }

    #[test]
    fn test_error_events_always_display() {
        let event = Event::wod_fetcher_with_level(
            "fetch failed".to_string(),
            EventType::Error,
            LogLevel::Error,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_format() {
        let event = Event::recent_fetcher_with_level(
            "Loaded 3 recent workouts".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success ["));
        assert!(rendered.ends_with("Loaded 3 recent workouts"));
    }
}
