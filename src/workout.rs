//! Workout domain model
//!
//! Transient, read-only copies of workout rows owned by the remote store,
//! plus the in-memory completion records produced by the UI.

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An exercise definition, as stored in the `exercises` table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Join row linking a workout to an exercise definition. Only ever appears
/// nested under a [`Workout`] fetch result.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: String,
    pub exercise_id: String,
    pub exercise: Exercise,
}

/// A named, dated exercise session with zero or more exercises.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_wod: bool,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub workout_exercises: Vec<WorkoutExercise>,
}

impl Display for Workout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} exercises)",
            self.name,
            self.scheduled_date,
            self.workout_exercises.len()
        )
    }
}

/// Transient record of the user finishing an exercise at a given time.
/// Held only in view state, never persisted by this client.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CompletedExercise {
    pub exercise_id: String,
    pub completed_at: DateTime<Local>,
}

/// Returns the Monday that starts the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Buckets completions into the Monday-based week starting at `start`.
/// Index 0 is Monday, index 6 is Sunday; completions outside the week are
/// ignored.
pub fn completions_by_weekday(completed: &[CompletedExercise], start: NaiveDate) -> [usize; 7] {
    let mut counts = [0usize; 7];
    let end = start + chrono::Duration::days(7);
    for entry in completed {
        let date = entry.completed_at.date_naive();
        if date >= start && date < end {
            counts[date.weekday().num_days_from_monday() as usize] += 1;
        }
    }
    counts
}

/// Short display name for a weekday index as used by the weekly panel.
pub fn weekday_label(index: usize) -> &'static str {
    match index {
        0 => "Mon",
        1 => "Tue",
        2 => "Wed",
        3 => "Thu",
        4 => "Fri",
        5 => "Sat",
        _ => "Sun",
    }
}
