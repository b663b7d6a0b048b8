use crate::environment::Environment;
use crate::store::error::StoreError;
use crate::workout::Workout;
use chrono::NaiveDate;

pub(crate) mod client;
pub use client::StoreClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Query capability of the hosted workout store. The dashboard only reads;
/// all writes happen elsewhere.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait WorkoutStore: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the workout of the day for the given date, with its nested
    /// exercises. The store enforces that at most one workout is the WOD
    /// for a date; this returns the limit-1 result as-is.
    async fn wod_for_date(&self, date: NaiveDate) -> Result<Option<Workout>, StoreError>;

    /// Fetch the most recently scheduled workouts, newest first, with their
    /// nested exercises.
    async fn recent_workouts(&self, limit: u32) -> Result<Vec<Workout>, StoreError>;
}
