//! Workout Store Client
//!
//! A client for the hosted workout store, speaking its PostgREST-style REST
//! dialect: column filters as query parameters and nested selects for join
//! rows.

use crate::consts::cli_consts::{DATE_FORMAT, store};
use crate::environment::Environment;
use crate::store::WorkoutStore;
use crate::store::error::StoreError;
use crate::workout::Workout;
use chrono::NaiveDate;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("wodboard/", env!("CARGO_PKG_VERSION"));

/// Nested select clause: workout rows with their join rows and each join
/// row's exercise definition.
const WORKOUT_SELECT: &str = "*,workout_exercises(*,exercise:exercises(*))";

#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    environment: Environment,
    api_key: Option<String>,
}

impl StoreClient {
    pub fn new(environment: Environment, api_key: Option<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(store::connect_timeout())
                .timeout(store::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            api_key,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.environment.store_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, StoreError> {
        if !response.status().is_success() {
            return Err(StoreError::from_response(response).await);
        }
        Ok(response)
    }

    /// GET a filtered row set from the store and decode it as JSON.
    async fn get_rows(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Workout>, StoreError> {
        let url = self.build_url(endpoint);
        let mut request = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(query);
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await?;
        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        let rows: Vec<Workout> = serde_json::from_slice(&body)?;
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl WorkoutStore for StoreClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn wod_for_date(&self, date: NaiveDate) -> Result<Option<Workout>, StoreError> {
        let formatted = date.format(DATE_FORMAT).to_string();
        let rows = self
            .get_rows(
                "workouts",
                &[
                    ("select", WORKOUT_SELECT.to_string()),
                    ("is_wod", "eq.true".to_string()),
                    ("scheduled_date", format!("eq.{}", formatted)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn recent_workouts(&self, limit: u32) -> Result<Vec<Workout>, StoreError> {
        self.get_rows(
            "workouts",
            &[
                ("select", WORKOUT_SELECT.to_string()),
                ("order", "scheduled_date.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_base_and_endpoint() {
        let client = StoreClient::new(
            Environment::Custom {
                store_url: "https://example.com/".to_string(),
            },
            None,
        );
        assert_eq!(
            client.build_url("/workouts"),
            "https://example.com/rest/v1/workouts"
        );
        assert_eq!(
            client.build_url("workouts"),
            "https://example.com/rest/v1/workouts"
        );
    }

    #[tokio::test]
    #[ignore] // This test requires a live store instance.
    /// Should fetch the WOD for today from the live store.
    async fn test_live_wod_for_date() {
        let client = StoreClient::new(Environment::Local, None);
        let today = chrono::Local::now().date_naive();
        match client.wod_for_date(today).await {
            Ok(Some(workout)) => println!("WOD: {}", workout),
            Ok(None) => println!("No workout scheduled for {}", today),
            Err(e) => panic!("Failed to fetch WOD: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live store instance.
    /// Should fetch the recent workouts list from the live store.
    async fn test_live_recent_workouts() {
        let client = StoreClient::new(Environment::Local, None);
        match client.recent_workouts(5).await {
            Ok(workouts) => {
                for workout in workouts {
                    println!("{}", workout);
                }
            }
            Err(e) => panic!("Failed to fetch recent workouts: {}", e),
        }
    }
}
