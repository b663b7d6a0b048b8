pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard
    //! client, organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffer size for events flowing from the fetch worker to the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum buffer size for fetch requests flowing from the UI to the worker.
    pub const FETCH_QUEUE_SIZE: usize = 32;

    // =============================================================================
    // STORE CONFIGURATION
    // =============================================================================

    /// Date format used for the store's `scheduled_date` column.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Store request timeout configuration.
    pub mod store {
        use std::time::Duration;

        /// Connect timeout for store requests (milliseconds).
        pub const CONNECT_TIMEOUT_MS: u64 = 10_000;

        /// Total request timeout for store requests (milliseconds).
        pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

        /// Helper function to get the connect timeout.
        pub const fn connect_timeout() -> Duration {
            Duration::from_millis(CONNECT_TIMEOUT_MS)
        }

        /// Helper function to get the request timeout.
        pub const fn request_timeout() -> Duration {
            Duration::from_millis(REQUEST_TIMEOUT_MS)
        }
    }

    // =============================================================================
    // PANEL CONFIGURATION
    // =============================================================================

    /// Recent-workouts panel configuration.
    pub mod recent_workouts {
        /// How many workouts the recent-workouts panel requests from the store.
        pub const PANEL_LIMIT: u32 = 5;
    }

    // =============================================================================
    // UI TIMING
    // =============================================================================

    /// UI loop timing configuration.
    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen is shown before the dashboard mounts
        /// (milliseconds).
        pub const SPLASH_DURATION_MS: u64 = 2_000;

        /// Key event poll interval for the UI loop (milliseconds).
        pub const KEY_POLL_INTERVAL_MS: u64 = 100;

        /// Helper function to get the splash duration.
        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        /// Helper function to get the key poll interval.
        pub const fn key_poll_interval() -> Duration {
            Duration::from_millis(KEY_POLL_INTERVAL_MS)
        }
    }
}
