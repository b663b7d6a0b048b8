mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod runtime;
mod session;
mod store;
mod ui;
mod version;
mod workers;
mod workout;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::DATE_FORMAT;
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::store::{StoreClient, WorkoutStore};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Date to open the dashboard on, as YYYY-MM-DD. Defaults to today.
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Run without the terminal UI, logging events to the console.
        #[arg(long)]
        headless: bool,

        /// Disable background colors in the terminal UI.
        #[arg(long)]
        no_background: bool,
    },
    /// Validate an API key against the workout store and save it.
    Login {
        /// Workout store API key.
        #[arg(long, value_name = "API_KEY")]
        api_key: String,

        /// User ID to associate with the saved credentials.
        #[arg(long, value_name = "USER_ID", default_value = "")]
        user_id: String,
    },
    /// Clear the saved credentials and logout.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let wodboard_environment_str = std::env::var("WODBOARD_ENVIRONMENT").unwrap_or_default();
    let environment = wodboard_environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            date,
            headless,
            no_background,
        } => {
            let start_date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, DATE_FORMAT)
                    .map_err(|e| format!("Invalid --date {:?}: {}", raw, e))?,
                None => chrono::Local::now().date_naive(),
            };

            // Credentials are optional; public stores answer without them.
            let config = config_path
                .exists()
                .then(|| Config::load_from_file(&config_path).ok())
                .flatten();

            let session = setup_session(config, environment, start_date).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background).await
            }
        }
        Command::Login { api_key, user_id } => {
            print_cmd_info!(
                "Login",
                "Validating API key against environment: {:?}",
                environment
            );
            let client = StoreClient::new(environment.clone(), Some(api_key.clone()));
            match client.recent_workouts(1).await {
                Ok(_) => {
                    let config = Config::new(user_id, api_key);
                    config
                        .save(&config_path)
                        .map_err(|e| format!("Failed to save config: {}", e))?;
                    print_cmd_success!("Login", "Credentials saved to {}", config_path.display());
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Login failed", &e.to_string());
                    Err(e.into())
                }
            }
        }
        Command::Logout => {
            println!("Logging out and clearing wodboard configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
