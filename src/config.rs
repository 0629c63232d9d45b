//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_RIDES_GOAL: u32 = 10;
const DEFAULT_CARBON_GOAL_KG: f64 = 200.0;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// JSON file of user summaries to load at startup
    pub seed_file: Option<PathBuf>,

    // --- Profile goals ---
    /// Total rides goal shown on profiles
    pub rides_goal: u32,
    /// Carbon savings goal shown on profiles (kg)
    pub carbon_goal_kg: f64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            port: 8080,
            seed_file: None,
            rides_goal: DEFAULT_RIDES_GOAL,
            carbon_goal_kg: DEFAULT_CARBON_GOAL_KG,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            port: parse_var("PORT", 8080)?,
            seed_file: env::var("SEED_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            rides_goal: parse_var("RIDES_GOAL", DEFAULT_RIDES_GOAL)?,
            carbon_goal_kg: parse_var("CARBON_GOAL_KG", DEFAULT_CARBON_GOAL_KG)?,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
