use reqwest::Url;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_WINDOW_TITLE: &str = "userbook";

const USERS_URL_VAR: &str = "USERBOOK_USERS_URL";
const DARK_MODE_VAR: &str = "USERBOOK_DARK_MODE";
const WINDOW_TITLE_VAR: &str = "USERBOOK_WINDOW_TITLE";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be true or false, got: {value}")]
    InvalidBool { var: &'static str, value: String },
}

/// Application configuration
/// In debug builds a .env file is loaded into the environment first
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Endpoint returning the JSON array of users
    pub users_url: String,
    /// Start with the dark theme selected
    pub dark_mode: bool,
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            dark_mode: false,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                tracing::debug!("No .env file found");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        info!("Users endpoint: {}", config.users_url);
        Ok(config)
    }

    /// Build a config from any key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let users_url = match lookup(USERS_URL_VAR) {
            Some(value) => {
                Url::parse(&value).map_err(|_| ConfigError::InvalidUrl {
                    var: USERS_URL_VAR,
                    value: value.clone(),
                })?;
                value
            }
            None => defaults.users_url,
        };

        let dark_mode = match lookup(DARK_MODE_VAR) {
            Some(value) => parse_bool(DARK_MODE_VAR, &value)?,
            None => defaults.dark_mode,
        };

        let window_title = lookup(WINDOW_TITLE_VAR).unwrap_or(defaults.window_title);

        Ok(Self {
            users_url,
            dark_mode,
            window_title,
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
