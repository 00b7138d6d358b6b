//! Server configuration module.
//!
//! This module provides configuration loading for the API server from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `SPACE_API_MISSIONS_PATH`: Mission dataset CSV (default: `./material/Global_Space_Exploration_Dataset.csv`)
//! - `SPACE_API_GDP_PATH`: Optional wide-form GDP CSV; unset or empty disables the GDP join
//! - `SPACE_API_LISTEN_PORT`: Port to listen on (default: `5000`)
//!
//! # Invariants
//!
//! - `listen_port` is always a valid port number
//! - `gdp_path` is never an empty path

use std::path::PathBuf;

use crate::dataset::DatasetPaths;

const MISSIONS_PATH_VAR: &str = "SPACE_API_MISSIONS_PATH";
const GDP_PATH_VAR: &str = "SPACE_API_GDP_PATH";
const LISTEN_PORT_VAR: &str = "SPACE_API_LISTEN_PORT";

/// Server configuration.
///
/// # Post-conditions
///
/// When constructed via `from_env()`:
/// - `listen_port` parsed from a valid port number or defaulted
/// - `missions_path` is set (may not exist yet; loading reports that)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Mission dataset CSV.
    pub missions_path: PathBuf,
    /// Wide-form GDP CSV. When set, the bubble chart joins GDP values.
    pub gdp_path: Option<PathBuf>,
    /// Port to listen on.
    pub listen_port: u16,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 5000;
    /// Default mission dataset location.
    pub const DEFAULT_MISSIONS_PATH: &'static str =
        "./material/Global_Space_Exploration_Dataset.csv";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SPACE_API_LISTEN_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let missions_path = lookup(MISSIONS_PATH_VAR)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(Self::DEFAULT_MISSIONS_PATH), PathBuf::from);
        let gdp_path = lookup(GDP_PATH_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let listen_port = match lookup(LISTEN_PORT_VAR) {
            Some(value) => parse_port(&value)?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self {
            missions_path,
            gdp_path,
            listen_port,
        })
    }

    /// Dataset files named by this configuration.
    #[must_use]
    pub fn dataset_paths(&self) -> DatasetPaths {
        DatasetPaths {
            missions: self.missions_path.clone(),
            gdp: self.gdp_path.clone(),
        }
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidValue {
            name: LISTEN_PORT_VAR.to_string(),
            message: format!("'{value}' is not a valid port number (must be 1-65535)"),
        }),
    }
}
