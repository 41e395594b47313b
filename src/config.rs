use std::env;
use std::path::{Path, PathBuf};

use crate::database::seed::default_activities;
use crate::database::ActivityDirectory;
use crate::error::ConfigError;
use crate::models::ActivityListing;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_path: None,
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `ACTIVITIES_SEED` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let seed_path = lookup("ACTIVITIES_SEED")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            static_dir,
            seed_path,
        })
    }

    /// Address to bind, and the one to try if that fails. No fallback past port 65535.
    pub fn bind_addrs(&self) -> (String, Option<String>) {
        (
            format!("{}:{}", self.host, self.port),
            self.port
                .checked_add(1)
                .map(|next| format!("{}:{}", self.host, next)),
        )
    }

    /// Builds the activity directory from the seed file, or the built-in activities.
    pub fn load_directory(&self) -> Result<ActivityDirectory, ConfigError> {
        let listing = match &self.seed_path {
            Some(path) => read_seed_file(path)?,
            None => default_activities(),
        };
        Ok(ActivityDirectory::from_seed(listing)?)
    }
}

fn read_seed_file(path: &Path) -> Result<ActivityListing, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}
