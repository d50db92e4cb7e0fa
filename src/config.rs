use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Result, UserError};

pub const BASE_URL_ENV: &str = "USERS_API_URL";

#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| UserError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| UserError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "users")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserError::NoConfigDir)
    }

    /// Get the API base URL: explicit flag, then env var, then config file
    pub fn base_url(&self, explicit: Option<&str>) -> Result<String> {
        pick_base_url(
            explicit,
            std::env::var(BASE_URL_ENV).ok(),
            self.base_url.as_deref(),
        )
    }
}

fn pick_base_url(explicit: Option<&str>, env: Option<String>, file: Option<&str>) -> Result<String> {
    explicit
        .map(String::from)
        .or(env)
        .or_else(|| file.map(String::from))
        .filter(|url| !url.trim().is_empty())
        .ok_or(UserError::MissingBaseUrl)
}
