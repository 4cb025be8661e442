//! Runtime configuration.
//!
//! The backend address is injected into the API client at construction rather
//! than read from a hard-coded constant. Sources, highest precedence first:
//! the `--api-url` flag, the `ROOMBOOK_API_URL` environment variable,
//! `config.toml` in the platform config dir, then the built-in default.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:5050";
const ENV_API_URL: &str = "ROOMBOOK_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

/// On-disk layout of `<config_dir>/roombook/config.toml`.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_base_url: Option<String>,
}

impl Config {
    pub fn load(cli_api_url: Option<String>) -> Result<Self> {
        let file = read_file_config()?;
        let env_url = env::var(ENV_API_URL).ok().filter(|v| !v.is_empty());
        Ok(Self::resolve(cli_api_url, env_url, file))
    }

    fn resolve(cli: Option<String>, env_var: Option<String>, file: FileConfig) -> Self {
        let url = cli
            .or(env_var)
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            // Tolerate a trailing slash; paths are joined with one.
            api_base_url: url.trim_end_matches('/').to_string(),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roombook").join("config.toml"))
}

fn read_file_config() -> Result<FileConfig> {
    let Some(path) = config_path() else {
        return Ok(FileConfig::default());
    };
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}
