// src/config.rs
use reqwest::Url;
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    api_base: String,
    seed_location: String,
    template_path: Option<PathBuf>,
    request_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_api_base() -> String {
    "http://localhost:3000".into()
}

fn default_seed_location() -> String {
    "./data/hackerIpsum.json".into()
}

fn default_request_timeout() -> u64 {
    20
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("ARTICLES_API_BASE").unwrap_or_else(default_api_base);
        let parsed = Url::parse(&api_base)
            .map_err(|err| ConfigError::Invalid(format!("ARTICLES_API_BASE `{api_base}`: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(
                "ARTICLES_API_BASE must be an http or https url".into(),
            ));
        }

        let seed_location = lookup("ARTICLES_SEED_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_seed_location);

        let template_path = lookup("ARTICLE_TEMPLATE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("REQUEST_TIMEOUT_SECS must be whole seconds, got `{value}`"))
            })?,
            None => default_request_timeout(),
        };
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "REQUEST_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }

        Ok(Self {
            api_base,
            seed_location,
            template_path,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// File path or `http(s)://` url of the seed dataset.
    pub fn seed_location(&self) -> &str {
        &self.seed_location
    }

    pub fn template_path(&self) -> Option<&PathBuf> {
        self.template_path.as_ref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
