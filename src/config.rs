//! Environment-backed configuration

use anyhow::{Context, Result};
use std::env;

/// Bearer token for the TMDB API (a v4 read access token).
pub const TOKEN_ENV: &str = "TMDB_API_TOKEN";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_token = env::var(TOKEN_ENV)
            .with_context(|| format!("{TOKEN_ENV} not set"))?
            .trim()
            .to_string();
        if api_token.is_empty() {
            anyhow::bail!("{TOKEN_ENV} is empty");
        }
        Ok(Self { api_token })
    }
}
