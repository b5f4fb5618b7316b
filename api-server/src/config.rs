//! Server configuration
//!
//! All settings come from environment variables with sensible defaults,
//! so the server runs with no configuration at all against a local model.

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

use tm_core::ai::SuggestConfig;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted task list
    pub data_dir: PathBuf,
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Suggestion client settings
    pub suggest: SuggestConfig,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// - `TM_DATA_DIR` — data directory (default `.tm-data`)
    /// - `TM_LISTEN_ADDR` — bind address (default `0.0.0.0:8080`)
    /// - `TM_AI_BASE_URL` — OpenAI-compatible endpoint
    /// - `TM_AI_API_KEY` — bearer token, if required
    /// - `TM_AI_MODEL` — model name
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = std::env::var("TM_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".tm-data"));

        let listen_addr = std::env::var("TM_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid TM_LISTEN_ADDR")?;

        let mut suggest = SuggestConfig::default();
        if let Ok(base_url) = std::env::var("TM_AI_BASE_URL") {
            suggest.base_url = base_url;
        }
        if let Ok(api_key) = std::env::var("TM_AI_API_KEY") {
            suggest.api_key = Some(api_key);
        }
        if let Ok(model) = std::env::var("TM_AI_MODEL") {
            suggest.model = model;
        }

        Ok(Self {
            data_dir,
            listen_addr,
            suggest,
        })
    }
}
