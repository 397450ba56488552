use serde::{Deserialize, Serialize};
use std::io::{Error, ErrorKind};
use std::path::Path;

const fn request_timeout() -> u64 {
    3
}
const fn max_depth() -> usize {
    3
}
const fn rest_freshness_window() -> u64 {
    600
}
fn output_path() -> String {
    "endpoints.json".to_string()
}
fn registry_url() -> String {
    "https://raw.githubusercontent.com/cosmos/chain-registry/master".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlerConfig {
    #[serde(default = "request_timeout")]
    pub request_timeout: u64,
    #[serde(default = "max_depth")]
    pub max_depth: usize,
    #[serde(default = "rest_freshness_window")]
    pub rest_freshness_window: u64,
    #[serde(default = "output_path")]
    pub output_path: String,
    #[serde(default = "registry_url")]
    pub registry_url: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        CrawlerConfig {
            request_timeout: request_timeout(),
            max_depth: max_depth(),
            rest_freshness_window: rest_freshness_window(),
            output_path: output_path(),
            registry_url: registry_url(),
        }
    }
}

impl CrawlerConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::new(
                ErrorKind::InvalidData,
                format!("Failed to Parse Config {}: {}", path.display(), e),
            )
        })
    }
}
