use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::deck::SegmentationPolicy;

/// Environment prefix for every setting, e.g. `LYRICS_DATABASE_URL`.
pub const ENV_PREFIX: &str = "LYRICS_";

/// Runtime configuration, extracted once at startup and passed down explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Maximum accepted request body, in bytes. Background images travel inline.
    pub body_limit: usize,
    pub segmentation: SegmentationPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:lyrics.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            body_limit: 16 * 1024 * 1024,
            segmentation: SegmentationPolicy::default(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `LYRICS_*` environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }
}
