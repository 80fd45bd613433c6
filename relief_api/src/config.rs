use std::path::PathBuf;

use anyhow::Context;
use relief_core::{
    constants::{ACCESS_WEIGHT, PEOPLE_WEIGHT, SEVERITY_WEIGHT},
    priority::priority_weights::PriorityWeights,
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Snapshot file loaded into the store at startup.
    pub seed_file: Option<PathBuf>,
    pub weights: PriorityWeights,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("RELIEF_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("RELIEF_PORT is not a valid port: {port}"))?,
            None => DEFAULT_PORT,
        };

        let weight = |key: &str, default: f64| -> anyhow::Result<f64> {
            match lookup(key) {
                Some(value) => value
                    .parse()
                    .with_context(|| format!("{key} is not a number: {value}")),
                None => Ok(default),
            }
        };

        let weights = PriorityWeights::new(
            weight("RELIEF_SEVERITY_WEIGHT", SEVERITY_WEIGHT)?,
            weight("RELIEF_PEOPLE_WEIGHT", PEOPLE_WEIGHT)?,
            weight("RELIEF_ACCESS_WEIGHT", ACCESS_WEIGHT)?,
        )?;

        Ok(ApiConfig {
            host: lookup("RELIEF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_file: lookup("RELIEF_SEED_FILE").map(PathBuf::from),
            weights,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
