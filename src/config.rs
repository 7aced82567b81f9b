use std::env;

use anyhow::{bail, Result};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a sensible default — Ember runs with no configuration at all.
pub struct Config {
    /// Messages scoring at or above this threshold are flagged in the
    /// terminal report (EMBER_SPAM_THRESHOLD, default 0.5).
    pub spam_threshold: f64,
    /// Upper bound on batch size, since scoring is O(N²) over the batch
    /// (EMBER_MAX_BATCH, default 10000).
    pub max_batch: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        let spam_threshold = match env::var("EMBER_SPAM_THRESHOLD") {
            Ok(raw) => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("EMBER_SPAM_THRESHOLD is not a number: {raw}"))?;
                if !(0.0..=1.0).contains(&value) {
                    bail!("EMBER_SPAM_THRESHOLD must be between 0.0 and 1.0, got {value}");
                }
                value
            }
            Err(_) => 0.5,
        };

        let max_batch = match env::var("EMBER_MAX_BATCH") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("EMBER_MAX_BATCH is not a number: {raw}"))?,
            Err(_) => 10_000,
        };

        Ok(Self {
            spam_threshold,
            max_batch,
        })
    }
}
