//! Sweep configuration. Every field has a default; the defaults give the
//! published chart setup (T=2, R=1, P=0, n in 2..=39, seed 0).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::equilibrium::{check_distance, Payoffs};
use crate::parallel::WorkerPool;
use crate::sampling::TruncatedNormal;

pub const DEFAULT_SWEEP_CONFIG_PATH: &str = "data/sweep.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub payoffs: Payoffs,
    pub min_players: u32,
    /// Inclusive upper bound of the player sweep.
    pub max_players: u32,
    pub social_distances: Vec<f64>,
    pub gaussian_means: Vec<f64>,
    pub gaussian_std_devs: Vec<f64>,
    pub seed: u64,
    /// 1 keeps the single-draw Gaussian estimate; more averages independent draws.
    pub trials: u32,
    /// 0 uses every core.
    pub workers: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            payoffs: Payoffs::default(),
            min_players: 2,
            max_players: 39,
            social_distances: vec![0.0, 0.25, 0.5, 0.75],
            gaussian_means: vec![0.25, 0.75],
            gaussian_std_devs: vec![0.25, 0.5],
            seed: 0,
            trials: 1,
            workers: 0,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.payoffs
            .validate()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if self.min_players < 2 {
            return Err(ConfigError::Invalid(format!(
                "min_players must be at least 2, got {}",
                self.min_players
            )));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::Invalid(format!(
                "max_players ({}) is below min_players ({})",
                self.max_players, self.min_players
            )));
        }
        for &distance in self.social_distances.iter().chain(self.gaussian_means.iter()) {
            check_distance(distance).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        }
        for &std_dev in &self.gaussian_std_devs {
            TruncatedNormal::new(0.5, std_dev).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        }
        if self.trials == 0 {
            return Err(ConfigError::Invalid("trials must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn player_range(&self) -> std::ops::RangeInclusive<u32> {
        self.min_players..=self.max_players
    }

    /// Builds the thread pool; call once per run and share the result.
    pub fn worker_pool(&self) -> WorkerPool {
        WorkerPool::with_workers(self.workers)
    }
}

pub fn parse_sweep_config(raw: &str) -> Result<SweepConfig, ConfigError> {
    let config: SweepConfig = serde_yaml::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a YAML sweep config.
pub fn load_sweep_config(path: impl AsRef<Path>) -> Result<SweepConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_sweep_config(&raw)
}
