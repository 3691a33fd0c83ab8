//! Player-count sweeps over the equilibrium formulas.
//!
//! A sweep produces three families of series, one per published chart.
//! Points that fail to evaluate are recorded as skipped instead of
//! aborting the sweep.

pub mod families;

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, SweepConfig};
use crate::equilibrium::{EquilibriumResult, Payoffs};
use crate::parallel::WorkerPool;
use crate::report::{export_report, ReportError};

pub use families::{
    at_least_one_family, gaussian_family, n_player_family, AT_LEAST_ONE_FAMILY, GAUSSIAN_FAMILY,
    N_PLAYER_FAMILY,
};

pub const CLASSIC_LABEL: &str = "Classic";
pub const X_LABEL: &str = "Number of players";

#[derive(Error, Debug)]
pub enum SweepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub players: u32,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedPoint {
    pub series: String,
    pub players: u32,
    pub reason: String,
}

/// One chart worth of series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyReport {
    pub name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub skipped: Vec<SkippedPoint>,
}

impl FamilyReport {
    fn new(name: &str, title: &str, y_label: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn push(&mut self, (series, skipped): (Series, Vec<SkippedPoint>)) {
        self.series.push(series);
        self.skipped.extend(skipped);
    }

    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub generated_at: String,
    pub payoffs: Payoffs,
    pub seed: u64,
    pub trials: u32,
    pub families: Vec<FamilyReport>,
}

impl SweepReport {
    pub fn family(&self, name: &str) -> Option<&FamilyReport> {
        self.families.iter().find(|family| family.name == name)
    }

    pub fn skipped_count(&self) -> usize {
        self.families.iter().map(|family| family.skipped.len()).sum()
    }
}

/// Evaluate all three families for `config`.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepReport, SweepError> {
    config.validate()?;
    let players: Vec<u32> = config.player_range().collect();
    let pool = config.worker_pool();

    let families = vec![
        n_player_family(config, &players, &pool),
        at_least_one_family(config, &players, &pool),
        gaussian_family(config, &players, &pool),
    ];

    let report = SweepReport {
        generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        payoffs: config.payoffs,
        seed: config.seed,
        trials: config.trials,
        families,
    };
    if report.skipped_count() > 0 {
        tracing::warn!(skipped = report.skipped_count(), "sweep finished with skipped points");
    }
    Ok(report)
}

/// [run_sweep] then [export_report] into `dir`.
pub fn run_sweep_to_dir(config: &SweepConfig, dir: impl AsRef<Path>) -> Result<SweepReport, SweepError> {
    let report = run_sweep(config)?;
    export_report(&report, dir)?;
    Ok(report)
}

/// Evaluate a deterministic formula at every player count, point-parallel.
pub(crate) fn evaluate_series<F>(
    label: String,
    players: &[u32],
    pool: &WorkerPool,
    formula: F,
) -> (Series, Vec<SkippedPoint>)
where
    F: Fn(u32) -> EquilibriumResult<f64> + Sync,
{
    use rayon::prelude::*;

    let outcomes: Vec<(u32, EquilibriumResult<f64>)> = pool.install(|| {
        players
            .par_iter()
            .map(|&n| (n, formula(n)))
            .collect()
    });
    collect_series(label, outcomes)
}

pub(crate) fn collect_series(
    label: String,
    outcomes: impl IntoIterator<Item = (u32, EquilibriumResult<f64>)>,
) -> (Series, Vec<SkippedPoint>) {
    let mut points = Vec::new();
    let mut skipped = Vec::new();
    for (players, outcome) in outcomes {
        match outcome {
            Ok(probability) => points.push(SeriesPoint {
                players,
                probability,
            }),
            Err(err) => {
                tracing::warn!(series = %label, players, %err, "skipping sweep point");
                skipped.push(SkippedPoint {
                    series: label.clone(),
                    players,
                    reason: err.to_string(),
                });
            }
        }
    }
    (Series { label, points }, skipped)
}
