//! At-least-one-volunteer estimates with per-player social distances drawn from
//! a truncated normal distribution.
//!
//! Each call draws one distance per player and returns a single point
//! estimate. [gaussian_trial_mean] averages many such draws.

use rand::Rng;
use rayon::prelude::*;

use super::classic::classic_n_player_nash;
use super::error::{EquilibriumError, EquilibriumResult};
use super::payoffs::{check_players, check_probability, Payoffs};
use super::social::social_distance_n_player_nash;
use crate::parallel::WorkerPool;
use crate::sampling::{SplitMix64, TruncatedNormal};

/// Distance distribution used by [classic_n_player_nash_gaussian].
pub const CLASSIC_DISTANCE_MEAN: f64 = 0.5;
pub const CLASSIC_DISTANCE_STD_DEV: f64 = 0.25;

/// `1 - Π(1 - p_i)`: probability that at least one independent player volunteers.
/// An empty slice yields 0.
pub fn at_least_one_from_probabilities(probabilities: &[f64]) -> EquilibriumResult<f64> {
    let mut nobody = 1.0;
    for &p in probabilities {
        check_probability("at_least_one_from_probabilities", p)?;
        nobody *= 1.0 - p;
    }
    check_probability("at_least_one_from_probabilities", 1.0 - nobody)
}

/// Draws `players` distances from `TruncatedNormal(mean_distance, std_dev)` and
/// evaluates [social_distance_n_player_nash] at each player's own distance.
pub fn social_distance_n_player_nash_gaussian<R: Rng + ?Sized>(
    payoffs: Payoffs,
    players: u32,
    mean_distance: f64,
    std_dev: f64,
    rng: &mut R,
) -> EquilibriumResult<f64> {
    payoffs.validate()?;
    check_players(players)?;
    let distribution = TruncatedNormal::new(mean_distance, std_dev)?;
    let distances = distribution.sample_n(players as usize, rng)?;
    let probabilities = distances
        .iter()
        .map(|&distance| social_distance_n_player_nash(payoffs, players, distance))
        .collect::<EquilibriumResult<Vec<_>>>()?;
    at_least_one_from_probabilities(&probabilities)
}

/// Classic counterpart of [social_distance_n_player_nash_gaussian].
///
/// Known quirk, kept on purpose: the per-player distances are drawn from
/// `TruncatedNormal(0.5, 0.25)` and advance `rng`, but they are never used.
/// Every player gets the unweighted [classic_n_player_nash] probability, so the
/// result always equals [crate::equilibrium::at_least_one_volunteer_classic].
pub fn classic_n_player_nash_gaussian<R: Rng + ?Sized>(
    payoffs: Payoffs,
    players: u32,
    rng: &mut R,
) -> EquilibriumResult<f64> {
    payoffs.validate()?;
    check_players(players)?;
    let distribution = TruncatedNormal::new(CLASSIC_DISTANCE_MEAN, CLASSIC_DISTANCE_STD_DEV)?;
    let distances = distribution.sample_n(players as usize, rng)?;
    let per_player = classic_n_player_nash(payoffs, players)?;
    let probabilities = vec![per_player; distances.len()];
    at_least_one_from_probabilities(&probabilities)
}

/// Mean of `trials` independent single-draw estimates. Trial `k` is seeded with
/// `seed + k`, so the result does not depend on the worker count.
pub fn gaussian_trial_mean(
    payoffs: Payoffs,
    players: u32,
    mean_distance: f64,
    std_dev: f64,
    trials: u32,
    seed: u64,
    pool: &WorkerPool,
) -> EquilibriumResult<f64> {
    if trials == 0 {
        return Err(EquilibriumError::InvalidTrials);
    }
    let estimates = pool.install(|| {
        (0..trials)
            .into_par_iter()
            .map(|trial| {
                let mut rng = SplitMix64::for_trial(seed, u64::from(trial));
                social_distance_n_player_nash_gaussian(
                    payoffs,
                    players,
                    mean_distance,
                    std_dev,
                    &mut rng,
                )
            })
            .collect::<EquilibriumResult<Vec<f64>>>()
    })?;
    let mean = estimates.iter().sum::<f64>() / f64::from(trials);
    check_probability("gaussian_trial_mean", mean)
}
