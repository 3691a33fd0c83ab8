use rand::RngCore;

use super::{collect_series, evaluate_series, FamilyReport, CLASSIC_LABEL};
use crate::config::SweepConfig;
use crate::equilibrium::{
    at_least_one_volunteer_classic, at_least_one_volunteer_social_distance,
    classic_n_player_nash, classic_n_player_nash_gaussian, gaussian_trial_mean,
    social_distance_n_player_nash, social_distance_n_player_nash_gaussian,
};
use crate::parallel::WorkerPool;
use crate::sampling::SplitMix64;

pub const N_PLAYER_FAMILY: &str = "n_player_nash_p";
pub const AT_LEAST_ONE_FAMILY: &str = "n_player_nash_at_least_one";
pub const GAUSSIAN_FAMILY: &str = "n_player_nash_gaussian";

pub fn distance_label(distance: f64) -> String {
    format!("Social Distance {distance}")
}

pub fn gaussian_label(mean: f64, std_dev: f64) -> String {
    format!("Social Distance {mean}, std {std_dev}")
}

/// Per-player equilibrium for each configured distance, then the classic curve.
pub fn n_player_family(config: &SweepConfig, players: &[u32], pool: &WorkerPool) -> FamilyReport {
    let payoffs = config.payoffs;
    let mut family = FamilyReport::new(
        N_PLAYER_FAMILY,
        "Mixed Nash Eq. Volunteer Probabilities for n Players",
        "Volunteer probability",
    );
    for &distance in &config.social_distances {
        family.push(evaluate_series(distance_label(distance), players, pool, |n| {
            social_distance_n_player_nash(payoffs, n, distance)
        }));
    }
    family.push(evaluate_series(CLASSIC_LABEL.to_string(), players, pool, |n| {
        classic_n_player_nash(payoffs, n)
    }));
    tracing::debug!(family = N_PLAYER_FAMILY, series = family.series.len(), "family evaluated");
    family
}

/// At-least-one-volunteer probability for each configured distance, then classic.
pub fn at_least_one_family(config: &SweepConfig, players: &[u32], pool: &WorkerPool) -> FamilyReport {
    let payoffs = config.payoffs;
    let mut family = FamilyReport::new(
        AT_LEAST_ONE_FAMILY,
        "At Least One Volunteer Probabilities for n Players",
        "At least one volunteer probability",
    );
    for &distance in &config.social_distances {
        family.push(evaluate_series(distance_label(distance), players, pool, |n| {
            at_least_one_volunteer_social_distance(payoffs, n, distance)
        }));
    }
    family.push(evaluate_series(CLASSIC_LABEL.to_string(), players, pool, |n| {
        at_least_one_volunteer_classic(payoffs, n)
    }));
    tracing::debug!(family = AT_LEAST_ONE_FAMILY, series = family.series.len(), "family evaluated");
    family
}

/// Truncated-Gaussian estimates. All draws come from one generator seeded with
/// `config.seed`, consumed in series order (means outer, std devs inner, classic
/// last) and player order within a series.
pub fn gaussian_family(config: &SweepConfig, players: &[u32], pool: &WorkerPool) -> FamilyReport {
    let payoffs = config.payoffs;
    let mut rng = SplitMix64::new(config.seed);
    let mut family = FamilyReport::new(
        GAUSSIAN_FAMILY,
        "At Least One Volunteer Probabilities for n Players (Truncated Gaussian)",
        "At least one volunteer probability",
    );
    for &mean in &config.gaussian_means {
        for &std_dev in &config.gaussian_std_devs {
            let outcomes: Vec<_> = players
                .iter()
                .map(|&n| {
                    let estimate = if config.trials > 1 {
                        let trial_seed = rng.next_u64();
                        gaussian_trial_mean(payoffs, n, mean, std_dev, config.trials, trial_seed, pool)
                    } else {
                        social_distance_n_player_nash_gaussian(payoffs, n, mean, std_dev, &mut rng)
                    };
                    (n, estimate)
                })
                .collect();
            family.push(collect_series(gaussian_label(mean, std_dev), outcomes));
        }
    }
    let classic: Vec<_> = players
        .iter()
        .map(|&n| (n, classic_n_player_nash_gaussian(payoffs, n, &mut rng)))
        .collect();
    family.push(collect_series(CLASSIC_LABEL.to_string(), classic));
    tracing::debug!(family = GAUSSIAN_FAMILY, series = family.series.len(), "family evaluated");
    family
}
