//! Social-distance-weighted equilibria.
//!
//! The free-rider ratio is divided by `1 + (1-d)(n-1)`. At `d = 1` the weight is
//! 1 and every formula here collapses to its classic counterpart; smaller
//! distances shrink the ratio and raise the volunteering probability.

use super::error::EquilibriumResult;
use super::payoffs::{check_distance, check_players, check_probability, checked_power, Payoffs};

fn weighted_ratio(payoffs: Payoffs, players: u32, distance: f64) -> f64 {
    let weight = 1.0 + (1.0 - distance) * f64::from(players - 1);
    payoffs.free_rider_ratio() / weight
}

/// Two-player form: `1 - (T-R)/((T-P)(1+(1-d)))`.
pub fn social_distance_two_player_nash(payoffs: Payoffs, distance: f64) -> EquilibriumResult<f64> {
    payoffs.validate()?;
    check_distance(distance)?;
    check_probability(
        "social_distance_two_player_nash",
        1.0 - weighted_ratio(payoffs, 2, distance),
    )
}

/// `1 - ((T-R)/((T-P)(1+(1-d)(n-1))))^(1/(n-1))`.
pub fn social_distance_n_player_nash(
    payoffs: Payoffs,
    players: u32,
    distance: f64,
) -> EquilibriumResult<f64> {
    payoffs.validate()?;
    check_players(players)?;
    check_distance(distance)?;
    let exponent = 1.0 / f64::from(players - 1);
    let stay_out = checked_power(
        "social_distance_n_player_nash",
        weighted_ratio(payoffs, players, distance),
        exponent,
    )?;
    check_probability("social_distance_n_player_nash", 1.0 - stay_out)
}

/// Same weighting, exponent `n/(n-1)`.
pub fn at_least_one_volunteer_social_distance(
    payoffs: Payoffs,
    players: u32,
    distance: f64,
) -> EquilibriumResult<f64> {
    payoffs.validate()?;
    check_players(players)?;
    check_distance(distance)?;
    let exponent = f64::from(players) / f64::from(players - 1);
    let nobody = checked_power(
        "at_least_one_volunteer_social_distance",
        weighted_ratio(payoffs, players, distance),
        exponent,
    )?;
    check_probability("at_least_one_volunteer_social_distance", 1.0 - nobody)
}
