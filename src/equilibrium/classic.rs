//! Classic volunteer's dilemma equilibria, no social distance.

use super::error::EquilibriumResult;
use super::payoffs::{check_players, check_probability, checked_power, Payoffs};

/// Two-player mixed equilibrium: `1 - (T-R)/(T-P)`.
pub fn classic_two_player_nash(payoffs: Payoffs) -> EquilibriumResult<f64> {
    payoffs.validate()?;
    check_probability("classic_two_player_nash", 1.0 - payoffs.free_rider_ratio())
}

/// n-player mixed equilibrium: `1 - ((T-R)/(T-P))^(1/(n-1))`.
pub fn classic_n_player_nash(payoffs: Payoffs, players: u32) -> EquilibriumResult<f64> {
    payoffs.validate()?;
    check_players(players)?;
    let exponent = 1.0 / f64::from(players - 1);
    let stay_out = checked_power("classic_n_player_nash", payoffs.free_rider_ratio(), exponent)?;
    check_probability("classic_n_player_nash", 1.0 - stay_out)
}

/// Probability that at least one of `players` volunteers when everyone plays
/// the classic mixed equilibrium: `1 - ((T-R)/(T-P))^(n/(n-1))`.
pub fn at_least_one_volunteer_classic(payoffs: Payoffs, players: u32) -> EquilibriumResult<f64> {
    payoffs.validate()?;
    check_players(players)?;
    let exponent = f64::from(players) / f64::from(players - 1);
    let nobody = checked_power("at_least_one_volunteer_classic", payoffs.free_rider_ratio(), exponent)?;
    check_probability("at_least_one_volunteer_classic", 1.0 - nobody)
}
