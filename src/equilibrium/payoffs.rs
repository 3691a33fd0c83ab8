//! Payoff parameters of the volunteer's dilemma and the input checks shared by
//! every equilibrium formula.

use serde::{Deserialize, Serialize};

use super::error::{EquilibriumError, EquilibriumResult};

/// Temptation, reward and punishment payoffs. Construct through [Payoffs::new]
/// so that `T > R > P` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payoffs {
    pub temptation: f64,
    pub reward: f64,
    pub punishment: f64,
}

impl Default for Payoffs {
    fn default() -> Self {
        Self {
            temptation: 2.0,
            reward: 1.0,
            punishment: 0.0,
        }
    }
}

impl Payoffs {
    pub fn new(temptation: f64, reward: f64, punishment: f64) -> EquilibriumResult<Self> {
        let payoffs = Self {
            temptation,
            reward,
            punishment,
        };
        payoffs.validate()?;
        Ok(payoffs)
    }

    /// Re-checks the ordering. Needed for values that arrive through serde.
    pub fn validate(&self) -> EquilibriumResult<()> {
        let finite = self.temptation.is_finite() && self.reward.is_finite() && self.punishment.is_finite();
        if finite && self.temptation > self.reward && self.reward > self.punishment {
            Ok(())
        } else {
            Err(EquilibriumError::InvalidPayoffs {
                temptation: self.temptation,
                reward: self.reward,
                punishment: self.punishment,
            })
        }
    }

    /// `(T - R) / (T - P)`, strictly inside `(0, 1)` for valid payoffs.
    pub fn free_rider_ratio(&self) -> f64 {
        (self.temptation - self.reward) / (self.temptation - self.punishment)
    }
}

pub fn check_players(players: u32) -> EquilibriumResult<()> {
    if players < 2 {
        return Err(EquilibriumError::TooFewPlayers { players });
    }
    Ok(())
}

pub fn check_distance(distance: f64) -> EquilibriumResult<()> {
    if !(0.0..=1.0).contains(&distance) {
        return Err(EquilibriumError::DistanceOutOfRange { distance });
    }
    Ok(())
}

/// Surfaces NaN, infinities and out-of-range values as errors instead of
/// letting them reach a sweep.
pub fn check_probability(operation: &'static str, value: f64) -> EquilibriumResult<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EquilibriumError::NumericDomain { operation, value })
    }
}

/// `base^exponent` for a base that must be non-negative and finite.
pub(crate) fn checked_power(operation: &'static str, base: f64, exponent: f64) -> EquilibriumResult<f64> {
    if !base.is_finite() || base < 0.0 {
        return Err(EquilibriumError::NumericDomain {
            operation,
            value: base,
        });
    }
    let value = base.powf(exponent);
    if !value.is_finite() {
        return Err(EquilibriumError::NumericDomain { operation, value });
    }
    Ok(value)
}
