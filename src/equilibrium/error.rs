use thiserror::Error;

use crate::sampling::SamplingError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquilibriumError {
    #[error("payoffs must satisfy T > R > P with finite values (T={temptation}, R={reward}, P={punishment})")]
    InvalidPayoffs {
        temptation: f64,
        reward: f64,
        punishment: f64,
    },

    #[error("at least 2 players are required, got {players}")]
    TooFewPlayers { players: u32 },

    #[error("social distance must lie in [0, 1], got {distance}")]
    DistanceOutOfRange { distance: f64 },

    #[error("numeric domain error in {operation}: produced {value}")]
    NumericDomain { operation: &'static str, value: f64 },

    #[error("trial count must be at least 1")]
    InvalidTrials,

    #[error("distance sampling failed: {0}")]
    Sampling(#[from] SamplingError),
}

pub type EquilibriumResult<T> = Result<T, EquilibriumError>;
