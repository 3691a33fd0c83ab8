//! Mixed-strategy Nash equilibria of the volunteer's dilemma: classic,
//! social-distance-weighted and truncated-Gaussian variants, plus player-count
//! sweeps exported as CSV and JSON.

pub mod cli;
pub mod config;
pub mod equilibrium;
pub mod parallel;
pub mod report;
pub mod sampling;
pub mod sweep;
