pub mod classic;
pub mod error;
pub mod gaussian;
pub mod payoffs;
pub mod social;

pub use classic::{at_least_one_volunteer_classic, classic_n_player_nash, classic_two_player_nash};
pub use error::{EquilibriumError, EquilibriumResult};
pub use gaussian::{
    at_least_one_from_probabilities, classic_n_player_nash_gaussian, gaussian_trial_mean,
    social_distance_n_player_nash_gaussian, CLASSIC_DISTANCE_MEAN, CLASSIC_DISTANCE_STD_DEV,
};
pub use payoffs::{check_distance, check_players, check_probability, Payoffs};
pub use social::{
    at_least_one_volunteer_social_distance, social_distance_n_player_nash,
    social_distance_two_player_nash,
};
