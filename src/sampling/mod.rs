pub mod rng;
pub mod truncated;

pub use rng::SplitMix64;
pub use truncated::{
    SamplingError, TruncatedNormal, LOWER_BOUND, MAX_REJECTIONS, MIN_REJECTION_MASS, UPPER_BOUND,
};
