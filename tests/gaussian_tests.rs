use bystander::equilibrium::{
    at_least_one_from_probabilities, at_least_one_volunteer_classic,
    at_least_one_volunteer_social_distance, classic_n_player_nash_gaussian, gaussian_trial_mean,
    social_distance_n_player_nash, social_distance_n_player_nash_gaussian, EquilibriumError,
    Payoffs,
};
use bystander::parallel::WorkerPool;
use bystander::sampling::{SamplingError, SplitMix64, TruncatedNormal};
use rand::RngCore;

/// Counts how many 64-bit words the estimators pull from the source.
struct CountingRng {
    inner: SplitMix64,
    words: usize,
}

impl CountingRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: SplitMix64::new(seed),
            words: 0,
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.words += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.words += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.words += dest.len().div_ceil(8);
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn estimate_equals_aggregation_of_the_drawn_distances() {
    let payoffs = Payoffs::default();
    let players = 9;

    let mut rng = SplitMix64::new(21);
    let estimate =
        social_distance_n_player_nash_gaussian(payoffs, players, 0.25, 0.5, &mut rng).unwrap();

    let mut replay = SplitMix64::new(21);
    let distances = TruncatedNormal::new(0.25, 0.5)
        .unwrap()
        .sample_n(players as usize, &mut replay)
        .unwrap();
    let probabilities: Vec<f64> = distances
        .iter()
        .map(|&d| social_distance_n_player_nash(payoffs, players, d).unwrap())
        .collect();

    assert_eq!(estimate, at_least_one_from_probabilities(&probabilities).unwrap());
    assert_eq!(rng, replay);
}

#[test]
fn collapsing_std_dev_converges_to_closed_form() {
    let payoffs = Payoffs::default();
    let mut rng = SplitMix64::new(0);
    for std_dev in [1e-2, 1e-4, 1e-8] {
        let estimate =
            social_distance_n_player_nash_gaussian(payoffs, 20, 0.5, std_dev, &mut rng).unwrap();
        let closed = at_least_one_volunteer_social_distance(payoffs, 20, 0.5).unwrap();
        assert!(
            (estimate - closed).abs() < std_dev * 10.0,
            "std_dev={std_dev}: {estimate} vs {closed}"
        );
    }
}

#[test]
fn classic_gaussian_quirk_draws_but_ignores_distances() {
    let payoffs = Payoffs::new(4.0, 1.5, -1.0).unwrap();
    for players in [2u32, 7, 30] {
        let mut rng = CountingRng::new(u64::from(players));
        let estimate = classic_n_player_nash_gaussian(payoffs, players, &mut rng).unwrap();
        let closed = at_least_one_volunteer_classic(payoffs, players).unwrap();
        assert!((estimate - closed).abs() < 1e-12);
        assert!(rng.words >= players as usize, "players={players}, words={}", rng.words);
    }
}

#[test]
fn sampling_errors_surface_through_the_estimator() {
    let mut rng = SplitMix64::new(0);
    let err = social_distance_n_player_nash_gaussian(Payoffs::default(), 4, 0.5, -0.1, &mut rng)
        .unwrap_err();
    assert_eq!(
        err,
        EquilibriumError::Sampling(SamplingError::NonPositiveStdDev { std_dev: -0.1 })
    );

    let err = social_distance_n_player_nash_gaussian(Payoffs::default(), 4, 40.0, 0.01, &mut rng)
        .unwrap_err();
    assert!(matches!(
        err,
        EquilibriumError::Sampling(SamplingError::EmptyInterval { .. })
    ));
}

#[test]
fn very_wide_distance_spread_still_estimates() {
    let payoffs = Payoffs::default();
    let mut rng = SplitMix64::new(0);
    let estimate =
        social_distance_n_player_nash_gaussian(payoffs, 5, 0.5, 1e6, &mut rng).unwrap();
    let lowest = social_distance_n_player_nash(payoffs, 5, 1.0).unwrap();
    let highest = social_distance_n_player_nash(payoffs, 5, 0.0).unwrap();
    let floor = at_least_one_from_probabilities(&[lowest; 5]).unwrap();
    let ceiling = at_least_one_from_probabilities(&[highest; 5]).unwrap();
    assert!((floor..=ceiling).contains(&estimate), "estimate={estimate}");
}

#[test]
fn too_few_players_fails_before_sampling() {
    let mut rng = SplitMix64::new(8);
    let untouched = rng;
    assert_eq!(
        social_distance_n_player_nash_gaussian(Payoffs::default(), 1, 0.5, 0.25, &mut rng),
        Err(EquilibriumError::TooFewPlayers { players: 1 })
    );
    assert_eq!(rng, untouched);
}

#[test]
fn trial_mean_narrows_around_the_distribution_average() {
    let payoffs = Payoffs::default();
    let pool = WorkerPool::default();
    let a = gaussian_trial_mean(payoffs, 10, 0.5, 0.25, 2_000, 1, &pool).unwrap();
    let b = gaussian_trial_mean(payoffs, 10, 0.5, 0.25, 2_000, 90_001, &pool).unwrap();
    assert!((a - b).abs() < 0.01, "a={a}, b={b}");
    assert!((0.0..=1.0).contains(&a));
}
