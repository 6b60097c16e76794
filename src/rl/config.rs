//! Reinforcement strategy configuration.

/// Parameters for tabular Q-learning.
///
/// # Defaults
///
/// ```
/// use queensolve::rl::RlConfig;
///
/// let config = RlConfig::default();
/// assert!((config.alpha - 0.1).abs() < 1e-12);
/// assert!((config.gamma - 0.9).abs() < 1e-12);
/// assert!((config.epsilon - 0.1).abs() < 1e-12);
/// assert_eq!(config.episodes, 1000);
/// ```
#[derive(Debug, Clone)]
pub struct RlConfig {
    /// Learning rate: fraction by which estimates move toward the
    /// observed target (0.0–1.0).
    pub alpha: f64,

    /// Discount factor for the best next action-value (0.0–1.0).
    pub gamma: f64,

    /// Exploration probability: chance of a uniformly random column
    /// instead of the greedy one (0.0–1.0).
    pub epsilon: f64,

    /// Episode budget; the run's only termination bound.
    pub episodes: usize,

    /// Pre-seed the table with every complete permutation of the
    /// board.
    ///
    /// This is O(N!) in table size and only sensible for very small N;
    /// disabling it changes nothing semantically because missing
    /// entries default to zero vectors on first touch.
    pub seed_full_table: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RlConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            gamma: 0.9,
            epsilon: 0.1,
            episodes: 1000,
            seed_full_table: true,
            seed: None,
        }
    }
}

impl RlConfig {
    /// Sets the learning rate, clamped to `[0, 1]`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Sets the discount factor, clamped to `[0, 1]`.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma.clamp(0.0, 1.0);
        self
    }

    /// Sets the exploration probability, clamped to `[0, 1]`.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.clamp(0.0, 1.0);
        self
    }

    /// Sets the episode budget.
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Enables or disables exhaustive table pre-seeding.
    pub fn with_seed_full_table(mut self, seed_full_table: bool) -> Self {
        self.seed_full_table = seed_full_table;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.episodes == 0 {
            return Err("episodes must be at least 1".into());
        }
        if self.alpha == 0.0 {
            return Err("alpha must be positive, otherwise nothing is ever learned".into());
        }
        Ok(())
    }
}
