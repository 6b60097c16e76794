//! Genetic strategy configuration.

/// Parameters controlling the genetic strategy's evolutionary loop.
///
/// # Defaults
///
/// ```
/// use queensolve::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 1000);
/// assert!((config.mutation_rate - 0.01).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queensolve::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(200)
///     .with_generations(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    /// Number of individuals carried between generations.
    ///
    /// The best half survives each generation and parents the other
    /// half. Diversity injections temporarily grow the population past
    /// this size.
    pub population_size: usize,

    /// Generation budget; the only guaranteed termination bound.
    pub generations: usize,

    /// Initial probability of mutating each child (0.0–1.0).
    ///
    /// Adapted upward at runtime (×1.5 every 100th generation while
    /// fewer than half the expected solutions are found, capped at
    /// 0.1).
    pub mutation_rate: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.01,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the initial mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 4 {
            return Err("population_size must be at least 4 so the surviving half \
                        contains two distinct parents"
                .into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        Ok(())
    }
}
