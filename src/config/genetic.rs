use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};

/// Tuning knobs for the genetic drafter.
///
/// `seed` pins the random number generator for reproducible drafts; leave it
/// unset to seed from entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    pub n_generations: usize,
    pub n_individuals: usize,
    pub tournament_size: usize,
    pub n_tournament_winners: usize,
    pub max_n_mutations: usize,
    pub derive_bench: bool,
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            n_generations: 100,
            n_individuals: 100,
            tournament_size: 10,
            n_tournament_winners: 5,
            max_n_mutations: 5,
            derive_bench: true,
            seed: None,
        }
    }
}

impl GeneticConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_generations < 1 {
            return Err(DraftError::Configuration(
                "Number of generations must be at least 1".to_string(),
            ));
        }
        if self.n_individuals < 2 {
            return Err(DraftError::Configuration(
                "Number of individuals must be at least 2".to_string(),
            ));
        }
        if self.tournament_size < 1 {
            return Err(DraftError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if self.n_tournament_winners < 1 {
            return Err(DraftError::Configuration(
                "Number of tournament winners must be at least 1".to_string(),
            ));
        }
        if self.n_tournament_winners > self.tournament_size {
            return Err(DraftError::Configuration(
                "Number of tournament winners cannot exceed the tournament size".to_string(),
            ));
        }
        if self.max_n_mutations < 1 {
            return Err(DraftError::Configuration(
                "Maximum number of mutations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
