use std::cmp::Ordering;
use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;

use crate::config::GeneticConfig;
use crate::engines::{bench, Drafter};
use crate::error::{DraftError, Result};
use crate::types::{LineUp, Player, Position, Scheme};

/// Redraws allowed when a mutation keeps hitting already-fielded players
/// before falling back to a linear scan of the position bucket.
const MAX_MUTATION_RETRIES: usize = 8;

/// Genetic drafter: evolves a population of line-ups under the budget and
/// per-club constraints, keeping the best individual of every generation.
pub struct Genetic {
    players: Vec<Player>,
    players_by_position: HashMap<Position, Vec<Player>>,
    config: GeneticConfig,
    rng: StdRng,
    history: Vec<f64>,
}

impl Genetic {
    pub fn new(players: Vec<Player>, config: GeneticConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let players_by_position = organize_by_position(&players);

        Self {
            players,
            players_by_position,
            config,
            rng,
            history: Vec::new(),
        }
    }

    /// Projected points of the generation's best individual, one entry per
    /// generation plus one for the final pick. Reset on every draft.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Tournament selection: sample the ranked remainder without
    /// replacement, rank the sample, keep the strongest as parents.
    fn select_parents(
        &mut self,
        ranked: &[LineUp],
        budget: f64,
        max_players_per_club: usize,
    ) -> Vec<LineUp> {
        let sample: Vec<LineUp> = ranked
            .choose_multiple(&mut self.rng, self.config.tournament_size)
            .cloned()
            .collect();
        let mut winners = rank_by_fitness(sample, budget, max_players_per_club);
        winners.truncate(self.config.n_tournament_winners);
        winners
    }
}

impl Drafter for Genetic {
    fn draft(
        &mut self,
        budget: f64,
        scheme: &Scheme,
        max_players_per_club: usize,
    ) -> Result<LineUp> {
        self.history.clear();

        let mut population: Vec<LineUp> = (0..self.config.n_individuals)
            .map(|_| random_line_up(&self.players, scheme, &mut self.rng))
            .collect::<Result<_>>()?;

        for generation in 0..self.config.n_generations {
            population = rank_by_fitness(population, budget, max_players_per_club);

            // Elitism: the best individual survives unchanged
            let best = population.remove(0);
            self.history.push(best.points());
            log::debug!(
                "generation {}: best fitness {:.2}, points {:.2}",
                generation,
                fitness(&best, budget, max_players_per_club),
                best.points()
            );

            let parents = self.select_parents(&population, budget, max_players_per_club);

            let mut next_generation = Vec::with_capacity(self.config.n_individuals);
            next_generation.push(best);
            for _ in 1..self.config.n_individuals {
                let parent = &parents[self.rng.gen_range(0..parents.len())];
                let mut child = parent.clone();
                let n_mutations = sample_n_mutations(self.config.max_n_mutations, &mut self.rng);
                for _ in 0..n_mutations {
                    mutate_slot(&mut child, &self.players_by_position, &mut self.rng);
                }
                next_generation.push(child);
            }
            population = next_generation;
        }

        population = rank_by_fitness(population, budget, max_players_per_club);
        let mut best = population.swap_remove(0);
        self.history.push(best.points());

        if self.config.derive_bench {
            best.set_bench(bench::derive(&best, &self.players));
        }
        log::info!(
            "genetic draft complete: {} generations, points {:.2}, price {:.2}",
            self.config.n_generations,
            best.points(),
            best.price()
        );
        Ok(best)
    }
}

/// Rank score for one line-up: the amount over budget (negative) when the
/// price cap is blown, zero when any club exceeds the per-club cap, and the
/// projected points otherwise.
pub fn fitness(line_up: &LineUp, budget: f64, max_players_per_club: usize) -> f64 {
    let price = line_up.price();
    if price > budget {
        return budget - price;
    }
    if line_up.exceeds_club_cap(max_players_per_club) {
        return 0.0;
    }
    line_up.points()
}

/// Sort line-ups by fitness, best first
fn rank_by_fitness(line_ups: Vec<LineUp>, budget: f64, max_players_per_club: usize) -> Vec<LineUp> {
    let mut scored: Vec<(LineUp, f64)> = line_ups
        .into_iter()
        .map(|line_up| {
            let score = fitness(&line_up, budget, max_players_per_club);
            (line_up, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(line_up, _)| line_up).collect()
}

/// Build one random individual: shuffle the pool, then fill open scheme
/// slots in shuffle order. Budget and club cap are ignored at this stage;
/// fitness pressure handles them later.
fn random_line_up<R: Rng>(players: &[Player], scheme: &Scheme, rng: &mut R) -> Result<LineUp> {
    let mut shuffled: Vec<&Player> = players.iter().collect();
    shuffled.shuffle(rng);

    let mut line_up = LineUp::new(scheme.clone());
    for player in shuffled {
        if line_up.missing(player.position) {
            line_up.add_player(player.clone());
            if line_up.is_valid() {
                return Ok(line_up);
            }
        }
    }
    Err(DraftError::Infeasible)
}

/// Replace one random slot with a random candidate of the same position.
/// Draws landing on a player already fielded elsewhere are redrawn a bounded
/// number of times, then the bucket is scanned for any usable candidate;
/// when none exists the mutation is skipped. Redrawing the player already
/// occupying the slot is allowed.
fn mutate_slot<R: Rng>(
    line_up: &mut LineUp,
    candidates_by_position: &HashMap<Position, Vec<Player>>,
    rng: &mut R,
) {
    let index = rng.gen_range(0..line_up.len());
    let position = line_up.players()[index].position;
    let candidates = match candidates_by_position.get(&position) {
        Some(candidates) if !candidates.is_empty() => candidates,
        _ => return,
    };

    for _ in 0..MAX_MUTATION_RETRIES {
        let candidate = &candidates[rng.gen_range(0..candidates.len())];
        if !line_up.contains_elsewhere(index, candidate.id) {
            line_up.replace_player(index, candidate.clone());
            return;
        }
    }
    let fallback = candidates
        .iter()
        .find(|c| !line_up.contains_elsewhere(index, c.id));
    if let Some(candidate) = fallback {
        line_up.replace_player(index, candidate.clone());
    }
}

/// Number of mutations for one offspring, drawn from a triangular
/// distribution on [1, max_n_mutations] with the mode at 1, so most
/// offspring receive a single mutation.
fn sample_n_mutations<R: Rng>(max_n_mutations: usize, rng: &mut R) -> usize {
    if max_n_mutations <= 1 {
        return 1;
    }
    let min = 1.0;
    let max = max_n_mutations as f64;
    let u: f64 = rng.gen();
    // Inverse CDF; with the mode at the minimum only the upper branch applies
    let sample = max - ((max - min) * (max - min) * (1.0 - u)).sqrt();
    (sample.round() as usize).clamp(1, max_n_mutations)
}

fn organize_by_position(players: &[Player]) -> HashMap<Position, Vec<Player>> {
    let mut by_position: HashMap<Position, Vec<Player>> = HashMap::new();
    for player in players {
        by_position
            .entry(player.position)
            .or_default()
            .push(player.clone());
    }
    by_position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_count_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let n = sample_n_mutations(5, &mut rng);
            assert!((1..=5).contains(&n));
        }
    }

    #[test]
    fn test_mutation_count_degenerate_max() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_n_mutations(1, &mut rng), 1);
    }

    #[test]
    fn test_mutation_count_biased_toward_one() {
        // The mode sits at the minimum, so single mutations dominate
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<usize> = (0..2000).map(|_| sample_n_mutations(5, &mut rng)).collect();
        let ones = draws.iter().filter(|&&n| n == 1).count();
        let fives = draws.iter().filter(|&&n| n == 5).count();
        assert!(ones > fives);
    }
}
