use std::cmp::Ordering;

use crate::types::{LineUp, Player, Position};

/// Pick a substitute for every position the scheme fields, coach excluded:
/// the highest-scoring pool player strictly cheaper than the cheapest
/// starter of that position. Positions with no such candidate contribute
/// nothing; an empty bench is not an error.
pub fn derive(line_up: &LineUp, pool: &[Player]) -> Vec<Player> {
    let mut bench = Vec::new();

    for (&position, &required) in line_up.scheme().positions() {
        if position == Position::Coach || required == 0 {
            continue;
        }
        let cheapest_starter = line_up
            .players()
            .iter()
            .filter(|p| p.position == position)
            .map(|p| p.price)
            .fold(f64::INFINITY, f64::min);
        if !cheapest_starter.is_finite() {
            continue;
        }
        let substitute = pool
            .iter()
            .filter(|p| p.position == position && p.price < cheapest_starter)
            .max_by(|a, b| a.points.partial_cmp(&b.points).unwrap_or(Ordering::Equal));
        if let Some(player) = substitute {
            bench.push(player.clone());
        }
    }

    bench
}
