use std::cmp::Ordering;

use crate::engines::Drafter;
use crate::error::{DraftError, Result};
use crate::types::{LineUp, Player, Scheme};

/// Greedy point-maximiser: walks the pool in descending projected points,
/// taking every affordable player the scheme still needs. Fast and
/// deterministic, but it may miss line-ups a global search would find.
pub struct Greedy {
    players: Vec<Player>,
}

impl Greedy {
    /// The pool is sorted once here; equal-points players keep their
    /// input order.
    pub fn new(mut players: Vec<Player>) -> Self {
        players.sort_by(|a, b| b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal));
        Self { players }
    }
}

impl Drafter for Greedy {
    fn draft(
        &mut self,
        budget: f64,
        scheme: &Scheme,
        max_players_per_club: usize,
    ) -> Result<LineUp> {
        let mut line_up = LineUp::new(scheme.clone());
        let mut remaining = budget;

        for player in &self.players {
            if !line_up.missing(player.position) || player.price > remaining {
                continue;
            }
            line_up.add_player(player.clone());
            remaining -= player.price;
            if line_up.exceeds_club_cap(max_players_per_club) {
                // Undo the pick and refund its price
                line_up.remove_player(player.id);
                remaining += player.price;
                continue;
            }
            if line_up.is_valid() {
                log::debug!(
                    "greedy draft complete: points {:.2}, price {:.2}",
                    line_up.points(),
                    line_up.price()
                );
                return Ok(line_up);
            }
        }

        Err(DraftError::Infeasible)
    }
}
