pub mod bench;
pub mod genetic;
pub mod greedy;

pub use genetic::Genetic;
pub use greedy::Greedy;

use crate::error::Result;
use crate::types::{LineUp, Scheme};

/// A drafting strategy. The candidate pool is supplied at construction;
/// budget and per-club cap arrive with each draft. Callers are expected to
/// hand in a valid scheme, a positive budget and a cap of at least one.
pub trait Drafter {
    fn draft(
        &mut self,
        budget: f64,
        scheme: &Scheme,
        max_players_per_club: usize,
    ) -> Result<LineUp>;
}
