// Library root: re-exports the drafting API so integration tests and
// external consumers can reach it without deep paths.

pub mod api;
pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{DraftError, Result};
pub use types::{LineUp, Player, Position, Scheme};
