use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::engines::{Drafter, Genetic, Greedy};
use crate::error::{DraftError, Result};
use crate::types::{LineUp, Player, Scheme};

/// A draft order: candidate pool, formation, strategy name, budget and
/// per-club cap.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftRequest {
    pub scheme: Scheme,
    pub players: Vec<Player>,
    pub algorithm: String,
    pub price: f64,
    pub max_players_per_club: usize,
}

/// Drafted line-up in wire form
#[derive(Debug, Clone, Serialize)]
pub struct DraftResponse {
    pub players: Vec<Player>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bench: Vec<Player>,
}

impl From<LineUp> for DraftResponse {
    fn from(line_up: LineUp) -> Self {
        Self {
            players: line_up.players().to_vec(),
            bench: line_up.bench().to_vec(),
        }
    }
}

/// Drafting strategies exposed at the request boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Greedy,
    Genetic,
}

/// Parse a JSON draft request. Malformed payloads, including player records
/// with missing or extra fields, surface as `DraftError::Serde`.
pub fn parse_request(payload: &str) -> Result<DraftRequest> {
    let request = serde_json::from_str(payload)?;
    Ok(request)
}

/// Case-insensitive, substring-tolerant strategy lookup: "gReEdy" and
/// "greedy algorithm" both select the greedy drafter.
pub fn parse_algorithm(name: &str) -> Result<Algorithm> {
    let lowered = name.to_lowercase();
    if lowered.contains("greedy") {
        Ok(Algorithm::Greedy)
    } else if lowered.contains("genetic") {
        Ok(Algorithm::Genetic)
    } else {
        Err(DraftError::UnknownAlgorithm(name.to_string()))
    }
}

/// Validate a request and run the selected drafter over its pool.
pub fn handle(request: DraftRequest, config: &AppConfig) -> Result<DraftResponse> {
    let DraftRequest {
        scheme,
        players,
        algorithm,
        price,
        max_players_per_club,
    } = request;

    if !scheme.is_valid() {
        let counts = scheme
            .positions()
            .iter()
            .map(|(position, count)| format!("{} {}", position, count))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(DraftError::InvalidScheme(format!(
            "position counts do not form a starting eleven: {}",
            counts
        )));
    }
    if price <= 0.0 {
        return Err(DraftError::Configuration(
            "Budget must be positive".to_string(),
        ));
    }
    if max_players_per_club < 1 {
        return Err(DraftError::Configuration(
            "Per-club cap must be at least 1".to_string(),
        ));
    }
    config.validate()?;
    let algorithm = parse_algorithm(&algorithm)?;

    log::info!(
        "drafting: algorithm {:?}, pool of {} players, budget {}, club cap {}",
        algorithm,
        players.len(),
        price,
        max_players_per_club
    );

    let mut drafter: Box<dyn Drafter> = match algorithm {
        Algorithm::Greedy => Box::new(Greedy::new(players)),
        Algorithm::Genetic => Box::new(Genetic::new(players, config.genetic.clone())),
    };
    let line_up = drafter.draft(price, &scheme, max_players_per_club)?;

    Ok(DraftResponse::from(line_up))
}
