use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Playing position of a fantasy-football athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Fullback,
    Defender,
    Midfielder,
    Forward,
    Coach,
}

impl Position {
    /// All positions in scheme order
    pub const ALL: [Position; 6] = [
        Position::Goalkeeper,
        Position::Fullback,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
        Position::Coach,
    ];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Goalkeeper => "goalkeeper",
            Position::Fullback => "fullback",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
            Position::Coach => "coach",
        };
        write!(f, "{}", name)
    }
}

/// Draftable athlete with market price and projected points
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Player {
    pub id: u32,
    pub position: Position,
    pub price: f64,
    pub points: f64,
    pub club: u32,
}

// Player identity is the id; price and points vary between rounds.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Formation scheme: how many players of each position a line-up requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scheme {
    positions: BTreeMap<Position, usize>,
}

impl Scheme {
    pub const STARTING_ELEVEN: usize = 11;

    pub fn new(positions: BTreeMap<Position, usize>) -> Self {
        Self { positions }
    }

    /// Required player count for a position, zero when the scheme omits it
    pub fn required(&self, position: Position) -> usize {
        self.positions.get(&position).copied().unwrap_or(0)
    }

    /// Total roster size, bench excluded
    pub fn total_slots(&self) -> usize {
        self.positions.values().sum()
    }

    pub fn positions(&self) -> &BTreeMap<Position, usize> {
        &self.positions
    }

    /// A scheme is valid when its outfield counts sum to a starting eleven
    /// and it fields at most one coach.
    pub fn is_valid(&self) -> bool {
        let coaches = self.required(Position::Coach);
        self.total_slots() - coaches == Self::STARTING_ELEVEN && coaches <= 1
    }
}

/// Ordered set of drafted players tied to a scheme, with an optional bench.
///
/// Construction never validates: a line-up may hold any players, and
/// `is_valid` reports whether the current contents satisfy the scheme.
/// Cloning yields a structurally independent copy.
#[derive(Debug, Clone)]
pub struct LineUp {
    scheme: Scheme,
    players: Vec<Player>,
    bench: Vec<Player>,
}

impl LineUp {
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            players: Vec::new(),
            bench: Vec::new(),
        }
    }

    pub fn with_players(scheme: Scheme, players: Vec<Player>) -> Self {
        Self {
            scheme,
            players,
            bench: Vec::new(),
        }
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn bench(&self) -> &[Player] {
        &self.bench
    }

    pub fn set_bench(&mut self, bench: Vec<Player>) {
        self.bench = bench;
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Append a player. The roster may not grow past the scheme's slot count.
    pub fn add_player(&mut self, player: Player) {
        debug_assert!(
            self.players.len() < self.scheme.total_slots(),
            "line-up already fills every scheme slot"
        );
        self.players.push(player);
    }

    /// Remove the player with the given id, preserving the order of the rest
    pub fn remove_player(&mut self, id: u32) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    /// Swap the player at `index` for another, returning the one displaced
    pub fn replace_player(&mut self, index: usize, player: Player) -> Player {
        debug_assert!(
            !self.contains_elsewhere(index, player.id),
            "player {} already fielded in another slot",
            player.id
        );
        std::mem::replace(&mut self.players[index], player)
    }

    /// Whether the line-up still needs players of this position
    pub fn missing(&self, position: Position) -> bool {
        self.count(position) < self.scheme.required(position)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Whether any slot other than `index` holds the player with this id
    pub fn contains_elsewhere(&self, index: usize, id: u32) -> bool {
        self.players
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.id == id)
    }

    /// Exact position-count match against the scheme, every position checked
    pub fn is_valid(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&position| self.count(position) == self.scheme.required(position))
    }

    pub fn points(&self) -> f64 {
        self.players.iter().map(|p| p.points).sum()
    }

    pub fn price(&self) -> f64 {
        self.players.iter().map(|p| p.price).sum()
    }

    /// Number of distinct clubs fielded
    pub fn clubs(&self) -> usize {
        self.players_per_club().len()
    }

    pub fn players_per_club(&self) -> HashMap<u32, usize> {
        let mut counts = HashMap::new();
        for player in &self.players {
            *counts.entry(player.club).or_insert(0) += 1;
        }
        counts
    }

    pub fn players_by_position(&self) -> HashMap<Position, Vec<&Player>> {
        let mut by_position: HashMap<Position, Vec<&Player>> = HashMap::new();
        for player in &self.players {
            by_position.entry(player.position).or_default().push(player);
        }
        by_position
    }

    /// Whether any single club exceeds the per-club player cap
    pub fn exceeds_club_cap(&self, max_players_per_club: usize) -> bool {
        self.players_per_club()
            .values()
            .any(|&count| count > max_players_per_club)
    }

    fn count(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }
}
