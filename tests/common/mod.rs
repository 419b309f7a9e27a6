#![allow(dead_code)]

use std::collections::BTreeMap;

use cartola_draft::{LineUp, Player, Position, Scheme};

pub fn player(id: u32, position: Position, price: f64, points: f64, club: u32) -> Player {
    Player {
        id,
        position,
        price,
        points,
        club,
    }
}

pub fn scheme(counts: &[(Position, usize)]) -> Scheme {
    Scheme::new(counts.iter().copied().collect::<BTreeMap<_, _>>())
}

pub fn scheme_442() -> Scheme {
    scheme(&[
        (Position::Goalkeeper, 1),
        (Position::Fullback, 2),
        (Position::Defender, 2),
        (Position::Midfielder, 4),
        (Position::Forward, 2),
        (Position::Coach, 1),
    ])
}

pub fn scheme_433() -> Scheme {
    scheme(&[
        (Position::Goalkeeper, 1),
        (Position::Fullback, 2),
        (Position::Defender, 2),
        (Position::Midfielder, 3),
        (Position::Forward, 3),
        (Position::Coach, 1),
    ])
}

pub fn scheme_352() -> Scheme {
    scheme(&[
        (Position::Goalkeeper, 1),
        (Position::Fullback, 0),
        (Position::Defender, 3),
        (Position::Midfielder, 5),
        (Position::Forward, 2),
        (Position::Coach, 1),
    ])
}

pub fn scheme_541() -> Scheme {
    scheme(&[
        (Position::Goalkeeper, 1),
        (Position::Fullback, 2),
        (Position::Defender, 3),
        (Position::Midfielder, 4),
        (Position::Forward, 1),
        (Position::Coach, 1),
    ])
}

/// Line-up that exactly satisfies the given scheme, one distinct club per
/// player, flat prices and points.
pub fn filled(scheme: &Scheme) -> LineUp {
    let mut players = Vec::new();
    let mut id = 1u32;
    for (&position, &count) in scheme.positions() {
        for _ in 0..count {
            players.push(player(id, position, 5.0, 3.0, id));
            id += 1;
        }
    }
    LineUp::with_players(scheme.clone(), players)
}

/// Deterministic 54-player pool: every position covered several times over,
/// prices in 2..=7, positive points, exactly three players per club, so any
/// preset scheme can be drafted under a budget of 100 and a club cap of 3+.
pub fn varied_pool() -> Vec<Player> {
    let plan: [(Position, u32, usize); 6] = [
        (Position::Goalkeeper, 100, 8),
        (Position::Fullback, 200, 8),
        (Position::Defender, 300, 10),
        (Position::Midfielder, 400, 12),
        (Position::Forward, 500, 10),
        (Position::Coach, 600, 6),
    ];

    let mut pool = Vec::new();
    let mut club = 0u32;
    for (position, base_id, count) in plan {
        for i in 0..count {
            club = club % 18 + 1;
            pool.push(player(
                base_id + i as u32,
                position,
                2.0 + (i % 6) as f64,
                (3 + (i * 5) % 17) as f64,
                club,
            ));
        }
    }
    pool
}
