use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GameError;
use crate::player::{Player, PlayersPool};

pub const MIN_BET: u32 = 1;
pub const MAX_BET: u32 = 2;

/// One of the three options on a card, or "not yet answered".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
}

/// Per-round answer submissions. Defaulting semantics ("missing = not
/// answered") are represented with `Option`/presence checks rather than a
/// sentinel value baked into the map, per the design note on defaulting
/// maps.
#[derive(Debug, Default)]
pub struct AnswersPool {
    answers: HashMap<Uuid, Answer>,
}

impl AnswersPool {
    pub fn add(&mut self, player: &Player, answer: Answer) -> Result<(), GameError> {
        if self.answers.contains_key(&player.id()) {
            return Err(GameError::PlayerAlreadyAnswered { player: player.id() });
        }
        self.answers.insert(player.id(), answer);
        Ok(())
    }

    pub fn get(&self, player: &Player) -> Option<Answer> {
        self.answers.get(&player.id()).copied()
    }

    pub fn has_answered(&self, player: &Player) -> bool {
        self.answers.contains_key(&player.id())
    }

    pub fn all_answered(&self, pool: &PlayersPool) -> bool {
        self.answers.len() == pool.count()
    }

    pub fn flush(&mut self) {
        self.answers.clear();
    }
}

/// Per-round bet submissions. `0` is never stored: a present entry always
/// holds a validated bet in `[MIN_BET, MAX_BET]`.
#[derive(Debug, Default)]
pub struct BetPool {
    bets: HashMap<Uuid, u32>,
}

impl BetPool {
    pub fn add(&mut self, player: &Player, bet: u32) -> Result<(), GameError> {
        if self.bets.contains_key(&player.id()) {
            return Err(GameError::PlayerAlreadyBet { player: player.id() });
        }
        if !(MIN_BET..=MAX_BET).contains(&bet) {
            return Err(GameError::InvalidBetValue { bet: bet as u8 });
        }
        self.bets.insert(player.id(), bet);
        Ok(())
    }

    pub fn get(&self, player: &Player) -> u32 {
        self.bets.get(&player.id()).copied().unwrap_or(0)
    }

    pub fn has_bet(&self, player: &Player) -> bool {
        self.get(player) != 0
    }

    pub fn flush(&mut self) {
        self.bets.clear();
    }
}

/// The shared point bank: points not currently held by any live player.
/// Seeded once from the *initial* player count at game start and never
/// re-seeded after eliminations (see `DESIGN.md` for the conservation
/// invariant this preserves).
#[derive(Debug)]
pub struct PointsBank {
    points: i64,
}

impl PointsBank {
    pub fn new(initial_player_count: usize) -> Self {
        Self {
            points: crate::player::INITIAL_PLAYER_POINTS as i64 * initial_player_count as i64,
        }
    }

    pub fn points_left(&self) -> i64 {
        self.points
    }

    pub fn give(&mut self, player: &mut Player, amount: u32) {
        self.points -= amount as i64;
        player.give(amount);
    }

    /// Validates via `Player::take` first; only credits the bank if that
    /// succeeds, so a failed take never leaves the bank in an inconsistent
    /// state.
    pub fn take(&mut self, player: &mut Player, amount: u32) -> Result<(), GameError> {
        player
            .take(amount)
            .map_err(|_| GameError::PlayerCannotAffordBet {
                player: player.id(),
                bet: amount as u8,
                points: player.points(),
            })?;
        self.points += amount as i64;
        Ok(())
    }
}
