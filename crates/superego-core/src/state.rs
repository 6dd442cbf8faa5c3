use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhaseName {
    #[serde(rename = "ANSWER_PHASE")]
    Answer,
    #[serde(rename = "GUESS_PHASE")]
    Guess,
    #[serde(rename = "RESULT_PHASE")]
    Result,
    #[serde(rename = "GAME_OVER_PHASE")]
    GameOver,
}

/// Immutable per-player snapshot fit for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub guid: Uuid,
    pub name: String,
    pub points: u32,
    pub points_change: i64,
    pub awaited_to_answer: bool,
    pub awaited_to_guess: bool,
    pub ready: bool,
}

/// Immutable view of the whole game fit for serialization and broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    #[serde(with = "crate::timestamp")]
    pub time: DateTime<Utc>,
    pub phase: GamePhaseName,
    pub player_states: Vec<PlayerState>,
    pub points_in_bank: i64,
    pub round_number: u32,
    pub current_card: Card,
    pub card_changed: bool,
}
