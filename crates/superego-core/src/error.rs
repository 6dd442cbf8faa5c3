use uuid::Uuid;

use crate::state::GamePhaseName;

/// Errors raised by the game-session state machine. Deliberately no
/// catch-all variant, so callers can match on exactly what went wrong.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("player {player} already answered")]
    PlayerAlreadyAnswered { player: Uuid },

    #[error("player {player} already bet")]
    PlayerAlreadyBet { player: Uuid },

    #[error("invalid bet: {bet}")]
    InvalidBetValue { bet: u8 },

    #[error("player {player} tried to bet {bet} while having {points} points")]
    PlayerCannotAffordBet { player: Uuid, bet: u8, points: u32 },

    #[error("player {player} already marked as ready")]
    PlayerAlreadyMarkedAsReady { player: Uuid },

    #[error("card already changed this answer phase")]
    CardAlreadyChanged,

    #[error("illegal game action: player {player}; action {action}; phase {phase:?}")]
    IllegalPlayerAction {
        player: Uuid,
        action: &'static str,
        phase: GamePhaseName,
    },
}
