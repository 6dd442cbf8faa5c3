//! Everything that can go wrong between a raw frame arriving and a use
//! case being invoked. `GameError` from the core crate folds in as one
//! variant; every other variant covers decoding or authorization.

use uuid::Uuid;

use superego_core::GameError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NetError {
    #[error("incoming data is not valid UTF-8")]
    DataEncodingInvalid,

    #[error("frame is not a JSON object: {0}")]
    JsonDecode(String),

    #[error("event is missing the 'action' field")]
    MissingEventAction,

    #[error("event is missing the 'issuer' field")]
    MissingEventIssuer,

    #[error("event action unknown: {0}")]
    UnknownEventAction(String),

    #[error("event is missing parameters: {0:?}")]
    EventParametersMissing(&'static [&'static str]),

    #[error("invalid answer value: {0:?}")]
    InvalidAnswerValue(String),

    #[error("answer issuer {issuer} is not the current player {current_player}")]
    AnswerEventIssuerIsNotCurrentPlayer { issuer: Uuid, current_player: Uuid },

    #[error("guess issuer {issuer} is not one of the currently guessing players")]
    GuessEventIssuerIsNotCurrentlyGuessingPlayer { issuer: Uuid },

    #[error("issuer {0} is not a player in this game")]
    UnknownIssuer(Uuid),

    #[error(transparent)]
    Game(#[from] GameError),
}
