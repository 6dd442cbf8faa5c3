//! The inbound wire event and the action names it can carry.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAction {
    Answer,
    Guess,
    ChangeCard,
    Ready,
    Subscribe,
    Read,
}

impl EventAction {
    pub fn as_str(self) -> &'static str {
        match self {
            EventAction::Answer => "ANSWER",
            EventAction::Guess => "GUESS",
            EventAction::ChangeCard => "CHANGE_CARD",
            EventAction::Ready => "READY",
            EventAction::Subscribe => "SUBSCRIBE",
            EventAction::Read => "READ",
        }
    }

    pub fn from_str(text: &str) -> Option<Self> {
        match text {
            "ANSWER" => Some(EventAction::Answer),
            "GUESS" => Some(EventAction::Guess),
            "CHANGE_CARD" => Some(EventAction::ChangeCard),
            "READY" => Some(EventAction::Ready),
            "SUBSCRIBE" => Some(EventAction::Subscribe),
            "READ" => Some(EventAction::Read),
            _ => None,
        }
    }
}

/// A decoded inbound frame, timestamped at the moment the connection
/// handler finished reading it.
#[derive(Debug, Clone)]
pub struct Event {
    pub time_received: DateTime<Utc>,
    pub action: EventAction,
    pub issuer: Uuid,
    pub params: Vec<String>,
}
