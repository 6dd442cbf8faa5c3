//! The outbound wire shape: one of ACK / ERR / STAT.

use serde::Serialize;
use superego_core::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "ACK")]
    Acknowledged,
    #[serde(rename = "ERR")]
    Error,
    #[serde(rename = "STAT")]
    GameState,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feedback<T: Serialize> {
    pub status: Status,
    pub data: Option<T>,
}

pub fn acknowledgement() -> String {
    serde_json::to_string(&Feedback::<()> {
        status: Status::Acknowledged,
        data: None,
    })
    .expect("Feedback<()> always serializes")
}

pub fn error(message: impl Into<String>) -> String {
    serde_json::to_string(&Feedback {
        status: Status::Error,
        data: Some(message.into()),
    })
    .expect("Feedback<String> always serializes")
}

pub fn game_state(state: &GameState) -> String {
    serde_json::to_string(&Feedback {
        status: Status::GameState,
        data: Some(state),
    })
    .expect("GameState always serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledgement_carries_no_data() {
        let text = acknowledgement();
        assert!(text.contains("\"ACK\""));
        assert!(text.contains("\"data\":null"));
    }

    #[test]
    fn error_carries_the_message_as_data() {
        let text = error("bad news");
        assert!(text.contains("\"ERR\""));
        assert!(text.contains("bad news"));
    }
}
