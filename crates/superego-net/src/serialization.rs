//! Turning an inbound text frame into an [`Event`].

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::error::NetError;
use crate::events::{Event, EventAction};

pub fn decode_event(text: &str, time_received: DateTime<Utc>) -> Result<Event, NetError> {
    let value: Value = serde_json::from_str(text).map_err(|e| NetError::JsonDecode(e.to_string()))?;
    let object = value.as_object().ok_or_else(|| NetError::JsonDecode("expected a JSON object".into()))?;

    let action_text = object
        .get("action")
        .and_then(Value::as_str)
        .ok_or(NetError::MissingEventAction)?;
    let action = EventAction::from_str(action_text)
        .ok_or_else(|| NetError::UnknownEventAction(action_text.to_string()))?;

    let issuer_text = object
        .get("issuer")
        .and_then(Value::as_str)
        .ok_or(NetError::MissingEventIssuer)?;
    let issuer = Uuid::parse_str(issuer_text)
        .map_err(|_| NetError::JsonDecode(format!("issuer is not a UUID: {issuer_text}")))?;

    let params = match object.get("params") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(_) => return Err(NetError::JsonDecode("params must be an array".into())),
    };

    Ok(Event {
        time_received,
        action,
        issuer,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_well_formed_event() {
        let issuer = Uuid::new_v4();
        let text = format!(r#"{{"action":"ANSWER","issuer":"{issuer}","params":["A"]}}"#);
        let event = decode_event(&text, Utc::now()).unwrap();
        assert_eq!(event.action, EventAction::Answer);
        assert_eq!(event.issuer, issuer);
        assert_eq!(event.params, vec!["A".to_string()]);
    }

    #[test]
    fn params_default_to_empty() {
        let issuer = Uuid::new_v4();
        let text = format!(r#"{{"action":"READY","issuer":"{issuer}"}}"#);
        let event = decode_event(&text, Utc::now()).unwrap();
        assert!(event.params.is_empty());
    }

    #[test]
    fn missing_action_is_an_error() {
        let issuer = Uuid::new_v4();
        let text = format!(r#"{{"issuer":"{issuer}"}}"#);
        assert!(matches!(decode_event(&text, Utc::now()), Err(NetError::MissingEventAction)));
    }

    #[test]
    fn missing_issuer_is_an_error() {
        let text = r#"{"action":"READY"}"#;
        assert!(matches!(decode_event(text, Utc::now()), Err(NetError::MissingEventIssuer)));
    }

    #[test]
    fn unknown_action_is_an_error() {
        let issuer = Uuid::new_v4();
        let text = format!(r#"{{"action":"NOPE","issuer":"{issuer}"}}"#);
        assert!(matches!(decode_event(&text, Utc::now()), Err(NetError::UnknownEventAction(_))));
    }
}
