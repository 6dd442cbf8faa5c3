//! `serde` (de)serialization for [`GameState::time`](crate::state::GameState),
//! using the `MM/DD/YY HH:MM:SS` wire format clients expect.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const FORMAT: &str = "%m/%d/%y %H:%M:%S";

pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    time.format(FORMAT).to_string().serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let naive = NaiveDateTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)?;
    Ok(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper(#[serde(with = "super")] DateTime<Utc>);

    #[test]
    fn round_trips_to_the_second() {
        let now = Utc::now().date_naive().and_hms_opt(12, 34, 56).unwrap().and_utc();
        let json = serde_json::to_string(&Wrapper(now)).unwrap();
        let Wrapper(back) = serde_json::from_str(&json).unwrap();
        assert_eq!(back, now);
    }
}
