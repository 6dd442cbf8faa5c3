use chrono::{DateTime, Utc};

/// Wall-clock source, kept as a narrow trait so the state machine never
/// calls `Utc::now()` directly and stays deterministic under test.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

/// The real clock, used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
/// A clock that always returns the same instant, for deterministic tests.
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
