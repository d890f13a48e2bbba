//! Injectable time source.
//!
//! Cache expiry and the mock generator's time-window filters all read the
//! current time through [`Clock`], so tests can drive TTL and scheduling
//! logic with a [`ManualClock`] instead of waiting on the wall clock.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Cloning shares the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.lock() = instant;
    }

    pub fn advance(&self, delta: Duration) {
        let mut current = self.lock();
        *current = *current + delta;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(Utc::now());
        let before = clock.now();
        clock.advance(Duration::milliseconds(1500));
        assert_eq!(clock.now() - before, Duration::milliseconds(1500));
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(Utc::now());
        let other = clock.clone();
        clock.advance(Duration::seconds(10));
        assert_eq!(clock.now(), other.now());
    }
}
