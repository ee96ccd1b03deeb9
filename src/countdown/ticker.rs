use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use super::{RemainingTime, compute_remaining};

#[derive(Debug)]
pub struct Cadence {
    period: Duration,
    last: Instant,
}

impl Cadence {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, last: now }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.period {
            self.last = now;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct LiveCountdown {
    deadline: Option<String>,
    remaining: RemainingTime,
    was_running: bool,
}

impl LiveCountdown {
    pub fn new(deadline: Option<&str>, now: DateTime<Utc>) -> Self {
        let remaining = compute_remaining(deadline, now);
        Self {
            deadline: deadline.map(str::to_string),
            remaining,
            was_running: remaining.is_running(),
        }
    }

    pub fn remaining(&self) -> RemainingTime {
        self.remaining
    }

    pub fn refresh(&mut self, now: DateTime<Utc>) -> bool {
        self.remaining = compute_remaining(self.deadline.as_deref(), now);
        let running = self.remaining.is_running();
        let crossed_zero = self.was_running && !running;
        self.was_running = running;
        crossed_zero
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, TimeZone};

    use super::*;

    #[test]
    fn test_cadence_fires_once_per_period() {
        let start = Instant::now();
        let mut cadence = Cadence::new(Duration::from_millis(1000), start);

        assert!(!cadence.due(start + Duration::from_millis(999)));
        assert!(cadence.due(start + Duration::from_millis(1000)));
        assert!(!cadence.due(start + Duration::from_millis(1500)));
        assert!(cadence.due(start + Duration::from_millis(2100)));
    }

    #[test]
    fn test_live_countdown_reports_zero_crossing_once() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let deadline = (now + ChronoDuration::seconds(2)).to_rfc3339();
        let mut countdown = LiveCountdown::new(Some(&deadline), now);

        assert!(!countdown.refresh(now + ChronoDuration::seconds(1)));
        assert_eq!(countdown.remaining().seconds, 1);
        assert!(countdown.refresh(now + ChronoDuration::seconds(2)));
        assert!(!countdown.refresh(now + ChronoDuration::seconds(3)));
        assert!(countdown.remaining().is_expired());
    }

    #[test]
    fn test_live_countdown_without_deadline_never_crosses() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut countdown = LiveCountdown::new(None, now);

        assert!(!countdown.refresh(now + ChronoDuration::seconds(5)));
        assert_eq!(countdown.remaining(), RemainingTime::ZERO);
    }
}
