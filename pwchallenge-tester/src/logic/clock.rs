use chrono::{Local, Timelike};
use pwchallenge_game::{Clock, FixedClock};

/// Wall clock in the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Hour to run with: the pinned `--hour` when given, otherwise the local one.
#[must_use]
pub fn resolve_hour(pinned: Option<u32>) -> FixedClock {
    FixedClock::at(pinned.unwrap_or_else(|| LocalClock.local_hour()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_reports_a_valid_hour() {
        assert!(LocalClock.local_hour() < 24);
    }

    #[test]
    fn pinned_hour_wins_over_local_time() {
        assert_eq!(resolve_hour(Some(7)).hour(), 7);
        assert!(resolve_hour(None).hour() < 24);
    }
}
