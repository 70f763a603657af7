//! Wall-clock abstraction for the time-dependent rule.
//!
//! The engine never reads the system time directly. Hosts hand it a [`Clock`]
//! (the browser's `Date`, `chrono::Local` in the tester, a [`FixedClock`] in tests).
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// Source of the current local hour.
pub trait Clock {
    /// Current local hour in 24-hour format (`0..=23`).
    fn local_hour(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn local_hour(&self) -> u32 {
        (**self).local_hour()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn local_hour(&self) -> u32 {
        (**self).local_hour()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn local_hour(&self) -> u32 {
        (**self).local_hour()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn local_hour(&self) -> u32 {
        (**self).local_hour()
    }
}

/// A clock frozen at one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FixedClock {
    hour: u32,
}

impl FixedClock {
    /// Freeze the clock at `hour`, wrapped into `0..=23`.
    #[must_use]
    pub const fn at(hour: u32) -> Self {
        Self { hour: hour % 24 }
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }
}

impl Clock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.hour
    }
}

/// Zero-padded two digit rendering of an hour, e.g. `7` becomes `"07"`.
#[must_use]
pub fn hour_token(hour: u32) -> String {
    format!("{:02}", hour % 24)
}
