//! Reveal gating and win detection.
//!
//! Gating is recomputed from scratch for every input: the leading
//! `always_active` rules are always shown, and any later rule at index `i` is
//! shown only while every earlier rule passes and the input is at least
//! `i * length_step` characters long. The challenge is won when the whole
//! catalog is shown and passing.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::RuleCatalog;
use crate::clock::{Clock, FixedClock};
use crate::rules::numeric::char_len;
use crate::state::RuleStatus;

/// Catalog indices of the currently active rules, ascending.
pub type ActiveSet = SmallVec<[usize; 32]>;

/// Outcome of one evaluation pass over a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    pub active: ActiveSet,
    /// Pass/fail for every catalog rule, active or not.
    pub results: Vec<bool>,
    pub won: bool,
    /// Hour the pass was evaluated at.
    pub hour: u32,
}

impl Evaluation {
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    #[must_use]
    pub fn passed(&self, index: usize) -> bool {
        self.results.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Active rules that currently fail.
    pub fn failing(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.iter().copied().filter(|&i| !self.passed(i))
    }

    /// Status rows for the active rules, in catalog order.
    #[must_use]
    pub fn statuses(&self, catalog: &RuleCatalog) -> Vec<RuleStatus> {
        self.active
            .iter()
            .filter_map(|&index| {
                catalog
                    .get(index)
                    .map(|rule| RuleStatus::new(rule, self.passed(index)))
            })
            .collect()
    }
}

/// Evaluate every rule once and derive the active set and win flag.
///
/// The clock is sampled once so every rule in the pass sees the same hour.
pub fn evaluate<C: Clock + ?Sized>(catalog: &RuleCatalog, input: &str, clock: &C) -> Evaluation {
    let hour = clock.local_hour();
    let clock = FixedClock::at(hour);
    let results: Vec<bool> = catalog
        .kinds()
        .map(|kind| kind.check(input, &clock))
        .collect();
    let active = gate_active(catalog, char_len(input), &results);
    let won = is_won(catalog.len(), &active, &results);
    Evaluation {
        active,
        results,
        won,
        hour,
    }
}

/// Active indices for precomputed per-rule results.
#[must_use]
pub fn gate_active(catalog: &RuleCatalog, input_len: usize, results: &[bool]) -> ActiveSet {
    let gate = catalog.gate();
    let mut active = ActiveSet::new();
    let mut prefix_passes = true;
    for index in 0..catalog.len() {
        let unlocked = index < gate.always_active
            || (prefix_passes && input_len >= gate.required_length(index));
        if unlocked {
            active.push(index);
        }
        prefix_passes &= results.get(index).copied().unwrap_or(false);
    }
    active
}

/// Won iff the catalog is non-empty, fully active, and every rule passes.
#[must_use]
pub fn is_won(catalog_len: usize, active: &[usize], results: &[bool]) -> bool {
    catalog_len > 0
        && active.len() == catalog_len
        && active
            .iter()
            .all(|&index| results.get(index).copied().unwrap_or(false))
}
