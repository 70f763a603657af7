use crate::catalog::{Rule, RuleCatalog};
use crate::clock::Clock;
use crate::gate::{Evaluation, evaluate};
use crate::state::{GameState, RuleStatus};

/// Rule-change notifications produced by one input update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Orders of rules that became active.
    pub unlocked: Vec<u32>,
    /// Orders of rules that stopped being active.
    pub relocked: Vec<u32>,
    /// `Some(true)` when the update won the challenge, `Some(false)` when it lost a win.
    pub won_changed: Option<bool>,
}

impl Transition {
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.unlocked.is_empty() && self.relocked.is_empty() && self.won_changed.is_none()
    }
}

/// High-level session wrapper binding a catalog and clock to the mutable game state.
#[derive(Debug, Clone)]
pub struct ChallengeSession<C: Clock> {
    catalog: RuleCatalog,
    clock: C,
    state: GameState,
    evaluation: Evaluation,
}

impl<C: Clock> ChallengeSession<C> {
    /// Fresh session with empty input.
    #[must_use]
    pub fn new(catalog: RuleCatalog, clock: C) -> Self {
        let evaluation = evaluate(&catalog, "", &clock);
        let state = GameState::from_evaluation("", &catalog, &evaluation);
        Self {
            catalog,
            clock,
            state,
            evaluation,
        }
    }

    /// Session over the bundled catalog.
    #[must_use]
    pub fn standard(clock: C) -> Self {
        Self::new(RuleCatalog::standard().clone(), clock)
    }

    /// Replace the input and re-derive everything from scratch.
    pub fn set_input(&mut self, input: impl Into<String>) -> Transition {
        let input = input.into();
        let evaluation = evaluate(&self.catalog, &input, &self.clock);
        let next = GameState::from_evaluation(&input, &self.catalog, &evaluation);
        let transition = self.diff(&next);
        self.log_transition(&transition);
        self.state = next;
        self.evaluation = evaluation;
        transition
    }

    /// Re-evaluate the current input, e.g. after the clock hour rolls over.
    pub fn refresh(&mut self) -> Transition {
        let input = std::mem::take(&mut self.state.current_input);
        self.set_input(input)
    }

    /// Back to the empty input.
    pub fn restart(&mut self) {
        log::debug!("challenge session restarted");
        let evaluation = evaluate(&self.catalog, "", &self.clock);
        self.state = GameState::from_evaluation("", &self.catalog, &evaluation);
        self.evaluation = evaluation;
    }

    fn diff(&self, next: &GameState) -> Transition {
        let prev = &self.state;
        Transition {
            unlocked: next
                .active_rule_ids
                .difference(&prev.active_rule_ids)
                .copied()
                .collect(),
            relocked: prev
                .active_rule_ids
                .difference(&next.active_rule_ids)
                .copied()
                .collect(),
            won_changed: (prev.won != next.won).then_some(next.won),
        }
    }

    fn log_transition(&self, transition: &Transition) {
        for order in &transition.unlocked {
            if let Some(rule) = self.rule_by_order(*order) {
                log::debug!("rule {order} ({}) unlocked", rule.kind);
            }
        }
        for order in &transition.relocked {
            if let Some(rule) = self.rule_by_order(*order) {
                log::debug!("rule {order} ({}) locked again", rule.kind);
            }
        }
        match transition.won_changed {
            Some(true) => log::info!("challenge won with {} rules", self.catalog.len()),
            Some(false) => log::info!("win lost; input no longer satisfies the catalog"),
            None => {}
        }
    }

    fn rule_by_order(&self, order: u32) -> Option<&Rule> {
        self.catalog
            .position_of(order)
            .and_then(|index| self.catalog.get(index))
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    #[must_use]
    pub const fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.state.current_input
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.state.won
    }

    /// Rows for the active rules, in catalog order.
    #[must_use]
    pub fn statuses(&self) -> Vec<RuleStatus> {
        self.evaluation.statuses(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::rules::RuleKind;
    use std::cell::Cell;

    fn catalog() -> RuleCatalog {
        RuleCatalog::from_kinds(&[
            RuleKind::MinLength,
            RuleKind::Uppercase,
            RuleKind::CurrentHour,
        ])
    }

    #[test]
    fn new_session_shows_leading_rules() {
        let session = ChallengeSession::new(catalog(), FixedClock::at(9));
        assert_eq!(session.input(), "");
        assert_eq!(
            session.state().active_rule_ids.iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(!session.is_won());
    }

    #[test]
    fn transitions_report_unlocks_wins_and_losses() {
        let mut session = ChallengeSession::new(catalog(), FixedClock::at(9));

        let t = session.set_input("Abcdefgh");
        assert_eq!(t.unlocked, vec![3]);
        assert!(t.relocked.is_empty());
        assert_eq!(t.won_changed, None);

        let t = session.set_input("Abcdefgh09");
        assert!(t.unlocked.is_empty());
        assert_eq!(t.won_changed, Some(true));
        assert!(session.is_won());

        let t = session.set_input("abcdefgh09");
        assert_eq!(t.relocked, vec![3]);
        assert_eq!(t.won_changed, Some(false));
        assert!(!session.is_won());

        assert!(session.set_input("abcdefgh09").is_quiet());
    }

    #[test]
    fn refresh_picks_up_a_new_hour() {
        struct Ticking(Cell<u32>);
        impl Clock for Ticking {
            fn local_hour(&self) -> u32 {
                self.0.get()
            }
        }

        let mut session = ChallengeSession::new(catalog(), Ticking(Cell::new(9)));
        session.set_input("Abcdefgh09");
        assert!(session.is_won());

        session.clock().0.set(10);
        let t = session.refresh();
        assert_eq!(t.won_changed, Some(false));
        assert_eq!(session.input(), "Abcdefgh09");
    }

    #[test]
    fn restart_clears_input() {
        let mut session = ChallengeSession::new(catalog(), FixedClock::at(9));
        session.set_input("Abcdefgh09");
        session.restart();
        assert_eq!(session.input(), "");
        assert_eq!(
            session.state().active_rule_ids.iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(!session.is_won());
        assert_eq!(session.statuses().len(), 2);
    }
}
