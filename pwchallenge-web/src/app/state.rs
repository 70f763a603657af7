use crate::clock::{SharedClock, host_clock};
use pwchallenge_game::{ChallengeSession, RuleCatalog, RuleStatus};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::prelude::*;

/// Everything the shell renders: the consent flag and the play session.
#[derive(Clone)]
pub struct ChallengeModel {
    pub consent_accepted: bool,
    pub session: ChallengeSession<SharedClock>,
    /// Active rule rows, rebuilt only when the input changes.
    pub statuses: Rc<Vec<RuleStatus>>,
}

impl ChallengeModel {
    #[must_use]
    pub fn new(catalog: RuleCatalog, clock: SharedClock) -> Self {
        let session = ChallengeSession::new(catalog, clock);
        Self {
            consent_accepted: false,
            statuses: Rc::new(session.statuses()),
            session,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> BridgeSnapshot {
        BridgeSnapshot {
            accepted: self.consent_accepted,
            input: self.session.input().to_string(),
            length: self.session.state().input_len(),
            hour: self.session.evaluation().hour,
            active: self.statuses.to_vec(),
            won: self.session.is_won(),
        }
    }
}

pub enum ChallengeAction {
    Accept,
    Type(String),
}

impl Reducible for ChallengeModel {
    type Action = ChallengeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ChallengeAction::Accept => {
                if self.consent_accepted {
                    return self;
                }
                log::info!("challenge terms accepted");
                let mut next = (*self).clone();
                next.consent_accepted = true;
                Rc::new(next)
            }
            ChallengeAction::Type(input) => {
                if !self.consent_accepted || self.session.input() == input {
                    return self;
                }
                let mut next = (*self).clone();
                next.session.set_input(input);
                next.statuses = Rc::new(next.session.statuses());
                Rc::new(next)
            }
        }
    }
}

/// JSON view of the shell handed to automation through the test bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSnapshot {
    pub accepted: bool,
    pub input: String,
    pub length: usize,
    pub hour: u32,
    pub active: Vec<RuleStatus>,
    pub won: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub model: UseReducerHandle<ChallengeModel>,
}

/// Missing overrides fall back to the bundled catalog and the host clock.
#[hook]
pub fn use_app_state(catalog: Option<Rc<RuleCatalog>>, clock: Option<SharedClock>) -> AppState {
    AppState {
        model: use_reducer(move || {
            let catalog = catalog.map_or_else(
                || RuleCatalog::standard().clone(),
                |catalog| (*catalog).clone(),
            );
            ChallengeModel::new(catalog, clock.unwrap_or_else(host_clock))
        }),
    }
}

impl AppState {
    pub fn accept(&self) {
        self.model.dispatch(ChallengeAction::Accept);
    }

    pub fn type_input(&self, input: String) {
        self.model.dispatch(ChallengeAction::Type(input));
    }

    #[must_use]
    pub fn consent_accepted(&self) -> bool {
        self.model.consent_accepted
    }

    #[must_use]
    pub fn snapshot(&self) -> BridgeSnapshot {
        self.model.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwchallenge_game::{Clock, FixedClock, RuleKind};
    use std::cell::Cell;

    /// Moves one hour forward every time it is read.
    struct TickingClock(Cell<u32>);

    impl Clock for TickingClock {
        fn local_hour(&self) -> u32 {
            let hour = self.0.get();
            self.0.set((hour + 1) % 24);
            hour
        }
    }

    fn model() -> Rc<ChallengeModel> {
        let catalog = RuleCatalog::from_kinds(&[RuleKind::MinLength, RuleKind::Uppercase]);
        Rc::new(ChallengeModel::new(catalog, Rc::new(FixedClock::at(8))))
    }

    #[test]
    fn typing_is_ignored_until_terms_are_accepted() {
        let start = model();
        let typed = start.clone().reduce(ChallengeAction::Type("Abcdefgh".into()));
        assert!(Rc::ptr_eq(&start, &typed));

        let accepted = start.reduce(ChallengeAction::Accept);
        assert!(accepted.consent_accepted);
        let typed = accepted.reduce(ChallengeAction::Type("Abcdefgh".into()));
        assert!(typed.session.is_won());
    }

    #[test]
    fn accepting_twice_keeps_the_same_model() {
        let accepted = model().reduce(ChallengeAction::Accept);
        let again = accepted.clone().reduce(ChallengeAction::Accept);
        assert!(Rc::ptr_eq(&accepted, &again));
    }

    #[test]
    fn snapshot_reports_char_length_and_statuses() {
        let model = model()
            .reduce(ChallengeAction::Accept)
            .reduce(ChallengeAction::Type("♪♪♪".into()));
        let snap = model.snapshot();
        assert!(snap.accepted);
        assert_eq!(snap.length, 3);
        assert_eq!(snap.hour, 8);
        assert_eq!(snap.active.len(), 2);
        assert!(!snap.won);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["active"][0]["key"], "min_length");
    }

    #[test]
    fn snapshot_hour_matches_the_last_evaluation() {
        let catalog = RuleCatalog::from_kinds(&[RuleKind::CurrentHour, RuleKind::Uppercase]);
        let model = Rc::new(ChallengeModel::new(
            catalog,
            Rc::new(TickingClock(Cell::new(8))),
        ))
        .reduce(ChallengeAction::Accept)
        .reduce(ChallengeAction::Type("at 09".into()));
        let snap = model.snapshot();
        assert_eq!(snap.hour, 9);
        assert!(snap.active[0].passed);
        // a second read would see 10
        assert_eq!(model.snapshot().hour, 9);
    }
}
