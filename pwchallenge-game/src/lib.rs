//! Ultimate Password Challenge rule engine
//!
//! Platform-agnostic core for the password challenge: the rule catalog, the
//! predicates behind each rule, reveal gating, win detection and the play
//! session. This crate has no UI or platform-specific dependencies; hosts
//! inject the wall clock through [`Clock`].

pub mod catalog;
pub mod clock;
pub mod constants;
pub mod gate;
pub mod rules;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use catalog::{CatalogError, GateConfig, Rule, RuleCatalog};
pub use clock::{Clock, FixedClock, hour_token};
pub use gate::{ActiveSet, Evaluation, evaluate, gate_active, is_won};
pub use rules::{RuleKind, UnknownRuleKind};
pub use session::{ChallengeSession, Transition};
pub use state::{GameState, RuleStatus};
