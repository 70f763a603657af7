use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Rule, RuleCatalog};
use crate::gate::Evaluation;
use crate::rules::RuleKind;

/// Snapshot of a play session: what the player typed, which rules are showing,
/// and whether the challenge is currently won.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub current_input: String,
    /// Orders of the active rules.
    pub active_rule_ids: BTreeSet<u32>,
    pub won: bool,
}

impl GameState {
    #[must_use]
    pub fn from_evaluation(input: &str, catalog: &RuleCatalog, eval: &Evaluation) -> Self {
        Self {
            current_input: input.to_string(),
            active_rule_ids: eval
                .active
                .iter()
                .filter_map(|&index| catalog.get(index).map(|rule| rule.order))
                .collect(),
            won: eval.won,
        }
    }

    #[must_use]
    pub fn input_len(&self) -> usize {
        self.current_input.chars().count()
    }

    #[must_use]
    pub fn is_active(&self, order: u32) -> bool {
        self.active_rule_ids.contains(&order)
    }
}

/// One rendered rule row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleStatus {
    pub order: u32,
    #[serde(rename = "key")]
    pub kind: RuleKind,
    pub description: String,
    pub passed: bool,
}

impl RuleStatus {
    #[must_use]
    pub fn new(rule: &Rule, passed: bool) -> Self {
        Self {
            order: rule.order,
            kind: rule.kind,
            description: rule.description.clone(),
            passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_kind_as_key() {
        let status = RuleStatus::new(&Rule::new(7, RuleKind::ElementSymbol), true);
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["key"], "element_symbol");
        assert_eq!(value["order"], 7);
        assert_eq!(value["passed"], true);
    }

    #[test]
    fn input_len_counts_characters() {
        let state = GameState {
            current_input: "♔🂡♪".to_string(),
            ..GameState::default()
        };
        assert_eq!(state.input_len(), 3);
        assert!(!state.is_active(1));
    }
}
