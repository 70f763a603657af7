use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::{ALWAYS_ACTIVE_RULES, LENGTH_STEP_PER_RULE};
use crate::rules::RuleKind;

const DEFAULT_RULES_DATA: &str = include_str!("../../pwchallenge-web/static/assets/data/rules.json");

/// Errors raised while loading or validating a rule catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse rule catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rule catalog contains no rules")]
    Empty,
    #[error("rule order {0} appears more than once")]
    DuplicateOrder(u32),
    #[error("rule {order} names unknown kind `{key}`")]
    UnknownKind { order: u32, key: String },
}

/// Reveal tuning: how many leading rules are always visible, and how many
/// characters each catalog index demands before it may unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub always_active: usize,
    pub length_step: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            always_active: ALWAYS_ACTIVE_RULES,
            length_step: LENGTH_STEP_PER_RULE,
        }
    }
}

impl GateConfig {
    /// Minimum input length (in characters) for the rule at `index` to unlock.
    #[must_use]
    pub const fn required_length(&self, index: usize) -> usize {
        index.saturating_mul(self.length_step)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub order: u32,
    pub kind: RuleKind,
    pub description: String,
}

impl Rule {
    /// Rule with the kind's stock description.
    #[must_use]
    pub fn new(order: u32, kind: RuleKind) -> Self {
        Self {
            order,
            kind,
            description: kind.description().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    order: u32,
    kind: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    gate: GateConfig,
    #[serde(default)]
    rules: Vec<RuleEntry>,
}

/// Ordered set of rules plus the gate that reveals them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCatalog {
    gate: GateConfig,
    rules: Vec<Rule>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::from_kinds(&RuleKind::ALL)
    }
}

impl RuleCatalog {
    /// The 25-rule catalog shipped with the game.
    #[must_use]
    pub fn standard() -> &'static Self {
        static CATALOG: OnceLock<RuleCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_RULES_DATA).unwrap_or_else(|err| {
            log::error!("bundled rule catalog rejected ({err}); using built-in order");
            Self::default()
        })
    }

    /// Parse and validate a catalog. Rules are sorted by `order`; entries without a
    /// description fall back to the kind's stock text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the JSON is malformed, names an unknown rule
    /// kind, repeats an order, has no rules, or its gate exceeds the rule count.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let rules = file
            .rules
            .into_iter()
            .map(|entry| {
                let kind = entry
                    .kind
                    .parse::<RuleKind>()
                    .map_err(|_| CatalogError::UnknownKind {
                        order: entry.order,
                        key: entry.kind.clone(),
                    })?;
                let description = entry
                    .description
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_else(|| kind.description().to_string());
                Ok(Rule {
                    order: entry.order,
                    kind,
                    description,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Self::from_rules(file.gate, rules)
    }

    /// Build a catalog from explicit rules.
    ///
    /// # Errors
    ///
    /// Same validation as [`RuleCatalog::from_json`].
    pub fn from_rules(gate: GateConfig, mut rules: Vec<Rule>) -> Result<Self, CatalogError> {
        if rules.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(rules.len());
        if let Some(dup) = rules.iter().find(|rule| !seen.insert(rule.order)) {
            return Err(CatalogError::DuplicateOrder(dup.order));
        }
        rules.sort_by_key(|rule| rule.order);
        Ok(Self { gate, rules })
    }

    /// Catalog of `kinds` in the given order, numbered from 1, with the default gate.
    /// Unlike the validated constructors this accepts an empty slice.
    #[must_use]
    pub fn from_kinds(kinds: &[RuleKind]) -> Self {
        let rules = kinds
            .iter()
            .zip(1_u32..)
            .map(|(kind, order)| Rule::new(order, *kind))
            .collect();
        Self {
            gate: GateConfig::default(),
            rules,
        }
    }

    #[must_use]
    pub fn with_gate(mut self, gate: GateConfig) -> Self {
        self.gate = gate;
        self
    }

    #[must_use]
    pub const fn gate(&self) -> GateConfig {
        self.gate
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.iter().map(|rule| rule.kind)
    }

    /// Catalog index of the rule with `order`.
    #[must_use]
    pub fn position_of(&self, order: u32) -> Option<usize> {
        self.rules.iter().position(|rule| rule.order == order)
    }
}
