use pwchallenge_game::{CatalogError, FixedClock, GateConfig, RuleCatalog, RuleKind, evaluate};
use serde_json::Value;

const RULES_JSON: &str = include_str!("../../pwchallenge-web/static/assets/data/rules.json");

#[test]
fn bundled_rules_file_has_expected_shape() {
    let value: Value = serde_json::from_str(RULES_JSON).unwrap();
    assert_eq!(value["gate"]["always_active"], 2);
    assert_eq!(value["gate"]["length_step"], 2);

    let rules = value["rules"].as_array().unwrap();
    assert_eq!(rules.len(), RuleKind::ALL.len());
    for (entry, kind) in rules.iter().zip(RuleKind::ALL) {
        assert!(entry["order"].is_u64());
        assert_eq!(entry["kind"], kind.key());
        let text = entry["description"].as_str().unwrap();
        assert!(!text.is_empty());
    }
}

#[test]
fn every_rule_description_is_phrased_as_a_requirement() {
    for rule in RuleCatalog::standard().rules() {
        assert!(
            rule.description.starts_with("Your password")
                || rule.description.starts_with("The "),
            "{}",
            rule.description
        );
    }
}

#[test]
fn custom_catalog_file_round_trips_through_the_engine() {
    let json = r#"{
        "gate": { "always_active": 1, "length_step": 1 },
        "rules": [
            { "order": 10, "kind": "url" },
            { "order": 20, "kind": "musical_note", "description": "Sing" }
        ]
    }"#;
    let catalog = RuleCatalog::from_json(json).unwrap();
    assert_eq!(
        catalog.gate(),
        GateConfig {
            always_active: 1,
            length_step: 1
        }
    );
    let eval = evaluate(&catalog, "http://a♪", &FixedClock::at(0));
    assert!(eval.won);
    let statuses = eval.statuses(&catalog);
    assert_eq!(statuses[1].description, "Sing");
    assert_eq!(statuses[1].order, 20);

    let value = serde_json::to_value(&statuses[0]).unwrap();
    assert_eq!(value["key"], "url");
}

#[test]
fn kind_keys_tolerate_case_and_whitespace() {
    let json = r#"{"rules":[{"order":1,"kind":" Chess_Move "}]}"#;
    let catalog = RuleCatalog::from_json(json).unwrap();
    assert_eq!(catalog.rules()[0].kind, RuleKind::ChessMove);
}

#[test]
fn single_rule_catalog_gates_and_wins() {
    let catalog = RuleCatalog::from_json(r#"{"rules":[{"order":1,"kind":"url"}]}"#).unwrap();
    let clock = FixedClock::at(0);

    let eval = evaluate(&catalog, "", &clock);
    assert_eq!(eval.active.as_slice(), &[0]);
    assert!(!eval.won);

    let eval = evaluate(&catalog, "http://x", &clock);
    assert_eq!(eval.active.as_slice(), &[0]);
    assert!(eval.won);
}

#[test]
fn errors_render_readable_messages() {
    let err = RuleCatalog::from_json(r#"{"rules":[{"order":3,"kind":"nope"}]}"#).unwrap_err();
    assert_eq!(err.to_string(), "rule 3 names unknown kind `nope`");
    assert!(matches!(err, CatalogError::UnknownKind { .. }));

    let err = RuleCatalog::from_json("{}").unwrap_err();
    assert_eq!(err.to_string(), "rule catalog contains no rules");
}
