use pwchallenge_game::{Clock, FixedClock, GateConfig, RuleCatalog, RuleKind, evaluate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Fragments that satisfy (or nearly satisfy) many predicates, so random
/// concatenations get deep into the catalog instead of stalling at rule 1.
const FRAGMENTS: &[&str] = &[
    "A", "a", "z", " ", "1", "7", "12", "13", "25", "+", "=", "C", "He", "X", "♔", "♕", "🂡", "♪",
    "🎉", "#ABCDEF", "0.0.0.0", "golf", "senha", "deadbeef", "http://x", "aba", "{}", "{\"k\":1}",
    "e4", "Nf3", "QUJD",
];

fn random_input(rng: &mut ChaCha20Rng) -> String {
    let pieces = rng.gen_range(0..24);
    (0..pieces)
        .map(|_| FRAGMENTS[rng.gen_range(0..FRAGMENTS.len())])
        .collect()
}

/// Straight from the definition: rule i shows iff i is in the always-on prefix,
/// or every earlier rule passes and the input is long enough.
fn expected_active(catalog: &RuleCatalog, input: &str, hour: u32) -> Vec<usize> {
    let clock = FixedClock::at(hour);
    let results: Vec<bool> = catalog.kinds().map(|k| k.check(input, &clock)).collect();
    let len = input.chars().count();
    let gate = catalog.gate();
    (0..catalog.len())
        .filter(|&i| {
            i < gate.always_active
                || (results[..i].iter().all(|&r| r) && len >= i * gate.length_step)
        })
        .collect()
}

fn check_invariants(catalog: &RuleCatalog, input: &str, hour: u32) {
    let eval = evaluate(catalog, input, &FixedClock::at(hour));
    let expected = expected_active(catalog, input, hour);
    assert_eq!(eval.active.as_slice(), expected.as_slice(), "input {input:?}");

    let leading = catalog.gate().always_active.min(catalog.len());
    assert!(eval.active.starts_with(&(0..leading).collect::<Vec<_>>()));

    // the active set is always a prefix of the catalog
    assert!(eval.active.iter().enumerate().all(|(pos, &idx)| pos == idx));

    let all_pass = eval.results.iter().all(|&r| r);
    let full = eval.active.len() == catalog.len();
    assert_eq!(eval.won, full && all_pass && !catalog.is_empty(), "input {input:?}");
}

#[test]
fn random_inputs_respect_gating_on_the_standard_catalog() {
    let catalog = RuleCatalog::standard();
    for seed in 0..8_u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        for _ in 0..250 {
            let input = random_input(&mut rng);
            let hour = rng.gen_range(0..24);
            check_invariants(catalog, &input, hour);
        }
    }
}

#[test]
fn random_inputs_respect_gating_on_shuffled_catalogs() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    for _ in 0..40 {
        let count = rng.gen_range(0..=RuleKind::ALL.len());
        let kinds: Vec<RuleKind> = (0..count)
            .map(|_| RuleKind::ALL[rng.gen_range(0..RuleKind::ALL.len())])
            .collect();
        let gate = GateConfig {
            always_active: rng.gen_range(0..=2),
            length_step: rng.gen_range(0..=3),
        };
        let catalog = RuleCatalog::from_kinds(&kinds).with_gate(gate);
        for _ in 0..25 {
            let input = random_input(&mut rng);
            check_invariants(&catalog, &input, rng.gen_range(0..24));
        }
    }
}

#[test]
fn first_two_rules_show_for_any_input() {
    let catalog = RuleCatalog::standard();
    let clock = FixedClock::at(3);
    for input in ["", " ", "x", "🎉🎉🎉", "\n\t", "{\"a\":[1,2]}"] {
        let eval = evaluate(catalog, input, &clock);
        assert!(eval.is_active(0) && eval.is_active(1), "{input:?}");
        assert!(!eval.won);
    }
}

#[test]
fn clock_is_sampled_once_per_pass() {
    use std::cell::Cell;

    struct Drifting(Cell<u32>);
    impl Clock for Drifting {
        fn local_hour(&self) -> u32 {
            let hour = self.0.get();
            self.0.set(hour + 1);
            hour
        }
    }

    let catalog = RuleCatalog::from_kinds(&[RuleKind::CurrentHour, RuleKind::CurrentHour]);
    let clock = Drifting(Cell::new(5));
    let eval = evaluate(&catalog, "05", &clock);
    assert_eq!(eval.results, vec![true, true]);
    assert_eq!(clock.0.get(), 6);
}
