//! Seeded random passwords checked against a from-scratch reading of the gate.
use anyhow::{Result, ensure};
use pwchallenge_game::rules::numeric::char_len;
use pwchallenge_game::{FixedClock, RuleCatalog, evaluate, hour_token};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, SETTLE_TIMEOUT, ScenarioCtx, TestScenario, open_board,
};
use crate::logic::LogicCtx;
use crate::logic::craft::winnable_catalog;

pub const NAME: &str = "Gating Sweep";

/// Random inputs per logic iteration.
const LOGIC_SAMPLES: usize = 64;
/// The browser round-trips every input, so it gets far fewer.
const BROWSER_SAMPLES: usize = 6;
const MAX_PIECES: usize = 20;

/// Pieces that each satisfy some rule, so concatenations climb past the opening rules.
const FRAGMENTS: &[&str] = &[
    "Password", "C", "aba", "+", "2", "13", " ", "z", "#C0FFEE", "10.0.0.1", "Golf", "senha",
    "cafe123", "♔", "🂡", "♪", "https://x", "{\"a\":1}", "Qxe4", "QUJD", "==", "☀", "Ne",
];

fn random_password(rng: &mut ChaCha20Rng, hour: u32) -> String {
    let hour = hour_token(hour);
    let pieces = rng.gen_range(0..=MAX_PIECES);
    let mut password = String::new();
    for _ in 0..pieces {
        // lean on the hour often enough to get past the clock rule
        if rng.gen_bool(0.15) {
            password.push_str(&hour);
        } else {
            password.push_str(FRAGMENTS[rng.gen_range(0..FRAGMENTS.len())]);
        }
    }
    password
}

/// Active indices straight from the rules: the always-on prefix, then every
/// rule whose predecessors all pass and whose length threshold is met.
fn derive_active(catalog: &RuleCatalog, password: &str, hour: u32) -> Vec<usize> {
    let clock = FixedClock::at(hour);
    let gate = catalog.gate();
    let len = char_len(password);
    let mut active = Vec::new();
    let mut prefix_passes = true;
    for (index, kind) in catalog.kinds().enumerate() {
        if index < gate.always_active || (prefix_passes && len >= gate.required_length(index)) {
            active.push(index);
        }
        prefix_passes &= kind.check(password, &clock);
    }
    active
}

fn check_password(catalog: &RuleCatalog, password: &str, hour: u32) -> Result<()> {
    let eval = evaluate(catalog, password, &FixedClock::at(hour));
    let expected = derive_active(catalog, password, hour);
    ensure!(
        eval.active.as_slice() == expected.as_slice(),
        "{password:?} at hour {hour:02}: engine shows {:?}, rules say {expected:?}",
        eval.active
    );

    let everything_passes = eval.results.iter().all(|&passed| passed);
    let expected_win =
        !catalog.is_empty() && expected.len() == catalog.len() && everything_passes;
    ensure!(
        eval.won == expected_win,
        "{password:?} at hour {hour:02}: won is {} but should be {expected_win}",
        eval.won
    );
    Ok(())
}

pub struct GatingSweepScenario;

#[async_trait::async_trait]
impl BrowserScenario for GatingSweepScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let opened = open_board(driver, ctx).await?;
        let catalog = RuleCatalog::standard();
        let passwords: Vec<String> = {
            let mut rng = ChaCha20Rng::seed_from_u64(ctx.seed);
            (0..BROWSER_SAMPLES)
                .map(|_| random_password(&mut rng, opened.hour))
                .filter(|password| !password.is_empty())
                .collect()
        };

        for password in &passwords {
            let state = ctx.bridge.type_and_settle(password, SETTLE_TIMEOUT).await?;
            let expected = derive_active(catalog, password, state.hour);
            let shown: Vec<usize> = state
                .active
                .iter()
                .filter_map(|status| catalog.position_of(status.order))
                .collect();
            ensure!(
                shown == expected,
                "page shows {shown:?} for {password:?} at hour {:02}, rules say {expected:?}",
                state.hour
            );
            if ctx.verbose {
                println!("  🔁 {password:?}: {} rules shown", shown.len());
            }
        }
        Ok(())
    }
}

impl CombinedScenario for GatingSweepScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(NAME, sweep_check))
    }
}

fn sweep_check(ctx: &LogicCtx) -> Result<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(ctx.seed);
    let standard = RuleCatalog::standard();
    let winnable = winnable_catalog();

    for _ in 0..LOGIC_SAMPLES {
        let password = random_password(&mut rng, ctx.hour);
        check_password(standard, &password, ctx.hour)?;
        check_password(&winnable, &password, ctx.hour)?;
    }
    if ctx.verbose {
        println!("  🔁 {LOGIC_SAMPLES} passwords agree with the gate at hour {:02}", ctx.hour);
    }
    Ok(())
}
