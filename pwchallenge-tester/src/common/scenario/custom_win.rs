use anyhow::{Result, bail, ensure};
use pwchallenge_game::{ChallengeSession, FixedClock};
use std::collections::BTreeSet;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::LogicCtx;
use crate::logic::craft::{WINNABLE_KINDS, winnable_catalog, winning_password, without_operators};

pub const NAME: &str = "Custom Catalog Win";

pub struct CustomWinScenario;

#[async_trait::async_trait]
impl BrowserScenario for CustomWinScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        bail!("the page serves the reference catalog, which has no winning password")
    }

    fn runs_in_browser(&self) -> bool {
        false
    }
}

impl CombinedScenario for CustomWinScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(NAME, custom_win_check))
    }
}

/// Type the winning password one char at a time, then break it.
fn custom_win_check(ctx: &LogicCtx) -> Result<()> {
    let mut session = ChallengeSession::new(winnable_catalog(), FixedClock::at(ctx.hour));
    let password = winning_password(ctx.hour);

    let mut ever_unlocked: BTreeSet<u32> = session.state().active_rule_ids.clone();
    let mut wins = 0usize;
    let mut prefix = String::with_capacity(password.len());
    for ch in password.chars() {
        prefix.push(ch);
        let transition = session.set_input(prefix.as_str());
        ever_unlocked.extend(transition.unlocked.iter().copied());
        match transition.won_changed {
            Some(true) => wins += 1,
            Some(false) => bail!("prefix {prefix:?} lost a win mid-climb"),
            None => {}
        }
    }

    ensure!(session.is_won(), "{password:?} should win at hour {:02}", ctx.hour);
    if ctx.verbose {
        println!("  🏆 {password:?} won at hour {:02}", ctx.hour);
    }
    ensure!(wins == 1, "the win should arrive exactly once, saw {wins}");
    ensure!(
        ever_unlocked.len() == WINNABLE_KINDS.len(),
        "only {} of {} rules were ever revealed",
        ever_unlocked.len(),
        WINNABLE_KINDS.len()
    );
    ensure!(
        session.statuses().iter().all(|status| status.passed),
        "a shown rule fails despite the win"
    );

    let transition = session.set_input(without_operators(&password));
    ensure!(
        transition.won_changed == Some(false),
        "removing the operators should clear the win, got {transition:?}"
    );
    let failing: Vec<usize> = session.evaluation().failing().collect();
    ensure!(
        failing == [WINNABLE_KINDS.len() - 1],
        "only the operator rule should fail, got {failing:?}"
    );

    let transition = session.set_input(password.as_str());
    ensure!(
        transition.won_changed == Some(true),
        "restoring the password should win again"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_win_check_holds_at_every_hour() {
        for hour in 0..24 {
            let ctx = LogicCtx {
                seed: 0,
                hour,
                iteration: 0,
                verbose: false,
            };
            custom_win_check(&ctx).unwrap_or_else(|err| panic!("hour {hour}: {err:#}"));
        }
    }

    #[test]
    fn exposes_logic_plan() {
        assert!(CustomWinScenario.as_logic_scenario().is_some());
    }
}
