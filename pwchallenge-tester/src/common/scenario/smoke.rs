use anyhow::{Context, Result, ensure};
use pwchallenge_game::{ChallengeSession, FixedClock};
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, SETTLE_TIMEOUT, ScenarioCtx, TestScenario, open_board,
    rendered_rule_count,
};
use crate::logic::LogicCtx;

pub const NAME: &str = "Smoke Test";

const FIRST_WORD: &str = "Password";

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let opened = open_board(driver, ctx).await?;
        ensure!(opened.input.is_empty(), "input should start empty");
        ensure!(
            opened.active.len() == 2,
            "expected 2 opening rules, page shows {}",
            opened.active.len()
        );
        ensure!(!opened.won, "empty input must not win");

        // plain ASCII goes through real key events
        driver
            .find(By::Id("password"))
            .await?
            .send_keys(FIRST_WORD)
            .await?;
        let state = ctx
            .bridge
            .wait_for(SETTLE_TIMEOUT, |state| state.input == FIRST_WORD)
            .await?;
        if ctx.verbose {
            println!("  ⌨️  Typed {FIRST_WORD:?}: {} rules shown", state.active.len());
        }

        let counter = driver
            .find(By::Id("password-length"))
            .await
            .context("length counter missing")?
            .text()
            .await?;
        ensure!(
            counter.trim() == "Length: 8",
            "length counter reads {counter:?}"
        );
        ensure!(state.length == 8, "bridge reports length {}", state.length);

        let rendered = rendered_rule_count(driver).await?;
        ensure!(
            rendered == state.active.len(),
            "page renders {rendered} rule cards but the bridge reports {}",
            state.active.len()
        );
        ensure!(
            state.active.len() == 3,
            "8 chars with an uppercase letter should reveal the hour rule, got {} rules",
            state.active.len()
        );
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(NAME, smoke_check))
    }
}

fn smoke_check(ctx: &LogicCtx) -> Result<()> {
    let mut session = ChallengeSession::standard(FixedClock::at(ctx.hour));

    let opening = session.evaluation();
    ensure!(
        opening.active.as_slice() == [0, 1],
        "empty input should show rules 0 and 1, got {:?}",
        opening.active
    );
    ensure!(!session.is_won(), "empty input must not win");
    ensure!(
        session.state().current_input.is_empty(),
        "session should start empty"
    );

    let transition = session.set_input(FIRST_WORD);
    ensure!(
        session.evaluation().active.as_slice() == [0, 1, 2],
        "{FIRST_WORD:?} should reveal exactly the hour rule, got {:?}",
        session.evaluation().active
    );
    ensure!(
        transition.unlocked.len() == 1 && transition.relocked.is_empty(),
        "unexpected transition {transition:?}"
    );

    session.restart();
    ensure!(
        session.evaluation().active_count() == 2 && session.input().is_empty(),
        "restart should return to the opening state"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(hour: u32) -> LogicCtx {
        LogicCtx {
            seed: 1,
            hour,
            iteration: 0,
            verbose: false,
        }
    }

    #[test]
    fn smoke_exposes_logic_plan() {
        let logic = SmokeScenario.as_logic_scenario().expect("logic scenario");
        assert_eq!(logic.name, NAME);
    }

    #[test]
    fn smoke_check_passes_at_every_hour() {
        for hour in 0..24 {
            smoke_check(&ctx(hour)).unwrap_or_else(|err| panic!("hour {hour}: {err:#}"));
        }
    }
}
