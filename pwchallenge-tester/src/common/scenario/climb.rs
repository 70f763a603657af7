//! Climb the reference catalog with a crafted password.
//!
//! The reference catalog has no winning password, so the climb is expected to
//! stall on the Base64 rule. Taking the chess glyph back out must relock
//! every rule past the chess rule.
use anyhow::{Context, Result, ensure};
use pwchallenge_game::{ChallengeSession, FixedClock, RuleCatalog};
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, SETTLE_TIMEOUT, ScenarioCtx, TestScenario, open_board,
    rendered_rule_count,
};
use crate::logic::LogicCtx;
use crate::logic::craft::{
    REFERENCE_STALL, REFERENCE_WITHOUT_PIECE, reference_password, without_chess_piece,
};

pub const NAME: &str = "Reference Catalog Climb";

pub struct ReferenceClimbScenario;

/// Order of the rule the climb is expected to stall on.
fn stall_order(catalog: &RuleCatalog) -> Result<u32> {
    catalog
        .get(REFERENCE_STALL - 1)
        .map(|rule| rule.order)
        .context("reference catalog is shorter than the stall point")
}

#[async_trait::async_trait]
impl BrowserScenario for ReferenceClimbScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let opened = open_board(driver, ctx).await?;
        let password = reference_password(opened.hour)?;
        let stall = stall_order(RuleCatalog::standard())?;

        let state = ctx.bridge.type_and_settle(&password, SETTLE_TIMEOUT).await?;
        if ctx.verbose {
            println!(
                "  ⌨️  Typed crafted password for hour {:02}: {} rules shown",
                state.hour,
                state.active.len()
            );
        }
        ensure!(
            state.active.len() == REFERENCE_STALL,
            "expected {REFERENCE_STALL} rules on screen, page shows {}",
            state.active.len()
        );
        ensure!(
            state.failing_orders() == [stall],
            "only rule {stall} should fail, page reports {:?}",
            state.failing_orders()
        );
        ensure!(!state.won, "the reference catalog cannot be won");
        ensure!(
            driver.find_all(By::Id("victory")).await?.is_empty(),
            "victory overlay shown without a win"
        );
        let rendered = rendered_rule_count(driver).await?;
        ensure!(
            rendered == REFERENCE_STALL,
            "page renders {rendered} rule cards"
        );

        let state = ctx
            .bridge
            .type_and_settle(&without_chess_piece(&password), SETTLE_TIMEOUT)
            .await?;
        ensure!(
            state.active.len() == REFERENCE_WITHOUT_PIECE,
            "dropping the chess piece should leave {REFERENCE_WITHOUT_PIECE} rules, page shows {}",
            state.active.len()
        );
        Ok(())
    }
}

impl CombinedScenario for ReferenceClimbScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(NAME, climb_check))
    }
}

fn climb_check(ctx: &LogicCtx) -> Result<()> {
    let password = reference_password(ctx.hour)?;
    let mut session = ChallengeSession::standard(FixedClock::at(ctx.hour));
    let stall = stall_order(session.catalog())?;

    // every prefix along the way stays short of a win
    let mut prefix = String::with_capacity(password.len());
    for ch in password.chars() {
        prefix.push(ch);
        let transition = session.set_input(prefix.as_str());
        ensure!(
            transition.won_changed.is_none() && !session.is_won(),
            "prefix {prefix:?} changed the win state"
        );
    }

    let eval = session.evaluation();
    ensure!(
        eval.active_count() == REFERENCE_STALL,
        "crafted password shows {} rules, expected {REFERENCE_STALL}",
        eval.active_count()
    );
    let failing: Vec<u32> = session
        .statuses()
        .iter()
        .filter(|status| !status.passed)
        .map(|status| status.order)
        .collect();
    ensure!(
        failing == [stall],
        "only rule {stall} should fail, got {failing:?}"
    );

    let transition = session.set_input(without_chess_piece(&password));
    ensure!(
        session.evaluation().active_count() == REFERENCE_WITHOUT_PIECE,
        "dropping the chess piece left {} rules",
        session.evaluation().active_count()
    );
    ensure!(
        transition.relocked.len() == REFERENCE_STALL - REFERENCE_WITHOUT_PIECE,
        "expected {} rules to relock, got {:?}",
        REFERENCE_STALL - REFERENCE_WITHOUT_PIECE,
        transition.relocked
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climb_check_holds_at_every_hour() {
        for hour in 0..24 {
            let ctx = LogicCtx {
                seed: 0,
                hour,
                iteration: 0,
                verbose: false,
            };
            climb_check(&ctx).unwrap_or_else(|err| panic!("hour {hour}: {err:#}"));
        }
    }

    #[test]
    fn stall_is_the_base64_rule() {
        let catalog = RuleCatalog::standard();
        let order = stall_order(catalog).unwrap();
        let index = catalog.position_of(order).unwrap();
        assert_eq!(
            catalog.get(index).map(|rule| rule.kind),
            Some(pwchallenge_game::RuleKind::Base64)
        );
    }
}
