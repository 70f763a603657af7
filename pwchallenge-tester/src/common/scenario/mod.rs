use anyhow::{Context, Result, ensure};
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::browser::{BridgeState, TestBridge};
use crate::logic::LogicCtx;

pub mod climb;
pub mod custom_win;
pub mod smoke;
pub mod sweep;

/// How long the page gets to re-render after an action.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

pub type LogicCheck = fn(&LogicCtx) -> Result<()>;

// Logic test scenario
#[derive(Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;

    /// Whether the served page can exercise this scenario at all.
    fn runs_in_browser(&self) -> bool {
        true
    }
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Load the page, check the bridge and get past the consent gate.
pub async fn open_board(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<BridgeState> {
    driver
        .goto(&ctx.base_url)
        .await
        .with_context(|| format!("loading {}", ctx.base_url))?;
    ctx.bridge.ensure_available().await?;

    let before = ctx.bridge.state().await?;
    ensure!(!before.accepted, "terms should start unaccepted");

    if let Ok(button) = driver.find(By::Id("accept-terms")).await {
        button.click().await?;
    } else {
        ctx.bridge.accept().await?;
        if ctx.verbose {
            println!("  🖱️  Consent button not found, accepted via bridge");
        }
    }
    let state = ctx
        .bridge
        .wait_for(SETTLE_TIMEOUT, |state| state.accepted)
        .await?;
    driver
        .find(By::Id("password"))
        .await
        .context("password field missing after accepting")?;

    if ctx.verbose {
        println!("  🌐 Board open at hour {:02}", state.hour);
    }
    Ok(state)
}

/// Rule cards the page is currently showing.
pub async fn rendered_rule_count(driver: &WebDriver) -> Result<usize> {
    Ok(driver.find_all(By::Css(".rule-card")).await?.len())
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.trim().to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "reference-climb" | "climb" => Some(Box::new(climb::ReferenceClimbScenario)),
        "custom-win" | "win" => Some(Box::new(custom_win::CustomWinScenario)),
        "gating-sweep" | "sweep" => Some(Box::new(sweep::GatingSweepScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", smoke::NAME),
        ("reference-climb", climb::NAME),
        ("custom-win", custom_win::NAME),
        ("gating-sweep", sweep::NAME),
    ]
}
