use anyhow::{Context, Result, bail};
use pwchallenge_game::RuleStatus;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

/// Global the page installs when loaded with `?test=1`.
pub const BRIDGE_GLOBAL: &str = "__pwchallengeTest";

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the page reports through `state()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BridgeState {
    pub accepted: bool,
    pub input: String,
    pub length: usize,
    pub hour: u32,
    pub active: Vec<RuleStatus>,
    pub won: bool,
}

impl BridgeState {
    #[must_use]
    pub fn failing_orders(&self) -> Vec<u32> {
        self.active
            .iter()
            .filter(|status| !status.passed)
            .map(|status| status.order)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute(format!("return !!window.{BRIDGE_GLOBAL}"), vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("{BRIDGE_GLOBAL} is not available. Did you pass ?test=1 to the page?");
        }
        Ok(())
    }

    pub async fn accept(&self) -> Result<()> {
        self.driver
            .execute(format!("window.{BRIDGE_GLOBAL}.accept()"), vec![])
            .await?;
        Ok(())
    }

    /// Replace the password field's value, bypassing the keyboard.
    ///
    /// `WebDriver` key events cannot carry characters outside the BMP, which
    /// several rules need.
    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.driver
            .execute(
                format!("window.{BRIDGE_GLOBAL}.type(arguments[0])"),
                vec![text.into()],
            )
            .await?;
        Ok(())
    }

    pub async fn state(&self) -> Result<BridgeState> {
        let result = self
            .driver
            .execute(format!("return window.{BRIDGE_GLOBAL}.state()"), vec![])
            .await?;
        serde_json::from_value(result.json().clone()).context("parsing bridge state")
    }

    /// Poll `state()` until `ready` holds or `timeout` passes.
    pub async fn wait_for<F>(&self, timeout: Duration, ready: F) -> Result<BridgeState>
    where
        F: Fn(&BridgeState) -> bool + Send,
    {
        let deadline = Instant::now() + timeout;
        loop {
            let state = self.state().await?;
            if ready(&state) {
                return Ok(state);
            }
            if Instant::now() >= deadline {
                bail!("bridge state did not settle within {timeout:?}; last seen {state:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Type `text` and wait for the page to re-render with it.
    pub async fn type_and_settle(&self, text: &str, timeout: Duration) -> Result<BridgeState> {
        self.type_text(text).await?;
        self.wait_for(timeout, |state| state.input == text)
            .await
            .with_context(|| format!("typing {text:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwchallenge_game::{Rule, RuleKind};
    use serde_json::json;

    #[test]
    fn parses_the_page_snapshot() {
        let raw = json!({
            "accepted": true,
            "input": "Password",
            "length": 8,
            "hour": 13,
            "active": [
                { "order": 1, "key": "min_length", "description": "x", "passed": true },
                { "order": 3, "key": "current_hour", "description": "y", "passed": false }
            ],
            "won": false
        });
        let state: BridgeState = serde_json::from_value(raw).unwrap();
        assert_eq!(state.hour, 13);
        assert_eq!(state.active[1].kind, RuleKind::CurrentHour);
        assert_eq!(state.failing_orders(), vec![3]);
    }

    #[test]
    fn default_state_has_nothing_failing() {
        let mut state = BridgeState::default();
        assert!(state.failing_orders().is_empty());
        state
            .active
            .push(RuleStatus::new(&Rule::new(1, RuleKind::Uppercase), false));
        assert_eq!(state.failing_orders(), vec![1]);
    }
}
