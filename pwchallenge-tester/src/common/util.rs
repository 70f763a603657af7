use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thirtyfour::prelude::*;

use crate::browser::bridge::BRIDGE_GLOBAL;

/// `<base>/<browser>/<scenario>/seed-<seed>/<utc timestamp>`
#[must_use]
pub fn artifacts_dir(base: &str, browser: &str, scenario: &str, seed: u64) -> PathBuf {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    Path::new(base)
        .join(browser)
        .join(scenario)
        .join(format!("seed-{seed}"))
        .join(ts.to_string())
}

/// Everything worth keeping from a failed browser run.
#[derive(Debug, Default)]
pub struct Artifacts {
    pub screenshot: Option<Vec<u8>>,
    pub dom: Option<String>,
    pub state: Option<Value>,
    pub error_chain: String,
}

impl Artifacts {
    /// Gather what the page can still give; each piece is best effort.
    pub async fn collect(driver: &WebDriver, err: &anyhow::Error) -> Self {
        let script = format!("return window.{BRIDGE_GLOBAL} ? window.{BRIDGE_GLOBAL}.state() : null");
        Self {
            screenshot: driver.screenshot_as_png().await.ok(),
            dom: driver.source().await.ok(),
            state: driver
                .execute(script, vec![])
                .await
                .ok()
                .map(|ret| ret.json().clone())
                .filter(|value| !value.is_null()),
            error_chain: format!("{err:#}"),
        }
    }

    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating artifacts dir {}", dir.display()))?;

        if let Some(png) = &self.screenshot {
            fs::write(dir.join("screenshot.png"), png).context("writing screenshot")?;
        }
        if let Some(dom) = &self.dom {
            fs::write(dir.join("dom.html"), dom).context("writing dom")?;
        }
        if let Some(state) = &self.state {
            let payload = serde_json::to_vec_pretty(state).context("encoding bridge state")?;
            fs::write(dir.join("state.json"), payload).context("writing state")?;
        }
        fs::write(dir.join("error.txt"), &self.error_chain).context("writing error chain")?;
        Ok(())
    }
}

pub async fn capture_artifacts(driver: &WebDriver, dir: &Path, err: &anyhow::Error) -> Result<()> {
    Artifacts::collect(driver, err).await.write_to(dir)?;
    log::info!("saved failure artifacts to {}", dir.display());
    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}
