use std::str::FromStr;
use std::time::Duration;
use thirtyfour::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown browser `{0}` (expected chrome, edge, firefox or safari)")]
pub struct UnknownBrowser(pub String);

impl BrowserKind {
    pub const ALL: [Self; 4] = [Self::Chrome, Self::Edge, Self::Firefox, Self::Safari];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Edge => "edge",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
        }
    }

    /// Where the vendor's driver listens when started with its defaults.
    #[must_use]
    pub const fn default_endpoint(self) -> &'static str {
        match self {
            Self::Chrome => "http://localhost:9515",
            Self::Edge => "http://localhost:17556",
            Self::Firefox => "http://localhost:4444",
            Self::Safari => "http://localhost:4445",
        }
    }
}

impl FromStr for BrowserKind {
    type Err = UnknownBrowser;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownBrowser(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub implicit_wait_secs: u64,
    pub remote_hub: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            implicit_wait_secs: 3,
            remote_hub: None,
        }
    }
}

impl BrowserConfig {
    /// The hub when one is configured, otherwise the local driver for `kind`.
    #[must_use]
    pub fn endpoint(&self, kind: BrowserKind) -> &str {
        self.remote_hub
            .as_deref()
            .unwrap_or_else(|| kind.default_endpoint())
    }
}

pub async fn new_session(kind: BrowserKind, cfg: &BrowserConfig) -> WebDriverResult<WebDriver> {
    let url = cfg.endpoint(kind);
    let driver = match kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if cfg.headless {
                caps.set_headless()?;
            }
            WebDriver::new(url, caps).await?
        }
        BrowserKind::Edge => {
            let mut caps = DesiredCapabilities::edge();
            if cfg.headless {
                caps.set_headless()?;
            }
            WebDriver::new(url, caps).await?
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if cfg.headless {
                caps.set_headless()?;
            }
            WebDriver::new(url, caps).await?
        }
        // safaridriver has no headless switch
        BrowserKind::Safari => WebDriver::new(url, DesiredCapabilities::safari()).await?,
    };

    driver
        .set_implicit_wait_timeout(Duration::from_secs(cfg.implicit_wait_secs))
        .await?;
    Ok(driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_browsers_case_insensitively() {
        assert_eq!("chrome".parse::<BrowserKind>(), Ok(BrowserKind::Chrome));
        assert_eq!(" Firefox ".parse::<BrowserKind>(), Ok(BrowserKind::Firefox));
        let err = "lynx".parse::<BrowserKind>().unwrap_err();
        assert!(err.to_string().contains("lynx"));
    }

    #[test]
    fn keys_round_trip() {
        for kind in BrowserKind::ALL {
            assert_eq!(kind.key().parse::<BrowserKind>(), Ok(kind));
        }
    }

    #[test]
    fn hub_overrides_local_driver() {
        let mut cfg = BrowserConfig::default();
        assert_eq!(cfg.endpoint(BrowserKind::Edge), "http://localhost:17556");
        cfg.remote_hub = Some("http://grid:4444/wd/hub".to_string());
        assert_eq!(cfg.endpoint(BrowserKind::Edge), "http://grid:4444/wd/hub");
    }
}
