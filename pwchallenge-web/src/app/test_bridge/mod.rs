//! `window.__pwchallengeTest`: automation hooks installed when the page is
//! opened with `?test=1`.
#[cfg(not(target_arch = "wasm32"))]
mod stub;
#[cfg(target_arch = "wasm32")]
mod wasm;

use crate::app::state::AppState;
use thiserror::Error;
use yew::prelude::*;

/// Global the bridge is published under.
pub const BRIDGE_GLOBAL: &str = "__pwchallengeTest";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to set `{property}` on the bridge: {message}")]
    Property { property: &'static str, message: String },
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    stub::use_test_bridge(app_state);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    wasm::use_test_bridge(app_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_errors_describe_the_failure() {
        assert_eq!(BridgeError::NoWindow.to_string(), "no browser window available");
        let err = BridgeError::Property {
            property: "state",
            message: "frozen".into(),
        };
        assert_eq!(err.to_string(), "failed to set `state` on the bridge: frozen");
    }
}
