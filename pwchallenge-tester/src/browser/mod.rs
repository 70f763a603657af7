pub mod bridge;
pub mod session;

pub use bridge::{BridgeState, TestBridge};
pub use session::{BrowserConfig, BrowserKind, new_session};
