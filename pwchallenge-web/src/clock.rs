//! Host clocks for the browser shell.
use pwchallenge_game::Clock;
use std::rc::Rc;

/// Clock handle shared between the app state and its components.
pub type SharedClock = Rc<dyn Clock>;

/// Local time as the browser sees it.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl Clock for BrowserClock {
    fn local_hour(&self) -> u32 {
        js_sys::Date::new_0().get_hours()
    }
}

/// Server-side renders have no browser; they fall back to UTC.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for UtcClock {
    fn local_hour(&self) -> u32 {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        u32::try_from((secs / 3600) % 24).unwrap_or_default()
    }
}

/// The clock the running host should use.
#[must_use]
pub fn host_clock() -> SharedClock {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserClock)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(UtcClock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_clock_reports_a_valid_hour() {
        assert!(host_clock().local_hour() < 24);
    }
}
