use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// The global `window`, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Query string of the current page.
#[must_use]
pub fn location_search() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// True when the query string carries `test=1`.
#[must_use]
pub fn test_mode_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "test=1")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_needs_exact_pair() {
        assert!(test_mode_requested("?test=1"));
        assert!(test_mode_requested("?lang=en&test=1"));
        assert!(!test_mode_requested("?test=10"));
        assert!(!test_mode_requested(""));
    }
}
