use super::{BRIDGE_GLOBAL, BridgeError};
use crate::app::state::{AppState, BridgeSnapshot};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

struct BridgeBindings {
    accept: Closure<dyn FnMut()>,
    type_text: Closure<dyn FnMut(JsValue)>,
    state: Closure<dyn FnMut() -> JsValue>,
}

fn build_bridge(state: &AppState, latest: Rc<RefCell<BridgeSnapshot>>) -> BridgeBindings {
    let accept_state = state.clone();
    let accept = Closure::wrap(Box::new(move || {
        accept_state.accept();
    }) as Box<dyn FnMut()>);

    let type_state = state.clone();
    let type_text = Closure::wrap(Box::new(move |value: JsValue| {
        if let Some(text) = value.as_string() {
            type_state.type_input(text);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let state_fn = Closure::wrap(Box::new(move || {
        serde_wasm_bindgen::to_value(&*latest.borrow()).unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    BridgeBindings {
        accept,
        type_text,
        state: state_fn,
    }
}

fn set_property(
    target: &JsValue,
    property: &'static str,
    value: &JsValue,
) -> Result<(), BridgeError> {
    js_sys::Reflect::set(target, &JsValue::from_str(property), value)
        .map(|_| ())
        .map_err(|err| BridgeError::Property {
            property,
            message: dom::js_error_message(&err),
        })
}

fn attach_bridge(bindings: &BridgeBindings) -> Result<(), BridgeError> {
    let window = dom::window().ok_or(BridgeError::NoWindow)?;
    let bridge = js_sys::Object::new();
    set_property(&bridge, "accept", bindings.accept.as_ref())?;
    set_property(&bridge, "type", bindings.type_text.as_ref())?;
    set_property(&bridge, "state", bindings.state.as_ref())?;
    set_property(&window, BRIDGE_GLOBAL, &bridge)
}

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let latest = use_mut_ref(|| app_state.snapshot());
    *latest.borrow_mut() = app_state.snapshot();

    let state = app_state.clone();
    use_effect_with((), move |()| {
        if dom::test_mode_requested(&dom::location_search()) {
            let bindings = build_bridge(&state, latest);
            match attach_bridge(&bindings) {
                Ok(()) => {
                    log::info!("test bridge installed at window.{BRIDGE_GLOBAL}");
                    *bridge_handle.borrow_mut() = Some(bindings);
                }
                Err(err) => log::error!("test bridge unavailable: {err}"),
            }
        }
        || {}
    });
}
