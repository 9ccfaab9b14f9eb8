use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use yew::Callback;

use crate::config::GLOBAL_NAVIGATE_FN;

/// Keeps `window.scrollToSection(name)` alive; removes it on drop.
pub struct GlobalNavigate {
    _closure: Closure<dyn Fn(JsValue)>,
}

/// Exposes named-section navigation to inline page scripts.
pub fn expose_scroll_to_section(navigate: Callback<String>) -> Option<GlobalNavigate> {
    let window = web_sys::window()?;
    let closure = Closure::<dyn Fn(JsValue)>::new(move |name: JsValue| {
        if let Some(name) = name.as_string() {
            navigate.emit(name);
        }
    });

    if let Err(e) = Reflect::set(&window, &JsValue::from_str(GLOBAL_NAVIGATE_FN), closure.as_ref()) {
        warn!("Could not expose {}: {:?}", GLOBAL_NAVIGATE_FN, e);
        return None;
    }
    Some(GlobalNavigate { _closure: closure })
}

impl Drop for GlobalNavigate {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = Reflect::delete_property(&window, &JsValue::from_str(GLOBAL_NAVIGATE_FN));
        }
    }
}
