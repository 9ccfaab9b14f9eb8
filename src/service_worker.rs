use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::Reflect;

use crate::config::SERVICE_WORKER_PATH;

/// Registers the caching worker once the page has loaded. Failures are only
/// logged.
pub fn register_on_load() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let supported = Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !supported {
        return;
    }

    let loaded = window
        .document()
        .map(|doc| doc.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        spawn_local(register());
        return;
    }

    let on_load = Closure::once_into_js(|| spawn_local(register()));
    if let Err(e) = window.add_event_listener_with_callback("load", on_load.unchecked_ref()) {
        warn!("SW registration skipped: {:?}", e);
    }
}

async fn register() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().service_worker().register(SERVICE_WORKER_PATH);
    match JsFuture::from(promise).await {
        Ok(registration) => info!("SW registered: {:?}", registration),
        Err(e) => warn!("SW registration failed: {:?}", e),
    }
}
