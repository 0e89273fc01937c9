use gloo::console::warn;
use gloo::events::EventListener;
use gloo::utils::window;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::route::{path_from_hash, route, Route, Routed};

fn decode_path(path: String) -> String {
    match js_sys::decode_uri_component(&path) {
        Ok(decoded) => decoded.into(),
        Err(_) => {
            warn!(format!("could not decode route path {path:?}, using it as-is"));
            path
        }
    }
}

fn replace_url(target: &Route) {
    let replaced = window()
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&target.href())));
    if replaced.is_err() {
        warn!(format!("could not redirect to {}", target.href()));
    }
}

fn current_route() -> Route {
    let hash = window().location().hash().unwrap_or_default();
    match route(&decode_path(path_from_hash(&hash))) {
        Routed::Page(page) => page,
        Routed::Redirect(target) => {
            replace_url(&target);
            target
        }
    }
}

/// Route taken from the URL fragment, kept in sync with `hashchange`.
#[hook]
pub fn use_hash_route() -> Route {
    let current = use_state(current_route);

    {
        let current = current.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "hashchange", move |_| {
                current.set(current_route());
            });
            move || drop(listener)
        });
    }

    (*current).clone()
}
