use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::CARD_STAGGER_MS;
use crate::controller::reveal::stagger_delay;

/// Elements observed for reveal besides the sections themselves.
pub const OBSERVED_CARDS: &str = ".program-card, .service-item, .feature, .contact-item";
const STAGGERED_CARDS: &str = ".program-card, .service-item, .feature";
const STAT_ITEMS: &str = ".stat-item";

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Marks `container` active and staggers its cards in. Returns whether it
/// holds stat counters that should start.
pub fn reveal(container: &Element) -> bool {
    let _ = container.class_list().add_1("active");

    for (index, card) in query_all(container, STAGGERED_CARDS).into_iter().enumerate() {
        Timeout::new(stagger_delay(index, CARD_STAGGER_MS), move || {
            if let Some(card) = card.dyn_ref::<HtmlElement>() {
                let _ = card.style().set_property("animation", "fadeInUp 0.6s ease forwards");
            }
        })
        .forget();
    }

    !query_all(container, STAT_ITEMS).is_empty()
}
