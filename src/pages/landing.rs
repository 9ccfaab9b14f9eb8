use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animate::{self, OBSERVED_CARDS};
use crate::bindings;
use crate::components::contact_form::ContactFormView;
use crate::components::nav::Nav;
use crate::components::notification::Notifications;
use crate::components::stat_counter::StatCounter;
use crate::components::truck::Truck;
use crate::config::{EASTER_EGG_DURATION_MS, NAV_COOLDOWN_MS};
use crate::controller::notify::{NotificationAction, NotificationKind, NotificationStack};
use crate::controller::page::PageController;
use crate::controller::reveal::RevealTracker;
use crate::controller::sections::SectionBounds;
use crate::observer::VisibilityObserver;

const REVEAL_KEY_ATTR: &str = "data-reveal";
const EASTER_EGG_MESSAGE: &str = "🚛 Special trucking powers activated! Keep on trucking! 🚛";

const STATS: [(&str, &str); 4] = [
    ("500+", "Graduates"),
    ("95%", "Pass Rate"),
    ("15+", "Years Experience"),
    ("50+", "Hiring Partners"),
];

const FEATURES: [(&str, &str, &str); 3] = [
    ("fa-user-tie", "Experienced Instructors", "Learn from drivers with millions of safe miles behind them."),
    ("fa-road", "Real Road Time", "Most of your training happens behind the wheel, not in a classroom."),
    ("fa-briefcase", "Job Placement", "We connect graduates with carriers that are hiring now."),
];

const PROGRAMS: [(&str, &str, &str); 3] = [
    ("CDL Class A", "4 weeks", "Tractor-trailers and combination vehicles, ready for over-the-road work."),
    ("CDL Class B", "2 weeks", "Straight trucks, buses and dump trucks for local routes."),
    ("Refresher Course", "1 week", "Get back on the road with confidence after time away."),
];

const SERVICES: [(&str, &str); 4] = [
    ("fa-id-card", "DOT Physical Scheduling"),
    ("fa-clipboard-check", "Permit Test Prep"),
    ("fa-flask", "Hazmat Endorsement"),
    ("fa-hand-holding-usd", "Financing Assistance"),
];

const CONTACT_ITEMS: [(&str, &str); 3] = [
    ("fa-phone", "(555) 123-4567"),
    ("fa-envelope", "info@diamondtrucking.school"),
    ("fa-map-marker-alt", "1200 Freight Way, Columbus, OH"),
];

const PAGE_KEYFRAMES: &str = r#"
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes fadeInUp {
        from { transform: translateY(30px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    @keyframes pulse {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.05); }
    }
    @keyframes truck-special {
        0% { transform: scale(1) rotate(0deg); }
        25% { transform: scale(1.2) rotate(90deg); }
        50% { transform: scale(1.5) rotate(180deg); }
        75% { transform: scale(1.2) rotate(270deg); }
        100% { transform: scale(1) rotate(360deg); }
    }
    @keyframes truck-move {
        0%, 100% { transform: translateX(0); }
        50% { transform: translateX(20px); }
    }
    .program-card:hover {
        animation: pulse 0.6s ease;
    }
    .nav-menu.active {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: rgba(17, 17, 17, 0.98);
        padding: 1rem;
        backdrop-filter: blur(10px);
    }
    .hamburger.active span:nth-child(1) {
        transform: rotate(45deg) translate(5px, 5px);
    }
    .hamburger.active span:nth-child(2) {
        opacity: 0;
    }
    .hamburger.active span:nth-child(3) {
        transform: rotate(-45deg) translate(7px, -6px);
    }
"#;

fn section_element(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Missing sections measure as empty so indices stay aligned.
fn measure_sections(ids: &[String]) -> Vec<SectionBounds> {
    ids.iter()
        .map(|id| {
            section_element(id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| SectionBounds::new(el.offset_top() as f64, el.offset_height() as f64))
                .unwrap_or_default()
        })
        .collect()
}

/// Scrolls to an accepted section and releases the controller after the
/// cooldown.
fn run_transition(controller: Rc<RefCell<PageController>>, active: UseStateSetter<usize>, index: usize) {
    let id = controller.borrow().section_ids().get(index).cloned();
    match id.as_deref().and_then(section_element) {
        Some(section) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("Section {:?} is not in the document", id),
    }
    active.set(index);

    Timeout::new(NAV_COOLDOWN_MS, move || {
        controller.borrow_mut().finish_transition();
    })
    .forget();
}

fn is_editing(e: &KeyboardEvent) -> bool {
    e.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

fn observe_reveals(
    section_ids: Vec<String>,
    tracker: Rc<RefCell<RevealTracker>>,
    stats_started: UseStateSetter<bool>,
) -> Option<VisibilityObserver> {
    let document = web_sys::window()?.document()?;

    let observer = VisibilityObserver::new(move |el: Element| {
        let Some(key) = el.get_attribute(REVEAL_KEY_ATTR) else {
            return;
        };
        if tracker.borrow_mut().mark_visible(&key) && animate::reveal(&el) {
            stats_started.set(true);
        }
    });
    let observer = match observer {
        Ok(observer) => observer,
        Err(e) => {
            warn!("Reveal animations disabled: {:?}", e);
            return None;
        }
    };

    for id in &section_ids {
        if let Some(section) = document.get_element_by_id(id) {
            let _ = section.set_attribute(REVEAL_KEY_ATTR, &format!("section:{}", id));
            observer.observe(&section);
        }
    }
    if let Some(root) = document.document_element() {
        for (index, card) in animate::query_all(&root, OBSERVED_CARDS).iter().enumerate() {
            let _ = card.set_attribute(REVEAL_KEY_ATTR, &format!("card:{}", index));
            observer.observe(card);
        }
    }
    Some(observer)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let controller = use_mut_ref(PageController::for_landing);
    let reveals = use_mut_ref(RevealTracker::default);
    let active = use_state_eq(|| 0usize);
    let scrolled = use_state_eq(|| false);
    let truck_special = use_state_eq(|| false);
    let stats_started = use_state_eq(|| false);
    let notifications = use_reducer(NotificationStack::default);

    let notify = {
        let notifications = notifications.clone();
        Callback::from(move |(kind, text): (NotificationKind, String)| {
            notifications.dispatch(NotificationAction::Push(kind, text));
        })
    };

    let on_expire = {
        let notifications = notifications.clone();
        Callback::from(move |id: u32| notifications.dispatch(NotificationAction::Dismiss(id)))
    };

    let navigate = {
        let controller = controller.clone();
        let active = active.setter();
        Callback::from(move |index: usize| {
            let accepted = controller.borrow_mut().scroll_to_section(index);
            if let Some(index) = accepted {
                run_transition(controller.clone(), active.clone(), index);
            }
        })
    };

    let navigate_named = {
        let controller = controller.clone();
        let active = active.setter();
        Callback::from(move |name: String| {
            let accepted = controller.borrow_mut().scroll_to_named(&name);
            if let Some(index) = accepted {
                run_transition(controller.clone(), active.clone(), index);
            }
        })
    };

    {
        let controller = controller.clone();
        let active = active.setter();
        let scrolled = scrolled.setter();
        use_event_with_window("scroll", move |_: Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let ids = controller.borrow().section_ids().to_vec();
            let bounds = measure_sections(&ids);
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let now = web_sys::js_sys::Date::now();

            let update = controller
                .borrow_mut()
                .on_scroll(now, scroll_y, viewport_height, &bounds);
            if let Some(update) = update {
                scrolled.set(update.scrolled);
                if let Some(index) = update.active_changed {
                    active.set(index);
                }
            }
        });
    }

    {
        let controller = controller.clone();
        let active = active.setter();
        let truck_special = truck_special.setter();
        let notify = notify.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let outcome = controller
                .borrow_mut()
                .on_key(&e.key(), &e.code(), is_editing(&e));
            if outcome.prevent_default {
                e.prevent_default();
            }
            if let Some(index) = outcome.navigate {
                run_transition(controller.clone(), active.clone(), index);
            }
            if outcome.easter_egg {
                info!("Easter egg activated");
                truck_special.set(true);
                let truck_special = truck_special.clone();
                Timeout::new(EASTER_EGG_DURATION_MS, move || truck_special.set(false)).forget();
                notify.emit((NotificationKind::Success, EASTER_EGG_MESSAGE.to_string()));
            }
        });
    }

    {
        let section_ids = controller.borrow().section_ids().to_vec();
        let reveals = reveals.clone();
        let stats_started = stats_started.setter();
        use_effect_with_deps(
            move |_| {
                let observer = observe_reveals(section_ids, reveals, stats_started);
                move || drop(observer)
            },
            (),
        );
    }

    {
        let navigate_named = navigate_named.clone();
        use_effect_with_deps(
            move |_| {
                let binding = bindings::expose_scroll_to_section(navigate_named);
                move || drop(binding)
            },
            (),
        );
    }

    let go_to = |id: &'static str| {
        let navigate_named = navigate_named.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate_named.emit(id.to_string());
        })
    };

    html! {
        <>
            <style>{PAGE_KEYFRAMES}</style>
            <Nav active={*active} scrolled={*scrolled} on_navigate={navigate} />
            <main>
                <section id="home" class="section hero active">
                    <div class="hero-content">
                        <h1>{"Your Career on the Open Road Starts Here"}</h1>
                        <p class="hero-subtitle">
                            {"Professional CDL training with flexible schedules and real job placement support."}
                        </p>
                        <div class="hero-buttons">
                            <button class="btn btn-primary" onclick={go_to("contact")}>{"Enroll Today"}</button>
                            <button class="btn btn-secondary" onclick={go_to("programs")}>{"View Programs"}</button>
                        </div>
                        <div class="hero-stats">
                            { for STATS.iter().enumerate().map(|(index, (value, label))| html! {
                                <StatCounter value={*value} label={*label} {index} started={*stats_started} />
                            }) }
                        </div>
                    </div>
                    <Truck special={*truck_special} />
                </section>

                <section id="about" class="section about">
                    <h2>{"Why Diamond Trucking School"}</h2>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|(icon, title, text)| html! {
                            <div class="feature">
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="programs" class="section programs">
                    <h2>{"Training Programs"}</h2>
                    <div class="programs-grid">
                        { for PROGRAMS.iter().map(|(title, length, text)| html! {
                            <div class="program-card">
                                <h3>{*title}</h3>
                                <span class="program-length">{*length}</span>
                                <p>{*text}</p>
                                <button class="btn btn-outline" onclick={go_to("contact")}>{"Learn More"}</button>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="services" class="section services">
                    <h2>{"Student Services"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title)| html! {
                            <div class="service-item">
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{*title}</h3>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="contact" class="section contact">
                    <h2>{"Start Your Training"}</h2>
                    <div class="contact-grid">
                        <div class="contact-info">
                            { for CONTACT_ITEMS.iter().map(|(icon, text)| html! {
                                <div class="contact-item">
                                    <i class={classes!("fas", *icon)}></i>
                                    <span>{*text}</span>
                                </div>
                            }) }
                        </div>
                        <ContactFormView on_notify={notify} />
                    </div>
                </section>
            </main>
            <Notifications stack={(*notifications).clone()} {on_expire} />
        </>
    }
}
