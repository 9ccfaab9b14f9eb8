use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config::{COUNT_UP_TICK_MS, STAT_STAGGER_MS};
use crate::controller::count_up::{StatAction, StatDisplay};
use crate::controller::reveal::stagger_delay;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: &'static str,
    pub label: &'static str,
    pub index: usize,
    /// Flips to true once the stats scroll into view.
    pub started: bool,
}

/// One hero stat. Counts its number up from zero after it is revealed.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = props.value;
    let display = use_reducer(move || StatDisplay::new(value));

    {
        let tick_ms = if display.is_counting() { COUNT_UP_TICK_MS } else { 0 };
        let display = display.clone();
        use_interval(move || display.dispatch(StatAction::Tick), tick_ms);
    }

    {
        let display = display.clone();
        let delay = stagger_delay(props.index, STAT_STAGGER_MS);
        use_effect_with_deps(
            move |started| {
                let timeout = started
                    .then(|| Timeout::new(delay, move || display.dispatch(StatAction::Start)));
                move || drop(timeout)
            },
            props.started,
        );
    }

    html! {
        <div class="stat-item">
            <h3>{display.text().to_string()}</h3>
            <p>{props.label}</p>
        </div>
    }
}
