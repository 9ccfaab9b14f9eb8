use log::{debug, info};

use crate::config::SCROLL_THROTTLE_MS;
use crate::controller::keyboard::{key_intent, KeyBuffer, KeyIntent};
use crate::controller::navigation::NavigationDispatcher;
use crate::controller::sections::{
    navbar_scrolled, section_at, viewport_midpoint, SectionBounds, LANDING_SECTIONS,
};
use crate::controller::throttle::Throttle;

/// Result of one throttled scroll pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub scrolled: bool,
    pub active_changed: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub navigate: Option<usize>,
    pub prevent_default: bool,
    pub easter_egg: bool,
}

/// All page behavior state. One instance per page, shared with the DOM glue.
#[derive(Debug)]
pub struct PageController {
    section_ids: Vec<String>,
    navigation: NavigationDispatcher,
    scroll_throttle: Throttle,
    keys: KeyBuffer,
}

impl PageController {
    pub fn for_landing() -> Self {
        Self::with_ids(LANDING_SECTIONS.iter().map(|(id, _)| id.to_string()).collect())
    }

    /// `section_ids` must not be empty.
    fn with_ids(section_ids: Vec<String>) -> Self {
        Self {
            navigation: NavigationDispatcher::new(section_ids.len()),
            section_ids,
            scroll_throttle: Throttle::new(SCROLL_THROTTLE_MS),
            keys: KeyBuffer::default(),
        }
    }

    pub fn section_ids(&self) -> &[String] {
        &self.section_ids
    }

    pub fn current_section(&self) -> usize {
        self.navigation.current()
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.section_ids.iter().position(|s| s == id)
    }

    /// Accepted targets become current immediately; the caller scrolls and
    /// schedules [`finish_transition`](Self::finish_transition).
    pub fn scroll_to_section(&mut self, index: usize) -> Option<usize> {
        let accepted = self.navigation.begin(index);
        match accepted {
            Some(index) => info!("Navigating to section {} ({})", index, self.section_ids[index]),
            None => debug!("Dropped navigation to section {}", index),
        }
        accepted
    }

    pub fn scroll_to_named(&mut self, id: &str) -> Option<usize> {
        let index = self.section_index(id)?;
        self.scroll_to_section(index)
    }

    pub fn finish_transition(&mut self) {
        self.navigation.finish();
    }

    /// Returns `None` when the pass is throttled.
    pub fn on_scroll(
        &mut self,
        now_ms: f64,
        scroll_y: f64,
        viewport_height: f64,
        bounds: &[SectionBounds],
    ) -> Option<ScrollUpdate> {
        if !self.scroll_throttle.try_acquire(now_ms) {
            return None;
        }
        let midpoint = viewport_midpoint(scroll_y, viewport_height);
        let active_changed = section_at(midpoint, bounds)
            .filter(|index| self.navigation.observe(*index));
        if let Some(index) = active_changed {
            debug!("Active section is now {}", index);
        }
        Some(ScrollUpdate {
            scrolled: navbar_scrolled(scroll_y),
            active_changed,
        })
    }

    /// Handles one keydown. `key` is `KeyboardEvent.key`, `code` is
    /// `KeyboardEvent.code`. While `editing` a form field the key only feeds
    /// the code buffer and keeps its default action.
    pub fn on_key(&mut self, key: &str, code: &str, editing: bool) -> KeyOutcome {
        let mut outcome = KeyOutcome::default();

        if let Some(intent) = key_intent(key).filter(|_| !editing) {
            outcome.prevent_default = true;
            let current = self.current_section();
            let target = match intent {
                KeyIntent::Next if current + 1 < self.section_ids.len() => Some(current + 1),
                KeyIntent::Previous if current > 0 => Some(current - 1),
                _ => None,
            };
            outcome.navigate = target.and_then(|index| self.scroll_to_section(index));
        }

        if self.keys.push(code) {
            info!("Konami code entered");
            outcome.easter_egg = true;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(count: usize, height: f64) -> Vec<SectionBounds> {
        (0..count)
            .map(|i| SectionBounds::new(i as f64 * height, height))
            .collect()
    }

    #[test]
    fn landing_starts_on_first_section() {
        let page = PageController::for_landing();
        assert_eq!(page.current_section(), 0);
        assert_eq!(page.section_ids().len(), LANDING_SECTIONS.len());
    }

    #[test]
    fn navigation_activates_exactly_the_requested_index() {
        for i in 0..LANDING_SECTIONS.len() {
            let mut page = PageController::for_landing();
            assert_eq!(page.scroll_to_section(i), Some(i));
            assert_eq!(page.current_section(), i);
        }
    }

    #[test]
    fn out_of_range_navigation_changes_nothing() {
        let mut page = PageController::for_landing();
        page.scroll_to_section(2);
        page.finish_transition();

        assert_eq!(page.scroll_to_section(LANDING_SECTIONS.len()), None);
        assert_eq!(page.current_section(), 2);
        assert!(!page.navigation.is_scrolling());
    }

    #[test]
    fn navigation_during_cooldown_is_dropped() {
        let ids = (0..6).map(|i| format!("s{}", i)).collect();
        let mut page = PageController::with_ids(ids);
        page.scroll_to_section(2);
        assert_eq!(page.scroll_to_section(5), None);
        assert_eq!(page.current_section(), 2);
    }

    #[test]
    fn named_navigation_resolves_ids() {
        let mut page = PageController::for_landing();
        assert_eq!(page.scroll_to_named("contact"), Some(4));
        page.finish_transition();
        assert_eq!(page.scroll_to_named("pricing"), None);
        assert_eq!(page.current_section(), 4);
    }

    #[test]
    fn scroll_tracking_is_throttled_and_reports_changes() {
        let mut page = PageController::for_landing();
        let bounds = stacked(5, 1000.0);

        let update = page.on_scroll(0.0, 1200.0, 800.0, &bounds).unwrap();
        assert_eq!(update, ScrollUpdate { scrolled: true, active_changed: Some(1) });

        assert_eq!(page.on_scroll(50.0, 3000.0, 800.0, &bounds), None);
        assert_eq!(page.current_section(), 1);

        let update = page.on_scroll(100.0, 1300.0, 800.0, &bounds).unwrap();
        assert_eq!(update.active_changed, None);

        let update = page.on_scroll(200.0, 0.0, 800.0, &bounds).unwrap();
        assert_eq!(update, ScrollUpdate { scrolled: false, active_changed: Some(0) });
    }

    #[test]
    fn arrow_keys_step_through_sections() {
        let mut page = PageController::for_landing();

        let outcome = page.on_key("ArrowDown", "ArrowDown", false);
        assert_eq!(outcome.navigate, Some(1));
        assert!(outcome.prevent_default);

        let outcome = page.on_key(" ", "Space", false);
        assert_eq!(outcome.navigate, None, "still cooling down");

        page.finish_transition();
        assert_eq!(page.on_key("ArrowUp", "ArrowUp", false).navigate, Some(0));
        page.finish_transition();

        let outcome = page.on_key("ArrowUp", "ArrowUp", false);
        assert_eq!(outcome.navigate, None);
        assert!(outcome.prevent_default);
    }

    #[test]
    fn arrow_down_stops_at_last_section() {
        let mut page = PageController::for_landing();
        page.scroll_to_section(LANDING_SECTIONS.len() - 1);
        page.finish_transition();
        assert_eq!(page.on_key("ArrowDown", "ArrowDown", false).navigate, None);
    }

    #[test]
    fn other_keys_pass_through() {
        let mut page = PageController::for_landing();
        assert_eq!(page.on_key("a", "KeyA", false), KeyOutcome::default());
    }

    #[test]
    fn konami_code_triggers_easter_egg_once() {
        let mut page = PageController::for_landing();
        let keys = [
            ("ArrowUp", "ArrowUp"), ("ArrowUp", "ArrowUp"),
            ("ArrowDown", "ArrowDown"), ("ArrowDown", "ArrowDown"),
            ("ArrowLeft", "ArrowLeft"), ("ArrowRight", "ArrowRight"),
            ("ArrowLeft", "ArrowLeft"), ("ArrowRight", "ArrowRight"),
            ("b", "KeyB"), ("a", "KeyA"),
        ];
        let triggered = keys
            .iter()
            .filter(|(key, code)| page.on_key(key, code, false).easter_egg)
            .count();
        assert_eq!(triggered, 1);
    }

    #[test]
    fn keys_typed_in_fields_skip_navigation() {
        let mut page = PageController::for_landing();
        let outcome = page.on_key(" ", "Space", true);
        assert_eq!(outcome, KeyOutcome::default());
        assert_eq!(page.current_section(), 0);
        assert!(!page.navigation.is_scrolling());
    }

    #[test]
    fn keys_typed_in_fields_still_feed_the_code_buffer() {
        let mut page = PageController::for_landing();
        let codes = [
            "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft",
            "ArrowRight", "ArrowLeft", "ArrowRight", "KeyB", "KeyA",
        ];
        let triggered: Vec<bool> = codes
            .iter()
            .map(|code| page.on_key(code, code, true).easter_egg)
            .collect();

        assert_eq!(triggered.iter().filter(|t| **t).count(), 1);
        assert!(triggered[9]);
        assert_eq!(page.current_section(), 0);
    }
}
