/// Tracks the current section and guards programmatic scrolls against
/// re-entry until the cooldown releases them.
#[derive(Debug, Clone)]
pub struct NavigationDispatcher {
    section_count: usize,
    current: usize,
    is_scrolling: bool,
}

impl NavigationDispatcher {
    /// `section_count` must be non-zero; `PageController` checks this.
    pub fn new(section_count: usize) -> Self {
        Self {
            section_count,
            current: 0,
            is_scrolling: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Starts a transition to `index`. Dropped while another transition is
    /// running or when `index` is out of range.
    pub fn begin(&mut self, index: usize) -> Option<usize> {
        if self.is_scrolling || index >= self.section_count {
            return None;
        }
        self.is_scrolling = true;
        self.current = index;
        Some(index)
    }

    pub fn finish(&mut self) {
        self.is_scrolling = false;
    }

    /// Records a section change seen by the scroll tracker. Returns whether
    /// the index moved.
    pub fn observe(&mut self, index: usize) -> bool {
        if index >= self.section_count || index == self.current {
            return false;
        }
        self.current = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_current_optimistically() {
        for i in 0..5 {
            let mut nav = NavigationDispatcher::new(5);
            assert_eq!(nav.begin(i), Some(i));
            assert_eq!(nav.current(), i);
            assert!(nav.is_scrolling());
        }
    }

    #[test]
    fn out_of_range_is_a_noop() {
        let mut nav = NavigationDispatcher::new(3);
        assert_eq!(nav.begin(3), None);
        assert_eq!(nav.begin(usize::MAX), None);
        assert_eq!(nav.current(), 0);
        assert!(!nav.is_scrolling());
    }

    #[test]
    fn reentrant_calls_are_dropped_until_finish() {
        let mut nav = NavigationDispatcher::new(6);
        assert_eq!(nav.begin(2), Some(2));
        assert_eq!(nav.begin(5), None);
        assert_eq!(nav.current(), 2);

        nav.finish();
        assert_eq!(nav.begin(5), Some(5));
    }

    #[test]
    fn observe_reports_changes_only() {
        let mut nav = NavigationDispatcher::new(3);
        assert!(!nav.observe(0));
        assert!(nav.observe(2));
        assert!(!nav.observe(2));
        assert!(!nav.observe(7));
        assert_eq!(nav.current(), 2);
    }
}
