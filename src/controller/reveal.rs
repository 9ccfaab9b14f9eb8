use std::collections::HashSet;

/// Remembers which observed elements have already been revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    seen: HashSet<String>,
}

impl RevealTracker {
    /// True the first time `key` becomes visible, false afterwards.
    pub fn mark_visible(&mut self, key: &str) -> bool {
        self.seen.insert(key.to_owned())
    }
}

pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_happens_once_per_key() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.mark_visible("section-about"));
        assert!(!tracker.mark_visible("section-about"));
        assert!(tracker.mark_visible("card-3"));
        assert!(tracker.seen.contains("section-about"));
        assert!(!tracker.seen.contains("card-4"));
    }

    #[test]
    fn delays_scale_with_index() {
        assert_eq!(stagger_delay(0, 100), 0);
        assert_eq!(stagger_delay(3, 100), 300);
        assert_eq!(stagger_delay(2, 200), 400);
    }
}
