/// Leading-edge throttle. The first call in a window runs, the rest of the
/// window is dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    window_end: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, window_end: None }
    }

    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.window_end {
            Some(end) if now_ms < end => false,
            _ => {
                self.window_end = Some(now_ms + self.limit_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_fires_immediately() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_acquire(5_000.0));
    }

    #[test]
    fn calls_inside_window_are_dropped() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_acquire(0.0));
        assert!(!throttle.try_acquire(10.0));
        assert!(!throttle.try_acquire(99.9));
        assert!(throttle.try_acquire(100.0));
        assert!(!throttle.try_acquire(150.0));
    }

    #[test]
    fn dropped_calls_do_not_extend_window() {
        let mut throttle = Throttle::new(100.0);
        throttle.try_acquire(0.0);
        for t in 1..100 {
            throttle.try_acquire(t as f64);
        }
        assert!(throttle.try_acquire(100.0));
    }
}
