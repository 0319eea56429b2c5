//! Timestamp-keyed rate limiter.

/// Bounds how often an event-path emitter may run.
///
/// Callers pass their own monotonic timestamps (the adapter uses
/// `performance.now()`), which keeps the throttle clockless and testable.
/// Calls landing inside the cool-down window are dropped, not queued; the
/// first call always fires.
#[derive(Debug)]
pub struct Throttle {
    window_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_fired: None,
        }
    }

    /// Returns true when the caller may run its work now.
    pub fn allow(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }

    /// Forget the last firing so the next call fires unconditionally.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_fires() {
        let mut t = Throttle::new(100.0);
        assert!(t.allow(0.0));
    }

    #[test]
    fn burst_within_window_fires_once() {
        let mut t = Throttle::new(100.0);
        let fired = (0..10).filter(|i| t.allow(f64::from(*i) * 5.0)).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn fires_again_after_window() {
        let mut t = Throttle::new(100.0);
        assert!(t.allow(0.0));
        assert!(!t.allow(99.9));
        assert!(t.allow(100.0));
    }
}
