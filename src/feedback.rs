//! The short acknowledgement shown after a successful copy.

use std::time::{Duration, Instant};

/// How long the copy acknowledgement stays visible.
pub const COPY_HIGHLIGHT: Duration = Duration::from_millis(300);

/// A highlight that switches itself off after a fixed duration.
///
/// Nothing is scheduled: the renderer asks [`Highlight::is_active`] when it draws, so there is no
/// pending callback to outlive its owner.
#[derive(Clone, Copy, Debug)]
pub struct Highlight {
    duration: Duration,
    until: Option<Instant>,
}

impl Default for Highlight {
    fn default() -> Self {
        Highlight::new(COPY_HIGHLIGHT)
    }
}

impl Highlight {
    pub fn new(duration: Duration) -> Highlight {
        Highlight {
            duration,
            until: None,
        }
    }

    /// Turn the highlight on, starting at `now`. Flashing again while active restarts it.
    pub fn flash(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        match self.until {
            Some(until) => now < until,
            None => false,
        }
    }

    /// How much longer the highlight stays on, or `None` if it is already off.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.until
            .and_then(|until| until.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_until_flashed() {
        let highlight = Highlight::default();
        assert!(!highlight.is_active(Instant::now()));
        assert_eq!(highlight.remaining(Instant::now()), None);
    }

    #[test]
    fn expires() {
        let start = Instant::now();
        let mut highlight = Highlight::default();
        highlight.flash(start);
        assert!(highlight.is_active(start));
        assert!(highlight.is_active(start + Duration::from_millis(299)));
        assert!(!highlight.is_active(start + Duration::from_millis(300)));
    }

    #[test]
    fn remaining_counts_down_to_off() {
        let start = Instant::now();
        let mut highlight = Highlight::default();
        highlight.flash(start);
        assert_eq!(highlight.remaining(start), Some(COPY_HIGHLIGHT));
        assert_eq!(
            highlight.remaining(start + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(highlight.remaining(start + Duration::from_millis(300)), None);
        assert_eq!(highlight.remaining(start + Duration::from_secs(60)), None);
    }

    #[test]
    fn reflash_restarts() {
        let start = Instant::now();
        let mut highlight = Highlight::new(Duration::from_millis(100));
        highlight.flash(start);
        highlight.flash(start + Duration::from_millis(80));
        assert!(highlight.is_active(start + Duration::from_millis(150)));
    }
}
