// scroll tracker
//
// the navigation bar switches to its opaque style once the page has scrolled past a
// fixed offset.  the listener lives in the webapp; this only keeps the flag and reports
// crossings so that the bar re-renders once per crossing instead of once per event

pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    past: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        ScrollTracker::new(SCROLL_THRESHOLD)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        ScrollTracker {
            threshold,
            past: false,
        }
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past
    }

    // returns true if the flag flipped
    pub fn observe(&mut self, offset: f64) -> bool {
        let past = offset > self.threshold;
        let changed = past != self.past;
        self.past = past;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_below_threshold() {
        assert!(!ScrollTracker::default().is_past_threshold());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.observe(50.0));
        assert!(!tracker.is_past_threshold());

        assert!(tracker.observe(50.5));
        assert!(tracker.is_past_threshold());
    }

    #[test]
    fn reports_only_crossings() {
        let mut tracker = ScrollTracker::new(10.0);
        let changes: Vec<bool> = [0.0, 5.0, 20.0, 400.0, 11.0, 3.0, 0.0]
            .into_iter()
            .map(|offset| tracker.observe(offset))
            .collect();

        assert_eq!(changes, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn nan_offset_counts_as_top_of_page() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(100.0);
        assert!(tracker.observe(f64::NAN));
        assert!(!tracker.is_past_threshold());
    }
}
