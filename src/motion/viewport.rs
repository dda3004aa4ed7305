use serde::{Deserialize, Serialize};

// Intersection ratios reported by the browser at a threshold crossing can land
// a hair below the threshold itself.
const RATIO_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InViewOptions {
    /// Fraction of the element that must be visible, in [0, 1].
    pub threshold: f64,
    /// CSS margin applied around the viewport, e.g. `"0px 0px -10% 0px"`.
    pub root_margin: String,
    /// Latch on the first qualifying intersection and stop observing.
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "0px".to_string(),
            once: true,
        }
    }
}

impl InViewOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }
}

/// Visibility state for one observed element.
///
/// An element that never attaches never receives an update and reads false
/// for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ViewportObserver {
    options: InViewOptions,
    in_view: bool,
    detached: bool,
}

impl ViewportObserver {
    pub fn new(options: InViewOptions) -> Self {
        Self {
            options,
            in_view: false,
            detached: false,
        }
    }

    pub fn options(&self) -> &InViewOptions {
        &self.options
    }

    fn crosses(&self, visible_fraction: f64) -> bool {
        if self.options.threshold <= 0.0 {
            visible_fraction > 0.0
        } else {
            visible_fraction + RATIO_TOLERANCE >= self.options.threshold
        }
    }

    /// Feed the element's current visible fraction and return the new state.
    pub fn update(&mut self, visible_fraction: f64) -> bool {
        if self.detached {
            return self.in_view;
        }
        if self.crosses(visible_fraction) {
            self.in_view = true;
            if self.options.once {
                self.detached = true;
            }
        } else if !self.options.once {
            self.in_view = false;
        }
        self.in_view
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// True once a latching observer has seen its element and stopped listening.
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_section_reveal() {
        let opts = InViewOptions::default();
        assert_eq!(opts.threshold, 0.2);
        assert_eq!(opts.root_margin, "0px");
        assert!(opts.once);
    }

    #[test]
    fn test_never_attached_stays_false() {
        let observer = ViewportObserver::new(InViewOptions::default());
        assert!(!observer.in_view());
        assert!(!observer.is_detached());
    }

    #[test]
    fn test_reports_threshold_crossing() {
        for threshold in [0.1, 0.25, 0.5, 0.75, 1.0] {
            let opts = InViewOptions::default().threshold(threshold).once(false);
            let mut observer = ViewportObserver::new(opts);
            for step in 0..=20 {
                let fraction = step as f64 / 20.0;
                let expected = fraction >= threshold;
                assert_eq!(
                    observer.update(fraction),
                    expected,
                    "threshold {threshold}, fraction {fraction}"
                );
            }
        }
    }

    #[test]
    fn test_zero_threshold_needs_some_visibility() {
        let mut observer = ViewportObserver::new(InViewOptions::default().threshold(0.0).once(false));
        assert!(!observer.update(0.0));
        assert!(observer.update(0.01));
        assert!(!observer.update(0.0));
    }

    #[test]
    fn test_once_latches_true() {
        let mut observer = ViewportObserver::new(InViewOptions::default().threshold(0.3));
        assert!(!observer.update(0.1));
        assert!(observer.update(0.4));
        assert!(observer.is_detached());
        assert!(observer.update(0.0));
        assert!(observer.update(0.0));
        assert!(observer.in_view());
    }

    #[test]
    fn test_toggles_both_ways_without_once() {
        let mut observer = ViewportObserver::new(InViewOptions::default().once(false));
        assert!(observer.update(0.5));
        assert!(!observer.update(0.1));
        assert!(observer.update(0.2));
        assert!(!observer.is_detached());
    }

    #[test]
    fn test_threshold_is_clamped() {
        let opts = InViewOptions::default().threshold(3.0);
        assert_eq!(opts.threshold, 1.0);
    }
}
