use serde::{Deserialize, Serialize};

/// Default hysteresis before the reported direction may change.
pub const DEFAULT_DIRECTION_THRESHOLD: f64 = 10.0;
/// Below this offset the page counts as scrolled to the top.
pub const AT_TOP_THRESHOLD: f64 = 10.0;
/// The navbar stays visible until the page has scrolled past this offset.
pub const NAVBAR_HIDE_AFTER: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub direction: ScrollDirection,
    pub scroll_y: f64,
    pub is_at_top: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            direction: ScrollDirection::Up,
            scroll_y: 0.0,
            is_at_top: true,
        }
    }
}

impl ScrollState {
    /// Whether the navbar should slide out of view.
    pub fn hides_navbar(&self, menu_open: bool) -> bool {
        self.direction == ScrollDirection::Down && self.scroll_y > NAVBAR_HIDE_AFTER && !menu_open
    }
}

/// Derives scroll direction from sampled offsets.
///
/// The direction is compared against the last offset that produced a
/// direction report, not the last sample, so slow drift eventually flips it
/// while sub-threshold jitter never does.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f64,
    last_reported: f64,
    state: ScrollState,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTION_THRESHOLD)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self::starting_at(threshold, 0.0)
    }

    /// Tracker for a page that is already scrolled, e.g. after a reload.
    pub fn starting_at(threshold: f64, scroll_y: f64) -> Self {
        Self {
            threshold,
            last_reported: scroll_y,
            state: ScrollState::default(),
        }
    }

    pub fn sample(&mut self, scroll_y: f64) -> ScrollState {
        let scroll_y = scroll_y.max(0.0);
        let delta = scroll_y - self.last_reported;
        if delta.abs() >= self.threshold {
            self.state.direction = if delta > 0.0 {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
            self.last_reported = scroll_y;
        }
        self.state.scroll_y = scroll_y;
        self.state.is_at_top = scroll_y < AT_TOP_THRESHOLD;
        self.state
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }
}

/// Fraction of the page scrolled, in [0, 1].
///
/// Pages that fit inside the viewport report 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}
