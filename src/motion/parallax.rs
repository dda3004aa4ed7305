/// Default speed: 0 keeps the layer fixed to its container, 0.5 moves it at
/// half the scroll speed.
pub const DEFAULT_SPEED: f64 = 0.35;
/// How far outside the viewport (px) a container still gets updates.
pub const VIEWPORT_MARGIN: f64 = 100.0;

/// Vertical extent of a container relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    speed: f64,
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl ParallaxLayer {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the container is within the margin around the viewport.
    pub fn in_range(bounds: Bounds, viewport_height: f64) -> bool {
        !(bounds.bottom() < -VIEWPORT_MARGIN || bounds.top > viewport_height + VIEWPORT_MARGIN)
    }

    /// Background offset in px. Only call for containers that are in range.
    pub fn offset(&self, bounds: Bounds, viewport_height: f64) -> f64 {
        let span = viewport_height + bounds.height;
        if span <= 0.0 {
            return 0.0;
        }
        let in_view_pct = (viewport_height - bounds.top) / span;
        (in_view_pct - 0.5) * bounds.height * self.speed
    }

    /// Handle a scroll event. Containers far from the viewport are rejected
    /// before any offset work happens; otherwise `apply` receives the offset.
    pub fn on_scroll(
        &self,
        bounds: Bounds,
        viewport_height: f64,
        apply: impl FnOnce(f64),
    ) -> bool {
        if !Self::in_range(bounds, viewport_height) {
            return false;
        }
        apply(self.offset(bounds, viewport_height));
        true
    }
}

/// CSS transform for a background offset.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset:.2}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    #[test]
    fn test_centered_container_has_no_offset() {
        let layer = ParallaxLayer::new(0.3);
        // container centered in the viewport: (800 - 200) / (800 + 400) = 0.5
        let offset = layer.offset(Bounds::new(200.0, 400.0), VH);
        assert!(offset.abs() < 1e-9);
    }

    #[test]
    fn test_offset_formula() {
        let layer = ParallaxLayer::new(0.4);
        let bounds = Bounds::new(800.0, 400.0);
        // entering from below: in_view = 0
        assert!((layer.offset(bounds, VH) - (-0.5 * 400.0 * 0.4)).abs() < 1e-9);
        let bounds = Bounds::new(-400.0, 400.0);
        // leaving at the top: in_view = 1
        assert!((layer.offset(bounds, VH) - (0.5 * 400.0 * 0.4)).abs() < 1e-9);
    }

    #[test]
    fn test_offset_increases_with_scroll() {
        let layer = ParallaxLayer::default();
        let mut prev = f64::MIN;
        for top in (-400..=800).rev().step_by(50) {
            let offset = layer.offset(Bounds::new(top as f64, 400.0), VH);
            assert!(offset > prev);
            prev = offset;
        }
    }

    #[test]
    fn test_out_of_range_skips_computation() {
        let layer = ParallaxLayer::default();
        let mut calls = 0;
        let far_above = Bounds::new(-600.0, 400.0); // bottom at -200
        let far_below = Bounds::new(VH + 101.0, 400.0);
        assert!(!layer.on_scroll(far_above, VH, |_| calls += 1));
        assert!(!layer.on_scroll(far_below, VH, |_| calls += 1));
        assert_eq!(calls, 0);

        let mut applied = Vec::new();
        // inside the margins on both sides
        assert!(layer.on_scroll(Bounds::new(-500.0, 400.0), VH, |o| applied.push(o)));
        assert!(layer.on_scroll(Bounds::new(VH + 100.0, 400.0), VH, |o| applied.push(o)));
        assert_eq!(applied.len(), 2);
    }

    #[test]
    fn test_translate_formatting() {
        assert_eq!(translate_y(-12.3456), "translateY(-12.35px)");
        assert_eq!(translate_y(0.0), "translateY(0.00px)");
    }
}
