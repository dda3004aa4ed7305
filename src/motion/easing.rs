//! Easing curves and one-dimensional tweens.
//!
//! All curves take a progress value in [0, 1] and return the eased fraction,
//! also in [0, 1]. Inputs outside the range are clamped.

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Exponential ease-out: very fast start, long tail.
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Curve used by the page transition curtain.
pub const CURTAIN_EASE: CubicBezier = CubicBezier::new(0.76, 0.0, 0.24, 1.0);

/// Curve used by hover and size transitions on the cursor.
pub const EXPO_OUT_BEZIER: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;
const PRECISION: f64 = 1e-7;

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    // One axis of the curve with endpoints fixed at 0 and 1.
    fn sample(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    fn slope(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    }

    /// Solve for the curve parameter whose x equals `t`.
    fn solve_x(&self, t: f64) -> f64 {
        let mut s = t;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, s) - t;
            if err.abs() < PRECISION {
                return s;
            }
            let d = Self::slope(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
            if !(0.0..=1.0).contains(&s) {
                break;
            }
        }

        // x(s) is monotonic for x1, x2 in [0, 1], so bisection always converges
        let (mut lo, mut hi) = (0.0, 1.0);
        s = t;
        for _ in 0..BISECTION_ITERATIONS {
            let x = Self::sample(self.x1, self.x2, s);
            if (x - t).abs() < PRECISION {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_x(t);
        Self::sample(self.y1, self.y2, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    OutExpo,
    Bezier(CubicBezier),
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::OutExpo => ease_out_expo(t),
            Easing::Bezier(curve) => curve.apply(t),
        }
    }
}

/// A scalar animation from `from` to `to` starting at `start` (ms).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Linear progress through the tween, clamped to [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> f64 {
        lerp(self.from, self.to, self.easing.apply(self.progress(now)))
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration.max(0.0)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_ease_out_expo_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_expo(2.0), 1.0);
        assert_eq!(ease_out_expo(-1.0), 0.0);
        assert!((ease_out_expo(0.5) - (1.0 - 2.0_f64.powf(-5.0))).abs() < EPS);
    }

    #[test]
    fn test_ease_out_expo_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_out_expo(i as f64 / 100.0);
            assert!(v >= prev, "not monotonic at step {i}");
            assert!(v <= 1.0);
            prev = v;
        }
    }

    #[test]
    fn test_bezier_endpoints_and_symmetry() {
        assert_eq!(CURTAIN_EASE.apply(0.0), 0.0);
        assert_eq!(CURTAIN_EASE.apply(1.0), 1.0);
        // (0.76, 0, 0.24, 1) is point-symmetric around (0.5, 0.5)
        assert!((CURTAIN_EASE.apply(0.5) - 0.5).abs() < 1e-4);
        let a = CURTAIN_EASE.apply(0.2);
        let b = CURTAIN_EASE.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-4);
        // slow start
        assert!(a < 0.2);
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn test_tween_progress() {
        let tween = Tween::new(-100.0, 0.0, 1000.0, 500.0, Easing::Linear);
        assert_eq!(tween.value_at(900.0), -100.0);
        assert_eq!(tween.value_at(1000.0), -100.0);
        assert!((tween.value_at(1250.0) + 50.0).abs() < EPS);
        assert_eq!(tween.value_at(1500.0), 0.0);
        assert_eq!(tween.value_at(9000.0), 0.0);
        assert!(!tween.is_finished(1499.0));
        assert!(tween.is_finished(1500.0));
    }

    #[test]
    fn test_zero_duration_tween_jumps() {
        let tween = Tween::new(0.0, 10.0, 5.0, 0.0, Easing::OutExpo);
        assert_eq!(tween.value_at(5.0), 10.0);
        assert!(tween.is_finished(5.0));
    }
}
