//! Full-screen curtain that masks client-side navigation.
//!
//! The curtain's vertical position is a percentage of the viewport height:
//! [`ABOVE`] is parked off-screen, [`COVERED`] hides the page, [`BELOW`] has
//! slid past the bottom edge. A click on an internal link slides it down to
//! cover the page; once the route changes it keeps sliding down to reveal the
//! new page, then parks above again for the next cycle.

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::easing::{Easing, Tween, CURTAIN_EASE};

pub const ABOVE: f64 = -100.0;
pub const COVERED: f64 = 0.0;
pub const BELOW: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurtainTimings {
    pub cover_ms: f64,
    pub reveal_delay_ms: f64,
    pub reveal_ms: f64,
    pub initial_reveal_delay_ms: f64,
    pub initial_reveal_ms: f64,
}

impl Default for CurtainTimings {
    fn default() -> Self {
        Self {
            cover_ms: 500.0,
            reveal_delay_ms: 120.0,
            reveal_ms: 650.0,
            initial_reveal_delay_ms: 50.0,
            initial_reveal_ms: 700.0,
        }
    }
}

/// Whether the curtain currently hides page content.
///
/// `covering` and `revealed` are never both true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionState {
    pub covering: bool,
    pub revealed: bool,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            covering: false,
            revealed: true,
        }
    }
}

impl TransitionState {
    fn covering() -> Self {
        Self {
            covering: true,
            revealed: false,
        }
    }
}

/// Whether a link click should start a cover.
///
/// In-page anchors, `mailto:`/`tel:` links, absolute external URLs and links
/// opening a new tab navigate without the curtain.
pub fn is_internal_navigation(href: &str, target: Option<&str>) -> bool {
    const SKIPPED_PREFIXES: [&str; 5] = ["#", "mailto:", "tel:", "http://", "https://"];
    let href = href.trim();
    if href.is_empty() || SKIPPED_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return false;
    }
    target != Some("_blank")
}

/// Button and modifier keys of a link click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickKeys {
    pub button: i16,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickKeys {
    /// A primary click with no modifier. Anything else opens a new tab or
    /// window, or downloads, and leaves the current route alone.
    pub fn navigates_in_place(&self) -> bool {
        self.button == 0 && !(self.meta || self.ctrl || self.shift || self.alt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Parked, either above the viewport or (before the first route) covering.
    Idle,
    Covering(Tween),
    /// Fully covering since the given time, waiting for a reveal.
    Covered { since: f64 },
    Revealing(Tween),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingReveal {
    at: f64,
    duration: f64,
}

#[derive(Debug, Clone)]
pub struct Curtain {
    timings: CurtainTimings,
    state: TransitionState,
    pathname: Option<String>,
    position: f64,
    phase: Phase,
    pending: Option<PendingReveal>,
}

impl Default for Curtain {
    fn default() -> Self {
        Self::new(CurtainTimings::default())
    }
}

impl Curtain {
    /// A curtain covering the page, as it is on first paint.
    pub fn new(timings: CurtainTimings) -> Self {
        Self {
            timings,
            state: TransitionState::default(),
            pathname: None,
            position: COVERED,
            phase: Phase::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Whether a tween is running or a reveal is scheduled.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || matches!(self.phase, Phase::Covering(_) | Phase::Revealing(_))
    }

    fn tween(from: f64, to: f64, start: f64, duration: f64) -> Tween {
        Tween::new(from, to, start, duration, Easing::Bezier(CURTAIN_EASE))
    }

    /// Handle a link click. Returns true when a cover started.
    pub fn click(&mut self, href: &str, target: Option<&str>, clock: &impl Clock) -> bool {
        if !is_internal_navigation(href, target) || self.state.covering {
            return false;
        }
        // no route change will follow to reveal it again
        let path = href.trim().split(['?', '#']).next().unwrap_or_default();
        if self.pathname.as_deref() == Some(path) {
            return false;
        }
        let now = clock.now();
        self.state = TransitionState::covering();
        self.position = ABOVE;
        self.phase = Phase::Covering(Self::tween(ABOVE, COVERED, now, self.timings.cover_ms));
        true
    }

    /// Handle a committed route. Returns true when a reveal was scheduled.
    pub fn route_changed(&mut self, pathname: &str, clock: &impl Clock) -> bool {
        let now = clock.now();
        match self.pathname.as_deref() {
            None => {
                // first paint: the curtain starts down, reveal it once
                self.pathname = Some(pathname.to_string());
                self.state = TransitionState::covering();
                self.position = COVERED;
                self.phase = Phase::Covered { since: now };
                self.pending = Some(PendingReveal {
                    at: now + self.timings.initial_reveal_delay_ms,
                    duration: self.timings.initial_reveal_ms,
                });
                return true;
            }
            Some(prev) if prev == pathname => return false,
            Some(_) => {}
        }

        self.pathname = Some(pathname.to_string());
        if !self.state.covering {
            // navigation that bypassed the click handler; cover instantly so
            // the reveal doesn't slide in from nowhere
            self.state = TransitionState::covering();
            self.position = COVERED;
            self.phase = Phase::Covered { since: now };
        }
        // a newer route replaces any reveal still waiting on its delay
        self.pending = Some(PendingReveal {
            at: now + self.timings.reveal_delay_ms,
            duration: self.timings.reveal_ms,
        });
        true
    }

    /// Advance to the clock's time and return the curtain position.
    pub fn tick(&mut self, clock: &impl Clock) -> f64 {
        let now = clock.now();

        if let Phase::Covering(tween) = self.phase {
            if tween.is_finished(now) {
                self.position = COVERED;
                self.phase = Phase::Covered { since: tween.end() };
            } else {
                self.position = tween.value_at(now);
            }
        }

        if let Some(pending) = self.pending {
            let ready_since = match self.phase {
                Phase::Covering(_) => None,
                Phase::Covered { since } => Some(since),
                Phase::Idle | Phase::Revealing(_) => Some(f64::MIN),
            };
            if let Some(since) = ready_since {
                let start = pending.at.max(since);
                if now >= start {
                    self.pending = None;
                    self.phase =
                        Phase::Revealing(Self::tween(self.position, BELOW, start, pending.duration));
                }
            }
        }

        if let Phase::Revealing(tween) = self.phase {
            if tween.is_finished(now) {
                self.position = ABOVE;
                self.phase = Phase::Idle;
                self.state = TransitionState::default();
            } else {
                self.position = tween.value_at(now);
            }
        }

        debug_assert!(!(self.state.covering && self.state.revealed));
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::clock::ManualClock;

    const EPS: f64 = 1e-6;

    fn run_until_idle(curtain: &mut Curtain, clock: &ManualClock) -> Vec<f64> {
        let mut samples = Vec::new();
        for _ in 0..400 {
            clock.advance(16.0);
            samples.push(curtain.tick(clock));
            if !curtain.is_animating() {
                break;
            }
        }
        samples
    }

    fn after_first_paint() -> (Curtain, ManualClock) {
        let clock = ManualClock::new(0.0);
        let mut curtain = Curtain::default();
        curtain.route_changed("/", &clock);
        run_until_idle(&mut curtain, &clock);
        (curtain, clock)
    }

    #[test]
    fn test_link_filter() {
        assert!(is_internal_navigation("/work/foo", None));
        assert!(is_internal_navigation("work/foo", Some("_self")));
        assert!(!is_internal_navigation("", None));
        assert!(!is_internal_navigation("#contact", None));
        assert!(!is_internal_navigation("mailto:test@example.com", None));
        assert!(!is_internal_navigation("tel:+15555555555", None));
        assert!(!is_internal_navigation("https://github.com", None));
        assert!(!is_internal_navigation("http://example.com/x", None));
        assert!(!is_internal_navigation("/resume.pdf", Some("_blank")));
    }

    #[test]
    fn test_modified_clicks_stay_in_place() {
        assert!(ClickKeys::default().navigates_in_place());
        for keys in [
            ClickKeys { meta: true, ..Default::default() },
            ClickKeys { ctrl: true, ..Default::default() },
            ClickKeys { shift: true, ..Default::default() },
            ClickKeys { alt: true, ..Default::default() },
            ClickKeys { button: 1, ..Default::default() },
        ] {
            assert!(!keys.navigates_in_place(), "{keys:?}");
        }
    }

    #[test]
    fn test_first_paint_reveal() {
        let clock = ManualClock::new(1000.0);
        let mut curtain = Curtain::default();
        assert_eq!(curtain.position(), COVERED);
        assert!(curtain.route_changed("/", &clock));

        clock.advance(40.0);
        assert_eq!(curtain.tick(&clock), COVERED);
        clock.advance(20.0);
        let pos = curtain.tick(&clock);
        assert!(pos > COVERED && pos < BELOW);

        run_until_idle(&mut curtain, &clock);
        assert_eq!(curtain.position(), ABOVE);
        assert_eq!(curtain.state(), TransitionState::default());
    }

    #[test]
    fn test_mailto_click_does_not_cover() {
        let (mut curtain, clock) = after_first_paint();
        assert!(!curtain.click("mailto:test@example.com", None, &clock));
        assert!(!curtain.state().covering);
        assert!(curtain.state().revealed);
        assert_eq!(curtain.tick(&clock), ABOVE);
    }

    #[test]
    fn test_internal_click_covers_then_reveals() {
        let (mut curtain, clock) = after_first_paint();
        assert!(curtain.click("/work/foo", None, &clock));
        assert_eq!(curtain.state(), TransitionState::covering());
        assert_eq!(curtain.position(), ABOVE);

        clock.advance(250.0);
        let mid = curtain.tick(&clock);
        assert!((mid - (ABOVE + COVERED) / 2.0).abs() < 1e-3);

        clock.advance(300.0);
        assert_eq!(curtain.tick(&clock), COVERED);
        assert!(curtain.state().covering);

        assert!(curtain.route_changed("/work/foo", &clock));
        clock.advance(100.0);
        assert_eq!(curtain.tick(&clock), COVERED);

        let samples = run_until_idle(&mut curtain, &clock);
        assert!(samples.iter().any(|p| *p > 50.0 && *p < BELOW));
        assert_eq!(curtain.position(), ABOVE);
        assert_eq!(curtain.state(), TransitionState::default());
    }

    #[test]
    fn test_second_click_ignored_while_covering() {
        let (mut curtain, clock) = after_first_paint();
        assert!(curtain.click("/work/a", None, &clock));
        clock.advance(200.0);
        let pos = curtain.tick(&clock);
        assert!(!curtain.click("/work/b", None, &clock));
        // the running cover continued instead of restarting from above
        assert_eq!(curtain.position(), pos);
    }

    #[test]
    fn test_reveal_waits_for_cover_to_finish() {
        let (mut curtain, clock) = after_first_paint();
        let start = clock.now();
        curtain.click("/work/foo", None, &clock);
        // route commits almost immediately, before the cover completes
        clock.advance(10.0);
        curtain.route_changed("/work/foo", &clock);

        let mut reached_cover = false;
        while clock.now() < start + 500.0 {
            clock.advance(10.0);
            let pos = curtain.tick(&clock);
            assert!(pos <= COVERED + EPS, "revealed before cover completed");
            reached_cover |= (pos - COVERED).abs() < EPS;
        }
        assert!(reached_cover);
        run_until_idle(&mut curtain, &clock);
        assert_eq!(curtain.state(), TransitionState::default());
    }

    #[test]
    fn test_route_change_without_click_forces_cover() {
        let (mut curtain, clock) = after_first_paint();
        assert_eq!(curtain.position(), ABOVE);
        assert!(curtain.route_changed("/work/bar", &clock));
        assert_eq!(curtain.position(), COVERED);
        assert!(curtain.state().covering);

        let samples = run_until_idle(&mut curtain, &clock);
        // never slides in from above: it only moves downward from covered
        assert!(samples.iter().all(|p| *p >= COVERED || *p == ABOVE));
        assert_eq!(curtain.position(), ABOVE);
    }

    #[test]
    fn test_click_to_current_path_does_not_cover() {
        let (mut curtain, clock) = after_first_paint();
        assert!(!curtain.click("/", None, &clock));
        assert!(!curtain.click("/?ref=nav", None, &clock));
        assert!(!curtain.state().covering);
        assert!(curtain.click("/work/a", None, &clock));
    }

    #[test]
    fn test_same_route_is_ignored() {
        let (mut curtain, clock) = after_first_paint();
        assert!(!curtain.route_changed("/", &clock));
        assert!(!curtain.is_animating());
    }

    #[test]
    fn test_newer_route_replaces_pending_reveal() {
        let (mut curtain, clock) = after_first_paint();
        curtain.route_changed("/work/a", &clock);
        clock.advance(60.0);
        curtain.tick(&clock);
        curtain.route_changed("/work/b", &clock);
        // the first reveal would have started at +120
        clock.advance(100.0);
        assert_eq!(curtain.tick(&clock), COVERED);
        clock.advance(40.0);
        assert!(curtain.tick(&clock) > COVERED);
    }

    #[test]
    fn test_flags_never_both_true() {
        let (mut curtain, clock) = after_first_paint();
        curtain.click("/work/a", None, &clock);
        for step in 0..200 {
            if step == 20 {
                curtain.route_changed("/work/a", &clock);
            }
            clock.advance(8.0);
            curtain.tick(&clock);
            let state = curtain.state();
            assert!(!(state.covering && state.revealed));
        }
    }
}
