//! One-time loading screen shown on the first visit of a browser session.

use super::clock::Clock;

pub const SESSION_KEY: &str = "app_loaded";
pub const MIN_DISPLAY_MS: f64 = 3200.0;
pub const STEP_COUNT: usize = 70;
pub const DISPLAY_EASE: f64 = 0.12;
/// Delay between progress reaching 100 and the screen being removed.
pub const EXIT_MS: f64 = 700.0;

pub const LOADING_STEPS: [&str; 5] = [
    "Initializing assets",
    "Loading stylesheets",
    "Rendering components",
    "Optimizing layout",
    "Finalizing render",
];

/// Per-session flag recording that the loading screen already ran.
pub trait SessionMarker {
    fn is_marked(&self) -> bool;
    fn mark(&mut self);
}

/// Whether to show the loading screen, marking the session if so.
pub fn should_show(marker: &mut impl SessionMarker) -> bool {
    if marker.is_marked() {
        false
    } else {
        marker.mark();
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingStep {
    /// Offset from the start of the sequence.
    pub at_ms: f64,
    pub target_pct: f64,
    pub label_index: usize,
}

/// Progress updates front-loaded toward the start of the minimum display
/// window, so the bar moves quickly at first and settles near the end.
pub fn step_schedule() -> Vec<LoadingStep> {
    (1..=STEP_COUNT)
        .map(|step| {
            let frac = step as f64 / STEP_COUNT as f64;
            LoadingStep {
                at_ms: frac * MIN_DISPLAY_MS * (0.3 + frac * 0.7),
                target_pct: (frac * 100.0).round(),
                label_index: (frac * (LOADING_STEPS.len() - 1) as f64).floor() as usize,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingFrame {
    /// Eased progress shown to the user, in [0, 100].
    pub display_pct: f64,
    pub label: &'static str,
    /// The bar reached 100 and the exit animation is running.
    pub exiting: bool,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct LoadingSequence {
    started_at: f64,
    schedule: Vec<LoadingStep>,
    next_step: usize,
    target_pct: f64,
    display_pct: f64,
    label_index: usize,
    exit_at: Option<f64>,
}

impl LoadingSequence {
    pub fn start(clock: &impl Clock) -> Self {
        Self {
            started_at: clock.now(),
            schedule: step_schedule(),
            next_step: 0,
            target_pct: 0.0,
            display_pct: 0.0,
            label_index: 0,
            exit_at: None,
        }
    }

    pub fn target_pct(&self) -> f64 {
        self.target_pct
    }

    /// Advance one animation frame.
    pub fn tick(&mut self, clock: &impl Clock) -> LoadingFrame {
        let now = clock.now();
        let elapsed = now - self.started_at;
        while let Some(step) = self.schedule.get(self.next_step) {
            if step.at_ms > elapsed {
                break;
            }
            self.target_pct = step.target_pct;
            self.label_index = step.label_index;
            self.next_step += 1;
        }

        self.display_pct += (self.target_pct - self.display_pct) * DISPLAY_EASE;
        if self.target_pct >= 100.0 && self.exit_at.is_none() {
            self.exit_at = Some(now + EXIT_MS);
        }

        LoadingFrame {
            display_pct: self.display_pct,
            label: LOADING_STEPS[self.label_index.min(LOADING_STEPS.len() - 1)],
            exiting: self.exit_at.is_some(),
            done: self.exit_at.is_some_and(|at| now >= at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::clock::ManualClock;

    #[derive(Default)]
    struct MemoryMarker(bool);

    impl SessionMarker for MemoryMarker {
        fn is_marked(&self) -> bool {
            self.0
        }

        fn mark(&mut self) {
            self.0 = true;
        }
    }

    #[test]
    fn test_shown_once_per_session() {
        let mut marker = MemoryMarker::default();
        assert!(should_show(&mut marker));
        assert!(!should_show(&mut marker));
        assert!(!should_show(&mut marker));
    }

    #[test]
    fn test_schedule_shape() {
        let steps = step_schedule();
        assert_eq!(steps.len(), STEP_COUNT);
        assert_eq!(steps[0].target_pct, 1.0);
        let last = steps[STEP_COUNT - 1];
        assert_eq!(last.target_pct, 100.0);
        assert!((last.at_ms - MIN_DISPLAY_MS).abs() < 1e-9);
        assert_eq!(last.label_index, LOADING_STEPS.len() - 1);
        assert!(steps.windows(2).all(|w| w[0].at_ms < w[1].at_ms));
        assert!(steps.windows(2).all(|w| w[0].label_index <= w[1].label_index));
    }

    #[test]
    fn test_sequence_runs_to_completion() {
        let clock = ManualClock::new(500.0);
        let mut seq = LoadingSequence::start(&clock);
        let first = seq.tick(&clock);
        assert_eq!(first.display_pct, 0.0);
        assert_eq!(first.label, LOADING_STEPS[0]);
        assert!(!first.exiting);

        let mut prev = 0.0;
        let mut frame = first;
        while clock.now() < 500.0 + MIN_DISPLAY_MS {
            clock.advance(16.0);
            frame = seq.tick(&clock);
            assert!(frame.display_pct >= prev);
            assert!(frame.display_pct <= 100.0);
            prev = frame.display_pct;
        }
        assert_eq!(seq.target_pct(), 100.0);
        assert!(frame.exiting);
        assert!(!frame.done);
        assert_eq!(frame.label, "Finalizing render");

        clock.advance(EXIT_MS);
        assert!(seq.tick(&clock).done);
    }
}
