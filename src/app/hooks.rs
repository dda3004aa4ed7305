use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::motion::{
    clock::Clock,
    frame::FrameGate,
    scroll::{scroll_progress, ScrollState, ScrollTracker},
    viewport::{InViewOptions, ViewportObserver},
};

/// `performance.now()`. Only read from browser callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        window()
            .performance()
            .map(|p| p.now())
            .unwrap_or_default()
    }
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or_default()
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Set `overflow` on `<body>`, used to lock scrolling under overlays.
pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().body() {
        _ = body.style().set_property("overflow", value);
    }
}

/// Whether the element behind `target` is visible enough, per `options`.
///
/// With `once` set the signal latches on the first entry and the observer is
/// disconnected.
pub fn use_in_view(target: NodeRef<html::Div>, options: InViewOptions) -> Signal<bool> {
    let (in_view, set_in_view) = signal(false);
    let once = options.once;
    let observer = StoredValue::new(ViewportObserver::new(options.clone()));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            let Some(entry) = entries.last() else {
                return;
            };
            let fraction = if entry.is_intersecting() {
                entry.intersection_ratio()
            } else {
                0.0
            };
            if let Some(visible) = observer.try_update_value(|o| o.update(fraction)) {
                if visible != in_view.get_untracked() {
                    set_in_view.set(visible);
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin),
    );

    Effect::new(move |_| {
        if once && in_view.get() {
            stop();
        }
    });

    in_view.into()
}

/// Direction and offset of window scrolling, sampled at most once a frame.
pub fn use_scroll_direction(threshold: f64) -> ReadSignal<ScrollState> {
    let (state, set_state) = signal(ScrollState::default());
    let tracker = StoredValue::new(None::<ScrollTracker>);
    let gate = StoredValue::new(FrameGate::new());

    Effect::new(move |_| {
        tracker.set_value(Some(ScrollTracker::starting_at(threshold, scroll_y())));
    });

    _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if !gate.try_update_value(|g| g.request()).unwrap_or(false) {
            return;
        }
        request_animation_frame(move || {
            let y = scroll_y();
            let sample = tracker.try_update_value(|t| {
                t.get_or_insert_with(|| ScrollTracker::new(threshold))
                    .sample(y)
            });
            gate.update_value(|g| g.complete());
            if let Some(sample) = sample {
                if sample != state.get_untracked() {
                    set_state.set(sample);
                }
            }
        });
    });

    state
}

/// How far down the document the window is scrolled, in [0, 1].
pub fn use_scroll_progress() -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);
    let gate = StoredValue::new(FrameGate::new());

    let measure = move || {
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        set_progress.set(scroll_progress(scroll_y(), document_height, viewport_height()));
    };

    Effect::new(move |_| measure());

    _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if !gate.try_update_value(|g| g.request()).unwrap_or(false) {
            return;
        }
        request_animation_frame(move || {
            measure();
            gate.update_value(|g| g.complete());
        });
    });

    progress
}
