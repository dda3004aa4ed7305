use leptos::{ev, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{
    use_document, use_event_listener_with_options, use_raf_fn, UseEventListenerOptions,
};
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use super::hooks::PerformanceClock;
use crate::{
    config::MotionConfig,
    motion::curtain::{ClickKeys, Curtain, COVERED},
};

/// Full-screen panel that covers the page on internal navigation and slides
/// away once the new route has rendered.
#[component]
pub fn TransitionCurtain() -> impl IntoView {
    let timings = use_context::<MotionConfig>().unwrap_or_default().curtain;
    let curtain = StoredValue::new(Curtain::new(timings));
    let (position, set_position) = signal(COVERED);
    let location = use_location();

    // capture phase, so the cover starts before the router handles the click
    _ = use_event_listener_with_options(
        use_document(),
        ev::click,
        move |e: MouseEvent| {
            let keys = ClickKeys {
                button: e.button(),
                meta: e.meta_key(),
                ctrl: e.ctrl_key(),
                shift: e.shift_key(),
                alt: e.alt_key(),
            };
            if e.default_prevented() || !keys.navigates_in_place() {
                return;
            }
            let Some(link) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest("a[href]").ok().flatten())
            else {
                return;
            };
            let href = link.get_attribute("href").unwrap_or_default();
            let target = link.get_attribute("target");
            let started = curtain
                .try_update_value(|c| c.click(&href, target.as_deref(), &PerformanceClock))
                .unwrap_or(false);
            if started {
                log::debug!("covering for navigation to {href}");
            }
        },
        UseEventListenerOptions::default().capture(true),
    );

    Effect::new(move |_| {
        let path = location.pathname.get();
        curtain.update_value(|c| {
            c.route_changed(&path, &PerformanceClock);
        });
    });

    _ = use_raf_fn(move |_| {
        let Some(next) = curtain.try_update_value(|c| c.tick(&PerformanceClock)) else {
            return;
        };
        if next != position.get_untracked() {
            set_position.set(next);
        }
    });

    view! {
        <div
            class="fixed inset-0 z-[200] pointer-events-none bg-[#030303] will-change-transform"
            aria-hidden="true"
            style:transform=move || format!("translateY({:.3}%)", position.get())
        >
            <div class="absolute bottom-0 left-0 right-0 h-px bg-[rgba(201,168,124,0.5)]"></div>
        </div>
    }
}
