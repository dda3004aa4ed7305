use leptos::prelude::*;
use leptos_use::use_raf_fn;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_session_storage;

use super::hooks::{set_body_overflow, PerformanceClock};
use crate::motion::loading::{LoadingFrame, LoadingSequence, LOADING_STEPS};
#[cfg(feature = "hydrate")]
use crate::motion::loading::{should_show, SessionMarker, SESSION_KEY};

#[cfg(feature = "hydrate")]
struct StorageMarker {
    loaded: Signal<bool>,
    set_loaded: WriteSignal<bool>,
}

#[cfg(feature = "hydrate")]
impl SessionMarker for StorageMarker {
    fn is_marked(&self) -> bool {
        self.loaded.get_untracked()
    }

    fn mark(&mut self) {
        self.set_loaded.set(true);
    }
}

const FIRST_FRAME: LoadingFrame = LoadingFrame {
    display_pct: 0.0,
    label: LOADING_STEPS[0],
    exiting: false,
    done: false,
};

/// Full-screen progress overlay, shown once per browser session.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (visible, set_visible) = signal(true);
    let (frame, set_frame) = signal(FIRST_FRAME);
    let sequence = StoredValue::new(None::<LoadingSequence>);

    #[cfg(feature = "hydrate")]
    let (loaded, set_loaded, _) = use_session_storage::<bool, JsonSerdeWasmCodec>(SESSION_KEY);

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let mut marker = StorageMarker { loaded, set_loaded };
            if should_show(&mut marker) {
                log::info!("first visit this session, running loading sequence");
                set_body_overflow("hidden");
                sequence.set_value(Some(LoadingSequence::start(&PerformanceClock)));
            } else {
                set_visible.set(false);
            }
        },
        true,
    );

    _ = use_raf_fn(move |_| {
        let Some(next) = sequence
            .try_update_value(|s| s.as_mut().map(|s| s.tick(&PerformanceClock)))
            .flatten()
        else {
            return;
        };
        set_frame.set(next);
        if next.done {
            sequence.set_value(None);
            set_body_overflow("");
            set_visible.set(false);
        }
    });

    let pct = move || frame.get().display_pct;

    view! {
        <Show when=move || visible.get()>
            <div
                class=move || {
                    format!(
                        "fixed inset-0 z-[300] flex flex-col items-center justify-center bg-[#030303] transition-transform duration-700 ease-[cubic-bezier(0.76,0,0.24,1)] {}",
                        if frame.get().exiting { "-translate-y-full" } else { "translate-y-0" },
                    )
                }
            >
                <svg viewBox="-60 -60 120 120" class="w-28 h-28 mb-12" aria-hidden="true">
                    <g
                        fill="none"
                        stroke="var(--color-accent)"
                        stroke-width="1"
                        transform=move || format!("rotate({:.1})", pct() * 3.6)
                    >
                        <polygon points="0,-50 43.3,-25 43.3,25 0,50 -43.3,25 -43.3,-25" />
                        <polygon
                            points="0,-30 26,-15 26,15 0,30 -26,15 -26,-15"
                            opacity="0.5"
                        />
                    </g>
                </svg>
                <div class="w-64 h-px bg-white/10 overflow-hidden">
                    <div
                        class="h-full bg-[var(--color-accent)] origin-left"
                        style:transform=move || format!("scaleX({:.4})", pct() / 100.0)
                    ></div>
                </div>
                <div class="mt-6 flex w-64 justify-between text-[10px] tracking-[0.3em] uppercase text-neutral-500">
                    <span>{move || frame.get().label}</span>
                    <span>{move || format!("{:03}", pct().round() as u32)}</span>
                </div>
            </div>
        </Show>
    }
}
