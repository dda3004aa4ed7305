use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::hooks::viewport_height;
use crate::{
    config::MotionConfig,
    motion::parallax::{translate_y, Bounds, ParallaxLayer},
};

/// Full-bleed band whose gradient background drifts against the scroll.
#[component]
pub fn ParallaxDivider(
    /// Any CSS colour; defaults to the region accent.
    #[prop(optional, into)]
    color: Option<String>,
    #[prop(optional)] speed: Option<f64>,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    let default_speed = use_context::<MotionConfig>().unwrap_or_default().parallax_speed;
    let layer = ParallaxLayer::new(speed.unwrap_or(default_speed));
    let container = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(translate_y(0.0));

    let update = move || {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        layer.on_scroll(
            Bounds::new(rect.top(), rect.height()),
            viewport_height(),
            |offset| set_transform.set(translate_y(offset)),
        );
    };

    _ = use_event_listener(use_window(), ev::scroll, move |_| update());
    Effect::new(move |_| {
        if container.get().is_some() {
            update();
        }
    });

    let color = color.unwrap_or_else(|| "var(--color-accent)".to_string());
    let background = format!(
        "background: radial-gradient(ellipse at 30% 50%, {color} 0%, transparent 60%), \
         linear-gradient(180deg, #030303 0%, #0a0a0a 50%, #030303 100%); opacity: 0.9;"
    );

    view! {
        <div node_ref=container class="relative h-[40vh] md:h-[60vh] overflow-hidden">
            <div
                class="absolute inset-x-0 -top-1/4 -bottom-1/4 will-change-transform"
                style=move || format!("{background} transform: {};", transform.get())
            ></div>
            {caption
                .map(|caption| {
                    view! {
                        <p class="relative h-full flex items-center justify-center text-xs tracking-[0.3em] uppercase text-neutral-400">
                            {caption}
                        </p>
                    }
                })}
        </div>
    }
}
