use leptos::{ev, prelude::*};
use leptos_use::{
    use_document, use_event_listener, use_media_query, use_raf_fn, use_window,
    utils::Pausable,
};
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::{
    config::MotionConfig,
    motion::cursor::{
        is_interactive_tag, CursorController, CursorState, CursorVariant, HoverNode,
        NativeCursor, NativeCursorSink, Point, CURSOR_ATTR, CURSOR_LABEL_ATTR,
    },
};

/// Walk from the event target up to the root, collecting what the cursor
/// resolution needs from each element.
fn hover_path(target: Option<web_sys::EventTarget>) -> Vec<HoverNode> {
    let mut path = Vec::new();
    let mut current = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok());
    while let Some(el) = current {
        path.push(HoverNode {
            cursor: el.get_attribute(CURSOR_ATTR),
            label: el.get_attribute(CURSOR_LABEL_ATTR),
            interactive: is_interactive_tag(&el.tag_name(), el.get_attribute("role").as_deref()),
        });
        current = el.parent_element();
    }
    path
}

fn translate(p: Point) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", p.x, p.y)
}

/// The `custom-cursor-active` class on `<body>`, which hides the native cursor.
struct BodyClass;

impl NativeCursorSink for BodyClass {
    fn set_hidden(&mut self, hidden: bool) {
        if let Some(body) = document().body() {
            _ = body
                .class_list()
                .toggle_with_force("custom-cursor-active", hidden);
        }
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let lerp = use_context::<MotionConfig>().unwrap_or_default().cursor_lerp;
    let is_coarse = use_media_query("(pointer: coarse)");
    let controller = StoredValue::new(CursorController::disabled());
    let native = StoredValue::new(NativeCursor::default());
    let (enabled, set_enabled) = signal(false);
    let (state, set_state) = signal(CursorState::default());
    let (dot, set_dot) = signal(Point::default());
    let (outline, set_outline) = signal(Point::default());

    let Pausable { pause, resume, .. } = use_raf_fn(move |_| {
        if let Some(p) = controller.try_update_value(|c| c.tick()) {
            set_outline.set(p);
        }
    });

    Effect::new(move |_| {
        let coarse = is_coarse.get();
        controller.set_value(if coarse {
            CursorController::disabled()
        } else {
            CursorController::new(lerp)
        });
        set_enabled.set(!coarse);
        native.update_value(|n| n.set_hidden(!coarse, &mut BodyClass));
        if coarse {
            pause();
        } else {
            resume();
        }
    });

    on_cleanup(move || {
        native.try_update_value(|n| n.restore(&mut BodyClass));
    });

    _ = use_event_listener(use_window(), ev::mousemove, move |e: MouseEvent| {
        let (x, y) = (e.client_x() as f64, e.client_y() as f64);
        controller.update_value(|c| c.pointer_move(x, y));
        set_dot.set(Point::new(x, y));
    });

    _ = use_event_listener(use_document(), ev::mouseover, move |e: MouseEvent| {
        // a null related target means the pointer came from outside the window
        if e.related_target().is_none() {
            controller.update_value(|c| {
                c.pointer_enter();
            });
        }
        let path = hover_path(e.target());
        controller.update_value(|c| {
            c.pointer_over(&path);
        });
        let next = controller.with_value(|c| c.state().clone());
        if next != state.get_untracked() {
            set_state.set(next);
        }
    });

    _ = use_event_listener(use_document(), ev::mouseout, move |e: MouseEvent| {
        if e.related_target().is_none()
            && controller
                .try_update_value(|c| c.pointer_leave())
                .unwrap_or(false)
        {
            set_state.set(controller.with_value(|c| c.state().clone()));
        }
    });

    let variant = Memo::new(move |_| state.with(|s| s.variant));
    let dot_style = move || {
        let v = variant.get();
        let w = v.dot_size();
        // the text variant is a caret
        let h = if v == CursorVariant::Text { 24.0 } else { w };
        format!(
            "width: {w}px; height: {h}px; margin-left: {}px; margin-top: {}px;",
            -w / 2.0,
            -h / 2.0
        )
    };
    let outline_style = move || {
        let size = variant.get().outline_size();
        format!(
            "width: {size}px; height: {size}px; margin-left: {}px; margin-top: {}px; opacity: {};",
            -size / 2.0,
            -size / 2.0,
            if size > 0.0 { 1 } else { 0 }
        )
    };

    view! {
        <Show when=move || enabled.get()>
            <div
                class="fixed top-0 left-0 z-[9999] pointer-events-none mix-blend-difference"
                aria-hidden="true"
                style:transform=move || translate(dot.get())
            >
                <div
                    class="bg-white transition-all duration-300 ease-out"
                    class:rounded-full=move || variant.get() != CursorVariant::Text
                    style=dot_style
                ></div>
            </div>
            <div
                class="fixed top-0 left-0 z-[9998] pointer-events-none"
                aria-hidden="true"
                style:transform=move || translate(outline.get())
            >
                <div
                    class="flex items-center justify-center rounded-full border border-white/60 backdrop-blur-sm transition-all duration-300 ease-out"
                    class:bg-white=move || variant.get().shows_label()
                    style=outline_style
                >
                    {move || {
                        state
                            .with(|s| s.visible_label().map(str::to_string))
                            .map(|label| {
                                view! {
                                    <span class="text-[10px] font-medium tracking-widest uppercase text-black">
                                        {label}
                                    </span>
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}
