use leptos::{ev, prelude::*};
use leptos_router::components::A;

use super::hooks::{set_body_overflow, use_scroll_direction, use_scroll_progress};
use crate::config::MotionConfig;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Work", "/#work"),
    ("About", "/#about"),
    ("Journey", "/#journey"),
    ("Contact", "/#contact"),
];

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = use_scroll_progress();

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-[2px] z-[60] origin-left bg-[var(--color-accent)] pointer-events-none"
            style:transform=move || format!("scaleX({:.4})", progress.get())
        ></div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let threshold = use_context::<MotionConfig>().unwrap_or_default().scroll_threshold;
    let scroll = use_scroll_direction(threshold);
    let (menu_open, set_menu_open) = signal(false);

    let hidden = move || scroll.get().hides_navbar(menu_open.get());
    let header_class = move || {
        let mut class = String::from(
            "fixed top-0 left-0 right-0 z-50 transition-all duration-500 ease-out",
        );
        class.push_str(if hidden() { " -translate-y-full" } else { " translate-y-0" });
        if !scroll.get().is_at_top {
            class.push_str(" bg-[#030303]/80 backdrop-blur-md border-b border-white/5");
        }
        class
    };

    Effect::new(move |_| {
        set_body_overflow(if menu_open.get() { "hidden" } else { "" });
    });

    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    view! {
        <header class=header_class>
            <nav class="max-w-7xl mx-auto flex items-center justify-between px-6 md:px-12 h-20">
                <A href="/" attr:class="text-lg font-semibold tracking-tight" attr:data-cursor="pointer">
                    "Prastut"
                    <span class="text-[var(--color-accent)]">"."</span>
                </A>
                <ul class="hidden md:flex gap-10 text-sm tracking-wide">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="text-neutral-400 hover:text-white transition-colors"
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="md:hidden relative w-8 h-8"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class=move || {
                        format!(
                            "absolute left-1 right-1 h-px bg-white transition-transform duration-300 {}",
                            if menu_open.get() { "top-4 rotate-45" } else { "top-3" },
                        )
                    }></span>
                    <span class=move || {
                        format!(
                            "absolute left-1 right-1 h-px bg-white transition-transform duration-300 {}",
                            if menu_open.get() { "top-4 -rotate-45" } else { "top-5" },
                        )
                    }></span>
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden fixed inset-0 top-20 bg-[#030303] flex flex-col gap-8 px-6 pt-12">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=href class="text-4xl font-light" on:click=close_menu>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
