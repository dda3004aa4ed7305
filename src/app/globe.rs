use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window};
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;

use super::{hooks::PerformanceClock, region::use_region};
use crate::{
    config::MotionConfig,
    motion::{
        globe::{
            graticule, journey_arc, starfield, toast_anchor, CameraRig, Projection, Star, Vec3,
            ARC_SEGMENTS, CAMERA_DISTANCE, FOV_DEGREES, GLOBE_RADIUS, MARKER_LIFT,
        },
        region::Region,
    },
};

/// Side of the square SVG viewport, in user units.
const VIEW: f64 = 600.0;
const STAR_COUNT: usize = 400;
const STAR_SEED: u64 = 2024;

/// Screen-space polylines for the parts of `points` facing the camera.
fn visible_runs(points: &[Vec3], projection: &Projection) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for point in points {
        let projected = projection
            .faces_camera(*point)
            .then(|| projection.project(*point))
            .flatten();
        match projected {
            Some(p) => {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&format!("{:.1},{:.1}", p.x, p.y));
            }
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs.retain(|r| r.contains(' '));
    runs
}

#[component]
pub fn GlobeScene() -> impl IntoView {
    let flight_ms = use_context::<MotionConfig>().unwrap_or_default().camera_flight_ms;
    let region = use_region();
    let rig = StoredValue::new(CameraRig::new(CAMERA_DISTANCE, flight_ms));
    let (camera, set_camera) = signal(rig.with_value(|r| r.position()));

    Effect::new(move |_| {
        let region = region.get();
        rig.update_value(|r| r.select(region, &PerformanceClock));
    });

    _ = use_raf_fn(move |_| {
        if !rig.with_value(|r| r.is_flying()) {
            return;
        }
        if let Some(position) = rig.try_update_value(|r| r.tick(&PerformanceClock)) {
            set_camera.set(position);
        }
    });

    let on_pointerdown = move |e: PointerEvent| {
        if e.button() != 0 {
            return;
        }
        let height = e
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.client_height() as f64)
            .unwrap_or(VIEW);
        rig.update_value(|r| r.begin_drag(e.client_x() as f64, e.client_y() as f64, height));
    };

    // on the window, so a drag keeps going after the pointer leaves the globe
    _ = use_event_listener(use_window(), ev::pointermove, move |e: PointerEvent| {
        let moved = rig
            .try_update_value(|r| r.drag_to(e.client_x() as f64, e.client_y() as f64))
            .flatten();
        if let Some(position) = moved {
            set_camera.set(position);
        }
    });
    _ = use_event_listener(use_window(), ev::pointerup, move |_| {
        rig.update_value(|r| r.end_drag());
    });
    _ = use_event_listener(use_window(), ev::pointercancel, move |_| {
        rig.update_value(|r| r.end_drag());
    });

    let projection = Memo::new(move |_| {
        Projection::look_at_origin(camera.get(), FOV_DEGREES, VIEW, VIEW)
    });

    let stars: Vec<Star> = starfield(STAR_COUNT, 50.0, 50.0, STAR_SEED);
    let grid = graticule(30.0, 48);
    let arc = journey_arc(ARC_SEGMENTS);

    let star_field = move || {
        let p = projection.get();
        stars
            .iter()
            .filter_map(|star| p.project(star.position).map(|s| (s, star.size)))
            .filter(|(s, _)| (0.0..=VIEW).contains(&s.x) && (0.0..=VIEW).contains(&s.y))
            .map(|(s, size)| {
                view! {
                    <circle
                        cx=format!("{:.1}", s.x)
                        cy=format!("{:.1}", s.y)
                        r=format!("{:.2}", size * 0.6)
                        fill="white"
                        opacity="0.6"
                    />
                }
            })
            .collect_view()
    };

    let grid_lines = move || {
        let p = projection.get();
        grid.iter()
            .flat_map(|line| visible_runs(line, &p))
            .map(|points| view! { <polyline points=points /> })
            .collect_view()
    };

    let arc_lines = move || {
        let p = projection.get();
        visible_runs(&arc, &p)
            .into_iter()
            .map(|points| view! { <polyline points=points /> })
            .collect_view()
    };

    let markers = move || {
        let p = projection.get();
        let active = region.get();
        Region::ALL
            .into_iter()
            .filter_map(|r| {
                let anchor = r.location().at_radius(GLOBE_RADIUS + MARKER_LIFT);
                let s = p.faces_camera(anchor).then(|| p.project(anchor)).flatten()?;
                let radius = if r == active { 7.0 } else { 4.5 };
                Some(view! {
                    <g
                        class="cursor-pointer"
                        data-cursor="pointer"
                        on:click=move |_| region.set(r)
                    >
                        <circle
                            cx=format!("{:.1}", s.x)
                            cy=format!("{:.1}", s.y)
                            r=format!("{:.1}", radius * 2.5)
                            fill="var(--color-accent-glow)"
                        />
                        <circle
                            cx=format!("{:.1}", s.x)
                            cy=format!("{:.1}", s.y)
                            r=format!("{radius:.1}")
                            fill=r.light_color()
                        />
                    </g>
                })
            })
            .collect_view()
    };

    let toast = move || {
        let p = projection.get();
        let active = region.get();
        let anchor = toast_anchor(active);
        let s = p.faces_camera(anchor).then(|| p.project(anchor)).flatten()?;
        let location = active.location();
        Some(view! {
            <g transform=format!("translate({:.1} {:.1})", s.x, s.y)>
                <rect x="-70" y="-46" width="140" height="36" rx="18" fill="#0a0a0a" stroke="var(--color-accent)" />
                <text y="-23" text-anchor="middle" fill="white" font-size="13" letter-spacing="2">
                    {location.label.to_uppercase()}
                </text>
            </g>
        })
    };

    let globe_disk = move || {
        let p = projection.get();
        let (cx, cy) = p.center();
        let (cx, cy) = (format!("{cx:.1}"), format!("{cy:.1}"));
        let radius = format!("{:.1}", p.sphere_radius(GLOBE_RADIUS));
        view! {
            <circle cx=cx.clone() cy=cy.clone() r=radius.clone() fill="url(#globe-fill)" />
            <circle
                cx=cx
                cy=cy
                r=radius
                fill="none"
                stroke=move || region.get().light_color()
                stroke-opacity="0.5"
                stroke-width="1.5"
            />
        }
    };

    view! {
        <svg
            viewBox=format!("0 0 {VIEW} {VIEW}")
            class="w-full h-full select-none touch-none"
            data-cursor="drag"
            data-cursor-label="Explore"
            role="img"
            aria-label="Globe showing the journey from Nepal to Ohio"
            on:pointerdown=on_pointerdown
        >
            <defs>
                <radialGradient id="globe-fill" cx="40%" cy="35%" r="70%">
                    <stop offset="0%" stop-color="#1a1a1a" />
                    <stop offset="100%" stop-color="#050505" />
                </radialGradient>
            </defs>
            <g>{star_field}</g>
            {globe_disk}
            <g fill="none" stroke="white" stroke-opacity="0.08" stroke-width="0.75">
                {grid_lines}
            </g>
            <g fill="none" stroke="var(--color-accent)" stroke-width="2" stroke-linecap="round">
                {arc_lines}
            </g>
            {markers}
            {toast}
        </svg>
    }
}

#[component]
pub fn RegionToggle() -> impl IntoView {
    let region = use_region();

    view! {
        <div class="relative inline-flex p-1 rounded-full border border-white/10 bg-white/5" role="group">
            <span
                class="absolute top-1 bottom-1 w-[calc(50%-4px)] rounded-full bg-[var(--color-accent)] transition-transform duration-500 ease-out"
                class:translate-x-full=move || region.get() == Region::Us
            ></span>
            {Region::ALL
                .into_iter()
                .map(|r| {
                    view! {
                        <button
                            class="relative z-10 w-28 py-2 text-xs tracking-widest uppercase"
                            aria-pressed=move || (region.get() == r).to_string()
                            on:click=move |_| region.set(r)
                        >
                            {r.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
