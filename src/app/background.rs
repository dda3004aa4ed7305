use std::fmt::Write;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, utils::Pausable};
use web_sys::MouseEvent;

use super::hooks::{use_in_view, viewport_height, viewport_width, PerformanceClock};
use crate::motion::{
    background::{BackgroundScene, CAMERA_Z, FOV_DEGREES, PARTICLE_COUNT},
    globe::{Projection, Vec3},
    viewport::InViewOptions,
};

const VIEW_W: f64 = 1600.0;
const VIEW_H: f64 = 900.0;
const SEED: u64 = 360;

fn particle_path(scene: &BackgroundScene, projection: &Projection) -> String {
    let mut d = String::new();
    for particle in scene.particles() {
        if let Some(s) = projection.project(scene.tilted(particle.position)) {
            _ = write!(d, "M{:.1} {:.1}h0", s.x, s.y);
        }
    }
    d
}

fn shape_path(scene: &BackgroundScene, index: usize, projection: &Projection) -> String {
    let mut d = String::new();
    let Some(shape) = scene.shapes().get(index) else {
        return d;
    };
    for (a, b) in shape.segments() {
        let a = projection.project(scene.tilted(a));
        let b = projection.project(scene.tilted(b));
        if let (Some(a), Some(b)) = (a, b) {
            _ = write!(d, "M{:.1} {:.1}L{:.1} {:.1}", a.x, a.y, b.x, b.y);
        }
    }
    d
}

/// Wireframe solids and drifting particles behind the hero. Animates only
/// while on screen.
#[component]
pub fn HeroBackground() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_in_view(node, InViewOptions::default().once(false));
    let scene = StoredValue::new(BackgroundScene::new(PARTICLE_COUNT, SEED));
    let frame = ArcTrigger::new();
    let projection =
        Projection::look_at_origin(Vec3::new(0.0, 0.0, CAMERA_Z), FOV_DEGREES, VIEW_W, VIEW_H);

    let Pausable { pause, resume, .. } = use_raf_fn({
        let frame = frame.clone();
        move |_| {
            scene.update_value(|s| s.tick(&PerformanceClock));
            frame.notify();
        }
    });

    Effect::new(move |_| {
        if visible.get() {
            resume();
        } else {
            pause();
        }
    });

    _ = use_event_listener(use_window(), ev::mousemove, move |e: MouseEvent| {
        let (width, height) = (viewport_width(), viewport_height());
        scene.update_value(|s| {
            s.set_pointer(e.client_x() as f64, e.client_y() as f64, width, height)
        });
    });

    let particles = {
        let frame = frame.clone();
        move || {
            frame.track();
            scene.with_value(|s| particle_path(s, &projection))
        }
    };

    let tints: Vec<_> = scene.with_value(|s| s.shapes().iter().map(|shape| shape.tint).collect());
    let shapes = tints
        .into_iter()
        .enumerate()
        .map(|(index, tint)| {
            let frame = frame.clone();
            let d = move || {
                frame.track();
                scene.with_value(|s| shape_path(s, index, &projection))
            };
            view! { <path d=d stroke=tint.color() /> }
        })
        .collect_view();

    view! {
        <div
            node_ref=node
            class="absolute inset-0 pointer-events-none overflow-hidden"
            aria-hidden="true"
        >
            <svg
                viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
                preserveAspectRatio="xMidYMid slice"
                class="w-full h-full"
            >
                <g fill="none" stroke-width="1" stroke-opacity="0.32">
                    {shapes}
                </g>
                <path
                    d=particles
                    fill="none"
                    stroke="white"
                    stroke-opacity="0.4"
                    stroke-width="2.5"
                    stroke-linecap="round"
                />
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> Projection {
        Projection::look_at_origin(Vec3::new(0.0, 0.0, CAMERA_Z), FOV_DEGREES, VIEW_W, VIEW_H)
    }

    #[test]
    fn test_every_particle_is_drawn() {
        let scene = BackgroundScene::new(50, SEED);
        let d = particle_path(&scene, &projection());
        assert_eq!(d.matches('M').count(), 50);
    }

    #[test]
    fn test_shape_paths() {
        let scene = BackgroundScene::new(0, SEED);
        // the large icosahedron
        let d = shape_path(&scene, 0, &projection());
        assert_eq!(d.matches('M').count(), 30);
        assert!(shape_path(&scene, scene.shapes().len(), &projection()).is_empty());
    }
}
