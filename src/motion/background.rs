//! Decorative hero backdrop: a handful of spinning wireframe solids and a
//! cloud of drifting particles, tilted toward the mouse.
//!
//! Everything lives in a box centred on the origin with half-extents
//! [`HALF_EXTENT`], viewed from `(0, 0, CAMERA_Z)`. Particles leaving the box
//! wrap to the opposite face.

use std::f64::consts::PI;

use super::clock::Clock;
use super::globe::{Vec3, XorShift};

pub const PARTICLE_COUNT: usize = 360;
pub const HALF_EXTENT: Vec3 = Vec3::new(10.0, 7.0, 4.0);
pub const CAMERA_Z: f64 = 10.0;
pub const FOV_DEGREES: f64 = 65.0;

/// Velocities below are tuned per 60 fps frame and scaled to seconds.
const FRAME_RATE: f64 = 60.0;
const MAX_PARTICLE_SPEED: Vec3 = Vec3::new(0.0025, 0.0025, 0.0015);
/// Extra drift per frame for each unit of pointer offset.
const POINTER_DRIFT: f64 = 0.001;
/// Group tilt (radians) at full pointer offset, around x and y.
const TILT_X: f64 = 0.12;
const TILT_Y: f64 = 0.22;
/// Parallax smoothing, as a fraction of the gap closed per second.
const PARALLAX_RATE: f64 = 2.5;
/// Longest step taken in one tick, so a backgrounded tab doesn't jump.
const MAX_STEP_S: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solid {
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

impl Solid {
    /// Vertices on the unit sphere.
    pub fn vertices(&self) -> Vec<Vec3> {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let raw: Vec<Vec3> = match self {
            Solid::Tetrahedron => vec![
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ],
            Solid::Octahedron => vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, -1.0),
            ],
            Solid::Icosahedron => signs2()
                .flat_map(|(a, b)| {
                    [
                        Vec3::new(0.0, a, b * phi),
                        Vec3::new(a, b * phi, 0.0),
                        Vec3::new(b * phi, 0.0, a),
                    ]
                })
                .collect(),
            Solid::Dodecahedron => {
                let inv = 1.0 / phi;
                let cube = signs2().flat_map(|(a, b)| {
                    [Vec3::new(a, b, 1.0), Vec3::new(a, b, -1.0)]
                });
                let rest = signs2().flat_map(|(a, b)| {
                    [
                        Vec3::new(0.0, a * inv, b * phi),
                        Vec3::new(a * inv, b * phi, 0.0),
                        Vec3::new(b * phi, 0.0, a * inv),
                    ]
                });
                cube.chain(rest).collect()
            }
        };
        raw.into_iter().map(Vec3::normalize).collect()
    }

    /// Index pairs of the solid's edges: every vertex pair at the shortest
    /// distance found.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let vertices = self.vertices();
        let shortest = pairs(vertices.len())
            .map(|(i, j)| vertices[i].distance(vertices[j]))
            .fold(f64::INFINITY, f64::min);
        pairs(vertices.len())
            .filter(|&(i, j)| vertices[i].distance(vertices[j]) < shortest * 1.001)
            .collect()
    }
}

fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

fn signs2() -> impl Iterator<Item = (f64, f64)> {
    [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)].into_iter()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Accent,
    White,
}

impl Tint {
    pub fn color(&self) -> &'static str {
        match self {
            Tint::Accent => "#C9A87C",
            Tint::White => "#FFFFFF",
        }
    }
}

/// Rotate by Euler angles applied z, then y, then x.
pub fn rotate_xyz(v: Vec3, angles: Vec3) -> Vec3 {
    let (sx, cx) = angles.x.sin_cos();
    let (sy, cy) = angles.y.sin_cos();
    let (sz, cz) = angles.z.sin_cos();
    let v = Vec3::new(v.x * cz - v.y * sz, v.x * sz + v.y * cz, v.z);
    let v = Vec3::new(v.x * cy + v.z * sy, v.y, -v.x * sy + v.z * cy);
    Vec3::new(v.x, v.y * cx - v.z * sx, v.y * sx + v.z * cx)
}

/// Wrap a coordinate that left `[-half, half]` to the opposite face.
pub fn wrap(value: f64, half: f64) -> f64 {
    if value > half {
        -half
    } else if value < -half {
        half
    } else {
        value
    }
}

#[derive(Debug, Clone)]
pub struct WireShape {
    pub solid: Solid,
    pub position: Vec3,
    pub scale: f64,
    pub tint: Tint,
    /// Spin in radians per second around each axis.
    pub spin: Vec3,
    pub rotation: Vec3,
    vertices: Vec<Vec3>,
    edges: Vec<(usize, usize)>,
}

impl WireShape {
    pub fn new(solid: Solid, position: Vec3, scale: f64, spin: Vec3, tint: Tint) -> Self {
        Self {
            solid,
            position,
            scale,
            tint,
            spin,
            rotation: Vec3::ZERO,
            vertices: solid.vertices(),
            edges: solid.edges(),
        }
    }

    /// Edge segments in scene space, before the group tilt.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let place = |v: Vec3| self.position + rotate_xyz(v, self.rotation) * self.scale;
        self.edges
            .iter()
            .map(move |&(a, b)| (place(self.vertices[a]), place(self.vertices[b])))
    }
}

fn default_shapes() -> Vec<WireShape> {
    use Solid::*;
    use Tint::*;
    [
        (Icosahedron, (4.5, 0.0, -3.0), 3.5, (0.06, 0.09, 0.03), Accent),
        (Octahedron, (7.0, 2.5, 0.0), 0.8, (0.12, 0.08, 0.15), White),
        (Tetrahedron, (2.5, -2.8, 1.0), 0.55, (0.1, 0.14, 0.08), White),
        (Dodecahedron, (8.5, -1.5, -2.0), 1.1, (0.05, 0.07, 0.04), Accent),
        (Icosahedron, (1.0, 3.5, -1.0), 0.4, (0.18, 0.12, 0.2), White),
        (Octahedron, (9.5, 3.0, -1.0), 0.65, (0.08, 0.15, 0.06), Accent),
    ]
    .into_iter()
    .map(|(solid, (x, y, z), scale, (sx, sy, sz), tint)| {
        WireShape::new(solid, Vec3::new(x, y, z), scale, Vec3::new(sx, sy, sz), tint)
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Units per second.
    pub velocity: Vec3,
}

#[derive(Debug, Clone)]
pub struct BackgroundScene {
    shapes: Vec<WireShape>,
    particles: Vec<Particle>,
    /// Pointer offset from the viewport centre, in [-1, 1], +y up.
    pointer: (f64, f64),
    /// Current group rotation around x and y.
    tilt: (f64, f64),
    last_tick: Option<f64>,
}

impl BackgroundScene {
    pub fn new(particle_count: usize, seed: u64) -> Self {
        let mut rng = XorShift::new(seed);
        let mut centred = |half: f64| (rng.next_f64() - 0.5) * 2.0 * half;
        let particles = (0..particle_count)
            .map(|_| {
                let position = Vec3::new(
                    centred(HALF_EXTENT.x),
                    centred(HALF_EXTENT.y),
                    centred(HALF_EXTENT.z),
                );
                let velocity = Vec3::new(
                    centred(MAX_PARTICLE_SPEED.x),
                    centred(MAX_PARTICLE_SPEED.y),
                    centred(MAX_PARTICLE_SPEED.z),
                ) * FRAME_RATE;
                Particle { position, velocity }
            })
            .collect();
        Self {
            shapes: default_shapes(),
            particles,
            pointer: (0.0, 0.0),
            tilt: (0.0, 0.0),
            last_tick: None,
        }
    }

    pub fn shapes(&self) -> &[WireShape] {
        &self.shapes
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn tilt(&self) -> (f64, f64) {
        self.tilt
    }

    /// Record the mouse at `(x, y)` px in a `width` by `height` viewport.
    pub fn set_pointer(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.pointer = (
            ((x / width - 0.5) * 2.0).clamp(-1.0, 1.0),
            (-(y / height - 0.5) * 2.0).clamp(-1.0, 1.0),
        );
    }

    pub fn tick(&mut self, clock: &impl Clock) {
        let now = clock.now();
        let dt = self
            .last_tick
            .map(|last| ((now - last) / 1000.0).clamp(0.0, MAX_STEP_S))
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        if dt > 0.0 {
            self.step(dt);
        }
    }

    fn step(&mut self, dt: f64) {
        for shape in &mut self.shapes {
            shape.rotation = shape.rotation + shape.spin * dt;
            shape.rotation = Vec3::new(
                shape.rotation.x % (2.0 * PI),
                shape.rotation.y % (2.0 * PI),
                shape.rotation.z % (2.0 * PI),
            );
        }

        let (px, py) = self.pointer;
        let drift = Vec3::new(px, py, 0.0) * (POINTER_DRIFT * FRAME_RATE);
        for particle in &mut self.particles {
            let p = particle.position + (particle.velocity + drift) * dt;
            particle.position = Vec3::new(
                wrap(p.x, HALF_EXTENT.x),
                wrap(p.y, HALF_EXTENT.y),
                wrap(p.z, HALF_EXTENT.z),
            );
        }

        let k = (PARALLAX_RATE * dt).min(1.0);
        self.tilt.0 += (py * TILT_X - self.tilt.0) * k;
        self.tilt.1 += (px * TILT_Y - self.tilt.1) * k;
    }

    /// Apply the pointer tilt to a scene-space point.
    pub fn tilted(&self, point: Vec3) -> Vec3 {
        rotate_xyz(point, Vec3::new(self.tilt.0, self.tilt.1, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::clock::ManualClock;

    const EPS: f64 = 1e-9;

    fn in_box(p: Vec3) -> bool {
        p.x.abs() <= HALF_EXTENT.x && p.y.abs() <= HALF_EXTENT.y && p.z.abs() <= HALF_EXTENT.z
    }

    #[test]
    fn test_solid_edge_counts() {
        for (solid, vertices, edges) in [
            (Solid::Tetrahedron, 4, 6),
            (Solid::Octahedron, 6, 12),
            (Solid::Icosahedron, 12, 30),
            (Solid::Dodecahedron, 20, 30),
        ] {
            let vs = solid.vertices();
            assert_eq!(vs.len(), vertices, "{solid:?}");
            assert!(vs.iter().all(|v| (v.length() - 1.0).abs() < EPS));
            assert_eq!(solid.edges().len(), edges, "{solid:?}");
        }
    }

    #[test]
    fn test_wrap_to_opposite_face() {
        assert_eq!(wrap(10.2, 10.0), -10.0);
        assert_eq!(wrap(-10.2, 10.0), 10.0);
        assert_eq!(wrap(3.0, 10.0), 3.0);
        assert_eq!(wrap(10.0, 10.0), 10.0);
    }

    #[test]
    fn test_seeded_particles_start_in_box() {
        let a = BackgroundScene::new(PARTICLE_COUNT, 7);
        let b = BackgroundScene::new(PARTICLE_COUNT, 7);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), PARTICLE_COUNT);
        assert!(a.particles().iter().all(|p| in_box(p.position)));
        assert_eq!(a.shapes().len(), 6);
    }

    #[test]
    fn test_drift_stays_in_bounds() {
        let clock = ManualClock::new(0.0);
        let mut scene = BackgroundScene::new(PARTICLE_COUNT, 42);
        // pointer pinned to a corner pushes everything the same way
        scene.set_pointer(1920.0, 0.0, 1920.0, 1080.0);
        let start: Vec<Vec3> = scene.particles().iter().map(|p| p.position).collect();
        scene.tick(&clock);
        for _ in 0..3000 {
            clock.advance(16.0);
            scene.tick(&clock);
            assert!(scene.particles().iter().all(|p| in_box(p.position)));
        }
        let moved = scene
            .particles()
            .iter()
            .zip(&start)
            .filter(|(p, s)| p.position.distance(**s) > 0.01)
            .count();
        assert!(moved > PARTICLE_COUNT * 9 / 10);
    }

    #[test]
    fn test_long_pause_is_one_short_step() {
        let clock = ManualClock::new(0.0);
        let mut scene = BackgroundScene::new(PARTICLE_COUNT, 3);
        scene.tick(&clock);
        let before = scene.clone();
        clock.advance(10_000.0);
        scene.tick(&clock);
        let limit = MAX_PARTICLE_SPEED.length() * FRAME_RATE * MAX_STEP_S + EPS;
        for (after, prev) in scene.particles().iter().zip(before.particles()) {
            let d = after.position.distance(prev.position);
            // a wrap jumps across the whole box, otherwise the step is small
            assert!(d <= limit || d > 2.0 * HALF_EXTENT.z - 1.0, "moved {d}");
        }
        let turned = scene.shapes()[0].rotation.distance(before.shapes()[0].rotation);
        assert!(turned <= scene.shapes()[0].spin.length() * MAX_STEP_S + EPS);
    }

    #[test]
    fn test_pointer_normalization() {
        let mut scene = BackgroundScene::new(0, 1);
        scene.set_pointer(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(scene.pointer(), (0.0, 0.0));
        scene.set_pointer(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(scene.pointer(), (-1.0, 1.0));
        scene.set_pointer(1000.0, 800.0, 1000.0, 800.0);
        assert_eq!(scene.pointer(), (1.0, -1.0));
        // zero-sized viewport is ignored
        scene.set_pointer(10.0, 10.0, 0.0, 0.0);
        assert_eq!(scene.pointer(), (1.0, -1.0));
    }

    #[test]
    fn test_parallax_converges_on_pointer() {
        let clock = ManualClock::new(0.0);
        let mut scene = BackgroundScene::new(0, 1);
        scene.set_pointer(1000.0, 0.0, 1000.0, 800.0);
        scene.tick(&clock);
        let target = (TILT_X, TILT_Y);
        let gap = |s: &BackgroundScene| {
            let (x, y) = s.tilt();
            ((target.0 - x).powi(2) + (target.1 - y).powi(2)).sqrt()
        };
        let mut last = gap(&scene);
        for _ in 0..120 {
            clock.advance(16.0);
            scene.tick(&clock);
            let now = gap(&scene);
            assert!(now < last);
            last = now;
        }
        // two seconds at 2.5/s leaves under 1% of the gap
        assert!(last < 0.01 * TILT_Y);

        // back to centre
        scene.set_pointer(500.0, 400.0, 1000.0, 800.0);
        for _ in 0..300 {
            clock.advance(16.0);
            scene.tick(&clock);
        }
        let (x, y) = scene.tilt();
        assert!(x.abs() < 1e-4 && y.abs() < 1e-4);
    }

    #[test]
    fn test_rotation_order() {
        let quarter = PI / 2.0;
        let x = Vec3::new(1.0, 0.0, 0.0);
        // z first takes x to y, then x rotation takes y to z
        let r = rotate_xyz(x, Vec3::new(quarter, 0.0, quarter));
        assert!(r.distance(Vec3::new(0.0, 0.0, 1.0)) < 1e-9);
        assert!(rotate_xyz(x, Vec3::ZERO).distance(x) < EPS);
    }

    #[test]
    fn test_shape_segments_are_scaled_and_placed() {
        let shape = WireShape::new(
            Solid::Octahedron,
            Vec3::new(1.0, 2.0, 3.0),
            2.0,
            Vec3::ZERO,
            Tint::White,
        );
        let segments: Vec<_> = shape.segments().collect();
        assert_eq!(segments.len(), 12);
        for (a, b) in segments {
            assert!((a.distance(shape.position) - 2.0).abs() < EPS);
            assert!((a.distance(b) - 2.0 * 2f64.sqrt()).abs() < EPS);
        }
    }
}
