//! Geometry and camera animation for the journey globe.
//!
//! The scene is a sphere of radius [`GLOBE_RADIUS`] at the origin with two
//! markers joined by an arc. The camera orbits at [`CAMERA_DISTANCE`] and
//! flies to whichever region is selected, always looking at the origin.
//! Dragging orbits it by hand, without zoom or pan, between
//! [`MIN_POLAR`] and [`MAX_POLAR`].

use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::easing::{ease_out_expo, lerp};
use super::region::Region;

pub const GLOBE_RADIUS: f64 = 2.0;
pub const CAMERA_DISTANCE: f64 = 5.0;
pub const FLIGHT_MS: f64 = 1500.0;
pub const FOV_DEGREES: f64 = 45.0;
pub const MARKER_LIFT: f64 = 0.02;
pub const ARC_ALTITUDE: f64 = 0.8;
pub const TOAST_LIFT: f64 = 0.45;
pub const ARC_SEGMENTS: usize = 64;
pub const ORBIT_ROTATE_SPEED: f64 = 0.5;
pub const MIN_POLAR: f64 = PI / 4.0;
pub const MAX_POLAR: f64 = 3.0 * PI / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self * (1.0 / len)
        }
    }

    /// Component-wise interpolation.
    pub fn lerp(self, other: Vec3, t: f64) -> Vec3 {
        Vec3::new(
            lerp(self.x, other.x, t),
            lerp(self.y, other.y, t),
            lerp(self.z, other.z, t),
        )
    }

    pub fn distance(self, other: Vec3) -> f64 {
        (self - other).length()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub label: &'static str,
}

pub const NEPAL: GeoPoint = GeoPoint {
    lat: 28.39,
    lng: 84.12,
    label: "Nepal",
};

pub const OHIO: GeoPoint = GeoPoint {
    lat: 40.42,
    lng: -82.91,
    label: "Ohio, US",
};

impl Region {
    pub fn location(&self) -> GeoPoint {
        match self {
            Region::Nepal => NEPAL,
            Region::Us => OHIO,
        }
    }
}

/// Position of a latitude/longitude (degrees) on a sphere of radius `r`.
pub fn lat_lng_to_vec3(lat: f64, lng: f64, r: f64) -> Vec3 {
    let phi = (90.0 - lat) * (PI / 180.0);
    let theta = (lng + 180.0) * (PI / 180.0);
    Vec3::new(
        -r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

impl GeoPoint {
    pub fn at_radius(&self, r: f64) -> Vec3 {
        lat_lng_to_vec3(self.lat, self.lng, r)
    }
}

/// Camera position looking straight down at a region's marker.
pub fn camera_target(region: Region, distance: f64) -> Vec3 {
    region.location().at_radius(distance)
}

/// Where the region toast floats above the active marker.
pub fn toast_anchor(region: Region) -> Vec3 {
    region.location().at_radius(GLOBE_RADIUS + TOAST_LIFT)
}

/// Orbit coordinates around the origin. `polar` is measured from +Y and
/// `azimuth` around Y starting at +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    pub polar: f64,
    pub azimuth: f64,
}

impl Spherical {
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                polar: 0.0,
                azimuth: 0.0,
            };
        }
        Self {
            radius,
            polar: (v.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: v.x.atan2(v.z),
        }
    }

    pub fn to_vec3(self) -> Vec3 {
        let ring = self.radius * self.polar.sin();
        Vec3::new(
            ring * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            ring * self.azimuth.cos(),
        )
    }
}

/// Rotate `position` about the origin by a drag of `(dx, dy)` px over a
/// viewport `height` px tall. A full-height drag turns `2π * ORBIT_ROTATE_SPEED`.
pub fn orbit(position: Vec3, dx: f64, dy: f64, height: f64) -> Vec3 {
    if height <= 0.0 {
        return position;
    }
    let per_px = 2.0 * PI * ORBIT_ROTATE_SPEED / height;
    let mut s = Spherical::from_vec3(position);
    s.azimuth -= dx * per_px;
    s.polar = (s.polar - dy * per_px).clamp(MIN_POLAR, MAX_POLAR);
    s.to_vec3()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    x: f64,
    y: f64,
    height: f64,
}

/// One camera move between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFlight {
    pub start: Vec3,
    pub target: Vec3,
    pub started_at: f64,
    pub duration: f64,
}

impl CameraFlight {
    pub fn new(start: Vec3, target: Vec3, started_at: f64, duration: f64) -> Self {
        Self {
            start,
            target,
            started_at,
            duration,
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, now: f64) -> Vec3 {
        self.start.lerp(self.target, ease_out_expo(self.progress(now)))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// The scene camera. Always aimed at the origin.
#[derive(Debug, Clone)]
pub struct CameraRig {
    position: Vec3,
    distance: f64,
    duration: f64,
    flight: Option<CameraFlight>,
    drag: Option<Drag>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CAMERA_DISTANCE, FLIGHT_MS)
    }
}

impl CameraRig {
    pub fn new(distance: f64, duration: f64) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            distance,
            duration,
            flight: None,
            drag: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Start a flight from wherever the camera is now, including mid-flight.
    pub fn fly_to(&mut self, target: Vec3, clock: &impl Clock) {
        self.flight = Some(CameraFlight::new(
            self.position,
            target,
            clock.now(),
            self.duration,
        ));
    }

    pub fn select(&mut self, region: Region, clock: &impl Clock) {
        self.fly_to(camera_target(region, self.distance), clock);
    }

    pub fn tick(&mut self, clock: &impl Clock) -> Vec3 {
        if let Some(flight) = self.flight {
            let now = clock.now();
            self.position = flight.position_at(now);
            if flight.is_finished(now) {
                self.flight = None;
            }
        }
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer pressed on the scene. `height` is the scene's height in px.
    pub fn begin_drag(&mut self, x: f64, y: f64, height: f64) {
        self.drag = Some(Drag { x, y, height });
    }

    /// Orbit by the pointer's movement since the last event. The first real
    /// movement takes over from any flight in progress. Returns the new
    /// position, or `None` when no drag is active.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<Vec3> {
        let drag = self.drag.as_mut()?;
        let (dx, dy) = (x - drag.x, y - drag.y);
        drag.x = x;
        drag.y = y;
        if dx == 0.0 && dy == 0.0 {
            return Some(self.position);
        }
        let height = drag.height;
        self.flight = None;
        self.position = orbit(self.position, dx, dy, height);
        Some(self.position)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn projection(&self, width: f64, height: f64) -> Projection {
        Projection::look_at_origin(self.position, FOV_DEGREES, width, height)
    }
}

/// Points of the arc joining the two markers, lifted off the surface at the
/// midpoint.
pub fn journey_arc(segments: usize) -> Vec<Vec3> {
    let start = NEPAL.at_radius(GLOBE_RADIUS + MARKER_LIFT);
    let end = OHIO.at_radius(GLOBE_RADIUS + MARKER_LIFT);
    let control = ((start + end) * 0.5)
        .normalize()
        * (GLOBE_RADIUS + ARC_ALTITUDE);
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let inv = 1.0 - t;
            start * (inv * inv) + control * (2.0 * inv * t) + end * (t * t)
        })
        .collect()
}

/// Parallels and meridians every `step_deg` degrees, each sampled as a
/// polyline on the globe surface.
pub fn graticule(step_deg: f64, samples: usize) -> Vec<Vec<Vec3>> {
    let step = step_deg.clamp(1.0, 90.0);
    let samples = samples.max(2);
    let mut lines = Vec::new();

    let mut lat = -90.0 + step;
    while lat < 90.0 - 1e-9 {
        lines.push(
            (0..=samples)
                .map(|i| {
                    let lng = -180.0 + 360.0 * i as f64 / samples as f64;
                    lat_lng_to_vec3(lat, lng, GLOBE_RADIUS)
                })
                .collect(),
        );
        lat += step;
    }

    let mut lng = -180.0;
    while lng < 180.0 - 1e-9 {
        lines.push(
            (0..=samples)
                .map(|i| {
                    let lat = -90.0 + 180.0 * i as f64 / samples as f64;
                    lat_lng_to_vec3(lat, lng, GLOBE_RADIUS)
                })
                .collect(),
        );
        lng += step;
    }
    lines
}

/// Deterministic xorshift generator; seeded scenery must render identically
/// on the server and after hydration.
#[derive(Debug, Clone)]
pub(crate) struct XorShift(u64);

impl XorShift {
    pub(crate) fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Uniform in [0, 1).
    pub(crate) fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Relative size in [0.5, 1.5).
    pub size: f64,
}

/// Stars spread through a spherical shell `[radius, radius + depth)`.
pub fn starfield(count: usize, radius: f64, depth: f64, seed: u64) -> Vec<Star> {
    let mut rng = XorShift::new(seed);
    (0..count)
        .map(|_| {
            let u = rng.next_f64() * 2.0 - 1.0;
            let theta = rng.next_f64() * 2.0 * PI;
            let r = radius + rng.next_f64() * depth;
            let ring = (1.0 - u * u).sqrt();
            Star {
                position: Vec3::new(ring * theta.cos(), u, ring * theta.sin()) * r,
                size: 0.5 + rng.next_f64(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Distance along the view direction.
    pub depth: f64,
}

/// Perspective projection for a camera looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    eye: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    focal: f64,
    width: f64,
    height: f64,
}

const NEAR_PLANE: f64 = 0.1;

impl Projection {
    pub fn look_at_origin(eye: Vec3, fov_degrees: f64, width: f64, height: f64) -> Self {
        let forward = (Vec3::ZERO - eye).normalize();
        let mut right = forward.cross(Vec3::UP);
        if right.length() < 1e-9 {
            // looking straight along the poles
            right = forward.cross(Vec3::new(0.0, 0.0, 1.0));
        }
        let right = right.normalize();
        let up = right.cross(forward);
        let focal = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
        Self {
            eye,
            right,
            up,
            forward,
            focal,
            width,
            height,
        }
    }

    /// Screen position in px, or `None` behind the camera.
    pub fn project(&self, point: Vec3) -> Option<ScreenPoint> {
        let d = point - self.eye;
        let depth = d.dot(self.forward);
        if depth < NEAR_PLANE {
            return None;
        }
        let aspect = if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        };
        let ndc_x = d.dot(self.right) * self.focal / (depth * aspect);
        let ndc_y = d.dot(self.up) * self.focal / depth;
        Some(ScreenPoint {
            x: (ndc_x + 1.0) / 2.0 * self.width,
            y: (1.0 - ndc_y) / 2.0 * self.height,
            depth,
        })
    }

    /// Whether a point on a sphere centred at the origin faces the camera.
    pub fn faces_camera(&self, surface_point: Vec3) -> bool {
        (self.eye - surface_point).dot(surface_point) > 0.0
    }

    /// On-screen radius (px) of a sphere of `radius` at the origin.
    pub fn sphere_radius(&self, radius: f64) -> f64 {
        let dist = self.eye.length();
        if dist <= radius {
            return self.width.max(self.height);
        }
        let tan_alpha = radius / (dist * dist - radius * radius).sqrt();
        tan_alpha * self.focal * self.height / 2.0
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::clock::ManualClock;

    const EPS: f64 = 1e-6;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < EPS
    }

    #[test]
    fn test_lat_lng_projection() {
        // theta is zero at lng -180, which points along -x
        let p = lat_lng_to_vec3(0.0, -180.0, 1.0);
        assert!(close(p, Vec3::new(-1.0, 0.0, 0.0)));
        let north = lat_lng_to_vec3(90.0, 12.0, 3.0);
        assert!(close(north, Vec3::new(0.0, 3.0, 0.0)));
        let p = lat_lng_to_vec3(0.0, -90.0, 2.0);
        assert!(close(p, Vec3::new(0.0, 0.0, 2.0)));
        for point in [NEPAL, OHIO] {
            let v = point.at_radius(GLOBE_RADIUS);
            assert!((v.length() - GLOBE_RADIUS).abs() < EPS);
        }
    }

    #[test]
    fn test_flight_endpoints() {
        let start = Vec3::new(5.0, 0.0, 0.0);
        let target = Vec3::new(0.0, 0.0, 5.0);
        let flight = CameraFlight::new(start, target, 0.0, FLIGHT_MS);
        assert!(close(flight.position_at(0.0), start));
        assert!(close(flight.position_at(FLIGHT_MS), target));
        assert!(close(flight.position_at(FLIGHT_MS * 4.0), target));
    }

    #[test]
    fn test_flight_never_overshoots() {
        let start = Vec3::new(5.0, 0.0, 0.0);
        let target = Vec3::new(0.0, 0.0, 5.0);
        let flight = CameraFlight::new(start, target, 0.0, FLIGHT_MS);
        let mut prev = start.distance(target);
        for ms in (0..=1500).step_by(25) {
            let p = flight.position_at(ms as f64);
            assert!(p.x <= 5.0 + EPS && p.x >= -EPS, "x out of range at {ms}");
            assert!(p.z <= 5.0 + EPS && p.z >= -EPS, "z out of range at {ms}");
            assert!(p.y.abs() < EPS);
            let dist = p.distance(target);
            assert!(dist <= prev + EPS, "moved away from target at {ms}");
            prev = dist;
        }
    }

    #[test]
    fn test_rig_flies_to_region() {
        let clock = ManualClock::new(0.0);
        let mut rig = CameraRig::default();
        assert!(close(rig.position(), Vec3::new(0.0, 0.0, CAMERA_DISTANCE)));
        rig.select(Region::Nepal, &clock);
        assert!(rig.is_flying());
        clock.advance(750.0);
        let mid = rig.tick(&clock);
        assert!(!close(mid, Vec3::new(0.0, 0.0, CAMERA_DISTANCE)));
        clock.advance(750.0);
        let end = rig.tick(&clock);
        assert!(close(end, camera_target(Region::Nepal, CAMERA_DISTANCE)));
        assert!(!rig.is_flying());
    }

    #[test]
    fn test_reselect_starts_from_inflight_position() {
        let clock = ManualClock::new(0.0);
        let mut rig = CameraRig::default();
        rig.select(Region::Nepal, &clock);
        clock.advance(300.0);
        let inflight = rig.tick(&clock);
        rig.select(Region::Us, &clock);
        // no jump at the moment of reselection
        assert!(close(rig.tick(&clock), inflight));
        clock.advance(FLIGHT_MS);
        assert!(close(rig.tick(&clock), camera_target(Region::Us, CAMERA_DISTANCE)));
    }

    #[test]
    fn test_spherical_conversion() {
        for v in [
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(3.0, -1.0, 2.0),
            camera_target(Region::Nepal, CAMERA_DISTANCE),
        ] {
            assert!(close(Spherical::from_vec3(v).to_vec3(), v));
        }
        let front = Spherical::from_vec3(Vec3::new(0.0, 0.0, 5.0));
        assert!((front.polar - PI / 2.0).abs() < EPS);
        assert!(front.azimuth.abs() < EPS);
    }

    #[test]
    fn test_orbit_clamps_polar_angle() {
        let start = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
        // dragging far down tips the camera toward the north pole
        let top = Spherical::from_vec3(orbit(start, 0.0, 5000.0, 600.0));
        assert!((top.polar - MIN_POLAR).abs() < EPS);
        let bottom = Spherical::from_vec3(orbit(start, 0.0, -5000.0, 600.0));
        assert!((bottom.polar - MAX_POLAR).abs() < EPS);
        // no zoom
        assert!((top.radius - CAMERA_DISTANCE).abs() < EPS);
    }

    #[test]
    fn test_orbit_rotate_speed() {
        let start = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
        // a drag of half the height turns half of 2π * 0.5
        let turned = Spherical::from_vec3(orbit(start, -300.0, 0.0, 600.0));
        assert!((turned.azimuth - PI / 2.0).abs() < EPS);
        assert!((turned.polar - PI / 2.0).abs() < EPS);
        assert_eq!(orbit(start, 10.0, 10.0, 0.0), start);
    }

    #[test]
    fn test_drag_during_flight_takes_over() {
        let clock = ManualClock::new(0.0);
        let mut rig = CameraRig::default();
        rig.select(Region::Nepal, &clock);
        clock.advance(300.0);
        let inflight = rig.tick(&clock);

        // pressing alone leaves the flight running
        rig.begin_drag(100.0, 100.0, 600.0);
        assert!(rig.is_flying());
        assert_eq!(rig.drag_to(100.0, 100.0), Some(inflight));
        assert!(rig.is_flying());

        let dragged = rig.drag_to(160.0, 100.0).unwrap();
        assert!(!rig.is_flying());
        assert!((dragged.length() - inflight.length()).abs() < EPS);
        assert!(dragged.distance(inflight) > 0.1);

        // the flight no longer pulls the camera
        clock.advance(FLIGHT_MS);
        assert!(close(rig.tick(&clock), dragged));

        rig.end_drag();
        assert!(!rig.is_dragging());
        assert_eq!(rig.drag_to(300.0, 300.0), None);

        // selecting a region afterwards flies from the dragged position
        rig.select(Region::Us, &clock);
        assert!(close(rig.tick(&clock), dragged));
    }

    #[test]
    fn test_arc_endpoints_and_lift() {
        let points = journey_arc(ARC_SEGMENTS);
        assert_eq!(points.len(), ARC_SEGMENTS + 1);
        let lifted = GLOBE_RADIUS + MARKER_LIFT;
        assert!(close(points[0], NEPAL.at_radius(lifted)));
        assert!(close(points[ARC_SEGMENTS], OHIO.at_radius(lifted)));
        // the control point pulls the middle outward, away from the chord
        let chord_mid = (points[0] + points[ARC_SEGMENTS]) * 0.5;
        let mid = points[ARC_SEGMENTS / 2];
        assert!(mid.length() > chord_mid.length() + 0.5);
        assert!(mid.normalize().distance(chord_mid.normalize()) < EPS);
    }

    #[test]
    fn test_graticule_lines() {
        let lines = graticule(30.0, 24);
        // 5 parallels between the poles, 12 meridians
        assert_eq!(lines.len(), 5 + 12);
        for line in &lines {
            assert_eq!(line.len(), 25);
            for p in line {
                assert!((p.length() - GLOBE_RADIUS).abs() < EPS);
            }
        }
        // parallels close on themselves
        assert!(close(lines[0][0], lines[0][24]));
    }

    #[test]
    fn test_starfield_is_deterministic_and_in_shell() {
        let a = starfield(200, 50.0, 50.0, 7);
        let b = starfield(200, 50.0, 50.0, 7);
        assert_eq!(a, b);
        assert_ne!(a, starfield(200, 50.0, 50.0, 8));
        for star in &a {
            let r = star.position.length();
            assert!((50.0 - EPS..100.0 + EPS).contains(&r));
            assert!((0.5..1.5).contains(&star.size));
        }
    }

    #[test]
    fn test_projection_center_and_culling() {
        let proj = Projection::look_at_origin(Vec3::new(0.0, 0.0, 5.0), FOV_DEGREES, 400.0, 400.0);
        let origin = proj.project(Vec3::ZERO).unwrap();
        assert!((origin.x - 200.0).abs() < EPS);
        assert!((origin.y - 200.0).abs() < EPS);
        assert!((origin.depth - 5.0).abs() < EPS);
        // +y is up on screen
        assert!(proj.project(Vec3::new(0.0, 1.0, 0.0)).unwrap().y < 200.0);
        assert!(proj.project(Vec3::new(0.0, 0.0, 10.0)).is_none());

        assert!(proj.faces_camera(Vec3::new(0.0, 0.0, 2.0)));
        assert!(!proj.faces_camera(Vec3::new(0.0, 0.0, -2.0)));
        assert!(proj.sphere_radius(GLOBE_RADIUS) > 0.0);
    }

    #[test]
    fn test_projection_from_pole() {
        let proj = Projection::look_at_origin(Vec3::new(0.0, 5.0, 0.0), FOV_DEGREES, 300.0, 300.0);
        let origin = proj.project(Vec3::ZERO).unwrap();
        assert!((origin.x - 150.0).abs() < EPS);
        assert!((origin.y - 150.0).abs() < EPS);
    }
}
