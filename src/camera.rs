//! Orbit camera with damped (inertial) motion around a fixed pivot.
//!
//! Pointer drags and scroll input accumulate into target spherical
//! coordinates; `update` eases the live values toward the targets once per
//! frame, so motion coasts to a stop instead of snapping.

use glam::{Mat4, Vec3};

use crate::params::RenderConfig;

/// Radians of yaw/pitch per pixel of pointer drag
const DRAG_SENSITIVITY: f32 = 0.005;

/// Exponential zoom factor per scroll line
const ZOOM_SENSITIVITY: f32 = 0.1;

/// Damping rate (per second); higher = snappier easing toward the target
const DAMPING_RATE: f32 = 10.0;

/// Pitch limit keeping the camera away from the poles (radians)
const PITCH_LIMIT: f32 = 1.5;

/// Zoom distance bounds (world units)
const MIN_RADIUS: f32 = 0.5;
const MAX_RADIUS: f32 = 25.0;

/// Orbit camera state: live spherical coordinates plus damped targets.
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    radius: f32,
    target_yaw: f32,
    target_pitch: f32,
    target_radius: f32,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Start at the world-space equivalent of eye (1, 1, 1) looking at
        // the origin: radius sqrt(3), 45 degrees of yaw, ~35 of pitch.
        let yaw = std::f32::consts::FRAC_PI_4;
        let pitch = (1.0f32 / 3.0f32.sqrt()).asin();
        let radius = 3.0f32.sqrt();
        Self {
            yaw,
            pitch,
            radius,
            target_yaw: yaw,
            target_pitch: pitch,
            target_radius: radius,
            dragging: false,
            last_cursor: None,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer button pressed: subsequent cursor motion orbits.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Pointer button released: stop orbiting (damping keeps coasting).
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_cursor = None;
    }

    /// Feed an absolute cursor position; orbits by the delta while dragging.
    pub fn on_cursor_move(&mut self, x: f64, y: f64) {
        if !self.dragging {
            self.last_cursor = None;
            return;
        }
        if let Some((last_x, last_y)) = self.last_cursor {
            let dx = (x - last_x) as f32;
            let dy = (y - last_y) as f32;
            self.target_yaw -= dx * DRAG_SENSITIVITY;
            self.target_pitch =
                (self.target_pitch + dy * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.last_cursor = Some((x, y));
    }

    /// Scroll input zooms; positive delta moves the camera closer.
    pub fn on_scroll(&mut self, delta: f32) {
        let factor = (-delta * ZOOM_SENSITIVITY).exp();
        self.target_radius = (self.target_radius * factor).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Ease live values toward the targets. Called once per frame, before
    /// the view matrix is read for rendering.
    pub fn update(&mut self, dt_s: f32) {
        let k = 1.0 - (-DAMPING_RATE * dt_s.max(0.0)).exp();
        self.yaw += (self.target_yaw - self.yaw) * k;
        self.pitch += (self.target_pitch - self.pitch) * k;
        self.radius += (self.target_radius - self.radius) * k;
    }

    /// Camera position in world space (pivot is the origin).
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.sin(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// View-projection matrix for the current frame.
    pub fn view_proj(&self, config: &RenderConfig) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(
            config.fov_degrees.to_radians(),
            config.aspect_ratio(),
            config.near_plane,
            config.far_plane,
        );
        proj * view
    }
}
