//! Camera framing for the stream wall.

use glam::{Mat4, Vec3};
use streamscope_core::viewport::ViewportState;

/// A perspective camera looking at the stream wall.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Camera {
    /// Creates a new camera with default settings.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect_ratio,
            near: 0.1,
            far: 6000.0,
        }
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Distance at which `outer_height` pixels fill the vertical frustum.
    #[must_use]
    pub fn framing_distance(&self, outer_height: f32) -> f32 {
        outer_height / (2.0 * (self.fov / 2.0).tan())
    }

    /// Re-frames the camera onto the stream wall for the current viewport.
    ///
    /// The wall is centered at half the aspect-corrected height; the camera
    /// backs off to the framing distance scaled by `distance_factor`.
    pub fn frame_viewport(&mut self, viewport: &ViewportState, distance_factor: f32) {
        let dist = self.framing_distance(viewport.outer_height);
        let target_y = viewport.fixed_height() / 2.0;
        self.target = Vec3::new(0.0, target_y, 0.0);
        self.position = Vec3::new(0.0, target_y, dist * distance_factor);
        self.aspect_ratio = viewport.aspect_ratio();
        self.far = viewport.width * 4.0;
    }

    /// Sets the field of view in radians.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(0.1, std::f32::consts::PI - 0.1);
    }

    /// Returns FOV in degrees.
    #[must_use]
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Sets FOV from degrees.
    pub fn set_fov_degrees(&mut self, degrees: f32) {
        self.set_fov(degrees.to_radians());
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}
