use glam::{DVec3, Mat4, Vec3};

/// Perspective camera for 3D rendering.
/// Produces a projection matrix mapping scene units to clip space.
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Near clip plane distance.
    pub z_near: f32,
    /// Far clip plane distance.
    pub z_far: f32,
}

impl Camera {
    pub fn new(fov_y_deg: f32, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            fov_y_deg,
            viewport_width,
            viewport_height,
            z_near: 0.1,
            z_far: 100.0,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height.max(1.0)
    }

    /// Build a perspective projection matrix.
    /// Right-handed, Y-up, GL clip-space Z in [-1, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_deg.to_radians(),
            self.aspect(),
            self.z_near,
            self.z_far,
        )
    }

    /// Resize the camera viewport (e.g. on canvas resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    /// Model-view matrix for a body at `position`. The view transform is the
    /// identity; body positions already carry the camera offset.
    pub fn model_view_matrix(&self, position: DVec3) -> Mat4 {
        Mat4::from_translation(Vec3::new(
            position.x as f32,
            position.y as f32,
            position.z as f32,
        ))
    }

    /// Normal matrix paired with `model_view_matrix`. For pure translations
    /// this is the identity, but lighting code should not rely on that.
    pub fn normal_matrix(&self, model_view: &Mat4) -> Mat4 {
        model_view.inverse().transpose()
    }
}
