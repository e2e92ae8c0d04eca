use glam::{Mat4, Vec3};

/// Fixed vantage point observing the scene. Never mutated by input; the
/// aspect ratio is derived from the current viewport on every projection.
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(2.0, 2.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self, width: u32, height: u32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, width as f32 / height as f32, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_is_independent_of_viewport() {
        let cam = Camera::default();
        let a = cam.view().to_cols_array();
        let b = cam.view().to_cols_array();
        assert_eq!(a, b);
    }

    #[test]
    fn resize_only_changes_aspect_terms() {
        let cam = Camera::default();
        let narrow = cam.projection(800, 600).to_cols_array_2d();
        let wide = cam.projection(1600, 600).to_cols_array_2d();

        // Horizontal scale follows the aspect ratio, vertical scale does not
        assert!((narrow[0][0] - 2.0 * wide[0][0]).abs() < 1e-6);
        assert_eq!(narrow[1][1], wide[1][1]);
        assert_eq!(narrow[2], wide[2]);
        assert_eq!(narrow[3], wide[3]);
    }

    #[test]
    fn projection_is_deterministic() {
        let cam = Camera::default();
        let a = cam.projection(800, 600).to_cols_array();
        let b = cam.projection(800, 600).to_cols_array();
        assert_eq!(a, b);
    }
}
