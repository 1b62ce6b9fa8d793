// src/engine_lib/camera.rs

use glam::{Mat4, Vec3};

/// Fixed demo camera: a look-at pose plus perspective parameters.
#[derive(Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_rad: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3, fov_y_deg: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y_rad: fov_y_deg.to_radians(),
            znear,
            zfar,
        }
    }

    /// The demo viewpoint: slightly elevated, looking at the origin.
    pub fn demo_default() -> Self {
        Self::new(
            Vec3::new(0.0, 0.5, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            45.0,
            0.1,
            100.0,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection for the given surface size. Degenerate
    /// dimensions are clamped to 1 so a collapsed window never produces a
    /// division by zero.
    pub fn projection_matrix(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        Mat4::perspective_rh(self.fov_y_rad, aspect, self.znear, self.zfar)
    }

    pub fn view_projection(&self, width: u32, height: u32) -> Mat4 {
        self.projection_matrix(width, height) * self.view_matrix()
    }
}

/// Scene rotation about the vertical axis. Applied on the model side of
/// the transform chain so the light stays fixed relative to the viewer
/// while the scene spins.
pub fn scene_rotation(rotation_deg: f32) -> Mat4 {
    Mat4::from_rotation_y(rotation_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_view_maps_eye_to_origin() {
        let camera = Camera::demo_default();
        let eye_in_view = camera.view_matrix().transform_point3(camera.eye);
        assert!(vec3_approx_eq(eye_in_view, Vec3::ZERO), "{:?}", eye_in_view);
    }

    #[test]
    fn test_scene_rotation_fixes_the_vertical_axis() {
        let p = Vec3::new(0.0, 2.0, 0.0);
        let rotated = scene_rotation(90.0).transform_point3(p);
        assert!(vec3_approx_eq(rotated, p));
    }

    #[test]
    fn test_scene_rotation_quarter_turn() {
        let p = Vec3::new(1.0, 0.0, 0.0);
        let rotated = scene_rotation(90.0).transform_point3(p);
        assert!(vec3_approx_eq(rotated, Vec3::new(0.0, 0.0, -1.0)), "{:?}", rotated);
    }

    #[test]
    fn test_full_turn_matches_identity_rotation() {
        let p = Vec3::new(1.5, 0.0, 1.0);
        let a = scene_rotation(0.0).transform_point3(p);
        let b = scene_rotation(360.0).transform_point3(p);
        assert!(vec3_approx_eq(a, b));
    }

    #[test]
    fn test_projection_survives_degenerate_sizes() {
        let camera = Camera::demo_default();
        for (w, h) in [(0, 600), (800, 0), (0, 0)] {
            let m = camera.projection_matrix(w, h);
            assert!(
                m.to_cols_array().iter().all(|v| v.is_finite()),
                "non-finite projection for {}x{}",
                w,
                h
            );
        }
        // The effective height for a collapsed dimension is 1.
        assert_eq!(
            camera.projection_matrix(800, 0).to_cols_array(),
            camera.projection_matrix(800, 1).to_cols_array()
        );
    }

    #[test]
    fn test_projection_matches_aspect() {
        let camera = Camera::demo_default();
        let m = camera.projection_matrix(800, 600);
        // col0.x = f / aspect, col1.y = f
        let f = 1.0 / (camera.fov_y_rad / 2.0).tan();
        assert!((m.col(1).y - f).abs() < 1e-5);
        assert!((m.col(0).x - f / (800.0 / 600.0)).abs() < 1e-5);
    }
}
