//! Camera matrices for the tunnel fly-through

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::consts::{FOV_Y, Z_FAR, Z_NEAR};

/// Eye/target pair owned by the game loop; only matrices are derived here
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// Combined perspective projection and look-at view
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_Y, aspect.max(1e-4), Z_NEAR, Z_FAR);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }
}

/// GPU-side camera uniform
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera, aspect: f32) -> Self {
        Self {
            view_proj: camera.view_proj(aspect).to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = Camera::new(Vec3::new(0.0, -3.2, 0.0), Vec3::new(0.0, -3.9, -80.0));

        let clip = camera.view_proj(16.0 / 9.0).project_point3(camera.target);
        assert!(clip.x.abs() < 1e-4);
        assert!(clip.y.abs() < 1e-4);
        // In front of the near plane, before the far plane
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn test_point_behind_camera_is_clipped() {
        let camera = Camera::new(Vec3::new(0.0, -3.2, 0.0), Vec3::new(0.0, -3.9, -80.0));

        let clip = camera
            .view_proj(16.0 / 9.0)
            .project_point3(Vec3::new(0.0, -3.2, 50.0));
        assert!(!(0.0..=1.0).contains(&clip.z));
    }
}
