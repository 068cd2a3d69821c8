//! Primitive solids that tunnel geometry is assembled from
//!
//! A solid is one of a closed set of convex shapes (cuboid or pyramid) with a
//! parent-local placement. Spikes carry an oscillation that slides them back
//! and forth along the travel axis.

use glam::{Mat4, Vec3};

use crate::consts::SPIKE_OSC_SPEED;

/// Closed set of primitive shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidKind {
    /// Six-faced box; `size` holds the full extents per axis
    Cuboid,
    /// Four-faced pyramid; base on the local y=0 plane, apex at +y.
    /// `size` is (base, height, base)
    Pyramid,
}

/// Back-and-forth motion along the travel axis, bounded by `stride` around a
/// fixed anchor point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    /// Reference z the motion is centered on (parent-local)
    pub anchor: f32,
    /// Total travel interval; the solid stays within anchor ± stride/2
    pub stride: f32,
    /// +1 or -1, flipped at each end of the stride
    pub direction: f32,
}

/// A primitive solid placed relative to its parent
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub kind: SolidKind,
    /// Parent-local center (for pyramids, center of the base)
    pub center: Vec3,
    /// Extents per axis
    pub size: Vec3,
    /// Rotation in radians, applied Z then X then Y
    pub rotation: Vec3,
    /// Travel-axis animation, present on spikes only
    pub oscillation: Option<Oscillation>,
}

impl Solid {
    /// A static box rolled about the travel axis
    pub fn cuboid(center: Vec3, size: Vec3, roll: f32) -> Self {
        Self {
            kind: SolidKind::Cuboid,
            center,
            size,
            rotation: Vec3::new(0.0, 0.0, roll),
            oscillation: None,
        }
    }

    /// A static pyramid rolled about the travel axis
    pub fn pyramid(center: Vec3, base: f32, height: f32, roll: f32) -> Self {
        Self {
            kind: SolidKind::Pyramid,
            center,
            size: Vec3::new(base, height, base),
            rotation: Vec3::new(0.0, 0.0, roll),
            oscillation: None,
        }
    }

    /// A pyramid that slides along the travel axis within `stride` of its
    /// starting point
    pub fn oscillating_pyramid(
        center: Vec3,
        base: f32,
        height: f32,
        roll: f32,
        stride: f32,
        direction: f32,
    ) -> Self {
        Self {
            oscillation: Some(Oscillation {
                anchor: center.z,
                stride,
                direction,
            }),
            ..Self::pyramid(center, base, height, roll)
        }
    }

    /// Advance local animation state by one step
    pub fn tick(&mut self, dt: f32) {
        if let Some(ref mut osc) = self.oscillation {
            self.center.z += osc.direction * SPIKE_OSC_SPEED * dt;
            if (self.center.z - osc.anchor).abs() > osc.stride / 2.0 {
                osc.direction = -osc.direction;
            }
        }
    }

    /// Parent-local model transform: translation, then rotation about Z, X, Y
    /// in that fixed order
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.center)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_oscillation_stays_within_stride() {
        let mut spike =
            Solid::oscillating_pyramid(Vec3::new(2.0, 0.0, -5.0), 1.0, 2.0, 0.0, 10.0, 1.0);

        // One step can overshoot the boundary before the flip; allow that much
        let step = SPIKE_OSC_SPEED * SIM_DT;
        for _ in 0..10_000 {
            spike.tick(SIM_DT);
            assert!((spike.center.z - (-5.0)).abs() <= 5.0 + step);
        }
    }

    #[test]
    fn test_oscillation_reverses_at_boundary() {
        let mut spike = Solid::oscillating_pyramid(Vec3::ZERO, 1.0, 2.0, 0.0, 1.0, 1.0);

        let initial_dir = spike.oscillation.unwrap().direction;
        // Drive it past the half-stride boundary
        for _ in 0..1_000 {
            spike.tick(SIM_DT);
            if spike.oscillation.unwrap().direction != initial_dir {
                return;
            }
        }
        panic!("oscillation never reversed");
    }

    #[test]
    fn test_static_solid_tick_is_noop() {
        let mut wall = Solid::cuboid(Vec3::new(4.0, 0.0, 0.0), Vec3::ONE, 1.0);
        let before = wall.clone();
        wall.tick(SIM_DT);
        assert_eq!(wall, before);
    }

    #[test]
    fn test_model_matrix_rotation_order() {
        let solid = Solid {
            kind: SolidKind::Cuboid,
            center: Vec3::new(1.0, 2.0, 3.0),
            size: Vec3::ONE,
            rotation: Vec3::new(0.3, 0.7, 1.1),
            oscillation: None,
        };

        let expected = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_rotation_z(1.1)
            * Mat4::from_rotation_x(0.3)
            * Mat4::from_rotation_y(0.7);
        assert!(solid.model_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_model_matrix_translates_origin_to_center() {
        let solid = Solid::cuboid(Vec3::new(-2.0, 5.0, 1.5), Vec3::ONE, 0.9);
        let origin = solid.model_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(-2.0, 5.0, 1.5), 1e-6));
    }
}
