//! Approximate proximity collision between the eye and tunnel obstacles
//!
//! Gameplay only needs coarse hit detection, so obstacles are tested with
//! axis-aligned distance checks: a hit requires both the travel-axis distance
//! and the cross-sectional (XY) distance to the obstacle's reference geometry
//! to fall below thresholds derived from the obstacle's extents. No exact mesh
//! intersection is performed.

use glam::{Vec2, Vec3};

use super::solid::Solid;
use crate::consts::EYE_HIT_SLACK;

/// Express a world-space point in a frame translated to `origin` and rolled
/// by `roll` radians about the travel axis
pub fn into_rolled_frame(point: Vec3, origin: Vec3, roll: f32) -> Vec3 {
    let p = point - origin;
    let (sin, cos) = (-roll).sin_cos();
    Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Check the eye against a pillar (a box spanning the full ring diameter
/// through the segment center)
///
/// The pillar's footprint is the band of its width around the line through
/// the origin along its rolled long axis. `eye` is segment-local.
pub fn eye_hits_pillar(eye: Vec3, pillar: &Solid) -> bool {
    let axial = (eye.z - pillar.center.z).abs();
    if axial > pillar.size.z / 2.0 + EYE_HIT_SLACK {
        return false;
    }

    // Distance from the eye to the pillar's centerline: the long axis is the
    // local Y axis rolled by rotation.z, so the line normal is (cos, sin)
    let (sin, cos) = pillar.rotation.z.sin_cos();
    let planar = (eye.x * cos + eye.y * sin).abs();
    planar < pillar.size.x / 2.0 + EYE_HIT_SLACK
}

/// Check the eye against a spike (pyramid with its base on the ring wall and
/// its apex pointing at the tunnel axis)
///
/// The reference geometry is the apex point; `ring_radius` recovers how far
/// the apex projects inward from the base center. `eye` is segment-local.
pub fn eye_hits_spike(eye: Vec3, spike: &Solid, ring_radius: f32) -> bool {
    let axial = (eye.z - spike.center.z).abs();
    if axial > spike.size.x / 2.0 + EYE_HIT_SLACK {
        return false;
    }

    let base_center = Vec2::new(spike.center.x, spike.center.y);
    let height = spike.size.y;
    // Apex sits on the segment radial, `height` inward from the wall
    let apex = base_center * ((ring_radius - height) / ring_radius);

    let planar = Vec2::new(eye.x, eye.y).distance(apex);
    planar < spike.size.x / 2.0 + EYE_HIT_SLACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polar_to_cartesian;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn spike_at(angle: f32, radius: f32, height: f32, base: f32) -> Solid {
        let center = polar_to_cartesian(radius, angle);
        Solid::pyramid(
            Vec3::new(center.x, center.y, -5.0),
            base,
            height,
            angle + FRAC_PI_2,
        )
    }

    #[test]
    fn test_eye_at_spike_apex_hits() {
        let radius = 4.0;
        let spike = spike_at(-FRAC_PI_2, radius, 3.0, 1.5);

        // Apex is `height` inward from the wall, on the same radial
        let apex = polar_to_cartesian(radius - 3.0, -FRAC_PI_2);
        let eye = Vec3::new(apex.x, apex.y, -5.0);
        assert!(eye_hits_spike(eye, &spike, radius));
    }

    #[test]
    fn test_eye_far_from_spike_misses() {
        let radius = 4.0;
        let spike = spike_at(-FRAC_PI_2, radius, 2.0, 1.5);

        // Opposite side of the ring
        let far = polar_to_cartesian(radius - 0.5, FRAC_PI_2);
        assert!(!eye_hits_spike(Vec3::new(far.x, far.y, -5.0), &spike, radius));

        // Right position, wrong depth
        let apex = polar_to_cartesian(radius - 2.0, -FRAC_PI_2);
        assert!(!eye_hits_spike(Vec3::new(apex.x, apex.y, 30.0), &spike, radius));
    }

    #[test]
    fn test_eye_on_pillar_band_hits() {
        // Vertical pillar (long axis along Y after zero roll), width 1, depth 2
        let pillar = Solid::cuboid(Vec3::new(0.0, 0.0, -5.0), Vec3::new(1.0, 8.0, 2.0), 0.0);

        // On the centerline, anywhere along the diameter
        assert!(eye_hits_pillar(Vec3::new(0.0, -3.2, -5.0), &pillar));
        assert!(eye_hits_pillar(Vec3::new(0.0, 3.0, -4.5), &pillar));
    }

    #[test]
    fn test_eye_beside_pillar_misses() {
        let pillar = Solid::cuboid(Vec3::new(0.0, 0.0, -5.0), Vec3::new(1.0, 8.0, 2.0), 0.0);

        // Clear of the band in X
        assert!(!eye_hits_pillar(Vec3::new(2.0, -3.2, -5.0), &pillar));
        // In the band but far away along the travel axis
        assert!(!eye_hits_pillar(Vec3::new(0.0, -3.2, 20.0), &pillar));
    }

    #[test]
    fn test_rolled_pillar_band_follows_roll() {
        // Rolled 90 degrees: long axis now along X, band normal along Y
        let pillar = Solid::cuboid(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 8.0, 2.0),
            FRAC_PI_2,
        );

        assert!(eye_hits_pillar(Vec3::new(3.0, 0.0, 0.0), &pillar));
        assert!(!eye_hits_pillar(Vec3::new(0.0, 3.0, 0.0), &pillar));
    }

    #[test]
    fn test_into_rolled_frame_unrolls() {
        // A point at angle 0 in world space, seen from a frame rolled by π/2,
        // appears at angle -π/2
        let p = into_rolled_frame(Vec3::new(4.0, 0.0, -7.0), Vec3::ZERO, FRAC_PI_2);
        assert!(p.abs_diff_eq(Vec3::new(0.0, -4.0, -7.0), 1e-5));

        // Full turn is identity
        let q = into_rolled_frame(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 2.0 * PI);
        assert!(q.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-5));
    }

    #[test]
    fn test_into_rolled_frame_translates() {
        let p = into_rolled_frame(Vec3::new(1.0, 1.0, -10.0), Vec3::new(1.0, 1.0, 0.0), 0.0);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-6));
    }
}
