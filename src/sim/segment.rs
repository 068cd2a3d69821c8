//! Octagonal tunnel segment
//!
//! One cross-sectional slice of the tunnel: exactly eight wall faces arranged
//! around a circle, plus at most one obstacle group. Wall faces are cuboids
//! tangent to the circle; each spans the chord subtending 45 degrees.

use glam::{Mat4, Vec3};
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{eye_hits_pillar, eye_hits_spike, into_rolled_frame};
use super::solid::Solid;
use crate::consts::{MAX_SPIKES_PER_SEGMENT, SPIKE_SLOT_CHANCE};
use crate::polar_to_cartesian;

/// Wall faces per ring; fixed by the octagonal cross-section
pub const FACE_COUNT: usize = 8;
/// Angle subtended by one wall face
pub const FACE_ANGLE: f32 = std::f32::consts::TAU / FACE_COUNT as f32;

/// Radial thickness of a wall face
const WALL_THICKNESS: f32 = 0.1;

/// Obstacle group attached to a segment. A segment holds a pillar or spikes,
/// never both.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Obstacle {
    #[default]
    None,
    /// Box spanning the full ring diameter at one of the 8 face angles
    Pillar(Solid),
    /// 1..=2 oscillating pyramids with apexes pointing at the tunnel axis
    Spikes(Vec<Solid>),
}

/// One octagonal slice of the tunnel
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Position along the travel axis (tunnel-local z; the tunnel extends
    /// toward -z)
    pub depth: f32,
    /// Ring radius
    pub radius: f32,
    /// Extent along the travel axis
    pub thickness: f32,
    /// Rotation applied uniformly to all children (radians, Z then X then Y)
    pub rotation: Vec3,
    walls: [Solid; FACE_COUNT],
    obstacle: Obstacle,
}

/// Chord length subtending one face at the given radius
pub fn chord_length(radius: f32) -> f32 {
    2.0 * radius * (FACE_ANGLE / 2.0).tan()
}

impl Segment {
    /// Build a segment with its eight wall faces and no obstacle
    pub fn new(depth: f32, radius: f32, thickness: f32) -> Self {
        let chord = chord_length(radius);
        let walls = std::array::from_fn(|i| {
            let angle = i as f32 * FACE_ANGLE;
            let center = polar_to_cartesian(radius, angle);
            Solid::cuboid(
                Vec3::new(center.x, center.y, 0.0),
                Vec3::new(chord, WALL_THICKNESS, thickness),
                angle + std::f32::consts::FRAC_PI_2,
            )
        });

        Self {
            depth,
            radius,
            thickness,
            rotation: Vec3::ZERO,
            walls,
            obstacle: Obstacle::None,
        }
    }

    pub fn walls(&self) -> &[Solid; FACE_COUNT] {
        &self.walls
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn has_obstacle(&self) -> bool {
        self.obstacle != Obstacle::None
    }

    pub fn clear_obstacle(&mut self) {
        self.obstacle = Obstacle::None;
    }

    #[cfg(test)]
    pub(crate) fn set_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacle = obstacle;
    }

    /// Attach a pillar: a box spanning the full ring diameter at a random one
    /// of the 8 face angles, with random width up to the chord length.
    /// Replaces any existing obstacle.
    pub fn add_pillar(&mut self, rng: &mut Pcg32) {
        let roll = rng.random_range(0..FACE_COUNT) as f32 * FACE_ANGLE;
        let width = rng.random::<f32>() * chord_length(self.radius);
        self.obstacle = Obstacle::Pillar(Solid::cuboid(
            Vec3::ZERO,
            Vec3::new(width, 2.0 * self.radius, self.thickness / 5.0),
            roll,
        ));
    }

    /// Roll spikes for each of the 8 angular slots, capped at
    /// `MAX_SPIKES_PER_SEGMENT` total. Each spike's apex points at the tunnel
    /// axis; its height is random in [radius/2, radius] and it oscillates
    /// along the travel axis within one segment thickness. Replaces any
    /// existing obstacle; leaves `None` if every roll misses.
    pub fn add_spikes(&mut self, rng: &mut Pcg32) {
        let chord = chord_length(self.radius);
        let mut spikes = Vec::new();

        for slot in 0..FACE_COUNT {
            if spikes.len() >= MAX_SPIKES_PER_SEGMENT {
                break;
            }
            if !rng.random_bool(SPIKE_SLOT_CHANCE) {
                continue;
            }

            let angle = slot as f32 * FACE_ANGLE;
            let center = polar_to_cartesian(self.radius, angle);
            let height = self.radius / 2.0 + rng.random::<f32>() * self.radius / 2.0;
            let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

            spikes.push(Solid::oscillating_pyramid(
                Vec3::new(center.x, center.y, -self.thickness / 2.0),
                chord,
                height,
                angle + std::f32::consts::FRAC_PI_2,
                self.thickness,
                direction,
            ));
        }

        self.obstacle = if spikes.is_empty() {
            Obstacle::None
        } else {
            Obstacle::Spikes(spikes)
        };
    }

    /// Advance every child's local animation state by one step
    pub fn tick(&mut self, dt: f32) {
        for wall in &mut self.walls {
            wall.tick(dt);
        }
        match &mut self.obstacle {
            Obstacle::None => {}
            Obstacle::Pillar(pillar) => pillar.tick(dt),
            Obstacle::Spikes(spikes) => {
                for spike in spikes {
                    spike.tick(dt);
                }
            }
        }
    }

    /// Check the eye (tunnel-local) against this segment's obstacles
    pub fn detect_collision(&self, eye: Vec3) -> bool {
        let local = into_rolled_frame(eye, Vec3::new(0.0, 0.0, self.depth), self.rotation.z);
        match &self.obstacle {
            Obstacle::None => false,
            Obstacle::Pillar(pillar) => eye_hits_pillar(local, pillar),
            Obstacle::Spikes(spikes) => spikes
                .iter()
                .any(|spike| eye_hits_spike(local, spike, self.radius)),
        }
    }

    /// Tunnel-local model transform: translation to depth, then rotation
    /// about Z, X, Y in that fixed order
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.depth))
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
    }
}
