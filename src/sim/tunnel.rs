//! Tunnel manager
//!
//! Maintains the illusion of infinite forward travel with a bounded number of
//! segments: a fixed-capacity ring buffer ordered by depth from the camera.
//! Once the nearest segment trails the eye by more than the buffer threshold
//! it is recycled in place to the far end of the tunnel, so the total tunnel
//! length stays constant and no segment is ever reallocated.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::into_rolled_frame;
use super::segment::Segment;
use crate::consts::{PILLAR_FRACTION, RECYCLE_BUFFER_SEGMENTS, SPIKE_FRACTION};

/// The endless tunnel: a logical ring of octagon segments
#[derive(Debug, Clone)]
pub struct Tunnel {
    /// World position of the tunnel mouth
    pub origin: Vec3,
    /// Ring radius
    pub radius: f32,
    /// Total length; always segment count × interval
    pub length: f32,
    /// Rotation of the whole tube (player steering rolls about z)
    pub rotation: Vec3,
    interval: f32,
    /// Segments in recycle order; travel order starts at `head`
    ring: Vec<Segment>,
    head: usize,
}

impl Tunnel {
    /// Populate `segment_count` segments at depths 0, -interval, ... and
    /// spend the obstacle budget: ~5% of segments get a pillar and ~10% get
    /// spikes, behind a per-segment coin-flip gate so a segment ends up with
    /// at most one obstacle class.
    ///
    /// `segment_count` must be non-zero; the interval is degenerate otherwise.
    pub fn new(
        origin: Vec3,
        radius: f32,
        length: f32,
        segment_count: usize,
        rng: &mut Pcg32,
    ) -> Self {
        let interval = length / segment_count as f32;
        let mut pillar_budget = (segment_count as f32 * PILLAR_FRACTION).round() as usize;
        let mut spike_budget = (segment_count as f32 * SPIKE_FRACTION).round() as usize;

        let mut ring = Vec::with_capacity(segment_count);
        for i in 0..segment_count {
            let mut segment = Segment::new(-(i as f32) * interval, radius, interval);
            if rng.random_bool(0.5) {
                if pillar_budget > 0 {
                    segment.add_pillar(rng);
                    pillar_budget -= 1;
                } else if spike_budget > 0 {
                    segment.add_spikes(rng);
                    spike_budget -= 1;
                }
            }
            ring.push(segment);
        }

        Self {
            origin,
            radius,
            length,
            rotation: Vec3::ZERO,
            interval,
            ring,
            head: 0,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.ring.len()
    }

    /// Spacing between segments (also each segment's thickness)
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Segments in travel order, nearest to the camera first
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        let n = self.ring.len();
        (0..n).map(move |i| &self.ring[(self.head + i) % n])
    }

    /// The segment closest behind or ahead of the camera
    pub fn nearest(&self) -> &Segment {
        &self.ring[self.head]
    }

    /// The segment deepest into the tunnel
    pub fn farthest(&self) -> &Segment {
        let n = self.ring.len();
        &self.ring[(self.head + n - 1) % n]
    }

    /// Advance the tunnel by one step: recycle the nearest segment if the eye
    /// has passed it by more than the buffer threshold, then tick every
    /// segment's local animation.
    ///
    /// At most one segment is recycled per call; the camera is assumed to
    /// advance less than the buffer threshold per tick.
    pub fn tick(&mut self, eye: Vec3, dt: f32, rng: &mut Pcg32) {
        let eye_z = eye.z - self.origin.z;
        let nearest = self.nearest();
        if (nearest.depth - eye_z).abs() > RECYCLE_BUFFER_SEGMENTS * nearest.thickness {
            self.recycle(rng);
        }

        for segment in &mut self.ring {
            segment.tick(dt);
        }
    }

    /// Move the nearest segment to the far end of the tunnel, one interval
    /// beyond the current farthest segment, and re-roll its obstacle group
    fn recycle(&mut self, rng: &mut Pcg32) {
        let new_depth = self.farthest().depth - self.interval;
        let segment = &mut self.ring[self.head];
        segment.depth = new_depth;
        Self::reroll_obstacle(segment, rng);
        self.head = (self.head + 1) % self.ring.len();
        log::debug!("recycled segment to depth {new_depth}");
    }

    /// Obstacle assignment for a recycled segment: same odds per segment as
    /// the population pass (coin-flip gate, then pillar at 5% or spikes at
    /// 10%), without the global budget
    fn reroll_obstacle(segment: &mut Segment, rng: &mut Pcg32) {
        segment.clear_obstacle();
        if !rng.random_bool(0.5) {
            return;
        }
        if rng.random_bool(PILLAR_FRACTION as f64) {
            segment.add_pillar(rng);
        } else if rng.random_bool(SPIKE_FRACTION as f64) {
            segment.add_spikes(rng);
        }
    }

    #[cfg(test)]
    pub(crate) fn segments_mut(&mut self) -> impl Iterator<Item = &mut Segment> {
        self.ring.iter_mut()
    }

    /// World model transform: translation to the origin, then rotation about
    /// Z, X, Y in that fixed order
    pub fn model_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_translation(self.origin)
            * glam::Mat4::from_rotation_z(self.rotation.z)
            * glam::Mat4::from_rotation_x(self.rotation.x)
            * glam::Mat4::from_rotation_y(self.rotation.y)
    }

    /// Whether the eye intersects any obstacle anywhere in the tunnel
    pub fn detect_collision(&self, eye: Vec3) -> bool {
        let local = into_rolled_frame(eye, self.origin, self.rotation.z);
        self.ring.iter().any(|segment| segment.detect_collision(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SEGMENT_COUNT, SIM_DT, TUNNEL_LENGTH, TUNNEL_RADIUS};
    use crate::sim::segment::Obstacle;
    use crate::sim::solid::Solid;
    use proptest::prelude::*;
    use rand::SeedableRng;

    /// Deterministic pillar: a width-1 band through the ring center with its
    /// long axis vertical
    fn test_pillar() -> Obstacle {
        Obstacle::Pillar(Solid::cuboid(Vec3::ZERO, Vec3::new(1.0, 8.0, 2.0), 0.0))
    }

    fn reference_tunnel(seed: u64) -> Tunnel {
        let mut rng = Pcg32::seed_from_u64(seed);
        Tunnel::new(
            Vec3::ZERO,
            TUNNEL_RADIUS,
            TUNNEL_LENGTH,
            SEGMENT_COUNT,
            &mut rng,
        )
    }

    #[test]
    fn test_population_depths() {
        let tunnel = reference_tunnel(1);

        assert_eq!(tunnel.segment_count(), 25);
        assert!((tunnel.interval() - 10.0).abs() < 1e-5);
        assert_eq!(tunnel.nearest().depth, 0.0);
        assert!((tunnel.farthest().depth - (-240.0)).abs() < 1e-4);

        for (i, segment) in tunnel.segments().enumerate() {
            assert!((segment.depth - (-(i as f32) * 10.0)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_total_length_invariant_after_recycles() {
        let mut tunnel = reference_tunnel(2);
        let mut rng = Pcg32::seed_from_u64(99);

        let mut eye = Vec3::new(0.0, -3.2, 0.0);
        for _ in 0..2_000 {
            eye.z -= 0.25;
            tunnel.tick(eye, SIM_DT, &mut rng);

            assert_eq!(tunnel.segment_count(), SEGMENT_COUNT);
            let total: f32 = tunnel.segments().map(|s| s.thickness).sum();
            assert!((total - TUNNEL_LENGTH).abs() < 1e-3);
        }
    }

    #[test]
    fn test_recycle_moves_nearest_to_tail() {
        let mut tunnel = reference_tunnel(3);
        let mut rng = Pcg32::seed_from_u64(4);

        // Eye past the buffer threshold (3 thicknesses = 30) behind segment 0
        let eye = Vec3::new(0.0, -3.2, -31.0);
        tunnel.tick(eye, SIM_DT, &mut rng);

        assert_eq!(tunnel.segment_count(), SEGMENT_COUNT);
        // Old segment 0 is now the farthest, one interval past the old tail
        assert!((tunnel.farthest().depth - (-250.0)).abs() < 1e-4);
        // New nearest is the old second segment
        assert!((tunnel.nearest().depth - (-10.0)).abs() < 1e-4);
    }

    #[test]
    fn test_at_most_one_recycle_per_tick() {
        let mut tunnel = reference_tunnel(5);
        let mut rng = Pcg32::seed_from_u64(6);

        // Far beyond several segments at once
        let eye = Vec3::new(0.0, -3.2, -100.0);
        tunnel.tick(eye, SIM_DT, &mut rng);

        // Only one segment moved
        assert!((tunnel.nearest().depth - (-10.0)).abs() < 1e-4);
        assert!((tunnel.farthest().depth - (-250.0)).abs() < 1e-4);
    }

    #[test]
    fn test_population_obstacle_budget() {
        for seed in 0..20 {
            let tunnel = reference_tunnel(seed);

            let pillars = tunnel
                .segments()
                .filter(|s| matches!(s.obstacle(), Obstacle::Pillar(_)))
                .count();
            let spiked = tunnel
                .segments()
                .filter(|s| matches!(s.obstacle(), Obstacle::Spikes(_)))
                .count();

            assert!(pillars <= 1, "seed {seed}: {pillars} pillars");
            assert!(spiked <= 3, "seed {seed}: {spiked} spiked segments");
        }
    }

    #[test]
    fn test_collision_is_or_over_segments() {
        let mut tunnel = reference_tunnel(7);

        // Strip all obstacles, then plant one known pillar mid-tunnel
        for segment in &mut tunnel.ring {
            segment.clear_obstacle();
        }
        assert!(!tunnel.detect_collision(Vec3::new(0.0, -3.2, -120.0)));

        let depth = tunnel.ring[12].depth;
        tunnel.ring[12].set_obstacle(test_pillar());

        assert!(tunnel.detect_collision(Vec3::new(0.0, -3.2, depth)));
        assert!(!tunnel.detect_collision(Vec3::new(0.0, -3.2, depth + 50.0)));
    }

    #[test]
    fn test_collision_follows_tunnel_roll() {
        let mut tunnel = reference_tunnel(8);
        for segment in &mut tunnel.ring {
            segment.clear_obstacle();
        }
        tunnel.ring[0].set_obstacle(test_pillar());

        // Vertical pillar band: eye on the Y axis misses, on the X axis hits
        assert!(tunnel.detect_collision(Vec3::new(0.2, -3.2, 0.0)));
        assert!(!tunnel.detect_collision(Vec3::new(3.0, 0.0, 0.0)));

        // Rolling the tunnel a quarter turn swaps those
        tunnel.rotation.z = std::f32::consts::FRAC_PI_2;
        assert!(tunnel.detect_collision(Vec3::new(3.0, 0.2, 0.0)));
    }

    proptest! {
        #[test]
        fn prop_ring_stays_contiguous(
            seed in 0u64..1_000,
            steps in proptest::collection::vec(0.0f32..20.0, 1..200),
        ) {
            let mut tunnel = reference_tunnel(seed);
            let mut rng = Pcg32::seed_from_u64(seed ^ 0xdead);
            let mut eye = Vec3::new(0.0, -3.2, 0.0);

            for step in steps {
                eye.z -= step;
                tunnel.tick(eye, SIM_DT, &mut rng);

                prop_assert_eq!(tunnel.segment_count(), SEGMENT_COUNT);
                let total: f32 = tunnel.segments().map(|s| s.thickness).sum();
                prop_assert!((total - TUNNEL_LENGTH).abs() < 1e-3);

                // Depths in travel order are contiguous, one interval apart
                let depths: Vec<f32> = tunnel.segments().map(|s| s.depth).collect();
                for pair in depths.windows(2) {
                    prop_assert!((pair[0] - pair[1] - tunnel.interval()).abs() < 1e-2);
                }
            }
        }
    }
}
