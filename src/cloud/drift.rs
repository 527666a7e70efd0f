//! Idle drift
//!
//! With no hand in frame the targets take a small random walk, which reads
//! as an ambient floating cloud. Drift is pulled back softly on x past ±20
//! with a fixed 0.5 step per tick, never clamped. The y axis has no bound
//! at all; that asymmetry is part of the effect's established look and is
//! kept on purpose.

use rand::Rng;

use super::particles::ParticleCloud;

/// Half-width of the per-tick uniform nudge on x and y.
pub const DRIFT_NUDGE: f32 = 0.05;
/// One-sided x boundary beyond which the pull-back applies.
pub const DRIFT_BOUND_X: f32 = 20.0;
/// Fixed pull-back step applied once per tick past the boundary.
pub const DRIFT_PULLBACK: f32 = 0.5;

/// One idle tick: nudge every target on x and y, then apply the soft
/// x pull-back. z targets are untouched.
pub fn drift_idle(cloud: &mut ParticleCloud, rng: &mut impl Rng) {
    for chunk in cloud.targets.chunks_exact_mut(3) {
        chunk[0] += rng.gen_range(-DRIFT_NUDGE..DRIFT_NUDGE);
        chunk[1] += rng.gen_range(-DRIFT_NUDGE..DRIFT_NUDGE);

        if chunk[0] > DRIFT_BOUND_X {
            chunk[0] -= DRIFT_PULLBACK;
        }
        if chunk[0] < -DRIFT_BOUND_X {
            chunk[0] += DRIFT_PULLBACK;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_nudge_magnitude_is_bounded() {
        let mut rng = SmallRng::seed_from_u64(10);
        let mut cloud = ParticleCloud::new(300, &mut rng);
        // Keep everything well inside the boundary
        for v in cloud.targets.iter_mut() {
            *v = 0.0;
        }
        drift_idle(&mut cloud, &mut rng);
        for chunk in cloud.targets.chunks_exact(3) {
            assert!(chunk[0].abs() <= DRIFT_NUDGE);
            assert!(chunk[1].abs() <= DRIFT_NUDGE);
            assert_eq!(chunk[2], 0.0);
        }
    }

    #[test]
    fn test_out_of_bounds_x_steps_back_gradually() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut cloud = ParticleCloud::new(1, &mut rng);
        cloud.targets[0] = 25.0;
        drift_idle(&mut cloud, &mut rng);
        // Exactly one 0.5 step plus the nudge, no jump into bounds
        assert!((cloud.targets[0] - 24.5).abs() <= DRIFT_NUDGE);

        cloud.targets[0] = -25.0;
        drift_idle(&mut cloud, &mut rng);
        assert!((cloud.targets[0] + 24.5).abs() <= DRIFT_NUDGE);
    }

    #[test]
    fn test_y_is_never_pulled_back() {
        let mut rng = SmallRng::seed_from_u64(12);
        let mut cloud = ParticleCloud::new(1, &mut rng);
        cloud.targets[1] = 100.0;
        drift_idle(&mut cloud, &mut rng);
        assert!((cloud.targets[1] - 100.0).abs() <= DRIFT_NUDGE);
    }
}
