//! Per-frame animation step
//!
//! Runs at display refresh rate, decoupled from (and usually faster than)
//! the detection callbacks that rewrite the targets. Each coordinate takes
//! a fixed 15% step toward its target per frame; the step is deliberately
//! not time-compensated, so low frame rates slow the motion visually.

use super::particles::ParticleCloud;

/// Fraction of the remaining distance covered per render frame.
pub const SMOOTHING: f32 = 0.15;

/// Cloud color while a hand is tracked (cyan-green).
pub const ACTIVE_COLOR: [f32; 3] = [0.0, 1.0, 0.8];
/// Cloud color while idle (blue).
pub const IDLE_COLOR: [f32; 3] = [0.2, 0.5, 1.0];

/// Advance every particle toward its target and recolor the whole cloud
/// from the detection flag. Color switches instantly on a flag flip while
/// positions keep smoothing.
pub fn step(cloud: &mut ParticleCloud, hand_detected: bool) {
    for (p, t) in cloud.positions.iter_mut().zip(cloud.targets.iter()) {
        *p += (*t - *p) * SMOOTHING;
    }

    let color = if hand_detected { ACTIVE_COLOR } else { IDLE_COLOR };
    for chunk in cloud.colors.chunks_exact_mut(3) {
        chunk.copy_from_slice(&color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_geometric_convergence_to_fixed_target() {
        let mut rng = SmallRng::seed_from_u64(20);
        let mut cloud = ParticleCloud::new(50, &mut rng);
        for v in cloud.positions.iter_mut() {
            *v = 0.0;
        }
        for v in cloud.targets.iter_mut() {
            *v = 10.0;
        }

        step(&mut cloud, false);
        // One tick covers 15% of the distance
        assert!((cloud.positions[0] - 1.5).abs() < 1e-5);

        for _ in 0..29 {
            step(&mut cloud, false);
        }
        // error_30 = 10 * 0.85^30 < 1% of the initial error
        let expected = 10.0 * 0.85f32.powi(30);
        for p in cloud.positions.iter() {
            assert!((10.0 - p - expected).abs() < 1e-3);
            assert!((10.0 - p).abs() < 0.1);
        }
    }

    #[test]
    fn test_color_is_a_pure_function_of_the_flag() {
        let mut rng = SmallRng::seed_from_u64(21);
        let mut cloud = ParticleCloud::new(40, &mut rng);

        step(&mut cloud, true);
        for chunk in cloud.colors.chunks_exact(3) {
            assert_eq!(chunk, ACTIVE_COLOR);
        }

        // Flip is instantaneous and uniform
        step(&mut cloud, false);
        for chunk in cloud.colors.chunks_exact(3) {
            assert_eq!(chunk, IDLE_COLOR);
        }
    }
}
