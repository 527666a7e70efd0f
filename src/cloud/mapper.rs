//! Joint-to-target mapping
//!
//! Scatters the particle targets along the 20 bones of a detected hand.
//! Every detection callback re-rolls the interpolation parameter and jitter
//! for every particle, so particles jump between spots on the skeleton from
//! frame to frame. The resulting shimmer is the intended look; do not
//! replace this with a stable particle-to-bone assignment.

use rand::Rng;

use super::particles::ParticleCloud;
use super::skeleton::{Joint, BONE_COUNT, HAND_BONES, LANDMARK_COUNT};

/// Half-width of the uniform jitter applied on each axis, giving the
/// bones visual thickness.
pub const BONE_JITTER: f32 = 0.4;

/// Rewrite the target buffer so the cloud takes the shape of `joints`.
///
/// Particles are assigned to bones in fixed contiguous slices of
/// `count / 20` each. With counts that are not a multiple of the bone
/// count the tail particles keep their previous targets; they are few
/// enough to be invisible in the cloud.
pub fn scatter_along_bones(
    cloud: &mut ParticleCloud,
    joints: &[Joint; LANDMARK_COUNT],
    rng: &mut impl Rng,
) {
    let per_bone = cloud.count / BONE_COUNT;
    let mut idx = 0;

    for (a, b) in HAND_BONES.iter() {
        let v1 = joints[*a].to_world();
        let v2 = joints[*b].to_world();

        for _ in 0..per_bone {
            let t: f32 = rng.gen();
            let p = v1 + (v2 - v1) * t;

            cloud.targets[idx] = p.x + rng.gen_range(-BONE_JITTER..BONE_JITTER);
            cloud.targets[idx + 1] = p.y + rng.gen_range(-BONE_JITTER..BONE_JITTER);
            // Bones sit at z = 0; depth is jitter only
            cloud.targets[idx + 2] = rng.gen_range(-BONE_JITTER..BONE_JITTER);
            idx += 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::skeleton::{INDEX_TIP, THUMB_TIP};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn spread_joints() -> [Joint; LANDMARK_COUNT] {
        let mut joints = [Joint::default(); LANDMARK_COUNT];
        for (i, j) in joints.iter_mut().enumerate() {
            j.x = 0.2 + 0.03 * (i as f32 % 7.0);
            j.y = 0.3 + 0.02 * (i as f32 % 5.0);
        }
        joints
    }

    #[test]
    fn test_targets_stay_within_jittered_bone_box() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut cloud = ParticleCloud::new(400, &mut rng);
        let joints = spread_joints();
        scatter_along_bones(&mut cloud, &joints, &mut rng);

        let per_bone = cloud.count / BONE_COUNT;
        for (bone, (a, b)) in HAND_BONES.iter().enumerate() {
            let v1 = joints[*a].to_world();
            let v2 = joints[*b].to_world();
            let (lo_x, hi_x) = (v1.x.min(v2.x) - BONE_JITTER, v1.x.max(v2.x) + BONE_JITTER);
            let (lo_y, hi_y) = (v1.y.min(v2.y) - BONE_JITTER, v1.y.max(v2.y) + BONE_JITTER);

            for p in 0..per_bone {
                let i = (bone * per_bone + p) * 3;
                assert!(cloud.targets[i] >= lo_x && cloud.targets[i] <= hi_x);
                assert!(cloud.targets[i + 1] >= lo_y && cloud.targets[i + 1] <= hi_y);
                assert!(cloud.targets[i + 2].abs() <= BONE_JITTER);
            }
        }
    }

    #[test]
    fn test_remainder_particles_keep_stale_targets() {
        let mut rng = SmallRng::seed_from_u64(2);
        // 407 = 20 * 20 + 7 remainder
        let mut cloud = ParticleCloud::new(407, &mut rng);
        let stale: Vec<f32> = cloud.targets[400 * 3..].to_vec();

        scatter_along_bones(&mut cloud, &spread_joints(), &mut rng);
        assert_eq!(&cloud.targets[400 * 3..], stale.as_slice());
    }

    #[test]
    fn test_remapping_rerolls_assignments() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut cloud = ParticleCloud::new(400, &mut rng);
        let mut joints = spread_joints();
        joints[THUMB_TIP].x = 0.9;
        joints[INDEX_TIP].y = 0.9;

        scatter_along_bones(&mut cloud, &joints, &mut rng);
        let first: Vec<f32> = cloud.targets.clone();
        scatter_along_bones(&mut cloud, &joints, &mut rng);
        // Same joints, fresh randomness: targets must differ
        assert_ne!(first, cloud.targets);
    }
}
