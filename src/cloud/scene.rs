//! Scene state
//!
//! One context object owns everything the two callbacks touch: the particle
//! buffers, the zoom camera, the detection flag, and the RNG. The detection
//! callback (`on_results`) and the render tick (`tick`) each get exclusive
//! access for their whole run. That is safe here because both are driven
//! from the same single-threaded event loop and can never overlap; a
//! preemptive port would need a lock or a channel handoff around the scene.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::animator;
use super::drift;
use super::mapper;
use super::particles::ParticleCloud;
use super::skeleton::{pinch_distance, Joint, LANDMARK_COUNT};
use super::zoom::ZoomCamera;

pub struct Scene {
    pub cloud: ParticleCloud,
    pub camera: ZoomCamera,
    pub hand_detected: bool,
    rng: SmallRng,
}

impl Scene {
    pub fn new(particle_count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let cloud = ParticleCloud::new(particle_count, &mut rng);
        Self {
            cloud,
            camera: ZoomCamera::new(),
            hand_detected: false,
            rng,
        }
    }

    /// Detection callback. `Some` carries the first detected hand; `None`
    /// means the detector saw no hands this frame. The flag flips
    /// immediately either way, with no debounce, so a single missed
    /// detection is visible as a color flicker.
    pub fn on_results(&mut self, hand: Option<&[Joint; LANDMARK_COUNT]>) {
        match hand {
            Some(joints) => {
                self.hand_detected = true;
                self.camera.on_pinch(pinch_distance(joints));
                mapper::scatter_along_bones(&mut self.cloud, joints, &mut self.rng);
            }
            None => {
                self.hand_detected = false;
                self.camera.on_idle();
                drift::drift_idle(&mut self.cloud, &mut self.rng);
            }
        }
    }

    /// Render tick: one animator step toward the current targets.
    pub fn tick(&mut self) {
        animator::step(&mut self.cloud, self.hand_detected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::zoom::REST_DISTANCE;

    fn open_hand() -> [Joint; LANDMARK_COUNT] {
        let mut joints = [Joint::default(); LANDMARK_COUNT];
        for (i, j) in joints.iter_mut().enumerate() {
            j.x = 0.3 + 0.02 * i as f32;
            j.y = 0.4 + 0.01 * i as f32;
        }
        joints
    }

    #[test]
    fn test_detection_flag_flips_without_debounce() {
        let mut scene = Scene::new(400, 1);
        assert!(!scene.hand_detected);

        let hand = open_hand();
        scene.on_results(Some(&hand));
        assert!(scene.hand_detected);

        scene.on_results(None);
        assert!(!scene.hand_detected);

        scene.on_results(Some(&hand));
        assert!(scene.hand_detected);
    }

    #[test]
    fn test_idle_callbacks_move_camera_toward_rest() {
        let mut scene = Scene::new(400, 2);
        scene.camera.z = 14.0;
        for _ in 0..10 {
            scene.on_results(None);
        }
        assert!(scene.camera.z > 14.0);
        assert!(scene.camera.z < REST_DISTANCE);
    }

    #[test]
    fn test_buffer_sizes_survive_state_transitions() {
        let mut scene = Scene::new(407, 3);
        let hand = open_hand();
        for i in 0..20 {
            if i % 3 == 0 {
                scene.on_results(None);
            } else {
                scene.on_results(Some(&hand));
            }
            scene.tick();
            assert_eq!(scene.cloud.positions.len(), 407 * 3);
            assert_eq!(scene.cloud.targets.len(), 407 * 3);
            assert_eq!(scene.cloud.colors.len(), 407 * 3);
        }
    }

    #[test]
    fn test_ticks_pull_cloud_toward_hand_shape() {
        let mut scene = Scene::new(400, 4);
        let hand = open_hand();
        scene.on_results(Some(&hand));

        let err_before: f32 = scene
            .cloud
            .positions
            .iter()
            .zip(scene.cloud.targets.iter())
            .map(|(p, t)| (p - t).abs())
            .sum();
        for _ in 0..30 {
            scene.tick();
        }
        let err_after: f32 = scene
            .cloud
            .positions
            .iter()
            .zip(scene.cloud.targets.iter())
            .map(|(p, t)| (p - t).abs())
            .sum();
        assert!(err_after < err_before * 0.01);
    }
}
