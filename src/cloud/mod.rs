//! Particle cloud simulation - pure core, no browser dependencies
//!
//! Re-exports only. All logic in submodules.

mod animator;
mod drift;
mod mapper;
mod particles;
mod scene;
mod skeleton;
mod zoom;

pub use animator::{step, ACTIVE_COLOR, IDLE_COLOR, SMOOTHING};
pub use drift::{drift_idle, DRIFT_BOUND_X, DRIFT_NUDGE, DRIFT_PULLBACK};
pub use mapper::{scatter_along_bones, BONE_JITTER};
pub use particles::{particle_budget, ParticleCloud, DESKTOP_PARTICLE_COUNT, MOBILE_PARTICLE_COUNT};
pub use scene::Scene;
pub use skeleton::{
    pinch_distance, Joint, BONE_COUNT, HAND_BONES, INDEX_TIP, LANDMARK_COUNT, THUMB_TIP, WRIST,
};
pub use zoom::{ZoomCamera, REST_DISTANCE};
