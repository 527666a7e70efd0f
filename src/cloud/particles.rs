//! Particle buffer storage
//!
//! Three flat f32 buffers (xyz-interleaved): the rendered positions, the
//! targets the animator pulls them toward, and the per-particle colors.
//! All three are allocated once and never resized.

use rand::Rng;

/// Particle count used on narrow (phone) viewports.
pub const MOBILE_PARTICLE_COUNT: usize = 3500;
/// Particle count used on desktop viewports.
pub const DESKTOP_PARTICLE_COUNT: usize = 8000;
/// Viewport width (CSS px) below which the mobile budget applies.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Pick the particle budget for a viewport width.
pub fn particle_budget(viewport_width: u32) -> usize {
    if viewport_width < MOBILE_BREAKPOINT {
        MOBILE_PARTICLE_COUNT
    } else {
        DESKTOP_PARTICLE_COUNT
    }
}

/// Fixed-size particle storage. Invariant: all three buffers are exactly
/// `count * 3` floats long for the lifetime of the process.
pub struct ParticleCloud {
    pub count: usize,
    pub positions: Vec<f32>,
    pub targets: Vec<f32>,
    pub colors: Vec<f32>,
}

impl ParticleCloud {
    /// Allocate the cloud with positions scattered uniformly in ±25 on
    /// every axis, targets equal to positions, and colors saturated white
    /// (the first animator tick overwrites them).
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let mut positions = vec![0.0f32; count * 3];
        for v in positions.iter_mut() {
            *v = (rng.gen::<f32>() - 0.5) * 50.0;
        }
        let targets = positions.clone();
        let colors = vec![1.0f32; count * 3];
        Self { count, positions, targets, colors }
    }
}
