//! Pinch-driven camera zoom
//!
//! The camera sits on the +z axis looking at the origin. A pinch between
//! thumb tip and index tip maps to a target distance; the distance chases
//! the target exponentially, once per detection callback.

use glam::Mat4;

/// Camera distance at startup and the rest distance while idle.
pub const REST_DISTANCE: f32 = 30.0;
/// Closest the pinch can bring the camera (fully closed pinch).
pub const MIN_DISTANCE: f32 = 10.0;
/// Pinch distance to camera distance gain.
pub const PINCH_GAIN: f32 = 80.0;
/// Smoothing factor while a hand is tracked.
pub const PINCH_SMOOTHING: f32 = 0.1;
/// Slower smoothing factor for the return to rest.
pub const REST_SMOOTHING: f32 = 0.05;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Exponentially smoothed camera distance driven by pinch gestures.
pub struct ZoomCamera {
    pub z: f32,
}

impl ZoomCamera {
    pub fn new() -> Self {
        Self { z: REST_DISTANCE }
    }

    /// Detection-callback update with a hand present: a tighter pinch
    /// zooms in. Moves 10% of the remaining distance per callback.
    pub fn on_pinch(&mut self, pinch: f32) {
        let target = MIN_DISTANCE + pinch * PINCH_GAIN;
        self.z += (target - self.z) * PINCH_SMOOTHING;
    }

    /// Detection-callback update with no hand: drift back to the rest
    /// distance at half speed.
    pub fn on_idle(&mut self) {
        self.z += (REST_DISTANCE - self.z) * REST_SMOOTHING;
    }

    /// View-projection matrix for the render surface's aspect ratio.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_DEGREES.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -self.z));
        proj * view
    }
}

impl Default for ZoomCamera {
    fn default() -> Self {
        Self::new()
    }
}
