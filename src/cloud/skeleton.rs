//! Hand skeleton topology and coordinate conversion
//!
//! MediaPipe Hands delivers 21 normalized landmarks per hand. The fixed
//! 20-bone topology below is what the particle cloud scatters along.

use glam::Vec3;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// Bone connections of the hand skeleton (joint index pairs).
/// Each finger chains from the wrist out to the fingertip.
pub const HAND_BONES: [(usize, usize); 20] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
];

pub const BONE_COUNT: usize = HAND_BONES.len();

// ============================================================================
// COORDINATE CONVERSION
// ============================================================================

/// Horizontal world extent mapped from the normalized camera frame.
pub const WORLD_WIDTH: f32 = 40.0;
/// Vertical world extent mapped from the normalized camera frame.
pub const WORLD_HEIGHT: f32 = 30.0;

/// A single hand joint in normalized camera coordinates (0-1, z unused
/// by the cloud but delivered by the detector).
#[derive(Clone, Copy, Default, Debug)]
pub struct Joint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Joint {
    /// Convert a normalized joint to world space. Both axes are mirrored
    /// so a front-facing camera behaves like a mirror; the bones themselves
    /// sit on the z = 0 plane (depth comes from particle jitter only).
    pub fn to_world(self) -> Vec3 {
        Vec3::new(
            (0.5 - self.x) * WORLD_WIDTH,
            (0.5 - self.y) * WORLD_HEIGHT,
            0.0,
        )
    }
}

/// Planar distance between the thumb tip and index tip in normalized
/// coordinates. Drives the zoom controller.
pub fn pinch_distance(joints: &[Joint; LANDMARK_COUNT]) -> f32 {
    let thumb = joints[THUMB_TIP];
    let index = joints[INDEX_TIP];
    let dx = thumb.x - index.x;
    let dy = thumb.y - index.y;
    (dx * dx + dy * dy).sqrt()
}
