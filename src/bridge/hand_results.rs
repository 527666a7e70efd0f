//! Hand landmark ingestion and scene storage
//!
//! Receives MediaPipe Hands results from JavaScript as a flat Float32Array
//! and feeds them to the scene. The scene lives in thread-local storage;
//! the detection callback and the render loop never overlap on the
//! single-threaded WASM event loop, so plain RefCell access is enough.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::cloud::{Joint, Scene, LANDMARK_COUNT};

/// Floats per hand: 21 landmarks × (x, y, z).
const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

thread_local! {
    static SCENE: RefCell<Option<Scene>> = RefCell::new(None);
}

/// Create the scene. Called once from `init` with the viewport-derived
/// particle budget.
pub fn init_scene(particle_count: usize) {
    let seed = js_sys::Date::now() as u64;
    SCENE.with(|cell| {
        *cell.borrow_mut() = Some(Scene::new(particle_count, seed));
    });
}

/// Run `f` against the scene if it has been initialized.
pub fn with_scene<R>(f: impl FnOnce(&mut Scene) -> R) -> Option<R> {
    SCENE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Detection callback. Called from JavaScript once per processed camera
/// frame with `num_hands * 63` floats (x, y, z per landmark). Only the
/// first hand is consumed; zero hands drives the idle drift path.
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32], num_hands: usize) {
    let hand = if num_hands > 0 {
        if data.len() < FLOATS_PER_HAND {
            web_sys::console::warn_1(
                &format!(
                    "Invalid hand data length: {} (expected at least {})",
                    data.len(),
                    FLOATS_PER_HAND
                )
                .into(),
            );
            return;
        }
        let mut joints = [Joint::default(); LANDMARK_COUNT];
        for (i, joint) in joints.iter_mut().enumerate() {
            *joint = Joint {
                x: data[i * 3],
                y: data[i * 3 + 1],
                z: data[i * 3 + 2],
            };
        }
        Some(joints)
    } else {
        None
    };

    with_scene(|scene| scene.on_results(hand.as_ref()));
}
