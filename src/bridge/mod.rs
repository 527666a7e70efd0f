//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand_results;
mod overlay;

pub use hand_results::{
    // WASM entry points
    update_hand_landmarks,
    // Internal API
    init_scene,
    with_scene,
};

pub use overlay::toggle_overlay;
