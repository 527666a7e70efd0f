//! Hand Cloud Web - hand-tracked particle morphing effect
//!
//! A particle cloud that takes the shape of a hand detected in the webcam
//! feed. JavaScript owns the camera and the MediaPipe Hands detector and
//! calls in with raw landmarks; this crate owns the simulation and the
//! WebGPU rendering.
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod cloud;

#[cfg(target_arch = "wasm32")]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
#[cfg(target_arch = "wasm32")]
pub use bridge::{toggle_overlay, update_hand_landmarks};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the scene and WebGPU - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    let viewport_width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0) as u32;
    let particle_count = cloud::particle_budget(viewport_width);

    bridge::init_scene(particle_count);
    renderer::initialize_gpu().await?;
    console_log!("✅ WebGPU initialized, {} particles", particle_count);
    Ok(())
}

/// Render one frame with the current particle state
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame() {
    renderer::render_frame();
}

/// Window resize handler - reconfigures the surface, nothing else
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn resize(width: u32, height: u32) {
    renderer::resize_surface(width, height);
}
