//! Renderer module - WebGPU point cloud rendering
//!
//! Re-exports only. All logic in submodules.

mod points;
mod state;

pub use points::{build_cloud_vertices, render_frame, Vertex};
pub use state::{initialize_gpu, resize_surface, GpuStateError};
