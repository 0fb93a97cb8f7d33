//! GPU rendering subsystem.
//!
//! Renderers issue GPU commands via wgpu and own their GPU resources
//! (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in pixel units (origin at the viewport center, +Y up).
//! - Vertex shaders convert to NDC using a projection uniform.

mod ctx;
mod line;
mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use line::{LineRenderer, LineVertex};
pub use shader::{check_wgsl, ShaderStage, StageReport};
