//! Coordinate types shared across engine renderers.
//!
//! Canonical CPU space:
//! - Pixel units at framebuffer scale
//! - Origin at the viewport center
//! - +X right, +Y up
//!
//! Renderers convert to NDC in shaders using a projection uniform.

mod color;
mod projection;
mod viewport;

pub use color::ColorRgba;
pub use projection::pixel_to_ndc;
pub use viewport::Viewport;
