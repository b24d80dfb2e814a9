//! Canvas rendering module
//!
//! Scene painting is written against `DrawSurface`; the browser canvas is one
//! implementation of it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod colors;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{paint, paint_frame, pick_agent, pulse_offset};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};

/// Why a drawing surface could not be acquired
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("no window or document available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("2D context unavailable")]
    NoContext,
}
