//! Platform abstraction layer
//!
//! Browser pieces: the per-frame callback loop and the page lifecycle rules
//! that decide when it stops and restarts.

#[cfg(target_arch = "wasm32")]
pub mod frame_loop;
pub mod lifecycle;

#[cfg(target_arch = "wasm32")]
pub use frame_loop::FrameLoop;
pub use lifecycle::{LoopAction, PageTransition, loop_action};

/// Browser plumbing failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("no browser window")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
}
