//! Swarm Vote - an agent voting demo on a 2D canvas
//!
//! Core modules:
//! - `sim`: Swarm simulation (agents, stepping, tallies, run control)
//! - `renderer`: Canvas painting and pointer hit-testing
//! - `platform`: Browser frame loop
//! - `hud`: Text shown around the canvas
//! - `settings`: Persisted demo preferences

pub mod hud;
pub mod platform;
pub mod proposals;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Demo configuration constants
pub mod consts {
    /// Arena dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 700.0;
    pub const ARENA_HEIGHT: f32 = 500.0;
    /// Reflection/clamp margin from each arena edge
    pub const ARENA_MARGIN: f32 = 25.0;
    /// Spawn inset from each arena edge (>= max agent radius)
    pub const SPAWN_INSET: f32 = 50.0;

    /// Max absolute velocity component at spawn (pixels/step)
    pub const MAX_SPAWN_SPEED: f32 = 1.0;

    /// Trust score range [min, max)
    pub const TRUST_MIN: f32 = 0.2;
    pub const TRUST_MAX: f32 = 1.0;
    /// Confidence range [min, max)
    pub const CONFIDENCE_MIN: f32 = 0.4;
    pub const CONFIDENCE_MAX: f32 = 1.0;

    /// Outgoing connections per agent (inclusive)
    pub const MIN_CONNECTIONS: usize = 1;
    pub const MAX_CONNECTIONS: usize = 3;

    /// Chance an analyzing agent decides on any given step
    pub const DECISION_CHANCE: f64 = 0.01;

    /// Agent glyph radius = BASE + trust * TRUST_SCALE
    pub const AGENT_BASE_RADIUS: f32 = 8.0;
    pub const AGENT_TRUST_RADIUS: f32 = 4.0;
    /// Decision dot radius as a fraction of the body radius
    pub const DECISION_DOT_SCALE: f32 = 0.6;
    /// Pulse ring amplitude (pixels) and angular rate (per ms)
    pub const PULSE_AMPLITUDE: f32 = 3.0;
    pub const PULSE_RATE: f64 = 0.01;

    /// Background grid spacing
    pub const GRID_SPACING: f32 = 50.0;
    /// Pointer hover radius
    pub const HOVER_RADIUS: f32 = 15.0;

    /// Control ranges
    pub const AGENT_COUNT_MIN: usize = 6;
    pub const AGENT_COUNT_MAX: usize = 20;
    pub const AGENT_COUNT_DEFAULT: usize = 12;
    pub const SPEED_MIN: f32 = 0.5;
    pub const SPEED_MAX: f32 = 3.0;
    pub const SPEED_STEP: f32 = 0.5;
    pub const SPEED_DEFAULT: f32 = 1.0;
}
