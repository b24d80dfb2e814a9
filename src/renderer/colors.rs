//! Colors for scene elements

use crate::sim::Decision;

pub const GRID: [f32; 4] = [0.0, 0.824, 1.0, 0.1];
pub const CONNECTION: [f32; 4] = [0.545, 0.361, 0.965, 0.3];
pub const DECISION_YES: [f32; 4] = [0.063, 0.725, 0.506, 1.0]; // #10B981
pub const DECISION_NO: [f32; 4] = [0.937, 0.267, 0.267, 1.0]; // #EF4444
pub const DECISION_ABSTAIN: [f32; 4] = [0.961, 0.620, 0.043, 1.0]; // #F59E0B
pub const DECISION_ANALYZING: [f32; 4] = [0.420, 0.447, 0.502, 1.0]; // #6B7280
/// Alpha applied to an agent's own color for its pulse ring
pub const PULSE_ALPHA: f32 = 0.25;

/// Inner dot color for a decision
pub fn decision_color(decision: Decision) -> [f32; 4] {
    match decision {
        Decision::Yes => DECISION_YES,
        Decision::No => DECISION_NO,
        Decision::Abstain => DECISION_ABSTAIN,
        Decision::Analyzing => DECISION_ANALYZING,
    }
}

pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// CSS `rgba()` string for a 0..1 color
pub fn css(color: [f32; 4]) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}
