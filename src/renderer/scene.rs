//! Scene painting and pointer hit-testing
//!
//! Paint order: grid, connections, then per agent its body, decision dot and,
//! while still analyzing, a pulse ring. The pulse follows wall-clock time
//! so it keeps animating while the simulation is paused.

use glam::Vec2;

use super::colors::{self, CONNECTION, GRID, PULSE_ALPHA};
use super::surface::DrawSurface;
use crate::consts::*;
use crate::sim::Agent;

/// Paint if a surface is available. Returns whether anything was drawn.
pub fn paint_frame<S: DrawSurface>(surface: Option<&mut S>, agents: &[Agent], time_ms: f64) -> bool {
    match surface {
        Some(surface) => {
            paint(surface, agents, time_ms);
            true
        }
        None => false,
    }
}

/// Paint the full scene
pub fn paint<S: DrawSurface + ?Sized>(surface: &mut S, agents: &[Agent], time_ms: f64) {
    surface.clear();
    paint_grid(surface);
    paint_connections(surface, agents);

    let pulse_offset = pulse_offset(time_ms);
    for agent in agents {
        let radius = agent.radius();
        surface.fill_circle(agent.pos, radius, agent.color);
        surface.fill_circle(
            agent.pos,
            radius * DECISION_DOT_SCALE,
            colors::decision_color(agent.decision),
        );

        if agent.is_analyzing() {
            surface.stroke_circle(
                agent.pos,
                radius + pulse_offset,
                colors::with_alpha(agent.color, PULSE_ALPHA),
                2.0,
            );
        }
    }
}

fn paint_grid<S: DrawSurface + ?Sized>(surface: &mut S) {
    let (width, height) = surface.size();

    let mut x = 0.0;
    while x < width {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, height), GRID, 1.0);
        x += GRID_SPACING;
    }

    let mut y = 0.0;
    while y < height {
        surface.line(Vec2::new(0.0, y), Vec2::new(width, y), GRID, 1.0);
        y += GRID_SPACING;
    }
}

/// One line per directed connection; mutual pairs overlap
fn paint_connections<S: DrawSurface + ?Sized>(surface: &mut S, agents: &[Agent]) {
    for agent in agents {
        for target_id in &agent.connections {
            if let Some(target) = agents.iter().find(|a| a.id == *target_id) {
                surface.line(agent.pos, target.pos, CONNECTION, 1.0);
            }
        }
    }
}

/// Pulse ring radius offset at a wall-clock time
pub fn pulse_offset(time_ms: f64) -> f32 {
    (time_ms * PULSE_RATE).sin() as f32 * PULSE_AMPLITUDE
}

/// First agent (in store order) within hover range of `point`
pub fn pick_agent(agents: &[Agent], point: Vec2) -> Option<&Agent> {
    agents
        .iter()
        .find(|agent| agent.pos.distance(point) < HOVER_RADIUS)
}
