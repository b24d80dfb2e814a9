//! Rectangular arena bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The bounded rectangle agents move in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Distance from each edge where agents reflect
    pub margin: f32,
    /// Distance from each edge agents may spawn at
    pub spawn_inset: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            margin: ARENA_MARGIN,
            spawn_inset: SPAWN_INSET,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Lowest reachable coordinate on both axes
    pub fn min(&self) -> Vec2 {
        Vec2::splat(self.margin)
    }

    /// Highest reachable coordinate on both axes
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width - self.margin, self.height - self.margin)
    }

    pub fn spawn_min(&self) -> Vec2 {
        Vec2::splat(self.spawn_inset)
    }

    pub fn spawn_max(&self) -> Vec2 {
        Vec2::new(self.width - self.spawn_inset, self.height - self.spawn_inset)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let (lo, hi) = (self.min(), self.max());
        p.x >= lo.x && p.x <= hi.x && p.y >= lo.y && p.y <= hi.y
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}
