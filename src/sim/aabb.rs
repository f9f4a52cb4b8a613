//! Axis-aligned box geometry
//!
//! The simulation mixes three anchor conventions (bottom-center bodies,
//! center-anchored projectiles, top-left platforms); everything collision
//! related converts into this one edge-based form first.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Platform;

/// An axis-aligned box in world space, stored as edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Box for a body anchored at bottom-center (player, enemies).
    pub fn from_feet(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: pos.x - width / 2.0,
            top: pos.y - height,
            right: pos.x + width / 2.0,
            bottom: pos.y,
        }
    }

    /// Box for a center-anchored body (projectiles).
    pub fn from_center(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: pos.x - width / 2.0,
            top: pos.y - height / 2.0,
            right: pos.x + width / 2.0,
            bottom: pos.y + height / 2.0,
        }
    }

    /// Box for a platform (top-left anchored).
    pub fn from_platform(platform: &Platform) -> Self {
        Self {
            left: platform.x,
            top: platform.y,
            right: platform.right(),
            bottom: platform.bottom(),
        }
    }

    /// Strict overlap on both axes.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }

    /// Horizontal spans overlap (vertical position ignored).
    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.right > other.left && self.left < other.right
    }
}
