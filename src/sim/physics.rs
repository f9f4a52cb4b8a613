//! Collision predicates and player physics integration
//!
//! Platforms are one-sided: a body lands on a platform top when falling into
//! a small tolerance band, and (for pass-through platforms) clips the
//! underside when rising into the same band from below. The band is what
//! lets a single discrete integration step still catch a landing.

use super::aabb::Aabb;
use super::state::{Element, Platform, Player};
use crate::consts::*;

/// Is a falling body standing on (landing on) this platform?
///
/// True iff the body is not moving upward, its feet sit within
/// `LAND_TOLERANCE` at-or-below the platform top, and the horizontal spans
/// overlap.
pub fn standing_on(body: &Aabb, velocity_y: f32, platform: &Platform) -> bool {
    velocity_y >= 0.0
        && body.bottom >= platform.y
        && body.bottom <= platform.y + LAND_TOLERANCE
        && body.overlaps_horizontally(&Aabb::from_platform(platform))
}

/// Is a rising body clipping the underside of this pass-through platform?
///
/// Solid platforms never report an underside hit; rising into them is
/// resolved by the landing band on the way back down.
pub fn hitting_underside(body: &Aabb, velocity_y: f32, platform: &Platform) -> bool {
    platform.can_pass_through
        && velocity_y < 0.0
        && body.top <= platform.bottom()
        && body.top >= platform.bottom() - LAND_TOLERANCE
        && body.overlaps_horizontally(&Aabb::from_platform(platform))
}

/// Horizontal velocity derived from the movement flags.
///
/// Movement is instantaneous-velocity: flags map straight to a speed, no
/// acceleration or drift. Both flags (or neither) cancel to zero.
pub fn walk_velocity(player: &Player) -> f32 {
    let base = if player.is_ducking { DUCK_MOVE_SPEED } else { MOVE_SPEED };
    let speed = base * player.element.speed_multiplier();
    if player.is_moving_left && !player.is_moving_right {
        -speed
    } else if player.is_moving_right && !player.is_moving_left {
        speed
    } else {
        0.0
    }
}

/// Element-specific fall shaping, applied after integration.
fn apply_fall_modifier(element: Element, velocity_y: f32) -> f32 {
    match element {
        // Air falls slowly
        Element::Air if velocity_y > 0.0 => velocity_y * 0.9,
        // Water floats briefly around the jump apex
        Element::Water if velocity_y.abs() < 2.0 => velocity_y * 0.7,
        // Earth drops hard, compensating its higher jump
        Element::Earth if velocity_y > 0.0 => velocity_y * 1.05,
        _ => velocity_y,
    }
}

/// Advance the player by one physics step and resolve landings.
///
/// `dt` is assumed pre-capped by the caller. Horizontal position clamps to
/// the playfield; falling past the world floor clamps and counts as landing.
pub fn step_player(player: &mut Player, platforms: &[Platform], dt: f32) {
    player.vel.x = walk_velocity(player);
    player.pos.x += player.vel.x * FRAME_SCALE * dt;
    player.pos.x = player
        .pos
        .x
        .clamp(player.width / 2.0, PLAYFIELD_WIDTH - player.width / 2.0);

    if player.is_jumping || !player.on_platform {
        player.vel.y += GRAVITY * FRAME_SCALE * dt;
        player.pos.y += player.vel.y * FRAME_SCALE * dt;
        player.vel.y = apply_fall_modifier(player.element, player.vel.y);

        let body = Aabb::from_feet(player.pos, player.width, player.height);
        let mut landed = false;
        for platform in platforms {
            if standing_on(&body, player.vel.y, platform) {
                // Pass-through tops only catch a body that is actually
                // falling; solid tops also catch a body at rest.
                if !platform.can_pass_through || player.vel.y > 0.0 {
                    land(player, platform.y);
                    landed = true;
                    break;
                }
            } else if hitting_underside(&body, player.vel.y, platform) {
                // Dampened bounce off the underside; footing unchanged
                player.vel.y = (player.vel.y * 0.5).abs();
            }
        }
        if !landed {
            player.on_platform = false;
        }
    }

    // World floor backstop: clamp and treat as landing
    if player.pos.y >= WORLD_HEIGHT {
        land(player, WORLD_HEIGHT);
    }
}

fn land(player: &mut Player, surface_y: f32) {
    player.pos.y = surface_y;
    player.vel.y = 0.0;
    player.is_jumping = false;
    player.on_platform = true;
}
