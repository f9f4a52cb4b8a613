//! Elemental combat resolution
//!
//! The damage matrix is a closed cycle over the four combat elements:
//! fire beats air beats earth beats water beats fire. Spirit sits outside
//! the cycle and is always neutral. Matching a target's element is the worst
//! case, so form switching stays mandatory.

use glam::Vec2;

use super::aabb::Aabb;
use super::state::{Element, Enemy, GameState, Platform, Projectile};
use crate::consts::*;

/// Damage multiplier for a projectile element against an enemy element.
pub fn damage_multiplier(attacker: Element, defender: Element) -> f32 {
    use Element::*;
    match (attacker, defender) {
        (Fire, Air) | (Water, Fire) | (Earth, Water) | (Air, Earth) => 2.0,
        (Air, Fire) | (Fire, Water) | (Water, Earth) | (Earth, Air) => 0.5,
        (Spirit, _) | (_, Spirit) => 1.0,
        (a, d) if a == d => 0.25,
        _ => 1.0,
    }
}

/// Fixed per-element projectile stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpec {
    pub damage: f32,
    pub width: f32,
    pub height: f32,
}

impl ProjectileSpec {
    pub fn for_element(element: Element) -> Self {
        match element {
            Element::Fire => Self { damage: 15.0, width: 12.0, height: 12.0 },
            Element::Water => Self { damage: 8.0, width: 8.0, height: 8.0 },
            Element::Earth => Self { damage: 20.0, width: 15.0, height: 15.0 },
            Element::Air => Self { damage: 5.0, width: 6.0, height: 6.0 },
            Element::Spirit => Self { damage: 10.0, width: 10.0, height: 10.0 },
        }
    }
}

/// Spawn a projectile for the player's current form, if the cooldown has
/// elapsed and enough energy remains. Returns the new projectile or `None`
/// when the shot is gated (a gated shot costs nothing).
pub fn try_shoot(state: &mut GameState) -> Option<Projectile> {
    let player = &state.player;
    if state.clock - player.last_shot_at < player.shoot_cooldown as f64 {
        return None;
    }
    if player.energy < SHOOT_ENERGY_COST {
        return None;
    }

    // Aim falls back to the facing direction when the vector is degenerate
    let dir = if player.aim.length() > 0.1 {
        player.aim.normalize()
    } else {
        Vec2::new(player.facing.sign(), 0.0)
    };

    let spec = ProjectileSpec::for_element(player.element);
    let origin = Vec2::new(
        player.pos.x + dir.x * player.width / 2.0,
        player.pos.y - player.height / 2.0,
    );
    let id = state.alloc_projectile_id();
    let player = &mut state.player;
    player.last_shot_at = state.clock;
    player.energy -= SHOOT_ENERGY_COST;

    Some(Projectile {
        id,
        pos: origin,
        vel: dir * PROJECTILE_SPEED,
        element: player.element,
        damage: spec.damage,
        width: spec.width,
        height: spec.height,
        active: true,
    })
}

/// Advance every active projectile one step and resolve its collisions.
///
/// A projectile deactivates on leaving the world, on its first enemy hit
/// (one hit per projectile), or on touching any solid platform. Enemies
/// dying this tick are removed immediately; returns the number removed.
pub fn step_projectiles(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    platforms: &[Platform],
    dt: f32,
) -> u32 {
    for projectile in projectiles.iter_mut() {
        if !projectile.active {
            continue;
        }

        projectile.pos += projectile.vel * FRAME_SCALE * dt;
        let Vec2 { x, y } = projectile.pos;
        if x < 0.0 || x > WORLD_WIDTH || y < 0.0 || y > WORLD_HEIGHT {
            projectile.active = false;
            continue;
        }

        let shot = Aabb::from_center(projectile.pos, projectile.width, projectile.height);
        for enemy in enemies.iter_mut() {
            let target = Aabb::from_feet(enemy.pos, enemy.width, enemy.height);
            if shot.intersects(&target) {
                let multiplier = damage_multiplier(projectile.element, enemy.element);
                enemy.health = (enemy.health - projectile.damage * multiplier).max(0.0);
                projectile.active = false;
                break;
            }
        }
        if !projectile.active {
            continue;
        }

        for platform in platforms {
            if !platform.can_pass_through && shot.intersects(&Aabb::from_platform(platform)) {
                projectile.active = false;
                break;
            }
        }
    }

    projectiles.retain(|p| p.active);

    let before = enemies.len();
    enemies.retain(|e| e.health > 0.0);
    (before - enemies.len()) as u32
}
