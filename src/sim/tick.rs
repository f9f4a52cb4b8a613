//! Per-tick stage pipeline
//!
//! One tick applies its stages in a fixed order — player physics, then
//! projectiles, then enemy steering, then passive regeneration — so later
//! stages always observe the state the earlier stages produced within the
//! same tick. A tick either applies fully or (gated upstream by the reducer)
//! not at all.

use super::combat;
use super::physics;
use super::state::{Enemy, GameState, Platform};
use crate::consts::*;

/// Advance the whole simulation by `dt` seconds (pre-capped by the reducer).
pub fn advance(state: &mut GameState, dt: f32) {
    state.clock += dt as f64;

    physics::step_player(&mut state.player, &state.platforms, dt);

    let kills = combat::step_projectiles(
        &mut state.projectiles,
        &mut state.enemies,
        &state.platforms,
        dt,
    );
    if kills > 0 {
        state.score += kills * KILL_SCORE;
        log::debug!("{kills} enemies down, score {}", state.score);
    }

    for enemy in &mut state.enemies {
        steer_enemy(enemy, &state.platforms, dt);
    }

    let regen = state.player.element.energy_regen() * FRAME_SCALE * dt;
    state.player.energy = (state.player.energy + regen).min(state.player.max_energy);
}

/// Patrol steering: walk in the current direction, clamp and turn around at
/// the edges of the supporting platform. Enemies ride a fixed offset above
/// the platform the generator placed them on, which is how the platform is
/// recovered here; without one (should not happen) the world bounds act as
/// the patrol limits.
fn steer_enemy(enemy: &mut Enemy, platforms: &[Platform], dt: f32) {
    enemy.pos.x += enemy.direction.sign() * enemy.speed * FRAME_SCALE * dt;

    let half = enemy.width / 2.0;
    let (min_x, max_x) = match supporting_platform(enemy, platforms) {
        Some(platform) => (platform.x + half, platform.right() - half),
        None => (half, WORLD_WIDTH - half),
    };

    if enemy.pos.x <= min_x {
        enemy.pos.x = min_x;
        enemy.direction = super::state::Direction::Right;
    } else if enemy.pos.x >= max_x {
        enemy.pos.x = max_x;
        enemy.direction = super::state::Direction::Left;
    }
}

fn supporting_platform<'a>(enemy: &Enemy, platforms: &'a [Platform]) -> Option<&'a Platform> {
    platforms.iter().find(|p| {
        (p.y - (enemy.pos.y + ENEMY_PLATFORM_OFFSET)).abs() < 0.001
            && enemy.pos.x + enemy.width / 2.0 > p.x - enemy.width
            && enemy.pos.x - enemy.width / 2.0 < p.right() + enemy.width
    })
}
