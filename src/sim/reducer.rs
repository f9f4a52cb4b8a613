//! Command reducer: the single authoritative transition function
//!
//! `reduce` is total and pure: every command maps the current state to the
//! next state, inapplicable commands return the input unchanged, and nothing
//! in here can panic. Lifecycle:
//!
//! MENU --Start--> PLAYING <--Pause/Resume--> PAUSED
//! PLAYING/PAUSED --health hits 0--> GAME_OVER --Restart--> PLAYING
//!
//! Gameplay commands are honored only while PLAYING; health/energy writes are
//! also honored while PAUSED (and clamp rather than fail).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combat;
use super::level;
use super::state::{Element, GameState};
use super::tick;
use crate::consts::*;

/// Every command the core accepts, one typed variant each
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Begin a fresh session with the given world seed
    Start { seed: u64 },
    Pause,
    Resume,
    /// Tear down and begin again with a new seed
    Restart { seed: u64 },
    /// Back to the menu
    End,
    MoveLeft(bool),
    MoveRight(bool),
    Duck(bool),
    Jump,
    Shoot,
    SetAim { x: f32, y: f32 },
    ChangeElement(Element),
    /// Absolute health write, clamped to `[0, max]`; zero ends the session
    UpdateHealth(f32),
    /// Absolute energy write, clamped to `[0, max]`
    UpdateEnergy(f32),
    /// One simulation step of `dt` seconds (capped at `MAX_TICK_DT`)
    AdvanceTick { dt: f32 },
    AdvanceLevel,
}

/// Apply one command, producing the next state.
pub fn reduce(state: GameState, command: Command) -> GameState {
    match command {
        Command::Start { seed } | Command::Restart { seed } => {
            log::info!("session start (seed {seed})");
            GameState::new_session(seed)
        }
        Command::End => GameState::menu(state.world_seed),
        Command::Pause => {
            if state.is_live() {
                GameState { is_paused: true, ..state }
            } else {
                state
            }
        }
        Command::Resume => {
            if state.is_playing && state.is_paused && !state.game_over {
                GameState { is_paused: false, ..state }
            } else {
                state
            }
        }
        Command::UpdateHealth(value) => update_health(state, value),
        Command::UpdateEnergy(value) => update_energy(state, value),
        _ if !state.is_live() => state,
        Command::MoveLeft(pressed) => {
            let mut state = state;
            state.player.is_moving_left = pressed;
            if pressed {
                state.player.facing = super::state::Direction::Left;
            }
            state
        }
        Command::MoveRight(pressed) => {
            let mut state = state;
            state.player.is_moving_right = pressed;
            if pressed {
                state.player.facing = super::state::Direction::Right;
            }
            state
        }
        Command::Duck(ducking) => {
            let mut state = state;
            state.player.is_ducking = ducking;
            state.player.height = if ducking { PLAYER_DUCK_HEIGHT } else { PLAYER_HEIGHT };
            state
        }
        Command::Jump => jump(state),
        Command::Shoot => shoot(state),
        Command::SetAim { x, y } => {
            let mut state = state;
            state.player.aim = Vec2::new(x, y);
            state.player.facing = if x >= 0.0 {
                super::state::Direction::Right
            } else {
                super::state::Direction::Left
            };
            state
        }
        Command::ChangeElement(element) => {
            let mut state = state;
            state.player.element = element;
            state
        }
        Command::AdvanceTick { dt } => {
            let mut state = state;
            tick::advance(&mut state, dt.min(MAX_TICK_DT));
            state
        }
        Command::AdvanceLevel => advance_level(state),
    }
}

/// Jump is honored only from solid footing, once per landing.
fn jump(mut state: GameState) -> GameState {
    let player = &mut state.player;
    if player.is_jumping || !player.on_platform {
        return state;
    }
    player.vel.y = player.element.jump_impulse();
    player.is_jumping = true;
    player.on_platform = false;
    state
}

fn shoot(mut state: GameState) -> GameState {
    if let Some(projectile) = combat::try_shoot(&mut state) {
        state.projectiles.push(projectile);
    }
    state
}

/// Health writes clamp and apply even while paused; reaching zero ends the
/// session regardless of pause state.
fn update_health(mut state: GameState, value: f32) -> GameState {
    if !state.is_playing || state.game_over {
        return state;
    }
    state.player.health = value.clamp(0.0, state.player.max_health);
    if state.player.health <= 0.0 {
        log::info!(
            "game over at level {} with score {}",
            state.level,
            state.score
        );
        state.game_over = true;
    }
    state
}

fn update_energy(mut state: GameState, value: f32) -> GameState {
    if !state.is_playing || state.game_over {
        return state;
    }
    state.player.energy = value.clamp(0.0, state.player.max_energy);
    state
}

/// Move to the next level: regenerate the world from `world_seed + level`,
/// reset the player to the level spawn, refund some health/energy, and drop
/// every in-flight projectile.
fn advance_level(mut state: GameState) -> GameState {
    let level = state.level + 1;
    let seed = state.world_seed.wrapping_add(level as u64);
    log::info!("advancing to level {level}");

    state.platforms = level::generate_platforms(level, seed);
    state.enemies = level::generate_enemies(level, &state.platforms, seed);
    state.projectiles.clear();
    state.level = level;
    state.is_tutorial_level = false;

    let player = &mut state.player;
    player.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_LEVEL_SPAWN_Y);
    player.vel = Vec2::ZERO;
    player.is_jumping = false;
    player.on_platform = true;
    player.health = (player.health + 20.0).min(player.max_health);
    player.energy = (player.energy + 50.0).min(player.max_energy);

    state
}
