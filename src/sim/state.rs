//! Game state and core simulation types
//!
//! The aggregate `GameState` is the single authoritative value per session;
//! the reducer replaces it wholesale, everything else reads it.
//!
//! Coordinate conventions: the player and enemies anchor at bottom-center
//! (`pos.y` is the feet), projectiles anchor at their center, platforms at
//! their top-left corner. Positive y points down, so upward motion is a
//! negative `vel.y`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The five elemental forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[default]
    Spirit,
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    /// The four elements platforms and enemies draw from (never spirit)
    pub const COMBAT: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Spirit => "spirit",
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Air => "air",
        }
    }

    /// Upward impulse applied on jump, units per frame
    pub fn jump_impulse(&self) -> f32 {
        match self {
            Element::Spirit => -15.0,
            Element::Fire => -16.0,
            Element::Water => -14.0,
            Element::Earth => -18.0,
            Element::Air => -17.0,
        }
    }

    /// Multiplier applied to the base walking speed
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Element::Air => 1.3,
            Element::Earth => 0.85,
            _ => 1.0,
        }
    }

    /// Passive energy regained per nominal frame
    pub fn energy_regen(&self) -> f32 {
        match self {
            Element::Fire => 0.1,
            Element::Water => 0.075,
            Element::Earth => 0.05,
            Element::Air => 0.08,
            Element::Spirit => 0.07,
        }
    }
}

/// Horizontal facing/patrol direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The player-controlled entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub is_jumping: bool,
    pub is_ducking: bool,
    pub is_moving_left: bool,
    pub is_moving_right: bool,
    pub on_platform: bool,
    pub element: Element,
    pub health: f32,
    pub max_health: f32,
    pub energy: f32,
    pub max_energy: f32,
    /// Simulation-clock timestamp of the last shot (seconds)
    pub last_shot_at: f64,
    /// Minimum seconds between shots
    pub shoot_cooldown: f32,
    /// Raw aim vector; normalized (or replaced by facing) at shoot time
    pub aim: Vec2,
    pub facing: Direction,
}

impl Player {
    /// Fresh player at the session spawn point.
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            is_jumping: false,
            is_ducking: false,
            is_moving_left: false,
            is_moving_right: false,
            on_platform: true,
            element: Element::Spirit,
            health: 100.0,
            max_health: 100.0,
            energy: 100.0,
            max_energy: 100.0,
            // Far enough in the past that the first shot is never gated
            last_shot_at: -(SHOOT_COOLDOWN as f64),
            shoot_cooldown: SHOOT_COOLDOWN,
            aim: Vec2::X,
            facing: Direction::Right,
        }
    }
}

/// A platform segment; immutable once generated for a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Cosmetic tag consumed by the renderer
    pub element: Element,
    /// Enterable from below; supports standing when landed on from above
    pub can_pass_through: bool,
}

impl Platform {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A roaming enemy; removed the instant health reaches zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: f32,
    pub max_health: f32,
    pub element: Element,
    pub direction: Direction,
    /// Patrol speed, units per frame
    pub speed: f32,
}

/// An in-flight elemental projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub element: Element,
    pub damage: f32,
    pub width: f32,
    pub height: f32,
    pub active: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub is_playing: bool,
    pub is_paused: bool,
    pub game_over: bool,
    pub score: u32,
    /// 1-based level index; level 1 is the tutorial
    pub level: u32,
    pub is_tutorial_level: bool,
    /// Seed for this session; level layouts derive from `world_seed + level`
    pub world_seed: u64,
    /// Accumulated simulation time in seconds; the shoot cooldown compares
    /// against this, never against wall time
    pub clock: f64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Monotonic projectile id counter, never reused
    pub next_projectile_id: u32,
}

impl GameState {
    /// Idle menu state; nothing is simulated until `Command::Start` arrives.
    pub fn menu(seed: u64) -> Self {
        Self {
            is_playing: false,
            is_paused: false,
            game_over: false,
            score: 0,
            level: 1,
            is_tutorial_level: true,
            world_seed: seed,
            clock: 0.0,
            player: Player::spawn(),
            platforms: super::level::tutorial_platforms(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            next_projectile_id: 1,
        }
    }

    /// Fresh playing session: tutorial layout, reset player, new seed.
    pub fn new_session(seed: u64) -> Self {
        Self {
            is_playing: true,
            ..Self::menu(seed)
        }
    }

    /// True while gameplay commands are honored.
    pub fn is_live(&self) -> bool {
        self.is_playing && !self.is_paused && !self.game_over
    }

    /// Allocate the next projectile id.
    pub fn alloc_projectile_id(&mut self) -> u32 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        id
    }
}
