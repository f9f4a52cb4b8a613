//! Elementalist - a 2D elemental platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, physics, combat, level generation)
//! - `driver`: Fixed-timestep loop that feeds the simulation
//! - `settings`: Runtime configuration for the headless runner
//!
//! Rendering, audio and raw input handling live outside this crate; the only
//! surface collaborators get is `Driver::dispatch` plus the read-only
//! `GameState` snapshot.

pub mod driver;
pub mod settings;
pub mod sim;

pub use driver::Driver;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz nominal cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest physics step a single tick may apply (backgrounded host, etc.)
    pub const MAX_TICK_DT: f32 = 0.1;
    /// Velocities are expressed in units per nominal frame; this rescales
    /// them to units per second for dt integration.
    pub const FRAME_SCALE: f32 = 60.0;

    /// World bounds for projectiles (and the floor clamp)
    pub const WORLD_WIDTH: f32 = 2000.0;
    pub const WORLD_HEIGHT: f32 = 800.0;
    /// Playable horizontal extent the player is clamped to
    pub const PLAYFIELD_WIDTH: f32 = 1600.0;

    /// Downward acceleration, units per frame per frame
    pub const GRAVITY: f32 = 0.98;
    /// Vertical window within which a falling body still catches a platform
    /// top (or clips a platform underside) in one discrete step
    pub const LAND_TOLERANCE: f32 = 10.0;

    /// Base walking speed, units per frame
    pub const MOVE_SPEED: f32 = 5.0;
    /// Walking speed while ducking
    pub const DUCK_MOVE_SPEED: f32 = 3.0;

    /// Player spawn and hitbox
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 450.0;
    pub const PLAYER_LEVEL_SPAWN_Y: f32 = 300.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 30.0;

    /// Projectile launch speed, units per frame
    pub const PROJECTILE_SPEED: f32 = 12.0;
    /// Seconds between shots
    pub const SHOOT_COOLDOWN: f32 = 0.5;
    /// Energy drained per shot (also the floor below which shots fail)
    pub const SHOOT_ENERGY_COST: f32 = 10.0;

    /// Score per enemy defeated
    pub const KILL_SCORE: u32 = 10;

    /// Horizontal progress that completes the tutorial level
    pub const TUTORIAL_ADVANCE_X: f32 = 600.0;
    /// Horizontal progress that completes every later level
    pub const LEVEL_ADVANCE_X: f32 = 1500.0;

    /// Enemy hitbox, and how far above a platform top enemies ride
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_PLATFORM_OFFSET: f32 = 30.0;
}
