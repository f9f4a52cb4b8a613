//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded generation only (level layouts replay from `world_seed + level`)
//! - Time enters exclusively through `Command::AdvanceTick`
//! - No rendering or platform dependencies

pub mod aabb;
pub mod combat;
pub mod level;
pub mod physics;
pub mod reducer;
pub mod rng;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use combat::{ProjectileSpec, damage_multiplier};
pub use level::{generate_enemies, generate_platforms, tutorial_platforms};
pub use reducer::{Command, reduce};
pub use rng::Lcg;
pub use state::{Direction, Element, Enemy, GameState, Platform, Player, Projectile};
