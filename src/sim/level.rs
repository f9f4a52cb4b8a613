//! Procedural level generation
//!
//! Layouts replay deterministically from `world_seed + level`: the generator
//! is a pure function of (level, seed) with all randomness drawn from the
//! seeded [`Lcg`](super::rng::Lcg).

use glam::Vec2;

use super::rng::Lcg;
use super::state::{Direction, Element, Enemy, Platform};
use crate::consts::{ENEMY_PLATFORM_OFFSET, ENEMY_SIZE};

/// Attempts allowed per floating-platform slot before the slot is skipped.
/// Overlap rejection is a sampling loop; the budget guarantees termination
/// on adversarial seeds.
const PLACEMENT_RETRIES: u32 = 40;

/// The full-width solid ground every level starts with.
fn ground() -> Platform {
    Platform {
        x: 0.0,
        y: 500.0,
        width: 2000.0,
        height: 30.0,
        element: Element::Spirit,
        can_pass_through: false,
    }
}

/// Level 1: ground only, no hazards, room to learn the controls.
pub fn tutorial_platforms() -> Vec<Platform> {
    vec![ground()]
}

/// Generate the platform layout for a level.
///
/// The ground platform is always element 0. Levels past the tutorial add a
/// fixed starting ledge and then scatter floating platforms across
/// equal-width segments of the level so they never cluster at the origin.
pub fn generate_platforms(level: u32, seed: u64) -> Vec<Platform> {
    let mut platforms = tutorial_platforms();
    if level == 1 {
        return platforms;
    }

    // Fixed starting ledge above the spawn point
    platforms.push(Platform {
        x: 50.0,
        y: 350.0,
        width: 200.0,
        height: 15.0,
        element: Element::Spirit,
        can_pass_through: true,
    });

    let mut rng = Lcg::new(seed);
    let count = 5 + (level * 3).min(20);
    let level_width = 1000.0 + level as f32 * 200.0;
    let segment = level_width / count as f32;

    let mut placed = 0;
    while placed < count {
        let mut attempts = 0;
        let slot = loop {
            attempts += 1;
            let x = segment * placed as f32 + rng.range(20.0, segment - 100.0);
            let y = rng.range(150.0, 450.0);
            let width = rng.range(80.0, 200.0);
            let element = Element::COMBAT[rng.index(Element::COMBAT.len())];
            let pass_through = rng.range(0.0, 10.0) < 7.0 + level as f32 * 0.5;

            let overlaps = platforms
                .iter()
                .any(|p| x < p.right() && x + width > p.x && (y - p.y).abs() < 30.0);
            if !overlaps {
                break Some(Platform {
                    x,
                    y,
                    width,
                    height: 15.0,
                    element,
                    can_pass_through: pass_through,
                });
            }
            if attempts >= PLACEMENT_RETRIES {
                break None;
            }
        };
        if let Some(platform) = slot {
            platforms.push(platform);
        } else {
            log::debug!("level {level}: slot {placed} exhausted its placement budget");
        }
        placed += 1;
    }

    log::info!(
        "level {level}: generated {} platforms (seed {seed})",
        platforms.len()
    );
    platforms
}

/// Populate a level with enemies, one per randomly drawn platform.
///
/// Platforms are consumed without replacement, skipping the ground and the
/// starting ledge, so no platform hosts two enemies. The tutorial level is
/// always empty.
pub fn generate_enemies(level: u32, platforms: &[Platform], seed: u64) -> Vec<Enemy> {
    if level == 1 {
        return Vec::new();
    }

    let mut rng = Lcg::new(seed);
    let count = (level * 2).min(15);
    let mut available: Vec<&Platform> = platforms.iter().skip(2).collect();
    let mut enemies = Vec::with_capacity(count as usize);

    for id in 0..count {
        if available.is_empty() {
            break;
        }
        let platform = available.remove(rng.index(available.len()));
        let x = platform.x + rng.range(20.0, platform.width - 40.0);
        let y = platform.y - ENEMY_PLATFORM_OFFSET;
        let element = Element::COMBAT[rng.index(Element::COMBAT.len())];
        let speed = 0.5 + rng.range(0.0, level as f32 * 0.2);
        let health = 30.0 + level as f32 * 5.0;

        enemies.push(Enemy {
            id,
            pos: Vec2::new(x, y),
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            health,
            max_health: health,
            element,
            direction: if rng.coin() { Direction::Left } else { Direction::Right },
            speed,
        });
    }

    log::info!("level {level}: spawned {} enemies (seed {seed})", enemies.len());
    enemies
}
