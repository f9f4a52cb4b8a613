//! End-to-end gameplay scenarios driven through the public command surface.

use glam::Vec2;

use elementalist::consts::*;
use elementalist::sim::{Command, Element, GameState, reduce};

fn playing(seed: u64) -> GameState {
    reduce(GameState::menu(0), Command::Start { seed })
}

#[test]
fn falling_player_lands_on_the_ground_platform() {
    let mut state = playing(1);
    // Airborne just above the ground platform (y=500), falling at 5/frame
    state.player.pos = Vec2::new(100.0, 490.0);
    state.player.vel = Vec2::new(0.0, 5.0);
    state.player.is_jumping = true;
    state.player.on_platform = false;

    // A single 30 Hz step carries the feet into the 10-unit landing band
    let state = reduce(state, Command::AdvanceTick { dt: 1.0 / 30.0 });

    assert!(state.player.on_platform);
    assert!(!state.player.is_jumping);
    assert_eq!(state.player.vel.y, 0.0);
    assert_eq!(state.player.pos.y, 500.0);
}

#[test]
fn fire_projectile_one_shots_a_weak_air_enemy() {
    use elementalist::sim::{Direction, Enemy};

    let mut state = playing(2);
    state.enemies = vec![Enemy {
        id: 0,
        pos: Vec2::new(160.0, 440.0),
        width: 30.0,
        height: 30.0,
        health: 20.0,
        max_health: 20.0,
        element: Element::Air,
        direction: Direction::Left,
        speed: 0.0,
    }];
    let state = reduce(state, Command::ChangeElement(Element::Fire));
    let state = reduce(state, Command::SetAim { x: 1.0, y: 0.0 });
    let state = reduce(state, Command::Shoot);
    assert_eq!(state.projectiles.len(), 1);
    assert_eq!(state.projectiles[0].damage, 15.0);

    // Fire vs air doubles 15 to 30, past the enemy's 20 health
    let mut state = state;
    for _ in 0..10 {
        state = reduce(state, Command::AdvanceTick { dt: SIM_DT });
        if state.enemies.is_empty() {
            break;
        }
    }
    assert!(state.enemies.is_empty());
    assert_eq!(state.score, KILL_SCORE);
    assert!(state.projectiles.is_empty());
}

#[test]
fn jumping_player_passes_through_then_lands_on_floating_platform() {
    use elementalist::sim::Platform;

    let mut state = playing(3);
    state.platforms.push(Platform {
        x: 0.0,
        y: 400.0,
        width: 600.0,
        height: 15.0,
        element: Element::Water,
        can_pass_through: true,
    });
    // Rising through the platform's body from below: no landing, no stop
    state.player.pos = Vec2::new(100.0, 440.0);
    state.player.vel = Vec2::new(0.0, -5.0);
    state.player.is_jumping = true;
    state.player.on_platform = false;

    let state = reduce(state, Command::AdvanceTick { dt: SIM_DT });
    assert!(!state.player.on_platform);
    assert!(state.player.is_jumping);

    // Falling onto its top within tolerance: lands
    let mut state = state;
    state.player.pos = Vec2::new(100.0, 395.0);
    state.player.vel = Vec2::new(0.0, 5.0);
    let state = reduce(state, Command::AdvanceTick { dt: SIM_DT });
    assert!(state.player.on_platform);
    assert_eq!(state.player.pos.y, 400.0);
}

#[test]
fn advance_level_resets_the_world_from_the_session_seed() {
    use elementalist::sim::{generate_enemies, generate_platforms};

    let seed = 4321;
    let mut state = playing(seed);
    state = reduce(state, Command::Shoot);
    assert!(!state.projectiles.is_empty());

    let state = reduce(state, Command::AdvanceLevel);

    assert_eq!(state.level, 2);
    assert!(!state.is_tutorial_level);
    assert!(state.projectiles.is_empty());
    assert_eq!(
        state.player.pos,
        Vec2::new(PLAYER_SPAWN_X, PLAYER_LEVEL_SPAWN_Y)
    );
    assert!(state.player.on_platform);

    // The layout is exactly what the generators produce for worldSeed+2
    let expected_platforms = generate_platforms(2, seed + 2);
    let expected_enemies = generate_enemies(2, &expected_platforms, seed + 2);
    assert_eq!(state.platforms, expected_platforms);
    assert_eq!(state.enemies, expected_enemies);
}

#[test]
fn tutorial_flag_never_returns_once_left() {
    let state = playing(5);
    let state = reduce(state, Command::AdvanceLevel);
    let state = reduce(state, Command::AdvanceLevel);
    assert_eq!(state.level, 3);
    assert!(!state.is_tutorial_level);
}

#[test]
fn double_jump_is_rejected() {
    let state = playing(6);
    let jumped = reduce(state, Command::Jump);
    let vy_after_first = jumped.player.vel.y;
    assert_eq!(vy_after_first, Element::Spirit.jump_impulse());

    let again = reduce(jumped, Command::Jump);
    assert_eq!(again.player.vel.y, vy_after_first);
}

#[test]
fn cooldown_allows_only_one_projectile() {
    let state = playing(7);
    let state = reduce(state, Command::Shoot);
    // A few short ticks, all inside the 0.5s cooldown window
    let mut state = state;
    for _ in 0..10 {
        state = reduce(state, Command::AdvanceTick { dt: SIM_DT });
    }
    let state = reduce(state, Command::Shoot);
    assert_eq!(state.projectiles.len(), 1);

    // Once the window has elapsed the next shot goes out
    let mut state = state;
    for _ in 0..30 {
        state = reduce(state, Command::AdvanceTick { dt: SIM_DT });
    }
    let state = reduce(state, Command::Shoot);
    assert_eq!(state.projectiles.len(), 2);
}
