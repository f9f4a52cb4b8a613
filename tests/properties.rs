//! Property tests over the simulation's stated invariants.

use proptest::prelude::*;

use elementalist::consts::SIM_DT;
use elementalist::sim::{
    Command, Element, GameState, damage_multiplier, generate_enemies, generate_platforms, reduce,
};

fn element_strategy() -> impl Strategy<Value = Element> {
    prop_oneof![
        Just(Element::Spirit),
        Just(Element::Fire),
        Just(Element::Water),
        Just(Element::Earth),
        Just(Element::Air),
    ]
}

proptest! {
    #[test]
    fn level_generation_is_referentially_transparent(
        seed in any::<u64>(),
        level in 1u32..30,
    ) {
        let a = generate_platforms(level, seed);
        let b = generate_platforms(level, seed);
        prop_assert_eq!(&a, &b);
        // Ground platform first, always full width and solid
        prop_assert!(!a[0].can_pass_through);
        prop_assert_eq!(a[0].x, 0.0);

        let ea = generate_enemies(level, &a, seed);
        let eb = generate_enemies(level, &b, seed);
        prop_assert_eq!(ea, eb);
    }

    #[test]
    fn health_and_energy_stay_bounded(
        writes in prop::collection::vec((-500.0f32..500.0, any::<bool>()), 1..40),
    ) {
        let mut state = reduce(GameState::menu(0), Command::Start { seed: 1 });
        for (value, to_health) in writes {
            let command = if to_health {
                Command::UpdateHealth(value)
            } else {
                Command::UpdateEnergy(value)
            };
            state = reduce(state, command);
            prop_assert!((0.0..=state.player.max_health).contains(&state.player.health));
            prop_assert!((0.0..=state.player.max_energy).contains(&state.player.energy));
        }
    }

    #[test]
    fn matrix_shape_holds_for_all_pairs(
        attacker in element_strategy(),
        defender in element_strategy(),
    ) {
        let m = damage_multiplier(attacker, defender);
        prop_assert!([0.25, 0.5, 1.0, 2.0].contains(&m));
        if attacker == Element::Spirit || defender == Element::Spirit {
            prop_assert_eq!(m, 1.0);
        } else if attacker == defender {
            prop_assert_eq!(m, 0.25);
        }
    }

    #[test]
    fn jump_changes_velocity_at_most_once_while_airborne(
        extra_jumps in 1usize..5,
    ) {
        let state = reduce(GameState::menu(0), Command::Start { seed: 3 });
        let mut state = reduce(state, Command::Jump);
        let vy = state.player.vel.y;
        prop_assert!(vy < 0.0);
        for _ in 0..extra_jumps {
            state = reduce(state, Command::Jump);
            prop_assert_eq!(state.player.vel.y, vy);
        }
    }

    #[test]
    fn rapid_fire_is_cooldown_limited(
        ticks_between in 0u32..29,
    ) {
        // Anything under 30 frames (0.5s at 60 Hz) keeps the second shot gated
        let mut state = reduce(GameState::menu(0), Command::Start { seed: 4 });
        state = reduce(state, Command::Shoot);
        for _ in 0..ticks_between {
            state = reduce(state, Command::AdvanceTick { dt: SIM_DT });
        }
        state = reduce(state, Command::Shoot);
        prop_assert_eq!(state.next_projectile_id, 2);
    }

    #[test]
    fn reducer_is_total_over_random_command_streams(
        commands in prop::collection::vec(command_strategy(), 0..60),
    ) {
        let mut state = GameState::menu(9);
        for command in commands {
            state = reduce(state, command);
            // Core invariants hold no matter the stream
            prop_assert!((0.0..=state.player.max_health).contains(&state.player.health));
            prop_assert!((0.0..=state.player.max_energy).contains(&state.player.energy));
            prop_assert!(!(state.player.is_jumping && state.player.on_platform));
        }
    }
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        (any::<u64>()).prop_map(|seed| Command::Start { seed }),
        Just(Command::Pause),
        Just(Command::Resume),
        Just(Command::End),
        any::<bool>().prop_map(Command::MoveLeft),
        any::<bool>().prop_map(Command::MoveRight),
        any::<bool>().prop_map(Command::Duck),
        Just(Command::Jump),
        Just(Command::Shoot),
        (-1.0f32..1.0, -1.0f32..1.0).prop_map(|(x, y)| Command::SetAim { x, y }),
        element_strategy().prop_map(Command::ChangeElement),
        (-200.0f32..300.0).prop_map(Command::UpdateHealth),
        (-200.0f32..300.0).prop_map(Command::UpdateEnergy),
        (0.0f32..0.2).prop_map(|dt| Command::AdvanceTick { dt }),
        Just(Command::AdvanceLevel),
    ]
}
