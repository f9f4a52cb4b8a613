//! Elementalist entry point
//!
//! Headless demo runner: drives the simulation with a scripted command
//! stream and logs the session summary. Rendering/input front ends embed the
//! library the same way — a `Driver`, a command stream, and the `GameState`
//! snapshot.

use elementalist::consts::SIM_DT;
use elementalist::sim::{Command, Element};
use elementalist::{Driver, Settings};

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.fixed_seed.unwrap_or_else(rand::random);
    log::info!("elementalist starting (seed {seed})");

    let mut driver = Driver::new(seed);
    driver.dispatch(Command::Start { seed });

    // Scripted session: run right across the tutorial, then keep moving,
    // hopping and shooting through the generated levels.
    driver.dispatch(Command::MoveRight(true));
    for frame in 0..settings.demo_frames {
        match frame % 240 {
            60 => driver.dispatch(Command::Jump),
            120 => {
                driver.dispatch(Command::SetAim { x: 1.0, y: -0.25 });
                driver.dispatch(Command::Shoot);
            }
            180 => {
                let element = match (frame / 240) % 5 {
                    0 => Element::Fire,
                    1 => Element::Water,
                    2 => Element::Earth,
                    3 => Element::Air,
                    _ => Element::Spirit,
                };
                log::debug!("shifting to {}", element.as_str());
                driver.dispatch(Command::ChangeElement(element));
            }
            _ => {}
        }
        driver.advance(SIM_DT);
        if driver.state().game_over {
            break;
        }
    }

    let state = driver.state();
    log::info!(
        "session finished: level {}, score {}, {} enemies remaining, {:.1}s simulated",
        state.level,
        state.score,
        state.enemies.len(),
        state.clock
    );

    if settings.dump_final_state {
        match serde_json::to_string_pretty(state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("could not serialize final state: {err}"),
        }
    }
}
