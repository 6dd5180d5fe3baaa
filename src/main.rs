//! Deadwave entry point
//!
//! Runs a headless demo session: a scripted player holds the arena
//! center, tracks the nearest hostile and fires on an interval until
//! overrun. Useful for watching the simulation through its logs.
//!
//! Pass a JSON config path to override the defaults, e.g.
//! `deadwave run.json` with `{"difficulty": "hard", "combat_mode": "projectile"}`.

use std::time::{Duration, Instant};

use deadwave::consts::SIM_DT;
use deadwave::scheduler::FixedTimestep;
use deadwave::sim::{AimInput, GameEvent, Session, TickInput};
use deadwave::{ConfigError, RunConfig};

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::Json(serde_json::Error::io(e)))?;
            RunConfig::from_json(&json)?
        }
        None => RunConfig::default(),
    };
    let sim_config = config.to_sim_config()?;

    let mut session = Session::new(sim_config, config.seed);
    let mut stepper = FixedTimestep::default();
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        let frame_dt = now.duration_since(last).as_secs_f32();
        last = now;

        for _ in 0..stepper.advance(frame_dt) {
            let input = demo_input(&session);
            for event in session.tick(&input, stepper.dt()) {
                match event {
                    GameEvent::ScoreGained(points) => log::info!("+{points} points"),
                    GameEvent::HitLanded { pos } => {
                        log::debug!("hit at ({:.0}, {:.0})", pos.x, pos.y)
                    }
                    GameEvent::OutOfAmmo => log::warn!("out of ammo"),
                    GameEvent::GameOver => {
                        let state = session.state();
                        println!(
                            "game over: score {} after {} ticks ({} hostiles on the field)",
                            state.player.score,
                            state.time_ticks,
                            state.active_hostiles().count()
                        );
                        return Ok(());
                    }
                }
            }
        }

        std::thread::sleep(Duration::from_secs_f32(SIM_DT / 2.0));
    }
}

/// Track the nearest active hostile and fire every few ticks
fn demo_input(session: &Session) -> TickInput {
    let state = session.state();
    let player_pos = state.player.pos;

    let nearest = state.active_hostiles().min_by(|a, b| {
        a.pos
            .distance(player_pos)
            .partial_cmp(&b.pos.distance(player_pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut input = TickInput::default();
    if let Some(hostile) = nearest {
        input.aim = AimInput::PointAt(hostile.pos);
        input.fire = state.time_ticks.is_multiple_of(12);
    }
    input
}
