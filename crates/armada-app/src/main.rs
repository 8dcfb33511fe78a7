//! Headless fleet driver — runs the simulation engine at the fixed tick
//! rate and emits FleetSnapshots as JSON lines on stdout.
//!
//! A renderer (or anything else) can consume the stream; the engine never
//! draws. Logging goes to stderr via env_logger (`RUST_LOG=info`).

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;

use armada_core::constants::TICK_RATE;
use armada_sim::engine::{SimConfig, SimulationEngine};
use armada_sim::scenario::Scenario;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Parser)]
#[command(name = "armada", about = "Steering-behavior fleet simulation")]
struct Args {
    /// RNG seed. Same seed = same simulation.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Emit a snapshot every N ticks.
    #[arg(long, default_value_t = 30)]
    emit_every: u64,

    /// Pace ticks against the wall clock instead of running flat out.
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        time_scale: 1.0,
    });
    engine.load_scenario(&Scenario::demo_fleet())?;
    log::info!("running {} ticks with seed {}", args.ticks, args.seed);

    let mut next_tick_time = Instant::now();
    for _ in 0..args.ticks {
        let snapshot = engine.tick();

        if args.emit_every > 0 && snapshot.tick % args.emit_every == 0 {
            println!("{}", serde_json::to_string(&snapshot)?);
        }

        if args.realtime {
            next_tick_time += effective_tick_duration(engine.time_scale());
            if let Some(remaining) = next_tick_time.checked_duration_since(Instant::now()) {
                std::thread::sleep(remaining);
            }
        }
    }

    Ok(())
}

/// Tick pacing for the current time scale: at 2x the loop sleeps half as
/// long per tick. Near-zero scales fall back to nominal pacing rather than
/// stalling the loop.
fn effective_tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}
