//! Simulation engine — the core of the fleet simulation.
//!
//! `SimulationEngine` owns the hecs ECS world, processes driver commands,
//! runs the disturbance/steering/movement systems at a fixed tick rate,
//! and produces `FleetSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::{HashMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use armada_core::commands::DriverCommand;
use armada_core::constants::DT;
use armada_core::error::ConfigError;
use armada_core::path::PathGeometry;
use armada_core::state::{FleetSnapshot, SimPhase};
use armada_core::types::{PathId, SimTime};

use crate::scenario::Scenario;
use crate::systems;
use crate::systems::disturbance::DisturbanceSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<DriverCommand>,
    paths: HashMap<PathId, PathGeometry>,
    disturbances: DisturbanceSchedule,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::Idle,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            paths: HashMap::new(),
            disturbances: DisturbanceSchedule::default(),
        }
    }

    /// Validate and load a scenario, replacing any previous fleet, and
    /// start ticking.
    pub fn load_scenario(&mut self, scenario: &Scenario) -> Result<(), ConfigError> {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = SimPhase::Idle;
        self.disturbances = world_setup::load_scenario(&mut self.world, &mut self.paths, scenario)?;
        self.phase = SimPhase::Active;
        Ok(())
    }

    /// Queue a driver command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: DriverCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = DriverCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FleetSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase)
    }

    /// Get the current engine phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single driver command.
    fn handle_command(&mut self, command: DriverCommand) {
        match command {
            DriverCommand::Pause => {
                if self.phase == SimPhase::Active {
                    self.phase = SimPhase::Paused;
                    log::debug!("paused at tick {}", self.time.tick);
                }
            }
            DriverCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Active;
                }
            }
            DriverCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            DriverCommand::TriggerDisturbance { preset } => {
                systems::disturbance::apply_preset(&mut self.world, &preset);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Scheduled fleet-wide parameter presets
        systems::disturbance::run(&mut self.world, &mut self.disturbances, self.time.tick);
        // 2. Steering force accumulation
        systems::steering::run(&mut self.world, &self.paths, &mut self.rng, DT);
        // 3. Movement integration
        systems::movement::run(&mut self.world, DT);
    }
}
