//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Default steering parameters ---

/// Default agent mass (kg, abstract units).
pub const DEFAULT_MASS: f32 = 1.0;

/// Default maximum speed (units/s).
pub const DEFAULT_MAX_SPEED: f32 = 5.0;

/// Default steering force budget per tick.
pub const DEFAULT_MAX_FORCE: f32 = 10.0;

/// Default exponential velocity damping per second.
pub const DEFAULT_DAMPING: f32 = 0.01;

/// Default banking factor (lateral acceleration tilt).
pub const DEFAULT_BANKING: f32 = 0.1;

// --- Behavior defaults ---

/// Default arrive slowing radius.
pub const DEFAULT_SLOWING_DISTANCE: f32 = 40.0;

/// Default waypoint-arrival threshold for path following.
pub const DEFAULT_WAYPOINT_DISTANCE: f32 = 5.0;

/// Default wander jitter (displacement rate of the internal target).
pub const DEFAULT_WANDER_JITTER: f32 = 100.0;

/// Default wander wideness (radius of the internal target disk).
pub const DEFAULT_WANDER_WIDENESS: f32 = 10.0;

/// Smoothing rate for the banked up-vector interpolation (per second).
pub const BANK_SMOOTHING_RATE: f32 = 3.0;
