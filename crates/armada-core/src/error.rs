//! Scenario configuration errors.
//!
//! All of these surface at scenario load, never per tick: a behavior
//! referencing a missing ship or an empty path is a setup mistake, not
//! something to paper over with NaN motion.

use thiserror::Error;

use crate::types::{PathId, ShipId};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("path has no waypoints")]
    EmptyPath,

    #[error("path {0:?} is not registered")]
    UnknownPath(PathId),

    #[error("ship {0:?} is not part of the scenario")]
    UnknownShip(ShipId),

    #[error("ship id {0:?} is used more than once")]
    DuplicateShipId(ShipId),

    #[error("slowing distance must be positive, got {0}")]
    NonPositiveSlowingDistance(f32),

    #[error("waypoint distance must be positive, got {0}")]
    NonPositiveWaypointDistance(f32),

    #[error("ship mass must be positive, got {0}")]
    NonPositiveMass(f32),
}
