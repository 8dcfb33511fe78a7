//! Waypoint path geometry and per-follower progress.
//!
//! Geometry is immutable once built and shared by id among any number of
//! followers. Progress lives in a `PathCursor` owned by each follower, so
//! two ships at different points along the same route never fight over a
//! shared cursor.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An ordered waypoint sequence, optionally looping back to the start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathGeometry {
    waypoints: Vec<Vec3>,
    looped: bool,
}

impl PathGeometry {
    /// Build a path. An empty waypoint list is rejected outright.
    pub fn new(waypoints: Vec<Vec3>, looped: bool) -> Result<Self, ConfigError> {
        if waypoints.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Ok(Self { waypoints, looped })
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn looped(&self) -> bool {
        self.looped
    }
}

/// A follower's position along a `PathGeometry`.
///
/// Invariant: `next` is always a valid index into the geometry it is
/// advanced against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCursor {
    next: usize,
}

impl PathCursor {
    /// The waypoint currently aimed at. No side effect.
    pub fn waypoint(&self, path: &PathGeometry) -> Vec3 {
        path.waypoints[self.next]
    }

    /// Step to the following waypoint. Looped paths wrap; non-looped paths
    /// hold at the final waypoint forever (advancing past the end is a
    /// no-op).
    pub fn advance(&mut self, path: &PathGeometry) {
        if path.looped {
            self.next = (self.next + 1) % path.waypoints.len();
        } else if self.next != path.waypoints.len() - 1 {
            self.next += 1;
        }
    }

    /// True when the cursor sits on the final waypoint. Callers use this
    /// to swap from seeking to arriving on the last leg of a one-way path.
    pub fn is_last(&self, path: &PathGeometry) -> bool {
        self.next == path.waypoints.len() - 1
    }

    pub fn index(&self) -> usize {
        self.next
    }
}
