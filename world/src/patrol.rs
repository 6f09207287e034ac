//! Cyclic waypoint patrol state machines for adversaries.

use std::time::Duration;

use maze_chase_core::{AdversaryId, Position};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Authored patrol route: waypoints plus one duration per leg.
///
/// Leg `i` travels from `waypoints[i]` to `waypoints[(i + 1) % N]` over
/// `leg_durations[i]`. Durations are fixed per leg regardless of geometric
/// leg length, so adversaries move at author-defined pacing rather than
/// constant linear speed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatrolRoute {
    /// Ordered cyclic waypoint sequence, length N >= 1.
    pub waypoints: Vec<Position>,
    /// Positive travel duration for each leg, length N.
    pub leg_durations: Vec<Duration>,
}

impl PatrolRoute {
    /// Creates a route from matching waypoint and duration sequences.
    #[must_use]
    pub fn new(waypoints: Vec<Position>, leg_durations: Vec<Duration>) -> Self {
        Self {
            waypoints,
            leg_durations,
        }
    }

    pub(crate) fn validate(&self, route: usize) -> Result<(), ConfigError> {
        if self.waypoints.is_empty() {
            return Err(ConfigError::EmptyPatrolRoute { route });
        }

        if self.waypoints.len() != self.leg_durations.len() {
            return Err(ConfigError::MismatchedPatrolRoute {
                route,
                waypoints: self.waypoints.len(),
                durations: self.leg_durations.len(),
            });
        }

        for (leg, duration) in self.leg_durations.iter().enumerate() {
            if duration.is_zero() {
                return Err(ConfigError::NonPositiveLegDuration { route, leg });
            }
        }

        Ok(())
    }
}

/// Patrolling adversary owned exclusively by the world.
///
/// The adversary is always "traveling leg i"; each tick accumulates
/// elapsed time, and on expiry the overflow remainder carries into the
/// next leg so timing stays accurate across ticks.
#[derive(Clone, Debug)]
pub(crate) struct Adversary {
    id: AdversaryId,
    route: PatrolRoute,
    leg_index: usize,
    leg_elapsed: Duration,
}

impl Adversary {
    pub(crate) fn new(id: AdversaryId, route: PatrolRoute) -> Self {
        Self {
            id,
            route,
            leg_index: 0,
            leg_elapsed: Duration::ZERO,
        }
    }

    pub(crate) const fn id(&self) -> AdversaryId {
        self.id
    }

    pub(crate) const fn leg_index(&self) -> usize {
        self.leg_index
    }

    pub(crate) const fn leg_elapsed(&self) -> Duration {
        self.leg_elapsed
    }

    /// World position interpolated along the current leg, clamped to its
    /// endpoints.
    pub(crate) fn position(&self) -> Position {
        let count = self.route.waypoints.len();
        let origin = self.route.waypoints[self.leg_index];
        if count == 1 {
            return origin;
        }

        let target = self.route.waypoints[(self.leg_index + 1) % count];
        let duration = self.route.leg_durations[self.leg_index];
        let progress = self.leg_elapsed.as_secs_f32() / duration.as_secs_f32();
        origin.lerp(target, progress)
    }

    /// Advances the patrol clock, wrapping legs and carrying overflow.
    pub(crate) fn advance(&mut self, dt: Duration) {
        self.leg_elapsed = self.leg_elapsed.saturating_add(dt);
        loop {
            let budget = self.route.leg_durations[self.leg_index];
            if self.leg_elapsed < budget {
                break;
            }
            self.leg_elapsed -= budget;
            self.leg_index = (self.leg_index + 1) % self.route.waypoints.len();
        }
    }

    /// Returns the adversary to leg 0 at its first waypoint.
    pub(crate) fn reset(&mut self) {
        self.leg_index = 0;
        self.leg_elapsed = Duration::ZERO;
    }
}
