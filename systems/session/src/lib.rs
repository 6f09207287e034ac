#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic session system that turns terminal outcomes into restarts.
//!
//! The world reports fatal adversary contact and collectible depletion as
//! events but never restarts itself; this system owns that policy. Both
//! outcomes route to the same full restart, while the distinct events let
//! an embedder present them differently.

use maze_chase_core::{Command, Event};

/// Pure system that reacts to world events and emits restart commands.
#[derive(Debug, Default)]
pub struct Session {
    contacts_observed: u64,
    depletions_observed: u64,
    restarts_observed: u64,
}

impl Session {
    /// Consumes world events and responds with at most one restart command
    /// per batch.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        let mut restart_needed = false;

        for event in events {
            match event {
                Event::AdversaryContact { .. } => {
                    self.contacts_observed = self.contacts_observed.saturating_add(1);
                    restart_needed = true;
                }
                Event::CollectiblesDepleted => {
                    self.depletions_observed = self.depletions_observed.saturating_add(1);
                    restart_needed = true;
                }
                Event::SimulationRestarted { .. } => {
                    self.restarts_observed = self.restarts_observed.saturating_add(1);
                }
                _ => {}
            }
        }

        if restart_needed {
            out.push(Command::Restart);
        }
    }

    /// Number of fatal adversary contacts observed since construction.
    #[must_use]
    pub const fn contacts_observed(&self) -> u64 {
        self.contacts_observed
    }

    /// Number of collectible depletions observed since construction.
    #[must_use]
    pub const fn depletions_observed(&self) -> u64 {
        self.depletions_observed
    }

    /// Number of completed restarts observed since construction.
    #[must_use]
    pub const fn restarts_observed(&self) -> u64 {
        self.restarts_observed
    }
}
