#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state management for Maze Chase.
//!
//! The world owns the maze grid, the collectible field, the score, the
//! player, and every patrolling adversary. Adapters and systems mutate it
//! exclusively through [`apply`], which executes one [`Command`] and
//! broadcasts the resulting [`Event`] values; read access goes through the
//! [`query`] module.

use std::time::Duration;

use maze_chase_core::{
    AdversaryId, Command, Direction, Event, GameState, Position, WELCOME_BANNER,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod collectibles;
pub mod layout;
mod maze;
mod patrol;
mod schedule;

pub use maze::MazeGrid;
pub use patrol::PatrolRoute;

use collectibles::{CollectibleField, ScoreTracker};
use patrol::Adversary;
use schedule::{DeferredAction, DeferredActions};

/// Complete simulation configuration, fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Row-major maze layout; every row must have the same length.
    pub maze_rows: Vec<Vec<maze_chase_core::Cell>>,
    /// Width of a single maze cell rectangle in world units.
    pub cell_width: f32,
    /// Height of a single maze cell rectangle in world units.
    pub cell_height: f32,
    /// Ordered collectible spawn points; must not be empty.
    pub collectible_points: Vec<Position>,
    /// Position the player occupies at setup and after every restart.
    pub player_spawn: Position,
    /// One patrol route per adversary, validated at construction.
    pub patrol_routes: Vec<PatrolRoute>,
    /// Radius within which an unconsumed collectible is picked up.
    pub pickup_radius: f32,
    /// Radius within which adversary contact is fatal.
    pub collision_radius: f32,
    /// Fixed per-tick step magnitude for the player (not dt-scaled).
    pub step_length: f32,
    /// Duration of the bounded player turn toward a new heading.
    pub turn_duration: Duration,
    /// Delay between a pause toggle request and its taking effect.
    pub pause_toggle_delay: Duration,
}

/// Reasons a [`SimulationConfig`] is rejected at construction.
///
/// The simulation must not start in an inconsistent configuration; every
/// variant is fatal to setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The maze layout has no rows or no columns.
    #[error("maze layout must contain at least one row and one column")]
    EmptyMazeLayout,
    /// A maze row differs in length from the first row.
    #[error("maze layout row {row} has {found} cells, expected {expected}")]
    RaggedMazeLayout {
        /// Index of the offending row.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count found in the offending row.
        found: usize,
    },
    /// A maze cell extent is zero or negative.
    #[error("maze cell extents must be strictly positive")]
    NonPositiveCellExtent,
    /// The collectible spawn sequence is empty.
    #[error("collectible set must not be empty")]
    EmptyCollectibleSet,
    /// A patrol route has no waypoints.
    #[error("patrol route {route} must contain at least one waypoint")]
    EmptyPatrolRoute {
        /// Index of the offending route.
        route: usize,
    },
    /// A patrol route pairs N waypoints with a different duration count.
    #[error("patrol route {route} has {waypoints} waypoints but {durations} leg durations")]
    MismatchedPatrolRoute {
        /// Index of the offending route.
        route: usize,
        /// Waypoint count of the route.
        waypoints: usize,
        /// Leg duration count of the route.
        durations: usize,
    },
    /// A patrol leg duration is zero.
    #[error("patrol route {route} leg {leg} must have a positive duration")]
    NonPositiveLegDuration {
        /// Index of the offending route.
        route: usize,
        /// Index of the offending leg.
        leg: usize,
    },
    /// The per-tick step magnitude is zero or negative.
    #[error("player step length must be strictly positive")]
    NonPositiveStepLength,
}

#[derive(Clone, Debug)]
struct Player {
    spawn: Position,
    position: Position,
    facing: f32,
    turn_remaining: Duration,
    pending: Option<Direction>,
}

impl Player {
    fn at_spawn(spawn: Position) -> Self {
        Self {
            spawn,
            position: spawn,
            facing: 0.0,
            turn_remaining: Duration::ZERO,
            pending: None,
        }
    }

    const fn position(&self) -> Position {
        self.position
    }

    const fn pending(&self) -> Option<Direction> {
        self.pending
    }

    fn set_heading(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    fn step_to(&mut self, destination: Position, facing: f32, turn_duration: Duration) {
        self.position = destination;
        if (self.facing - facing).abs() > f32::EPSILON {
            self.facing = facing;
            self.turn_remaining = turn_duration;
        }
    }

    fn advance_turn(&mut self, dt: Duration) {
        self.turn_remaining = self.turn_remaining.saturating_sub(dt);
    }

    fn turning(&self) -> bool {
        !self.turn_remaining.is_zero()
    }

    fn reset(&mut self) {
        self.position = self.spawn;
        self.facing = 0.0;
        self.turn_remaining = Duration::ZERO;
        self.pending = None;
    }
}

/// Represents the authoritative Maze Chase world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    maze: MazeGrid,
    collectibles: CollectibleField,
    score: ScoreTracker,
    player: Player,
    adversaries: Vec<Adversary>,
    state: GameState,
    generation: u64,
    schedule: DeferredActions,
    pickup_radius: f32,
    collision_radius: f32,
    step_length: f32,
    turn_duration: Duration,
    pause_toggle_delay: Duration,
}

impl World {
    /// Creates a new world from a validated configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let maze = MazeGrid::from_rows(&config.maze_rows, config.cell_width, config.cell_height)?;

        if config.collectible_points.is_empty() {
            return Err(ConfigError::EmptyCollectibleSet);
        }

        if !(config.step_length > 0.0) {
            return Err(ConfigError::NonPositiveStepLength);
        }

        let mut adversaries = Vec::with_capacity(config.patrol_routes.len());
        for (index, route) in config.patrol_routes.iter().enumerate() {
            route.validate(index)?;
            let id = AdversaryId::new(index as u32);
            adversaries.push(Adversary::new(id, route.clone()));
        }

        Ok(Self {
            banner: WELCOME_BANNER,
            maze,
            collectibles: CollectibleField::new(&config.collectible_points),
            score: ScoreTracker::default(),
            player: Player::at_spawn(config.player_spawn),
            adversaries,
            state: GameState::Playing,
            generation: 0,
            schedule: DeferredActions::default(),
            pickup_radius: config.pickup_radius,
            collision_radius: config.collision_radius,
            step_length: config.step_length,
            turn_duration: config.turn_duration,
            pause_toggle_delay: config.pause_toggle_delay,
        })
    }

    fn drain_deferred(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        let mut due = Vec::new();
        self.schedule.advance(dt, &mut due);
        for action in due {
            match action {
                DeferredAction::SetPaused(paused) => {
                    let next = if paused {
                        GameState::Paused
                    } else {
                        GameState::Playing
                    };
                    if self.state != next {
                        self.state = next;
                        out_events.push(Event::GameStateChanged { state: next });
                    }
                }
            }
        }
    }

    fn resolve_player_step(
        &mut self,
        out_events: &mut Vec<Event>,
    ) -> (bool, Option<(AdversaryId, Position)>) {
        let Some(direction) = self.player.pending() else {
            return (false, None);
        };

        let (dx, dy) = direction.offset();
        let from = self.player.position();
        let candidate = from.offset_by(dx * self.step_length, dy * self.step_length);

        // Wall check short-circuits: a rejected move has no side effects and
        // the pending heading is retained for the next tick.
        if !self.maze.classify(candidate).is_traversable() {
            return (false, None);
        }

        let facing = direction.facing_angle();
        self.player.step_to(candidate, facing, self.turn_duration);
        out_events.push(Event::PlayerMoved {
            from,
            to: candidate,
            facing,
        });

        let mut depleted = false;
        if self.collectibles.remaining() > 0 {
            if let Some(position) = self.collectibles.consume_nearest(candidate, self.pickup_radius)
            {
                let score = self.score.increment();
                out_events.push(Event::CollectibleConsumed { position, score });
            }
            if self.collectibles.remaining() == 0 {
                depleted = true;
            }
        }

        let mut contact = None;
        for adversary in &self.adversaries {
            let position = adversary.position();
            if position.distance_to(candidate) <= self.collision_radius {
                contact = Some((adversary.id(), position));
                break;
            }
        }

        (depleted, contact)
    }

    fn restart(&mut self) {
        self.collectibles.reset();
        self.score.reset();
        self.player.reset();
        for adversary in &mut self.adversaries {
            adversary.reset();
        }
        self.schedule.clear();
        self.state = GameState::Playing;
        self.generation = self.generation.saturating_add(1);
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => {
            out_events.push(Event::TimeAdvanced { dt });
            world.drain_deferred(dt, out_events);

            if world.state != GameState::Playing {
                return;
            }

            world.player.advance_turn(dt);
            let (depleted, contact) = world.resolve_player_step(out_events);

            for adversary in &mut world.adversaries {
                adversary.advance(dt);
            }

            if let Some((id, position)) = contact {
                out_events.push(Event::AdversaryContact { id, position });
            }
            if depleted {
                out_events.push(Event::CollectiblesDepleted);
            }
        }
        Command::SetHeading { direction } => {
            world.player.set_heading(direction);
        }
        Command::TogglePause => {
            let paused_now = world
                .schedule
                .pending_pause()
                .unwrap_or(world.state == GameState::Paused);
            world
                .schedule
                .schedule_pause(world.pause_toggle_delay, !paused_now);
        }
        Command::Restart => {
            out_events.push(Event::GameStateChanged {
                state: GameState::Restarting,
            });
            world.restart();
            out_events.push(Event::SimulationRestarted {
                generation: world.generation,
            });
            out_events.push(Event::GameStateChanged {
                state: GameState::Playing,
            });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::{MazeGrid, World};
    use maze_chase_core::{AdversaryId, Direction, GameState, Position};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Current top-level state; never reports the transient restart state.
    #[must_use]
    pub fn game_state(world: &World) -> GameState {
        world.state
    }

    /// Monotonically incrementing counter bumped by every full restart.
    #[must_use]
    pub fn generation(world: &World) -> u64 {
        world.generation
    }

    /// Current score total.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score.value()
    }

    /// Provides read-only access to the world's maze grid.
    #[must_use]
    pub fn maze_grid(world: &World) -> &MazeGrid {
        &world.maze
    }

    /// Captures a read-only snapshot of the player.
    #[must_use]
    pub fn player_view(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            position: world.player.position(),
            facing: world.player.facing,
            turn_in_progress: world.player.turning(),
            pending_heading: world.player.pending(),
        }
    }

    /// Captures a read-only view of every adversary, ordered by id.
    #[must_use]
    pub fn adversary_view(world: &World) -> AdversaryView {
        let mut snapshots: Vec<AdversarySnapshot> = world
            .adversaries
            .iter()
            .map(|adversary| AdversarySnapshot {
                id: adversary.id(),
                position: adversary.position(),
                leg_index: adversary.leg_index(),
                leg_elapsed: adversary.leg_elapsed(),
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        AdversaryView { snapshots }
    }

    /// Captures a read-only view of the collectible field.
    #[must_use]
    pub fn collectible_view(world: &World) -> CollectibleView {
        CollectibleView {
            snapshots: world
                .collectibles
                .iter()
                .map(|collectible| CollectibleSnapshot {
                    position: collectible.position(),
                    consumed: collectible.consumed(),
                })
                .collect(),
        }
    }

    /// Immutable representation of the player's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct PlayerSnapshot {
        /// Position the player currently occupies.
        pub position: Position,
        /// Facing angle in radians the player is turned (or turning) toward.
        pub facing: f32,
        /// Whether the bounded turn toward the facing angle is still running.
        pub turn_in_progress: bool,
        /// Most recently requested heading, retained until replaced.
        pub pending_heading: Option<Direction>,
    }

    /// Immutable representation of a single adversary's state.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct AdversarySnapshot {
        /// Unique identifier assigned to the adversary.
        pub id: AdversaryId,
        /// Interpolated world position along the current patrol leg.
        pub position: Position,
        /// Index of the patrol leg currently being traveled.
        pub leg_index: usize,
        /// Time accumulated toward completing the current leg.
        pub leg_elapsed: Duration,
    }

    /// Read-only snapshot describing all adversaries.
    #[derive(Clone, Debug)]
    pub struct AdversaryView {
        snapshots: Vec<AdversarySnapshot>,
    }

    impl AdversaryView {
        /// Iterator over the captured snapshots in deterministic id order.
        pub fn iter(&self) -> impl Iterator<Item = &AdversarySnapshot> {
            self.snapshots.iter()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<AdversarySnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single collectible's state.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct CollectibleSnapshot {
        /// Position the collectible occupies.
        pub position: Position,
        /// Whether the collectible has been consumed since the last restart.
        pub consumed: bool,
    }

    /// Read-only snapshot describing the collectible field.
    #[derive(Clone, Debug)]
    pub struct CollectibleView {
        snapshots: Vec<CollectibleSnapshot>,
    }

    impl CollectibleView {
        /// Iterator over the captured snapshots in spawn order.
        pub fn iter(&self) -> impl Iterator<Item = &CollectibleSnapshot> {
            self.snapshots.iter()
        }

        /// Count of collectibles that remain unconsumed.
        #[must_use]
        pub fn remaining(&self) -> usize {
            self.snapshots
                .iter()
                .filter(|snapshot| !snapshot.consumed)
                .count()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<CollectibleSnapshot> {
            self.snapshots
        }
    }
}
