#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Chase engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Maze Chase.";

/// Top-level state gating all per-tick simulation updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// The simulation advances normally on every tick.
    Playing,
    /// Ticks are delivered but no entity state advances.
    Paused,
    /// Transient state reported while a full reset executes; never observed
    /// as a steady state by queries.
    Restarting,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Replaces the player's pending travel heading (last writer wins).
    SetHeading {
        /// Direction the player should travel on subsequent ticks.
        direction: Direction,
    },
    /// Requests that the pause state flip after the configured toggle delay.
    TogglePause,
    /// Requests a synchronous full reset of all mutable simulation state.
    Restart,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that the player completed a step to a new position.
    PlayerMoved {
        /// Position the player occupied before the step.
        from: Position,
        /// Position the player occupies after the step.
        to: Position,
        /// Facing angle in radians the player is turning toward.
        facing: f32,
    },
    /// Confirms that a collectible was consumed by the player.
    CollectibleConsumed {
        /// Position of the consumed collectible.
        position: Position,
        /// Score total after the consumption was credited.
        score: u32,
    },
    /// Announces that no unconsumed collectibles remain.
    CollectiblesDepleted,
    /// Reports a fatal overlap between the player and an adversary.
    AdversaryContact {
        /// Identifier of the adversary the player touched.
        id: AdversaryId,
        /// Position of the adversary at the moment of contact.
        position: Position,
    },
    /// Announces that the simulation entered a new top-level state.
    GameStateChanged {
        /// State that became active after processing commands.
        state: GameState,
    },
    /// Confirms that a full restart completed.
    SimulationRestarted {
        /// Generation counter value after the restart.
        generation: u64,
    },
}

/// Discrete travel headings available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward increasing y.
    Up,
    /// Movement toward decreasing y.
    Down,
    /// Movement toward decreasing x.
    Left,
    /// Movement toward increasing x.
    Right,
}

impl Direction {
    /// Unit offset of the heading expressed as world-space axis deltas.
    #[must_use]
    pub const fn offset(self) -> (f32, f32) {
        match self {
            Self::Up => (0.0, 1.0),
            Self::Down => (0.0, -1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }

    /// Facing angle of the heading in radians, measured from positive x.
    #[must_use]
    pub fn facing_angle(self) -> f32 {
        let (dx, dy) = self.offset();
        dy.atan2(dx)
    }
}

/// Location of a point expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f32,
    y: f32,
}

impl Position {
    /// Creates a new world-space position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate in world units.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate in world units.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns the position displaced by the provided axis deltas.
    #[must_use]
    pub fn offset_by(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance between two positions.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation toward `other` by `t`, clamped to [0, 1].
    #[must_use]
    pub fn lerp(self, other: Position, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Classification of a single maze grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable cell; moves into it are rejected.
    Wall,
    /// Traversable cell.
    Pathway,
}

impl Cell {
    /// Reports whether the player may occupy the cell.
    #[must_use]
    pub const fn is_traversable(self) -> bool {
        matches!(self, Self::Pathway)
    }
}

/// Unique identifier assigned to an adversary.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AdversaryId(u32);

impl AdversaryId {
    /// Creates a new adversary identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{AdversaryId, Cell, CellCoord, Direction, GameState, Position};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn adversary_id_round_trips_through_bincode() {
        assert_round_trip(&AdversaryId::new(7));
    }

    #[test]
    fn position_round_trips_through_bincode() {
        assert_round_trip(&Position::new(195.0, 337.0));
    }

    #[test]
    fn cell_coord_round_trips_through_bincode() {
        assert_round_trip(&CellCoord::new(5, 17));
    }

    #[test]
    fn game_state_round_trips_through_bincode() {
        assert_round_trip(&GameState::Paused);
    }

    #[test]
    fn direction_offsets_are_unit_length() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.offset();
            assert!((dx.abs() + dy.abs() - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn facing_angle_matches_atan2_of_offset() {
        assert!((Direction::Right.facing_angle() - 0.0).abs() < 1e-6);
        assert!((Direction::Up.facing_angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((Direction::Left.facing_angle().abs() - std::f32::consts::PI).abs() < 1e-6);
        assert!((Direction::Down.facing_angle() + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn lerp_clamps_progress() {
        let start = Position::new(0.0, 0.0);
        let end = Position::new(10.0, 0.0);
        assert_eq!(start.lerp(end, 0.5), Position::new(5.0, 0.0));
        assert_eq!(start.lerp(end, 1.5), end);
        assert_eq!(start.lerp(end, -0.5), start);
    }

    #[test]
    fn wall_cells_are_not_traversable() {
        assert!(!Cell::Wall.is_traversable());
        assert!(Cell::Pathway.is_traversable());
    }
}
