//! Reference configuration tables for the stock Maze Chase level.
//!
//! Row 0 of the maze table sits at the bottom of the world (y grows upward),
//! matching the coordinate space the collectible and patrol tables use.

use std::time::Duration;

use maze_chase_core::Position;

use crate::{maze::parse_row, patrol::PatrolRoute, SimulationConfig};

/// Display width the reference coordinate tables were authored against.
pub const REFERENCE_DISPLAY_WIDTH: f32 = 385.0;

const MAZE_COLUMNS: f32 = 11.0;
const MAZE_CELL_HEIGHT_DIVISOR: f32 = 12.0;

const PLAYER_SPAWN: Position = Position::new(195.0, 337.0);
const PICKUP_RADIUS: f32 = 20.0;
const COLLISION_RADIUS: f32 = 20.0;
const STEP_LENGTH: f32 = 1.0;
const TURN_DURATION: Duration = Duration::from_millis(200);
const PAUSE_TOGGLE_DELAY: Duration = Duration::from_millis(100);

/// 20 rows by 11 columns; `#` is a wall cell, `.` a pathway cell.
const MAZE_ROWS: [&str; 20] = [
    "###########",
    "#...#.....#",
    "#.#...#.#.#",
    "#.#.###.#.#",
    "#.#.......#",
    "#.###.#.#.#",
    "#.#...#.#.#",
    "#.#.#.#.#.#",
    "#.#.#.#.#.#",
    "#...#.#...#",
    "#.###...###",
    "#...#.#...#",
    "#.#.#.#.#.#",
    "#.#...#.#.#",
    "#.###.#.#.#",
    "#.#.......#",
    "#.#.###.#.#",
    "#.#...#.#.#",
    "#...#.....#",
    "###########",
];

const COLLECTIBLE_POINTS: [Position; 106] = [
    Position::new(125.0, 143.0), Position::new(160.0, 143.0), Position::new(193.0, 143.0), Position::new(230.0, 143.0),
    Position::new(263.0, 143.0), Position::new(300.0, 143.0), Position::new(332.0, 143.0), Position::new(125.0, 113.0),
    Position::new(125.0, 81.0), Position::new(125.0, 51.0), Position::new(90.0, 51.0), Position::new(55.0, 51.0),
    Position::new(55.0, 81.0), Position::new(55.0, 113.0), Position::new(55.0, 145.0), Position::new(55.0, 177.0),
    Position::new(55.0, 210.0), Position::new(55.0, 241.0), Position::new(55.0, 273.0), Position::new(55.0, 305.0),
    Position::new(55.0, 337.0), Position::new(55.0, 401.0), Position::new(55.0, 433.0), Position::new(55.0, 465.0),
    Position::new(55.0, 497.0), Position::new(55.0, 529.0), Position::new(55.0, 561.0), Position::new(55.0, 590.0),
    Position::new(87.0, 590.0), Position::new(119.0, 590.0), Position::new(119.0, 560.0), Position::new(119.0, 530.0),
    Position::new(119.0, 500.0), Position::new(153.0, 500.0), Position::new(193.0, 500.0), Position::new(226.0, 500.0),
    Position::new(263.0, 500.0), Position::new(300.0, 500.0), Position::new(332.0, 500.0), Position::new(332.0, 370.0),
    Position::new(263.0, 370.0), Position::new(263.0, 338.0), Position::new(263.0, 306.0), Position::new(263.0, 274.0),
    Position::new(263.0, 242.0), Position::new(263.0, 210.0), Position::new(263.0, 175.0), Position::new(263.0, 113.0),
    Position::new(263.0, 82.0), Position::new(263.0, 51.0), Position::new(298.0, 51.0), Position::new(332.0, 51.0),
    Position::new(332.0, 80.0), Position::new(332.0, 113.0), Position::new(332.0, 175.0), Position::new(332.0, 210.0),
    Position::new(332.0, 242.0), Position::new(332.0, 274.0), Position::new(332.0, 305.0), Position::new(300.0, 305.0),
    Position::new(300.0, 370.0), Position::new(332.0, 370.0), Position::new(332.0, 403.0), Position::new(332.0, 435.0),
    Position::new(332.0, 468.0), Position::new(263.0, 468.0), Position::new(263.0, 468.0), Position::new(263.0, 435.0),
    Position::new(263.0, 402.0), Position::new(226.0, 337.0), Position::new(193.0, 175.0), Position::new(193.0, 210.0),
    Position::new(193.0, 242.0), Position::new(193.0, 274.0), Position::new(193.0, 305.0), Position::new(193.0, 370.0),
    Position::new(193.0, 403.0), Position::new(193.0, 435.0), Position::new(193.0, 468.0), Position::new(332.0, 530.0),
    Position::new(332.0, 560.0), Position::new(332.0, 590.0), Position::new(297.0, 590.0), Position::new(263.0, 590.0),
    Position::new(263.0, 560.0), Position::new(263.0, 530.0), Position::new(227.0, 590.0), Position::new(193.0, 590.0),
    Position::new(193.0, 80.0), Position::new(193.0, 51.0), Position::new(226.0, 51.0), Position::new(153.0, 80.0),
    Position::new(159.0, 210.0), Position::new(124.0, 210.0), Position::new(124.0, 242.0), Position::new(124.0, 274.0),
    Position::new(124.0, 305.0), Position::new(90.0, 305.0), Position::new(158.0, 560.0), Position::new(193.0, 560.0),
    Position::new(158.0, 435.0), Position::new(124.0, 435.0), Position::new(124.0, 403.0), Position::new(124.0, 370.0),
    Position::new(90.0, 370.0), Position::new(55.0, 370.0),
];

const RED_WAYPOINTS: [Position; 14] = [
    Position::new(332.0, 370.0),
    Position::new(263.0, 370.0),
    Position::new(263.0, 500.0),
    Position::new(193.0, 500.0),
    Position::new(193.0, 435.0),
    Position::new(124.0, 435.0),
    Position::new(124.0, 370.0),
    Position::new(55.0, 370.0),
    Position::new(55.0, 590.0),
    Position::new(119.0, 590.0),
    Position::new(119.0, 560.0),
    Position::new(193.0, 560.0),
    Position::new(193.0, 590.0),
    Position::new(332.0, 590.0),
];

const RED_LEG_MILLIS: [u64; 14] = [
    1_000, 2_000, 1_000, 1_000, 1_000, 1_000, 1_000, 3_500, 1_000, 500, 1_000, 500, 2_000, 3_500,
];

const GREEN_WAYPOINTS: [Position; 14] = [
    Position::new(125.0, 143.0),
    Position::new(263.0, 143.0),
    Position::new(263.0, 45.0),
    Position::new(332.0, 45.0),
    Position::new(332.0, 305.0),
    Position::new(263.0, 305.0),
    Position::new(263.0, 335.0),
    Position::new(193.0, 335.0),
    Position::new(193.0, 210.0),
    Position::new(124.0, 210.0),
    Position::new(124.0, 305.0),
    Position::new(55.0, 305.0),
    Position::new(55.0, 48.0),
    Position::new(125.0, 48.0),
];

const GREEN_LEG_MILLIS: [u64; 14] = [
    2_000, 1_500, 1_000, 4_000, 1_000, 500, 1_000, 2_000, 1_000, 2_000, 1_000, 4_000, 1_000, 1_500,
];

fn route(waypoints: &[Position], leg_millis: &[u64]) -> PatrolRoute {
    PatrolRoute::new(
        waypoints.to_vec(),
        leg_millis.iter().map(|&ms| Duration::from_millis(ms)).collect(),
    )
}

/// Builds the reference configuration scaled to the provided display width.
///
/// Only the maze cell extents derive from the scale input; the collectible
/// and patrol coordinate tables are authored in absolute reference units.
#[must_use]
pub fn reference_config(display_width: f32) -> SimulationConfig {
    SimulationConfig {
        maze_rows: MAZE_ROWS.iter().map(|row| parse_row(row)).collect(),
        cell_width: display_width / MAZE_COLUMNS,
        cell_height: display_width / MAZE_CELL_HEIGHT_DIVISOR,
        collectible_points: COLLECTIBLE_POINTS.to_vec(),
        player_spawn: PLAYER_SPAWN,
        patrol_routes: vec![
            route(&RED_WAYPOINTS, &RED_LEG_MILLIS),
            route(&GREEN_WAYPOINTS, &GREEN_LEG_MILLIS),
        ],
        pickup_radius: PICKUP_RADIUS,
        collision_radius: COLLISION_RADIUS,
        step_length: STEP_LENGTH,
        turn_duration: TURN_DURATION,
        pause_toggle_delay: PAUSE_TOGGLE_DELAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_chase_core::Cell;

    #[test]
    fn reference_maze_is_rectangular_with_wall_border() {
        let config = reference_config(REFERENCE_DISPLAY_WIDTH);
        assert_eq!(config.maze_rows.len(), 20);
        for row in &config.maze_rows {
            assert_eq!(row.len(), 11);
            assert_eq!(row[0], Cell::Wall);
            assert_eq!(row[10], Cell::Wall);
        }
        assert!(config.maze_rows[0].iter().all(|&cell| cell == Cell::Wall));
        assert!(config.maze_rows[19].iter().all(|&cell| cell == Cell::Wall));
    }

    #[test]
    fn reference_routes_pair_waypoints_with_durations() {
        let config = reference_config(REFERENCE_DISPLAY_WIDTH);
        assert_eq!(config.patrol_routes.len(), 2);
        for (index, route) in config.patrol_routes.iter().enumerate() {
            assert!(route.validate(index).is_ok());
            assert_eq!(route.waypoints.len(), 14);
        }
    }

    #[test]
    fn player_spawn_sits_on_a_pathway_cell() {
        let config = reference_config(REFERENCE_DISPLAY_WIDTH);
        let column = (config.player_spawn.x() / config.cell_width) as usize;
        let row = (config.player_spawn.y() / config.cell_height) as usize;
        assert_eq!(config.maze_rows[row][column], Cell::Pathway);
    }

    #[test]
    fn cell_extents_derive_from_display_width() {
        let config = reference_config(385.0);
        assert!((config.cell_width - 35.0).abs() < f32::EPSILON);
        assert!((config.cell_height - 385.0 / 12.0).abs() < f32::EPSILON);
    }
}
