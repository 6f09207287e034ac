#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Maze Chase experience.

use maze_chase_world::{query, MazeGrid, World};

/// Produces data required to greet the player.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Exposes the maze grid configuration required for rendering.
    #[must_use]
    pub fn maze_grid<'world>(&self, world: &'world World) -> &'world MazeGrid {
        query::maze_grid(world)
    }

    /// Reports the generation counter presentation layers watch to detect
    /// restarts.
    #[must_use]
    pub fn generation(&self, world: &World) -> u64 {
        query::generation(world)
    }
}
