#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the Maze Chase simulation headlessly.
//!
//! Runs a fixed-step loop for the requested number of ticks, lets the
//! session system answer terminal outcomes with restarts, and prints an
//! end-of-run report composed from world queries.

use std::time::Duration;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use maze_chase_core::{Command, Direction, Event};
use maze_chase_rendering::{
    world_point, AdversarySprite, CollectibleSprite, FrameSnapshot, PlayerSprite, Presenter,
};
use maze_chase_system_bootstrap::Bootstrap;
use maze_chase_system_session::Session;
use maze_chase_world::{self as world, layout, query, World};

/// Headless driver for the Maze Chase simulation.
#[derive(Debug, Parser)]
#[command(name = "maze-chase")]
struct Options {
    /// Number of fixed-step ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Tick rate in Hertz used to derive the fixed timestep.
    #[arg(long, default_value_t = 60)]
    tick_rate: u32,

    /// Heading requested for the player before the first tick.
    #[arg(long, value_enum)]
    heading: Option<Heading>,

    /// Display width in points used to scale the reference maze.
    #[arg(long, default_value_t = layout::REFERENCE_DISPLAY_WIDTH)]
    display_width: f32,
}

/// Command-line spelling of the four cardinal headings.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Heading {
    /// Move toward increasing y.
    Up,
    /// Move toward decreasing y.
    Down,
    /// Move toward decreasing x.
    Left,
    /// Move toward increasing x.
    Right,
}

impl From<Heading> for Direction {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::Up => Direction::Up,
            Heading::Down => Direction::Down,
            Heading::Left => Direction::Left,
            Heading::Right => Direction::Right,
        }
    }
}

/// Entry point for the Maze Chase command-line interface.
fn main() -> Result<()> {
    run(Options::parse())
}

fn run(options: Options) -> Result<()> {
    ensure!(options.tick_rate > 0, "tick rate must be positive");
    ensure!(
        options.display_width > 0.0,
        "display width must be positive"
    );

    let mut world = World::new(layout::reference_config(options.display_width))?;
    let bootstrap = Bootstrap::default();
    println!("{}", bootstrap.welcome_banner(&world));

    let mut session = Session::default();
    let dt = Duration::from_secs_f64(1.0 / f64::from(options.tick_rate));

    let mut events: Vec<Event> = Vec::new();
    if let Some(heading) = options.heading {
        world::apply(
            &mut world,
            Command::SetHeading {
                direction: heading.into(),
            },
            &mut events,
        );
    }

    for _ in 0..options.ticks {
        events.clear();
        world::apply(&mut world, Command::Tick { dt }, &mut events);

        // Sessions answer terminal outcomes with restart commands; pump
        // until the frame produces no further reactions.
        loop {
            let mut commands = Vec::new();
            session.handle(&events, &mut commands);
            if commands.is_empty() {
                break;
            }

            events.clear();
            for command in commands {
                world::apply(&mut world, command, &mut events);
            }
        }
    }

    let snapshot = compose_snapshot(&world);
    let mut presenter = ReportPresenter { session: &session };
    presenter.present(&snapshot)
}

/// Composes a presentable frame from the world's query surface.
fn compose_snapshot(world: &World) -> FrameSnapshot {
    let player = query::player_view(world);

    FrameSnapshot {
        game_state: query::game_state(world),
        generation: query::generation(world),
        score: query::score(world),
        player: PlayerSprite {
            position: world_point(player.position),
            facing: player.facing,
            turn_in_progress: player.turn_in_progress,
        },
        adversaries: query::adversary_view(world)
            .iter()
            .map(|snapshot| AdversarySprite {
                id: snapshot.id,
                position: world_point(snapshot.position),
            })
            .collect(),
        collectibles: query::collectible_view(world)
            .iter()
            .map(|snapshot| CollectibleSprite {
                position: world_point(snapshot.position),
                consumed: snapshot.consumed,
            })
            .collect(),
    }
}

/// Presenter that prints an end-of-run report to stdout.
struct ReportPresenter<'run> {
    session: &'run Session,
}

impl Presenter for ReportPresenter<'_> {
    fn present(&mut self, snapshot: &FrameSnapshot) -> Result<()> {
        println!("state: {:?}", snapshot.game_state);
        println!("generation: {}", snapshot.generation);
        println!("score: {}", snapshot.score);
        println!(
            "collectibles remaining: {}",
            snapshot.remaining_collectibles()
        );
        println!(
            "player: ({:.1}, {:.1})",
            snapshot.player.position.x, snapshot.player.position.y
        );
        for adversary in &snapshot.adversaries {
            println!(
                "adversary {}: ({:.1}, {:.1})",
                adversary.id.get(),
                adversary.position.x,
                adversary.position.y
            );
        }
        println!(
            "session: {} contacts, {} depletions, {} restarts",
            self.session.contacts_observed(),
            self.session.depletions_observed(),
            self.session.restarts_observed()
        );
        Ok(())
    }
}
