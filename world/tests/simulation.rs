use std::time::Duration;

use maze_chase_core::{Cell, Command, Direction, Event, Position};
use maze_chase_world::{self as world, layout, query, PatrolRoute, SimulationConfig, World};

const TICK: Duration = Duration::from_millis(16);

fn reference_world() -> World {
    World::new(layout::reference_config(layout::REFERENCE_DISPLAY_WIDTH))
        .expect("reference configuration is valid")
}

fn tick(world: &mut World, dt: Duration) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, Command::Tick { dt }, &mut events);
    events
}

fn set_heading(world: &mut World, direction: Direction) {
    let mut events = Vec::new();
    world::apply(world, Command::SetHeading { direction }, &mut events);
    assert!(events.is_empty(), "heading changes emit no events");
}

fn maze_row(row: &str) -> Vec<Cell> {
    row.bytes()
        .map(|byte| if byte == b'#' { Cell::Wall } else { Cell::Pathway })
        .collect()
}

/// Minimal single-pathway maze with the player one step from a collectible.
fn tiny_pickup_config() -> SimulationConfig {
    SimulationConfig {
        maze_rows: vec![maze_row("###"), maze_row("#.#"), maze_row("###")],
        cell_width: 10.0,
        cell_height: 10.0,
        collectible_points: vec![Position::new(16.0, 15.0)],
        player_spawn: Position::new(15.0, 15.0),
        patrol_routes: Vec::new(),
        pickup_radius: 20.0,
        collision_radius: 5.0,
        step_length: 1.0,
        turn_duration: Duration::from_millis(200),
        pause_toggle_delay: Duration::from_millis(100),
    }
}

#[test]
fn one_tick_toward_an_adjacent_collectible_scores_a_point() {
    let mut world = World::new(tiny_pickup_config()).expect("valid config");
    set_heading(&mut world, Direction::Right);

    let events = tick(&mut world, TICK);

    assert_eq!(query::score(&world), 1);
    let collectibles = query::collectible_view(&world).into_vec();
    assert!(collectibles[0].consumed);
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::CollectibleConsumed { score: 1, .. })));
}

#[test]
fn two_waypoint_patrol_follows_its_authored_timeline() {
    let mut config = tiny_pickup_config();
    config.patrol_routes = vec![PatrolRoute::new(
        vec![Position::new(0.0, 0.0), Position::new(10.0, 0.0)],
        vec![Duration::from_secs(1), Duration::from_secs(1)],
    )];
    let mut world = World::new(config).expect("valid config");

    let _ = tick(&mut world, Duration::from_millis(500));
    let halfway = query::adversary_view(&world).into_vec();
    assert_eq!(halfway[0].position, Position::new(5.0, 0.0));
    assert_eq!(halfway[0].leg_index, 0);

    let _ = tick(&mut world, Duration::from_millis(500));
    let at_second = query::adversary_view(&world).into_vec();
    assert_eq!(at_second[0].position, Position::new(10.0, 0.0));
    assert_eq!(at_second[0].leg_index, 1);

    let _ = tick(&mut world, Duration::from_secs(1));
    let wrapped = query::adversary_view(&world).into_vec();
    assert_eq!(wrapped[0].position, Position::new(0.0, 0.0));
    assert_eq!(wrapped[0].leg_index, 0);
}

#[test]
fn adversary_at_the_player_position_is_fatal_regardless_of_score() {
    let mut config = tiny_pickup_config();
    config.patrol_routes = vec![PatrolRoute::new(
        vec![Position::new(16.0, 15.0)],
        vec![Duration::from_secs(1)],
    )];
    let mut world = World::new(config).expect("valid config");
    set_heading(&mut world, Direction::Right);

    let events = tick(&mut world, TICK);

    // The same accepted move both consumes the collectible and reports the
    // fatal contact; the checks are independent.
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::AdversaryContact { .. })));
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::CollectibleConsumed { .. })));
}

#[test]
fn wall_invariant_holds_along_a_reference_corridor() {
    let mut world = reference_world();
    assert!(query::maze_grid(&world)
        .classify(Position::new(195.0, 337.0))
        .is_traversable());

    set_heading(&mut world, Direction::Left);
    let mut previous = query::player_view(&world).position;
    let mut rejected_seen = false;
    for _ in 0..60 {
        let events = tick(&mut world, TICK);
        let current = query::player_view(&world).position;
        assert!(
            query::maze_grid(&world).classify(current).is_traversable(),
            "player ended on a wall cell at {current:?}"
        );
        if current == previous {
            rejected_seen = true;
            assert!(!events
                .iter()
                .any(|event| matches!(event, Event::PlayerMoved { .. })));
        }
        previous = current;
    }

    assert!(rejected_seen, "player never reached the corridor wall");
    // Column 4 of the spawn row is a wall; its boundary sits at x = 175.
    assert_eq!(previous, Position::new(175.0, 337.0));
}

#[test]
fn walking_right_from_spawn_scores_on_the_eleventh_step() {
    let mut world = reference_world();
    set_heading(&mut world, Direction::Right);

    for _ in 0..10 {
        let _ = tick(&mut world, TICK);
        assert_eq!(query::score(&world), 0);
    }

    let events = tick(&mut world, TICK);

    assert_eq!(query::score(&world), 1);
    assert!(events.iter().any(|event| matches!(
        event,
        Event::CollectibleConsumed { position, .. } if *position == Position::new(226.0, 337.0)
    )));
}

#[test]
fn red_patrol_cycle_closes_after_its_total_duration() {
    let mut world = reference_world();
    let start = query::adversary_view(&world).into_vec();
    assert_eq!(start[0].position, Position::new(332.0, 370.0));

    // Red route leg durations sum to exactly 20 seconds.
    for _ in 0..40 {
        let _ = tick(&mut world, Duration::from_millis(500));
    }

    let cycled = query::adversary_view(&world).into_vec();
    assert_eq!(cycled[0].leg_index, 0);
    assert_eq!(cycled[0].leg_elapsed, Duration::ZERO);
    assert_eq!(cycled[0].position, Position::new(332.0, 370.0));
}

#[test]
fn restart_restores_the_reference_world_completely() {
    let mut world = reference_world();
    set_heading(&mut world, Direction::Right);
    for _ in 0..20 {
        let _ = tick(&mut world, TICK);
    }
    assert!(query::score(&world) >= 1);
    assert!(query::collectible_view(&world).remaining() < 106);

    let mut events = Vec::new();
    world::apply(&mut world, Command::Restart, &mut events);

    assert_eq!(query::score(&world), 0);
    assert_eq!(query::generation(&world), 1);
    assert_eq!(query::collectible_view(&world).remaining(), 106);
    let player = query::player_view(&world);
    assert_eq!(player.position, Position::new(195.0, 337.0));
    assert_eq!(player.pending_heading, None);
    for adversary in query::adversary_view(&world).iter() {
        assert_eq!(adversary.leg_index, 0);
        assert_eq!(adversary.leg_elapsed, Duration::ZERO);
    }
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::SimulationRestarted { generation: 1 })));
}
