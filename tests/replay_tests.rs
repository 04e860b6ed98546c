mod common;

use common::{assert_actor_on, write_temp, REPLAY_LOG};
use pacmaze::{ActorId, GameReplay};

fn movers(session: &GameReplay) -> (ActorId, ActorId) {
    let maze = session.maze();
    let pacman = maze.pacman().expect("pacman placed");
    let ghost = maze.ghosts()[0];
    (pacman, ghost)
}

#[test]
fn load_places_actors_on_their_parsed_cells() {
    let session = GameReplay::load_str(REPLAY_LOG).expect("log should load");
    let (pacman, ghost) = movers(&session);
    assert_actor_on(session.maze(), pacman, 5, 3);
    assert_actor_on(session.maze(), ghost, 5, 1);
    assert!(session.maze().target().is_some());
    assert_eq!(session.maze().keys().len(), 1);
    assert_eq!(session.last_index(), 4);
}

#[test]
fn load_from_file() {
    let path = write_temp("replay_load.log", REPLAY_LOG);
    let session = GameReplay::load(&path).expect("log file should load");
    assert_eq!(session.last_index(), 4);
}

#[test]
fn step_forward_walks_the_timeline_and_clamps() {
    let mut session = GameReplay::load_str(REPLAY_LOG).expect("log should load");
    let (pacman, ghost) = movers(&session);

    session.from_start();
    assert_actor_on(session.maze(), pacman, 5, 3);
    assert_actor_on(session.maze(), ghost, 5, 1);

    session.step_forward();
    assert_actor_on(session.maze(), pacman, 4, 3);
    assert_actor_on(session.maze(), ghost, 4, 1);

    session.step_forward();
    session.step_forward();
    session.step_forward();
    assert_eq!(session.cursor(), 4);
    assert_actor_on(session.maze(), pacman, 1, 3);
    assert_actor_on(session.maze(), ghost, 1, 1);

    // stepping past the end is clamped, never an error
    session.step_forward();
    assert_eq!(session.cursor(), 4);
    assert_actor_on(session.maze(), pacman, 1, 3);
    assert_actor_on(session.maze(), ghost, 1, 1);
}

#[test]
fn step_backward_walks_the_timeline_and_clamps() {
    let mut session = GameReplay::load_str(REPLAY_LOG).expect("log should load");
    let (pacman, ghost) = movers(&session);

    session.from_end();
    assert_eq!(session.cursor(), 4);
    assert_actor_on(session.maze(), pacman, 1, 3);
    assert_actor_on(session.maze(), ghost, 1, 1);

    session.step_backward();
    assert_actor_on(session.maze(), pacman, 2, 3);
    assert_actor_on(session.maze(), ghost, 2, 1);

    session.step_backward();
    session.step_backward();
    session.step_backward();
    assert_eq!(session.cursor(), 0);
    assert_actor_on(session.maze(), pacman, 5, 3);
    assert_actor_on(session.maze(), ghost, 5, 1);

    session.step_backward();
    assert_eq!(session.cursor(), 0);
    assert_actor_on(session.maze(), pacman, 5, 3);
    assert_actor_on(session.maze(), ghost, 5, 1);
}

#[test]
fn fast_forward_after_resume_reaches_the_end() {
    let mut session = GameReplay::load_str(REPLAY_LOG).expect("log should load");
    let (pacman, ghost) = movers(&session);

    session.from_start();
    session.resume();
    session.fast_forward(0);
    assert_eq!(session.cursor(), 4);
    assert_actor_on(session.maze(), pacman, 1, 3);
    assert_actor_on(session.maze(), ghost, 1, 1);
}

#[test]
fn fast_backward_after_resume_reaches_the_start() {
    let mut session = GameReplay::load_str(REPLAY_LOG).expect("log should load");
    let (pacman, ghost) = movers(&session);

    session.from_end();
    session.resume();
    session.fast_backward(0);
    assert_eq!(session.cursor(), 0);
    assert_actor_on(session.maze(), pacman, 5, 3);
    assert_actor_on(session.maze(), ghost, 5, 1);
}

#[test]
fn fast_forward_matches_from_end_placement() {
    let mut fast = GameReplay::load_str(REPLAY_LOG).expect("log should load");
    fast.from_start();
    fast.resume();
    fast.fast_forward(0);

    let mut jumped = GameReplay::load_str(REPLAY_LOG).expect("log should load");
    jumped.from_end();

    for id in fast.maze().roster() {
        assert_eq!(fast.maze().actor(id).cell, jumped.maze().actor(id).cell);
    }
}

#[test]
fn fast_seek_requires_resume() {
    let mut session = GameReplay::load_str(REPLAY_LOG).expect("log should load");
    let (pacman, _) = movers(&session);

    session.from_start();
    session.fast_forward(0);
    assert_eq!(session.cursor(), 0);
    assert_actor_on(session.maze(), pacman, 5, 3);

    session.step_forward();
    session.fast_forward(0);
    assert_eq!(session.cursor(), 1);
    assert_actor_on(session.maze(), pacman, 4, 3);
}

#[test]
fn sparse_records_carry_the_last_coordinate_forward() {
    let log = "\
5 3
...
.T.
.K.
...
G.S
ORD: 0 OBJ: PACMAN 0 ON: (5,3)
ORD: 0 OBJ: GHOST 0 ON: (5,1)
ORD: 1 OBJ: PACMAN 0 ON: (4,3)
ORD: 2 OBJ: PACMAN 0 ON: (3,3)
ORD: 3 OBJ: PACMAN 0 ON: (2,3)
ORD: 4 OBJ: PACMAN 0 ON: (1,3)
ORD: 4 OBJ: GHOST 0 ON: (1,1)
";
    let mut session = GameReplay::load_str(log).expect("log should load");
    let (pacman, ghost) = movers(&session);

    session.from_start();
    session.step_forward();
    session.step_forward();
    assert_actor_on(session.maze(), pacman, 3, 3);
    // no ghost record for moves 1..=3: it stays where it was last seen
    assert_actor_on(session.maze(), ghost, 5, 1);

    session.step_forward();
    session.step_forward();
    assert_actor_on(session.maze(), ghost, 1, 1);
}

#[test]
fn actor_with_no_tail_records_leaves_the_board() {
    // the key stops being recorded after move 0 (picked up); the target
    // is never recorded at all and stays on its parsed cell throughout
    let log = "\
5 3
...
.T.
.K.
...
G.S
ORD: 0 OBJ: PACMAN 0 ON: (5,3)
ORD: 0 OBJ: GHOST 0 ON: (5,1)
ORD: 0 OBJ: KEY 0 ON: (3,2)
ORD: 1 OBJ: PACMAN 0 ON: (4,3)
ORD: 1 OBJ: GHOST 0 ON: (4,1)
ORD: 2 OBJ: PACMAN 0 ON: (3,3)
ORD: 2 OBJ: GHOST 0 ON: (3,1)
";
    let mut session = GameReplay::load_str(log).expect("log should load");
    let key = session.maze().keys()[0];
    let target = session.maze().target().expect("target placed");

    session.from_start();
    assert_actor_on(session.maze(), key, 3, 2);
    assert_actor_on(session.maze(), target, 2, 2);

    session.step_forward();
    assert_eq!(session.maze().actor(key).cell, None);
    assert_eq!(session.maze().actor_at(pacmaze::Coordinate::new(3, 2)), None);
    assert_actor_on(session.maze(), target, 2, 2);

    session.step_forward();
    assert_eq!(session.maze().actor(key).cell, None);
    assert_actor_on(session.maze(), target, 2, 2);

    // stepping back revives the key on its recorded cell
    session.step_backward();
    session.step_backward();
    assert_actor_on(session.maze(), key, 3, 2);
}

#[test]
fn bare_maze_is_a_zero_move_session() {
    let mut session = GameReplay::load_str(common::MAZE_TEXT).expect("bare maze should load");
    assert_eq!(session.last_index(), 0);
    let (pacman, ghost) = movers(&session);
    session.from_start();
    assert_actor_on(session.maze(), pacman, 5, 3);
    assert_actor_on(session.maze(), ghost, 5, 1);
    session.step_forward();
    assert_eq!(session.cursor(), 0);
}

#[test]
fn malformed_record_fails_the_load() {
    let log = format!("{}ORD: nonsense\n", REPLAY_LOG);
    assert!(GameReplay::load_str(&log).is_err());
}

#[test]
fn unknown_actor_fails_the_load() {
    let log = format!("{}ORD: 5 OBJ: GHOST 3 ON: (1,1)\n", REPLAY_LOG);
    assert!(GameReplay::load_str(&log).is_err());
}

#[test]
fn wall_coordinate_fails_the_load() {
    let log = format!("{}ORD: 5 OBJ: PACMAN 0 ON: (0,0)\n", REPLAY_LOG);
    assert!(GameReplay::load_str(&log).is_err());
    let log = format!("{}ORD: 5 OBJ: PACMAN 0 ON: (99,1)\n", REPLAY_LOG);
    assert!(GameReplay::load_str(&log).is_err());
}

#[test]
fn broken_grammar_prefix_fails_the_load() {
    assert!(GameReplay::load_str("2 2\n..\n").is_err());
    assert!(GameReplay::load_str("2 2\nZZ\n..\n").is_err());
}
