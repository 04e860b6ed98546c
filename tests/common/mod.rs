use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use pacmaze::{ActorId, Coordinate, Maze};

/// Five-move session on a 5x3 maze: pacman climbs column 3, the ghost
/// climbs column 1; a target and a key sit in column 2.
pub const REPLAY_LOG: &str = "\
5 3
...
.T.
.K.
...
G.S
ORD: 0 OBJ: PACMAN 0 ON: (5,3)
ORD: 0 OBJ: GHOST 0 ON: (5,1)
ORD: 1 OBJ: PACMAN 0 ON: (4,3)
ORD: 1 OBJ: GHOST 0 ON: (4,1)
ORD: 2 OBJ: PACMAN 0 ON: (3,3)
ORD: 2 OBJ: GHOST 0 ON: (3,1)
ORD: 3 OBJ: PACMAN 0 ON: (2,3)
ORD: 3 OBJ: GHOST 0 ON: (2,1)
ORD: 4 OBJ: PACMAN 0 ON: (1,3)
ORD: 4 OBJ: GHOST 0 ON: (1,1)
";

/// The bare maze definition the replay log starts with
pub const MAZE_TEXT: &str = "\
5 3
...
.T.
.K.
...
G.S
";

/// Write test input to a unique temp file and return its path
pub fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("pacmaze_{}_{}", process::id(), name));
    fs::write(&path, contents).expect("failed to write temp file");
    path
}

/// Assert both directions of the cell<->actor link
pub fn assert_actor_on(maze: &Maze, id: ActorId, row: i32, col: i32) {
    let pos = Coordinate::new(row, col);
    assert_eq!(maze.actor(id).cell, Some(pos), "actor cell back-reference");
    assert_eq!(maze.actor_at(pos), Some(id), "cell occupant");
}
