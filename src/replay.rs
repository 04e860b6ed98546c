use std::fs;
use std::path::Path;

use crate::actor::ActorId;
use crate::grid::Coordinate;
use crate::maze::Maze;
use crate::parser;
use crate::recorder::MoveRecord;

/// Replays a recorded session: rebuilds the maze from the grammar prefix
/// of a game log, indexes the record suffix into one dense position
/// timeline per actor, and drives actor placement through a move cursor.
///
/// Timelines are built once at load and never mutated. A record missing
/// for an actor at some index carries the last known coordinate forward;
/// an actor whose records stop before the end of the log is treated as
/// removed from the board from that point on (a consumed key or boost).
pub struct GameReplay {
    maze: Maze,
    timelines: Vec<Vec<Option<Coordinate>>>,
    cursor: usize,
    last_index: usize,
    stepped: bool,
}

impl GameReplay {
    /// Load a combined maze+records log from a file
    pub fn load(path: &Path) -> Result<GameReplay, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read game log {}: {}", path.display(), e))?;
        GameReplay::load_str(&text)
    }

    /// Parse a combined maze+records log into a replayable session.
    /// Any failure is unrecoverable; no partial session is returned.
    pub fn load_str(text: &str) -> Result<GameReplay, String> {
        let mut lines = text.lines();
        let maze = parser::read_maze(&mut lines, false)?;

        let mut records: Vec<(ActorId, MoveRecord)> = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let record = match MoveRecord::parse(line) {
                Some(record) => record,
                None => return Err(format!("malformed record line: {}", line)),
            };
            let id = match maze.resolve(record.kind, record.ordinal) {
                Some(id) => id,
                None => {
                    return Err(format!(
                        "record references unknown actor: {} {}",
                        record.kind.name(),
                        record.ordinal
                    ))
                }
            };
            if maze.grid().is_wall(record.coordinate) {
                return Err(format!(
                    "record coordinate ({},{}) is not a path cell",
                    record.coordinate.row, record.coordinate.col
                ));
            }
            records.push((id, record));
        }

        let last_index = records
            .iter()
            .map(|(_, record)| record.move_index as usize)
            .max()
            .unwrap_or(0);

        // group records by actor; ties on one move index keep file order,
        // so a later line overwrites an earlier one
        let actor_count = maze.actor_count();
        let mut sparse: Vec<Vec<Option<Coordinate>>> =
            vec![vec![None; last_index + 1]; actor_count];
        for (id, record) in &records {
            sparse[id.0][record.move_index as usize] = Some(record.coordinate);
        }

        let mut timelines = Vec::with_capacity(actor_count);
        for (i, entries) in sparse.into_iter().enumerate() {
            let seed = match maze.initial_cell(ActorId(i)) {
                Some(pos) => pos,
                None => return Err("actor has no starting cell".to_string()),
            };
            let last_seen = entries.iter().rposition(|entry| entry.is_some());
            let mut current = seed;
            let mut timeline = Vec::with_capacity(last_index + 1);
            for (index, entry) in entries.into_iter().enumerate() {
                if let Some(pos) = entry {
                    current = pos;
                }
                let on_board = match last_seen {
                    Some(last) => index <= last,
                    // never recorded at all: assume it never moved
                    None => true,
                };
                timeline.push(if on_board { Some(current) } else { None });
            }
            timelines.push(timeline);
        }

        Ok(GameReplay {
            maze,
            timelines,
            cursor: 0,
            last_index,
            stepped: true,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highest move index seen while loading
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Jump to the first recorded move and enter single-step mode
    pub fn from_start(&mut self) {
        self.cursor = 0;
        self.snap(self.cursor);
        self.stepped = true;
    }

    /// Jump to the last recorded move and enter single-step mode
    pub fn from_end(&mut self) {
        self.cursor = self.last_index;
        self.snap(self.cursor);
        self.stepped = true;
    }

    /// One move forward; at the last move this re-snaps in place
    pub fn step_forward(&mut self) {
        if self.cursor < self.last_index {
            self.cursor += 1;
        }
        self.snap(self.cursor);
        self.stepped = true;
    }

    /// One move backward; at the first move this re-snaps in place
    pub fn step_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.snap(self.cursor);
        self.stepped = true;
    }

    /// Leave single-step mode; required before a fast seek
    pub fn resume(&mut self) {
        self.stepped = false;
    }

    /// Run the cursor to the last move and snap once. A no-op while
    /// single-stepping (call `resume` first). `_delay_ms` paces frames in
    /// an interactive viewer; zero resolves immediately and is the only
    /// value exercised here.
    pub fn fast_forward(&mut self, _delay_ms: u64) {
        if self.stepped {
            return;
        }
        self.cursor = self.last_index;
        self.snap(self.cursor);
        self.stepped = true;
    }

    /// Run the cursor back to the first move; see `fast_forward`
    pub fn fast_backward(&mut self, _delay_ms: u64) {
        if self.stepped {
            return;
        }
        self.cursor = 0;
        self.snap(self.cursor);
        self.stepped = true;
    }

    /// Place every actor on its timeline coordinate for `index`.
    /// All actors are lifted before any is placed; a swap within one move
    /// must not clobber the occupant table.
    fn snap(&mut self, index: usize) {
        for i in 0..self.timelines.len() {
            self.maze.lift(ActorId(i));
        }
        for i in 0..self.timelines.len() {
            if let Some(pos) = self.timelines[i][index] {
                self.maze.place(ActorId(i), pos);
            }
        }
    }
}
