use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::actor::{ActorId, ActorKind};
use crate::grid::Coordinate;
use crate::maze::Maze;

/// One captured position, rendered as
/// `ORD: <moveIndex> OBJ: <TYPE> <ordinal> ON: (<row>,<col>)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub move_index: u32,
    pub kind: ActorKind,
    pub ordinal: usize,
    pub coordinate: Coordinate,
}

impl MoveRecord {
    /// Parse one record line; None when the line deviates from the format
    pub fn parse(line: &str) -> Option<MoveRecord> {
        let mut tokens = line.split_whitespace();
        if tokens.next()? != "ORD:" {
            return None;
        }
        let move_index: u32 = tokens.next()?.parse().ok()?;
        if tokens.next()? != "OBJ:" {
            return None;
        }
        let kind = ActorKind::from_name(tokens.next()?)?;
        let ordinal: usize = tokens.next()?.parse().ok()?;
        if tokens.next()? != "ON:" {
            return None;
        }
        let pos = tokens.next()?;
        if tokens.next().is_some() {
            return None;
        }
        let pos = pos.strip_prefix('(')?.strip_suffix(')')?;
        let (row, col) = pos.split_once(',')?;
        Some(MoveRecord {
            move_index,
            kind,
            ordinal,
            coordinate: Coordinate::new(row.parse().ok()?, col.parse().ok()?),
        })
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ORD: {} OBJ: {} {} ON: ({},{})",
            self.move_index,
            self.kind.name(),
            self.ordinal,
            self.coordinate.row,
            self.coordinate.col
        )
    }
}

/// History entry serialized by `save_history_json`
#[derive(Debug, Serialize)]
struct ActorHistory {
    kind: &'static str,
    ordinal: usize,
    cells: Vec<Option<Coordinate>>,
}

/// Produces the append-only textual trace of a live game and keeps an
/// in-memory history of every captured cell per actor.
pub struct GameRecorder {
    history: BTreeMap<ActorId, Vec<Option<Coordinate>>>,
    writer: BufWriter<File>,
    move_count: u32,
}

impl GameRecorder {
    /// Open the log sink, truncating an existing file
    pub fn create(path: &Path) -> Result<GameRecorder, String> {
        let file = File::create(path)
            .map_err(|e| format!("failed to create log file {}: {}", path.display(), e))?;
        Ok(GameRecorder {
            history: BTreeMap::new(),
            writer: BufWriter::new(file),
            move_count: 0,
        })
    }

    /// In-memory bookkeeping only: remember where every roster actor
    /// stands right now. Does not advance the move index.
    pub fn capture(&mut self, maze: &Maze) {
        for id in maze.roster() {
            self.history.entry(id).or_default().push(maze.actor(id).cell);
        }
    }

    /// Write one record line per actor that currently occupies a cell,
    /// then advance the move index. Consumed actors are skipped on purpose.
    pub fn capture_and_write(&mut self, maze: &Maze) -> Result<(), String> {
        for id in maze.roster() {
            let actor = maze.actor(id);
            let coordinate = match actor.cell {
                Some(pos) => pos,
                None => continue,
            };
            let record = MoveRecord {
                move_index: self.move_count,
                kind: actor.kind,
                ordinal: maze.ordinal(id),
                coordinate,
            };
            writeln!(self.writer, "{}", record).map_err(write_err)?;
        }
        self.move_count += 1;
        Ok(())
    }

    /// Copy the original maze grammar text verbatim ahead of the records,
    /// making the log self-describing and replayable from scratch
    pub fn dump_maze_text(&mut self, source: &Path) -> Result<(), String> {
        let text = fs::read_to_string(source)
            .map_err(|e| format!("failed to read maze file {}: {}", source.display(), e))?;
        for line in text.lines() {
            writeln!(self.writer, "{}", line).map_err(write_err)?;
        }
        Ok(())
    }

    /// Per-actor summary of the in-memory history: a `NEW: <TYPE>` header
    /// followed by `ORD: <n> | (<row>,<col>)` for every visited cell
    pub fn write_game_log(&mut self, maze: &Maze) -> Result<(), String> {
        for (id, cells) in &self.history {
            writeln!(self.writer, "NEW: {}", maze.actor(*id).kind.name()).map_err(write_err)?;
            for (i, cell) in cells.iter().enumerate() {
                if let Some(pos) = cell {
                    writeln!(self.writer, "ORD: {} | ({},{})", i + 1, pos.row, pos.col)
                        .map_err(write_err)?;
                }
            }
        }
        Ok(())
    }

    /// Dump the in-memory history as JSON, one entry per actor
    pub fn save_history_json(&self, maze: &Maze, path: &Path) -> Result<(), String> {
        let entries: Vec<ActorHistory> = self
            .history
            .iter()
            .map(|(id, cells)| ActorHistory {
                kind: maze.actor(*id).kind.name(),
                ordinal: maze.ordinal(*id),
                cells: cells.clone(),
            })
            .collect();
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("failed to serialize history: {}", e))?;
        fs::write(path, json)
            .map_err(|e| format!("failed to write history file {}: {}", path.display(), e))
    }

    /// Number of moves written so far
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Flush and close the sink; the recorder cannot capture afterwards
    pub fn finish(mut self) -> Result<(), String> {
        self.writer.flush().map_err(|e| format!("failed to flush log file: {}", e))
    }
}

fn write_err(e: std::io::Error) -> String {
    format!("failed to write log: {}", e)
}
