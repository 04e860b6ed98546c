use std::fs;
use std::path::Path;

use crate::actor::ActorKind;
use crate::grid::Coordinate;
use crate::maze::Maze;

/// Builds a maze from the line-oriented grammar: after `begin`, exactly
/// `rows` body lines of `cols` characters each, one character per interior
/// cell (the border ring is reserved and stamped at `build`).
///
/// Shape violations (wrong line length, surplus lines, unknown symbols,
/// lines before `begin`) set a sticky error flag that `build` checks; a
/// duplicate pacman or target fails the offending line immediately without
/// touching the flag, and the duplicate is never placed.
pub struct MazeBuilder {
    rows: i32,
    cols: i32,
    current_row: i32,
    started: bool,
    error: bool,
    disable_ghosts: bool,
    maze: Option<Maze>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        MazeBuilder {
            rows: 0,
            cols: 0,
            current_row: 0,
            started: false,
            error: false,
            disable_ghosts: false,
            maze: None,
        }
    }

    /// Parse mode where `G` reads as a plain path cell
    pub fn without_ghosts() -> Self {
        MazeBuilder {
            disable_ghosts: true,
            ..MazeBuilder::new()
        }
    }

    /// Start a parse for a maze of `rows` x `cols` interior cells
    pub fn begin(&mut self, rows: i32, cols: i32) {
        self.rows = rows;
        self.cols = cols;
        self.current_row = 0;
        self.started = true;
        self.error = false;
        self.maze = Some(Maze::new(rows + 2, cols + 2));
    }

    /// Interpret one body line. Returns false on failure; see the type
    /// docs for which failures stick and which abort only the line.
    pub fn consume_line(&mut self, line: &str) -> bool {
        if !self.started {
            self.error = true;
            return false;
        }
        if line.chars().count() as i32 != self.cols {
            self.error = true;
            return false;
        }
        if self.current_row >= self.rows {
            self.error = true;
            return false;
        }
        self.current_row += 1;
        let row = self.current_row;
        let disable_ghosts = self.disable_ghosts;
        let maze = match self.maze.as_mut() {
            Some(maze) => maze,
            None => {
                self.error = true;
                return false;
            }
        };

        for (i, symbol) in line.chars().enumerate() {
            let pos = Coordinate::new(row, i as i32 + 1);
            match symbol {
                '.' => maze.carve_path(pos),
                'X' => {
                    // cells start as walls, nothing to do
                }
                'S' => {
                    if maze.pacman().is_some() {
                        return false;
                    }
                    maze.spawn(ActorKind::Pacman, pos);
                }
                'G' => {
                    if disable_ghosts {
                        maze.carve_path(pos);
                    } else {
                        maze.spawn(ActorKind::Ghost, pos);
                    }
                }
                'K' => {
                    maze.spawn(ActorKind::Key, pos);
                }
                'B' => {
                    maze.spawn(ActorKind::Boost, pos);
                }
                'T' => {
                    if maze.target().is_some() {
                        return false;
                    }
                    maze.spawn(ActorKind::Target, pos);
                }
                _ => {
                    self.error = true;
                    return false;
                }
            }
        }
        true
    }

    /// True once every declared row has been consumed without a sticky error
    pub fn finished(&self) -> bool {
        self.started && !self.error && self.current_row == self.rows
    }

    /// The sticky error flag
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Finalize the maze: stamp wall over the whole outer ring and hand
    /// the grid over. None if the sticky error flag is set.
    pub fn build(mut self) -> Option<Maze> {
        if self.error {
            return None;
        }
        let mut maze = self.maze.take()?;
        maze.add_border();
        Some(maze)
    }
}

impl Default for MazeBuilder {
    fn default() -> Self {
        MazeBuilder::new()
    }
}

/// Read the dimension header and exactly `rows` body lines from `lines`,
/// leaving any remaining lines (move records) unconsumed in the iterator.
pub(crate) fn read_maze<'a, I>(lines: &mut I, disable_ghosts: bool) -> Result<Maze, String>
where
    I: Iterator<Item = &'a str>,
{
    let header = match lines.next() {
        Some(header) => header,
        None => return Err("empty maze input".to_string()),
    };
    let mut parts = header.split_whitespace();
    let rows = parse_dimension(parts.next(), header)?;
    let cols = parse_dimension(parts.next(), header)?;
    if parts.next().is_some() {
        return Err(format!("invalid maze dimensions: {}", header));
    }

    let mut builder = if disable_ghosts {
        MazeBuilder::without_ghosts()
    } else {
        MazeBuilder::new()
    };
    builder.begin(rows, cols);
    for _ in 0..rows {
        let line = match lines.next() {
            Some(line) => line,
            None => return Err(format!("maze body ended before {} rows were read", rows)),
        };
        if !builder.consume_line(line) {
            return Err(format!("invalid maze line: {}", line));
        }
    }
    if !builder.finished() {
        return Err("incomplete maze definition".to_string());
    }
    match builder.build() {
        Some(maze) => Ok(maze),
        None => Err("maze construction failed".to_string()),
    }
}

fn parse_dimension(token: Option<&str>, header: &str) -> Result<i32, String> {
    let token = match token {
        Some(token) => token,
        None => return Err(format!("invalid maze dimensions: {}", header)),
    };
    let value: i32 = token
        .parse()
        .map_err(|_| format!("invalid maze dimensions: {}", header))?;
    if value <= 0 {
        return Err(format!("maze dimensions must be positive: {}", header));
    }
    Ok(value)
}

/// Parse a maze from text. Trailing lines after a complete body (the
/// record section of a replay log) are tolerated and ignored.
pub fn load_maze_str(text: &str, disable_ghosts: bool) -> Result<Maze, String> {
    let mut lines = text.lines();
    read_maze(&mut lines, disable_ghosts)
}

/// Load a maze definition from a file
pub fn load_maze(path: &Path, disable_ghosts: bool) -> Result<Maze, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read maze file {}: {}", path.display(), e))?;
    load_maze_str(&text, disable_ghosts)
}
