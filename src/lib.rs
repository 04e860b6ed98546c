pub mod actor;
pub mod config;
pub mod grid;
pub mod maze;
pub mod parser;
pub mod recorder;
pub mod replay;

pub use actor::{Actor, ActorId, ActorKind};
pub use grid::{Cell, Coordinate, Direction, Grid};
pub use maze::Maze;
pub use parser::MazeBuilder;
pub use recorder::{GameRecorder, MoveRecord};
pub use replay::GameReplay;
