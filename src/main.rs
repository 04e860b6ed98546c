use std::env;
use std::path::Path;
use std::process;

use pacmaze::config::Config;
use pacmaze::{parser, ActorKind, Coordinate, GameReplay, Maze};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} validate <maze-file>", args[0]);
        eprintln!("       {} replay <game-log>", args[0]);
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "validate" => validate(Path::new(&args[2])),
        "replay" => replay(Path::new(&args[2])),
        other => Err(format!("unknown command: {}", other)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parse a maze file and report what it contains
fn validate(path: &Path) -> Result<(), String> {
    let config = Config::load();
    let maze = parser::load_maze(path, config.maze.disable_ghosts)?;
    println!(
        "Maze OK: {} x {} cells including the border",
        maze.rows(),
        maze.cols()
    );
    println!(
        "Actors: {} ghost(s), {} key(s), {} boost(s), target: {}",
        maze.ghosts().len(),
        maze.keys().len(),
        maze.boosts().len(),
        if maze.target().is_some() { "yes" } else { "no" }
    );
    print!("{}", render_maze(&maze));
    Ok(())
}

/// Load a recorded session and walk it from the start, printing every
/// actor position per move
fn replay(path: &Path) -> Result<(), String> {
    let config = Config::load();
    let mut session = GameReplay::load(path)?;
    session.from_start();
    print_positions(&session);
    while session.cursor() < session.last_index() {
        session.step_forward();
        print_positions(&session);
    }
    // leave the session parked at the first move again
    session.resume();
    session.fast_backward(config.replay.fast_delay_ms);
    Ok(())
}

fn print_positions(session: &GameReplay) {
    let maze = session.maze();
    print!("move {:3}:", session.cursor());
    for id in maze.roster() {
        let actor = maze.actor(id);
        match actor.cell {
            Some(pos) => print!(
                " {} {} ({},{})",
                actor.kind.name(),
                maze.ordinal(id),
                pos.row,
                pos.col
            ),
            None => print!(" {} {} (gone)", actor.kind.name(), maze.ordinal(id)),
        }
    }
    println!();
}

/// Text dump of the maze, one character per cell
fn render_maze(maze: &Maze) -> String {
    let mut out = String::new();
    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            let pos = Coordinate::new(row, col);
            let symbol = match maze.actor_at(pos) {
                Some(id) => match maze.actor(id).kind {
                    ActorKind::Pacman => 'S',
                    ActorKind::Ghost => 'G',
                    ActorKind::Key => 'K',
                    ActorKind::Boost => 'B',
                    ActorKind::Target => 'T',
                },
                None => {
                    if maze.grid().is_wall(pos) {
                        'X'
                    } else {
                        '.'
                    }
                }
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
