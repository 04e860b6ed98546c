/// Inspector for recorded game logs
///
/// Prints the maze header, every parsed move record, and summary
/// statistics for the record section.
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::process;

use pacmaze::MoveRecord;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <game-log>", args[0]);
        eprintln!("Prints the move records of a recorded game log");
        process::exit(1);
    }

    let filename = &args[1];
    let text = match fs::read_to_string(filename) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to read {}: {}", filename, e);
            process::exit(1);
        }
    };

    let mut lines = text.lines();
    let header = match lines.next() {
        Some(header) => header,
        None => {
            eprintln!("Empty log file");
            process::exit(1);
        }
    };
    let rows: usize = match header.split_whitespace().next().and_then(|t| t.parse().ok()) {
        Some(rows) => rows,
        None => {
            eprintln!("Invalid maze header: {}", header);
            process::exit(1);
        }
    };

    println!("=== Game Log: {} ===", filename);
    println!("Maze: {}", header);

    // skip the maze body
    for _ in 0..rows {
        lines.next();
    }

    let mut record_count = 0;
    let mut max_index = 0;
    let mut per_actor: BTreeMap<String, usize> = BTreeMap::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match MoveRecord::parse(line) {
            Some(record) => {
                println!("{}", record);
                record_count += 1;
                max_index = max_index.max(record.move_index);
                let key = format!("{} {}", record.kind.name(), record.ordinal);
                *per_actor.entry(key).or_insert(0) += 1;
            }
            None => {
                eprintln!("Skipping malformed line: {}", line);
            }
        }
    }

    println!("\n=== Summary ===");
    println!("Total records: {}", record_count);
    if record_count > 0 {
        println!("Moves: 0..={}", max_index);
    }
    for (actor, count) in &per_actor {
        println!("{}: {} record(s)", actor, count);
    }
}
