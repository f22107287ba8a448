use std::io::{self, BufRead, Write};
use std::path::Path;

use board_rules::{GameState, RuleOptions, SelectOutcome, Square};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut rules = RuleOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rules" => {
                rules = match args.get(i + 1).map(String::as_str) {
                    Some("core") => RuleOptions::default(),
                    Some("standard") => RuleOptions::standard(),
                    _ => {
                        eprintln!("--rules requires 'core' or 'standard'");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--config requires a path to a JSON rules file");
                    std::process::exit(2);
                };
                rules = match load_rules(Path::new(path)) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Failed to load {path}: {e}");
                        std::process::exit(1);
                    }
                };
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                eprintln!("Usage: play [--rules core|standard] [--config <rules.json>]");
                std::process::exit(2);
            }
        }
    }

    let mut game = GameState::new().with_rules(rules);
    log::info!("rules: {}", rules.summary());
    print_board(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["board"] => print_board(&game),
            ["history"] => {
                for (n, record) in game.history().iter().enumerate() {
                    println!("{:>3}. {record}", n + 1);
                }
            }
            ["moves", s] => match s.parse::<Square>() {
                Ok(sq) => {
                    let mut dests: Vec<Square> = game.legal_destinations(sq).into_iter().collect();
                    dests.sort();
                    let names: Vec<String> = dests.iter().map(Square::to_string).collect();
                    println!("{sq}: {}", names.join(" "));
                }
                Err(e) => println!("{e}"),
            },
            [s] => match s.parse::<Square>() {
                Ok(sq) => {
                    let outcome = game.select_square(sq);
                    report(&game, outcome);
                }
                Err(e) => println!("{e}"),
            },
            [r, f] => match (r.parse::<i32>(), f.parse::<i32>()) {
                (Ok(rank), Ok(file)) => {
                    let outcome = game.select(rank, file);
                    report(&game, outcome);
                }
                _ => println!("expected '<rank> <file>' as two integers"),
            },
            _ => println!("commands: <square> | <rank> <file> | moves <square> | board | history | quit"),
        }
        if io::stdout().flush().is_err() {
            break;
        }
    }
}

fn report(game: &GameState, outcome: SelectOutcome) {
    match outcome {
        SelectOutcome::Ignored => println!("(no effect)"),
        SelectOutcome::Selected(sq) => println!("selected {sq}"),
        SelectOutcome::Deselected => println!("deselected"),
        SelectOutcome::Moved(record) => {
            println!("{}: {record}", record.color);
            print_board(game);
        }
    }
}

fn print_board(game: &GameState) {
    println!("{}", game.board());
    println!("{} to move ({:?})", game.current_turn(), game.status());
}

fn load_rules(path: &Path) -> Result<RuleOptions, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(RuleOptions::from_json(&text)?)
}
