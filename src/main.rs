//! Line-oriented text front end.
//!
//! Reads two square identifiers per line ("e2 e4"), forwards them to the
//! rules engine, and prints the outcome or the rejection message.

use std::io::{self, BufRead, Write};

use chess_rules::board::{Board, Coordinate};

fn main() {
    let stdin = io::stdin();
    let mut board = Board::new();

    println!("Ready to play! Enter moves as two squares, e.g. 'e2 e4'.");
    loop {
        print!("{} to move> ", board.turn());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let Some((origin, destination)) = parse_move(line) else {
            println!("Enter two squares between a1 and h8, e.g. 'e2 e4'.");
            continue;
        };

        match board.move_piece(origin, destination) {
            Ok(result) => {
                match result.captured {
                    Some(taken) => println!(
                        "Moved {} from {} to {}, taking the {}.",
                        result.piece, result.from, result.to, taken
                    ),
                    None => println!(
                        "Moved {} from {} to {}.",
                        result.piece, result.from, result.to
                    ),
                }
                if result.checkmate {
                    println!("Checkmate! {} wins.", result.piece.color);
                    break;
                }
                if result.stalemate {
                    println!("Stalemate. The game is drawn.");
                    break;
                }
                if result.check {
                    println!("Check!");
                }
            }
            Err(rejection) => println!("{rejection}"),
        }
    }
}

fn parse_move(line: &str) -> Option<(Coordinate, Coordinate)> {
    let mut tokens = line.split_whitespace();
    let origin = tokens.next()?.parse().ok()?;
    let destination = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((origin, destination))
}
