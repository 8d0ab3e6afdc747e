//! Play Tic-Tac-Toe against the minimax searcher
//!
//! You play X and move first; the computer plays O and never loses.
//! Run with `RUST_LOG=debug` to see search statistics for every move.

use std::io::{self, Write};

use tictactoe_minimax::{
    apply_move, current_player, initial_board, is_terminal, outcome, Mark, Minimax, Move,
    MoveOrder, Outcome, SearchConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("Minimax Tic-Tac-Toe");
    println!("===================");
    println!();

    // Vary the computer's choice among equally good replies
    let config = SearchConfig::default().with_move_order(MoveOrder::Shuffled);
    let mut minimax = Minimax::new(config);

    let mut board = initial_board();

    while !is_terminal(&board) {
        println!("{}", board);

        if current_player(&board) == Mark::X {
            print!("Your move (enter row column, e.g. '1 2'): ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                println!();
                return Ok(());
            }

            let coords: Vec<usize> = input
                .split_whitespace()
                .filter_map(|s| s.parse::<usize>().ok())
                .collect();

            let [row, col] = coords[..] else {
                println!("Enter a row and a column (0-2).");
                continue;
            };

            let result = Move::new(row, col).and_then(|mv| apply_move(&board, mv));
            match result {
                Ok(next) => board = next,
                Err(e) => {
                    println!("{}. Try again.", e);
                    continue;
                }
            }
        } else {
            println!("Computer is thinking...");

            let Some(mv) = minimax.search(&board) else {
                break;
            };
            println!("Computer plays {}", mv);
            board = apply_move(&board, mv)?;

            log::debug!("{}", minimax.get_statistics().summary());
        }
    }

    // Display final state
    println!("{}", board);

    match outcome(&board) {
        Outcome::XWins => println!("You win!"),
        Outcome::OWins => println!("The computer wins!"),
        Outcome::Draw | Outcome::Undecided => println!("The game is a draw!"),
    }

    Ok(())
}
