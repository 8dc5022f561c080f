use std::io::{self, BufRead, Write};

use extinction_chess::game_state::chess_types::GameOutcome;
use extinction_chess::game_state::game_state::GameState;
use extinction_chess::utils::render_game_state::render_game_state;

fn main() {
    let mut game = GameState::new_game();
    let stdin = io::stdin();

    println!("{}", render_game_state(&game));
    print_prompt(&game);

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let mut tokens = input.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(from), Some(to), None) => match game.try_make_move(from, to) {
                Ok(()) => {
                    println!("{}", render_game_state(&game));
                    match game.get_game_state() {
                        GameOutcome::LightWon => {
                            println!("The light side has won.");
                            return;
                        }
                        GameOutcome::DarkWon => {
                            println!("The dark side has won.");
                            return;
                        }
                        GameOutcome::Unfinished => {}
                    }
                }
                Err(refusal) => println!("Move refused: {refusal}"),
            },
            (None, None, None) => {}
            _ => println!("Enter a move as two squares, for example: E2 E4"),
        }
        print_prompt(&game);
    }
}

fn print_prompt(game: &GameState) {
    print!("{} to move> ", game.get_turn());
    io::stdout().flush().ok();
}
