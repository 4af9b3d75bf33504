//! Random-vs-random self-play under the simplified rules.
//!
//! Usage:
//! `cargo run --release --bin random_selfplay`
//! `cargo run --release --bin random_selfplay -- --plies 400 --seed 7`

use click_chess::engines::engine_random::RandomEngine;
use click_chess::game_state::chess_types::*;
use click_chess::session::automated_reply::compute_automated_move;
use click_chess::utils::render_game_state::render_game_state;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn has_king(game: &GameState, color: Color) -> bool {
    game.board
        .squares_of(color)
        .any(|sq| matches!(game.piece_at(sq), Some(p) if p.kind == PieceKind::King))
}

fn main() -> Result<(), String> {
    let plies = parse_arg_u64("--plies", 200);
    let seed = parse_arg_u64("--seed", 0);

    let mut game = GameState::new_game();
    let mut light = RandomEngine::with_seed(seed);
    let mut dark = RandomEngine::with_seed(seed.wrapping_add(1));

    let mut played = 0u64;
    let outcome = loop {
        if played >= plies {
            break format!("ply limit {plies} reached");
        }
        let side = game.side_to_move;
        if !has_king(&game, side) {
            break format!("{} lost its king", side.name());
        }

        let engine = match side {
            Color::Light => &mut light,
            Color::Dark => &mut dark,
        };
        let output = compute_automated_move(&mut game, engine, side);
        let Some(mv) = output.best_move else {
            break format!("{} has no moves", side.name());
        };

        played += 1;
        println!("{:>4}. {} {}", played, side.name(), mv);
    };

    println!("\n{}", render_game_state(&game));
    println!("result: {outcome} after {played} plies (fen {})", game.get_fen());
    Ok(())
}
