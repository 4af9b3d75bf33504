use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_apply::apply_move;

/// Let `engine` play one move for `automated_side`.
///
/// Does nothing unless that side is to move. When the engine finds no move
/// (for example the side has no pieces left) the position is left as is.
/// Returns the engine output with `best_move` set only if it was applied.
pub fn compute_automated_move(
    game_state: &mut GameState,
    engine: &mut dyn Engine,
    automated_side: Color,
) -> EngineOutput {
    if game_state.side_to_move != automated_side {
        return EngineOutput::default();
    }

    let output = engine.choose_move(game_state);
    if let Some(mv) = output.best_move {
        game_state.selected = None;
        apply_move(game_state, mv);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::compute_automated_move;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::moves_from;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn lone_knight_only_ever_lands_on_knight_targets() {
        let start = parse_fen("8/8/8/8/4n3/8/8/8 b").expect("test FEN should parse");
        let origin = Square::new(4, 4).unwrap();
        let targets = moves_from(&start.board, start.side_to_move, origin);
        assert_eq!(targets.len(), 8);

        let mut engine = RandomEngine::new();
        for _ in 0..100 {
            let mut game = start.clone();
            let out = compute_automated_move(&mut game, &mut engine, Color::Dark);
            let mv = out.best_move.expect("knight always has a move here");
            assert_eq!(mv.from, origin);
            assert!(targets.contains(&mv.to));
            assert_eq!(
                game.piece_at(mv.to),
                Some(Piece::new(PieceKind::Knight, Color::Dark))
            );
            assert_eq!(game.side_to_move, Color::Light);
        }
    }

    #[test]
    fn does_nothing_when_not_automated_side_to_move() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let out = compute_automated_move(&mut game, &mut RandomEngine::with_seed(3), Color::Dark);
        assert!(out.best_move.is_none());
        assert_eq!(game, before);
    }

    #[test]
    fn no_pieces_left_is_a_no_op() {
        let mut game = parse_fen("8/8/8/8/8/8/8/Q3K3 b").expect("test FEN should parse");
        let before = game.clone();
        let out = compute_automated_move(&mut game, &mut RandomEngine::with_seed(3), Color::Dark);
        assert!(out.best_move.is_none());
        assert_eq!(game, before);
    }

    #[test]
    fn reply_can_be_undone() {
        let mut game = GameState::new_game();
        game.side_to_move = Color::Dark;
        let before = game.clone();
        compute_automated_move(&mut game, &mut RandomEngine::with_seed(11), Color::Dark);
        assert_eq!(game.history.len(), 1);
        crate::move_generation::move_apply::undo_move(&mut game);
        assert_eq!(game, before);
    }
}
