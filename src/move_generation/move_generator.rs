//! Simplified move generation front door.
//!
//! `moves_from` dispatches on the piece kind standing on a square. The
//! `MoveGenerator` trait wraps it so engines and the selection state machine
//! can be handed a generator, and enumerates every move for the side to move.
//!
//! Legality here ignores check entirely: a move that leaves the mover's own
//! king capturable is still generated.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

/// Destinations reachable from `from`. An empty square yields no moves.
pub fn moves_from(board: &Board, side_to_move: Color, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    let Some(piece) = board.piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, side_to_move, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board, side_to_move, from, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, side_to_move, from, &mut out),
        PieceKind::Rook => generate_rook_moves(board, side_to_move, from, &mut out),
        PieceKind::Queen => generate_queen_moves(board, side_to_move, from, &mut out),
        PieceKind::King => generate_king_moves(board, side_to_move, from, &mut out),
    }

    out
}

pub trait MoveGenerator {
    fn moves_from(&self, game_state: &GameState, from: Square) -> Vec<Square>;

    /// Every (origin, destination) pair for the side to move, origins row-major.
    fn generate_moves(&self, game_state: &GameState) -> Vec<ChessMove> {
        let mut all = Vec::with_capacity(64);
        for from in game_state.board.squares_of(game_state.side_to_move) {
            for to in self.moves_from(game_state, from) {
                all.push(ChessMove::new(from, to));
            }
        }
        all
    }

    fn is_legal_move(&self, game_state: &GameState, mv: ChessMove) -> bool {
        self.moves_from(game_state, mv.from).contains(&mv.to)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedMoveGenerator;

impl MoveGenerator for SimplifiedMoveGenerator {
    fn moves_from(&self, game_state: &GameState, from: Square) -> Vec<Square> {
        moves_from(&game_state.board, game_state.side_to_move, from)
    }
}

#[cfg(test)]
mod tests {
    use super::{moves_from, MoveGenerator, SimplifiedMoveGenerator};
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn start_position_has_twelve_moves_per_side() {
        let mut game = GameState::new_game();
        assert_eq!(SimplifiedMoveGenerator.generate_moves(&game).len(), 12);
        game.side_to_move = Color::Dark;
        assert_eq!(SimplifiedMoveGenerator.generate_moves(&game).len(), 12);
    }

    #[test]
    fn empty_square_has_no_moves() {
        let game = GameState::new_game();
        assert!(moves_from(&game.board, game.side_to_move, sq(4, 4)).is_empty());
    }

    #[test]
    fn single_step_legal_and_double_step_rejected() {
        let game = GameState::new_game();
        let single = ChessMove::new(sq(6, 4), sq(5, 4));
        let double = ChessMove::new(sq(6, 4), sq(4, 4));
        assert!(SimplifiedMoveGenerator.is_legal_move(&game, single));
        assert!(!SimplifiedMoveGenerator.is_legal_move(&game, double));
    }

    #[test]
    fn generated_moves_have_no_duplicates() {
        let game = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w")
            .expect("test FEN should parse");
        let moves = SimplifiedMoveGenerator.generate_moves(&game);
        let mut deduped = moves.clone();
        deduped.sort_by_key(|m| (m.from, m.to));
        deduped.dedup();
        assert_eq!(moves.len(), deduped.len());
    }

    #[test]
    fn capture_eligibility_follows_side_to_move() {
        // White to move; querying a black rook treats black pieces as opposing
        // and white pieces as friendly.
        let game = parse_fen("8/8/8/8/r1p1P3/8/8/8 w").expect("test FEN should parse");
        let targets = moves_from(&game.board, game.side_to_move, sq(4, 0));
        assert!(targets.contains(&sq(4, 2)));
        assert!(!targets.contains(&sq(4, 3)));
    }

    #[test]
    fn sliding_rays_stop_at_first_occupied_square() {
        let game = parse_fen("r2k4/8/8/q2P4/8/8/8/R2K4 b").expect("test FEN should parse");
        for from in [sq(0, 0), sq(3, 0)] {
            let targets = moves_from(&game.board, game.side_to_move, from);
            for to in &targets {
                let d_row = (to.row() as i8 - from.row() as i8).signum();
                let d_col = (to.col() as i8 - from.col() as i8).signum();
                let mut cursor = from.offset(d_row, d_col);
                while let Some(step) = cursor {
                    if step == *to {
                        break;
                    }
                    assert!(game.is_empty(step), "ray from {from:?} jumped over {step:?}");
                    cursor = step.offset(d_row, d_col);
                }
                if let Some(piece) = game.piece_at(*to) {
                    assert_ne!(piece.color, game.side_to_move);
                }
            }
        }
    }
}
