//! Move lists for each piece kind.

use super::{cursors, moves_at};
use crate::board::{create_piece, Board, Cursor};

// Every square a rook on (4,4) reaches on an empty board.
const ROOK_44: [(i8, i8); 14] = [
    (3, 4),
    (2, 4),
    (1, 4),
    (0, 4),
    (5, 4),
    (6, 4),
    (7, 4),
    (4, 3),
    (4, 2),
    (4, 1),
    (4, 0),
    (4, 5),
    (4, 6),
    (4, 7),
];

const BISHOP_44: [(i8, i8); 13] = [
    (5, 5),
    (6, 6),
    (7, 7),
    (3, 3),
    (2, 2),
    (1, 1),
    (0, 0),
    (3, 5),
    (2, 6),
    (1, 7),
    (5, 3),
    (6, 2),
    (7, 1),
];

const KING_44: [(i8, i8); 8] = [
    (3, 4),
    (5, 4),
    (4, 3),
    (4, 5),
    (5, 5),
    (3, 3),
    (3, 5),
    (5, 3),
];

const KNIGHT_44: [(i8, i8); 8] = [
    (5, 6),
    (6, 5),
    (5, 2),
    (2, 5),
    (3, 6),
    (6, 3),
    (3, 2),
    (2, 3),
];

fn lone(code: &str, is_white: bool) -> Board {
    let mut board = Board::new();
    board.set(4, 4, Some(create_piece(code, is_white)));
    board
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for row in 0..8 {
        for col in 0..8 {
            assert_eq!(board.get(row, col), None);
        }
    }
    assert!(board.white_to_move());
}

#[test]
fn test_rook_on_empty_board() {
    assert_eq!(moves_at(&lone("R", true), 4, 4), cursors(&ROOK_44));
}

#[test]
fn test_bishop_on_empty_board() {
    assert_eq!(moves_at(&lone("B", true), 4, 4), cursors(&BISHOP_44));
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let mut expected: Vec<(i8, i8)> = ROOK_44.to_vec();
    expected.extend_from_slice(&BISHOP_44);
    let moves = moves_at(&lone("Q", true), 4, 4);
    assert_eq!(moves.len(), 27);
    assert_eq!(moves, cursors(&expected));
}

#[test]
fn test_king_on_empty_board() {
    assert_eq!(moves_at(&lone("K", true), 4, 4), cursors(&KING_44));
}

#[test]
fn test_knight_on_empty_board() {
    assert_eq!(moves_at(&lone("N", true), 4, 4), cursors(&KNIGHT_44));
}

#[test]
fn test_white_pawn_off_start_row() {
    assert_eq!(moves_at(&lone("PW", true), 4, 4), cursors(&[(3, 4)]));
}

#[test]
fn test_black_pawn_off_start_row() {
    assert_eq!(moves_at(&lone("PB", false), 4, 4), cursors(&[(5, 4)]));
}

#[test]
fn test_default_board_pawn_double_step() {
    let board = Board::starting_position();
    assert_eq!(moves_at(&board, 6, 6), cursors(&[(5, 6), (4, 6)]));
}

#[test]
fn test_default_board_pawn_diagonal_capture() {
    let mut board = Board::starting_position();
    board.set(5, 4, Some(create_piece("R", false)));
    assert_eq!(
        moves_at(&board, 6, 5),
        cursors(&[(5, 5), (4, 5), (5, 4)])
    );
}

#[test]
fn test_default_board_king_is_boxed_in() {
    let board = Board::starting_position();
    assert_eq!(moves_at(&board, 7, 4), Vec::<Cursor>::new());
    assert!(board.generate_move_list(Cursor(7, 4)).is_some());
}

#[test]
fn test_default_board_knights_jump() {
    let board = Board::starting_position();
    assert_eq!(moves_at(&board, 7, 1), cursors(&[(5, 0), (5, 2)]));
    assert_eq!(moves_at(&board, 7, 6), cursors(&[(5, 5), (5, 7)]));
}

#[test]
fn test_empty_square_has_no_list() {
    let board = Board::starting_position();
    assert!(board.generate_move_list(Cursor(4, 4)).is_none());
    assert!(board.generate_move_list(Cursor(-1, 4)).is_none());
}

#[test]
fn test_generation_is_idempotent() {
    let mut board = Board::starting_position();
    board.set(5, 4, Some(create_piece("R", false)));
    let before = board.clone();

    for row in 0..8 {
        for col in 0..8 {
            let first = board.generate_move_list(Cursor(row, col));
            let second = board.generate_move_list(Cursor(row, col));
            assert_eq!(first, second);
        }
    }
    assert_eq!(board, before);
}

#[test]
fn test_opening_pseudo_legal_moves() {
    let board = Board::starting_position();
    let moves = board.pseudo_legal_moves();
    // 16 pawn moves and 4 knight moves
    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|m| m.from.row() >= 6));
}

#[test]
fn test_piece_generates_against_any_query_surface() {
    let board = lone("N", true);
    let knight = create_piece("N", true);
    assert_eq!(
        knight.generate_moves(Cursor(4, 4), &board).sorted(),
        cursors(&KNIGHT_44)
    );
}
