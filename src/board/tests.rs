use super::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn play(board: &mut Board, moves: &[(u8, u8)]) {
    let mut mark = Mark::X;
    for &(col, row) in moves {
        board.make_move(Cell::new(col, row), mark).unwrap();
        mark = mark.opponent();
    }
}

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_mark_codes_do_not_alias() {
    // Three own marks must never read as some mix with up to two opponent marks.
    for own in [Mark::O, Mark::X] {
        let opp = own.opponent();
        for k in 0..=3 {
            for j in 0..=(4 - k).min(2) {
                let sum = k * own.code() + j * opp.code();
                for m in 1..=3 {
                    for i in 0..=2 {
                        if sum == m * own.code() + i * opp.code() {
                            assert_eq!((k, j), (m, i), "{:?} sum {} aliases", own, sum);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_cell_conversion() {
    let cell = Cell::new(2, 1);
    assert_eq!(cell.to_index(), 9);
    assert_eq!(Cell::from_index(9), cell);
    assert_eq!(Cell::new(0, 0).to_index(), 0);
    assert_eq!(Cell::new(3, 3).to_index(), 15);
}

#[test]
fn test_cell_validity() {
    assert!(Cell::is_valid(0, 0));
    assert!(Cell::is_valid(3, 3));
    assert!(!Cell::is_valid(-1, 0));
    assert!(!Cell::is_valid(0, 4));
    assert!(!Cell::is_valid(4, 0));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 4);
    assert_eq!(TOTAL_CELLS, 16);
    assert_eq!(LINES.len(), 10);
}

#[test]
fn test_lines_only_full_length() {
    // 4 rows + 4 columns + 2 main diagonals, each cell distinct
    for line in LINES {
        let set: CellSet = line.iter().copied().collect();
        assert_eq!(set.len(), 4);
    }
    assert!(LINES.contains(&[
        Cell::new(0, 3),
        Cell::new(1, 2),
        Cell::new(2, 1),
        Cell::new(3, 0),
    ]));
}

#[test]
fn test_free_cells_column_major() {
    let board = Board::new();
    let free: Vec<Cell> = board.free_cells().iter().collect();
    assert_eq!(free.len(), 16);
    assert_eq!(free[0], Cell::new(0, 0));
    assert_eq!(free[1], Cell::new(0, 1));
    assert_eq!(free[4], Cell::new(1, 0));
    assert_eq!(free[15], Cell::new(3, 3));
    assert!(free.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_make_move_occupied() {
    let mut board = Board::new();
    board.make_move(Cell::new(1, 1), Mark::X).unwrap();
    let before = board.clone();

    let err = board.make_move(Cell::new(1, 1), Mark::O).unwrap_err();
    assert_eq!(err, MoveError::Occupied(Cell::new(1, 1)));
    assert_eq!(board, before);
}

#[test]
fn test_make_move_empty_mark() {
    let mut board = Board::new();
    assert_eq!(
        board.make_move(Cell::new(0, 0), Mark::Empty),
        Err(MoveError::EmptyMark)
    );
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_undo_empty_history() {
    let mut board = Board::new();
    assert_eq!(board.undo_move(), Err(MoveError::EmptyHistory));
}

#[test]
fn test_undo_returns_last_cell() {
    let mut board = Board::new();
    play(&mut board, &[(0, 0), (2, 3)]);
    assert_eq!(board.undo_move(), Ok(Cell::new(2, 3)));
    assert!(board.is_empty(Cell::new(2, 3)));
    assert_eq!(board.last_move(), Some(Cell::new(0, 0)));
}

#[test]
fn test_row_win() {
    let mut board = Board::new();
    // X fills row 0, O plays row 1
    play(&mut board, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    assert!(!board.is_game_over());
    board.make_move(Cell::new(3, 0), Mark::X).unwrap();
    assert!(board.is_game_over());
    assert!(!board.is_draw());
    assert_eq!(board.winner(), Some(Mark::X));
    assert_eq!(board.winning_line(), Some(LINES[0]));
}

#[test]
fn test_column_win() {
    let mut board = Board::new();
    play(&mut board, &[(3, 3), (2, 0), (0, 0), (2, 1), (1, 3), (2, 2), (0, 3), (2, 3)]);
    assert_eq!(board.winner(), Some(Mark::O));
    assert_eq!(board.winning_line(), Some(LINES[6]));
}

#[test]
fn test_anti_diagonal_win() {
    let mut board = Board::new();
    play(&mut board, &[(0, 3), (0, 0), (1, 2), (1, 0), (2, 1), (3, 3), (3, 0)]);
    assert_eq!(board.winner(), Some(Mark::X));
    assert_eq!(board.winning_line(), Some(LINES[9]));
}

#[test]
fn test_short_diagonal_does_not_win() {
    let mut board = Board::new();
    // X on the 3-long diagonal (1,0),(2,1),(3,2) plus (0,3)
    play(&mut board, &[(1, 0), (0, 0), (2, 1), (0, 1), (3, 2), (3, 3)]);
    assert!(!board.is_game_over());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_full_board_draw() {
    let mut board = Board::new();
    // X O X O / X O X O / O X O X / O X O X, played row by row
    let layout = [
        [Mark::X, Mark::O, Mark::X, Mark::O],
        [Mark::X, Mark::O, Mark::X, Mark::O],
        [Mark::O, Mark::X, Mark::O, Mark::X],
        [Mark::O, Mark::X, Mark::O, Mark::X],
    ];
    for (row, marks) in layout.iter().enumerate() {
        for (col, &mark) in marks.iter().enumerate() {
            board.make_move(Cell::new(col as u8, row as u8), mark).unwrap();
        }
    }
    assert!(board.is_game_over());
    assert!(board.is_draw());
    assert_eq!(board.winner(), None);
    assert!(board.free_cells().is_empty());
}

#[test]
fn test_history_in_move_order() {
    let mut board = Board::new();
    play(&mut board, &[(3, 1), (0, 2), (2, 2)]);
    let history: Vec<_> = board.history().collect();
    assert_eq!(
        history,
        vec![
            (Cell::new(3, 1), Mark::X),
            (Cell::new(0, 2), Mark::O),
            (Cell::new(2, 2), Mark::X),
        ]
    );
}

#[test]
fn test_move_undo_round_trip_terminal() {
    let mut board = Board::new();
    play(&mut board, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    let before = board.clone();

    board.make_move(Cell::new(3, 0), Mark::X).unwrap();
    assert!(board.is_game_over());
    board.undo_move().unwrap();
    assert_eq!(board, before);
    assert!(!board.is_game_over());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_random_playout_invariants() {
    let mut rng = StdRng::seed_from_u64(44);
    for _ in 0..200 {
        let mut board = Board::new();
        let mut mark = if rng.random_range(0..2) == 0 { Mark::X } else { Mark::O };

        while !board.is_game_over() {
            let free: Vec<Cell> = board.free_cells().iter().collect();
            assert_eq!(free.len(), TOTAL_CELLS - board.move_count());

            // Every free cell must round-trip cleanly
            for &cell in &free {
                let before = board.clone();
                board.make_move(cell, mark).unwrap();
                board.undo_move().unwrap();
                assert_eq!(board, before);
            }

            let cell = free[rng.random_range(0..free.len())];
            board.make_move(cell, mark).unwrap();
            mark = mark.opponent();

            let occupied = (0..TOTAL_CELLS)
                .filter(|&i| !board.get(Cell::from_index(i)).is_empty())
                .count();
            assert_eq!(occupied, board.move_count());

            let played: CellSet = board.history().map(|(cell, _)| cell).collect();
            assert_eq!(played.len(), board.move_count());
            assert!(board.free_cells().iter().all(|c| !played.contains(c)));
        }

        assert_eq!(board.is_draw(), board.winner().is_none());
        assert_eq!(board.is_draw(), board.winning_line().is_none());
    }
}
