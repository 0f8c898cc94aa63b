//! Engine-vs-engine games and exhaustive checks on near-final positions

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tictactoe4::{
    AIEngine, Board, Cell, Difficulty, Game, GameStatus, Mark, Player, SearchType,
};

fn cells(seq: &[(u8, u8)]) -> Vec<Cell> {
    seq.iter().map(|&(c, r)| Cell::new(c, r)).collect()
}

/// Plays X (first) against O until the game ends.
fn play_out(x: Difficulty, o: Difficulty) -> Game {
    let mut game = Game::new(
        Player::computer(Mark::X, "X", x.budget()),
        Player::computer(Mark::O, "O", o.budget()),
    );
    game.run_until_input().unwrap();
    assert!(game.is_over());
    game
}

fn history(game: &Game) -> Vec<Cell> {
    game.board().history().map(|(cell, _)| cell).collect()
}

#[test]
fn test_hard_vs_hard_is_a_draw() {
    let game = play_out(Difficulty::Hard, Difficulty::Hard);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(
        history(&game),
        cells(&[
            (0, 0), (0, 3), (0, 1), (1, 2), (1, 1), (2, 1), (3, 0), (0, 2),
            (1, 0), (2, 0), (2, 2), (3, 3), (1, 3), (2, 3), (3, 1), (3, 2),
        ])
    );
}

#[test]
fn test_medium_vs_medium_move_by_move() {
    // (move, nodes, cutoff, max prunes, min prunes)
    let expected: [((u8, u8), u64, bool, u64, u64); 16] = [
        ((0, 0), 0, false, 0, 0),
        ((0, 3), 3198, true, 49, 332),
        ((0, 1), 0, false, 0, 0),
        ((1, 2), 3204, true, 69, 57),
        ((0, 2), 3200, true, 46, 147),
        ((2, 1), 3188, true, 57, 781),
        ((1, 3), 3186, true, 77, 628),
        ((1, 1), 3183, true, 9, 51),
        ((3, 0), 1292, false, 24, 28),
        ((1, 0), 727, false, 0, 12),
        ((2, 0), 175, false, 6, 0),
        ((2, 2), 81, false, 0, 0),
        ((2, 3), 13, false, 0, 0),
        ((3, 1), 7, false, 0, 0),
        ((3, 2), 1, false, 0, 0),
        ((3, 3), 1, false, 0, 0),
    ];

    let mut board = Board::new();
    let mut engines = [
        AIEngine::with_difficulty(Difficulty::Medium),
        AIEngine::with_difficulty(Difficulty::Medium),
    ];
    let marks = [Mark::X, Mark::O];

    for (ply, &((c, r), nodes, cutoff, max_prunes, min_prunes)) in expected.iter().enumerate() {
        let side = ply % 2;
        let result = engines[side].get_move_with_stats(&mut board, marks[side]);
        let cell = result.best_move.unwrap();

        assert_eq!(cell, Cell::new(c, r), "ply {ply}");
        assert_eq!(result.stats.nodes, nodes, "ply {ply}");
        assert_eq!(result.stats.cutoff, cutoff, "ply {ply}");
        assert_eq!(result.stats.max_prunes, max_prunes, "ply {ply}");
        assert_eq!(result.stats.min_prunes, min_prunes, "ply {ply}");
        assert_eq!(result.turn as usize, ply / 2 + 1);
        if ply == 0 || ply == 2 {
            assert_eq!(result.search_type, SearchType::Opening);
        }

        board.make_move(cell, marks[side]).unwrap();
    }

    assert!(board.is_draw());
    assert_eq!(engines[0].searches(), 6);
    assert_eq!(engines[1].searches(), 8);
}

#[test]
fn test_easy_vs_easy_second_player_wins() {
    let game = play_out(Difficulty::Easy, Difficulty::Easy);
    assert_eq!(
        history(&game),
        cells(&[
            (0, 0), (0, 3), (0, 1), (1, 2), (0, 2), (2, 1),
            (1, 1), (2, 2), (2, 0), (1, 0), (3, 3), (3, 0),
        ])
    );
    match game.status() {
        GameStatus::Won { winner, line } => {
            assert_eq!(winner, Mark::O);
            // Anti-diagonal
            assert_eq!(line.to_vec(), cells(&[(0, 3), (1, 2), (2, 1), (3, 0)]));
        }
        other => panic!("expected O to win, got {other:?}"),
    }
}

#[test]
fn test_hard_beats_easy_either_order() {
    let game = play_out(Difficulty::Hard, Difficulty::Easy);
    assert_eq!(game.board().winner(), Some(Mark::X));
    assert_eq!(game.board().move_count(), 11);

    let game = play_out(Difficulty::Easy, Difficulty::Hard);
    assert_eq!(game.board().winner(), Some(Mark::O));
    assert_eq!(game.board().move_count(), 8);
}

#[test]
fn test_hard_blocks_open_row() {
    // O threatens row 1 at (3, 1)
    let mut board = Board::new();
    let xs = [(0, 0), (1, 2), (3, 3)];
    let os = [(0, 1), (1, 1), (2, 1)];
    for (&(xc, xr), &(oc, or)) in xs.iter().zip(os.iter()) {
        board.make_move(Cell::new(xc, xr), Mark::X).unwrap();
        board.make_move(Cell::new(oc, or), Mark::O).unwrap();
    }

    let mut hard = AIEngine::with_difficulty(Difficulty::Hard);
    let result = hard.get_move_with_stats(&mut board, Mark::X);
    assert_eq!(result.best_move, Some(Cell::new(3, 1)));
    assert!(!result.stats.cutoff);
    assert_eq!(result.stats.nodes, 182_590);
    assert_eq!(result.stats.max_prunes, 894);
    assert_eq!(result.stats.min_prunes, 39_534);

    let mut easy = AIEngine::with_difficulty(Difficulty::Easy);
    let result = easy.get_move_with_stats(&mut board, Mark::X);
    assert_eq!(result.best_move, Some(Cell::new(2, 2)));
    assert!(result.stats.cutoff);
    assert_eq!(result.stats.nodes, 59);
}

/// Exact game value for `side` to move, +1 win, 0 draw, -1 loss.
fn negamax(board: &mut Board, side: Mark) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == side { 1 } else { -1 };
    }
    if board.is_draw() {
        return 0;
    }
    let mut best = -2;
    for cell in board.free_cells() {
        board.make_move(cell, side).unwrap();
        best = best.max(-negamax(board, side.opponent()));
        board.undo_move().unwrap();
    }
    best
}

/// Value of playing `cell` for `side`.
fn move_value(board: &mut Board, cell: Cell, side: Mark) -> i32 {
    board.make_move(cell, side).unwrap();
    let value = -negamax(board, side.opponent());
    board.undo_move().unwrap();
    value
}

/// Random legal game stopped with `empty` cells left; `None` if it ended first.
fn random_position(rng: &mut StdRng, empty: usize) -> Option<(Board, Mark)> {
    let mut board = Board::new();
    let mut side = Mark::X;
    while board.free_cells().len() > empty {
        let free: Vec<Cell> = board.free_cells().iter().collect();
        let cell = free[rng.random_range(0..free.len())];
        board.make_move(cell, side).unwrap();
        if board.is_game_over() {
            return None;
        }
        side = side.opponent();
    }
    Some((board, side))
}

#[test]
fn test_hard_never_picks_a_worse_move_near_the_end() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut checked = 0;

    for empty in [1, 2] {
        for _ in 0..400 {
            let Some((mut board, side)) = random_position(&mut rng, empty) else {
                continue;
            };

            let best = board
                .free_cells()
                .iter()
                .map(|cell| move_value(&mut board, cell, side))
                .max()
                .unwrap();

            let mut engine = AIEngine::with_difficulty(Difficulty::Hard);
            let result = engine.get_move_with_stats(&mut board, side);
            let chosen = result.best_move.unwrap();

            assert!(board.is_empty(chosen));
            assert!(!result.stats.cutoff);
            assert_eq!(move_value(&mut board, chosen, side), best, "{board}");
            assert_eq!(result.score, best);
            checked += 1;
        }
    }

    assert!(checked > 100, "only {checked} positions survived");
}
