//! Board tests: grid access, collision rules, row flagging and compaction

use tetrominos::core::{Board, Piece, SimpleRng};
use tetrominos::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, 1);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(EMPTY), "cell ({}, {})", x, y);
        }
    }
    assert!(!board.has_pending_rows());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, 5));
    assert_eq!(board.get(5, 10), Some(5));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(0, 0, 214));
    assert_eq!(board.get(0, 0), Some(214));

    assert!(board.set(5, 10, EMPTY));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(10, 0, 1));
    assert!(!board.set(0, -1, 1));
}

#[test]
fn test_floor_and_walls_block_but_sky_does_not() {
    let board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        assert!(!board.is_blocked(x, -4));
        assert!(board.is_blocked(x, BOARD_HEIGHT as i8));
    }
    assert!(board.is_blocked(-1, 0));
    assert!(board.is_blocked(BOARD_WIDTH as i8, 0));
}

#[test]
fn test_row_nine_of_ten_is_not_flagged() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, 2);
    }
    assert!(!board.row_is_full(19));
    assert!(!board.mark_full_rows());
}

#[test]
fn test_adjacent_rows_compact_together() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    fill_row(&mut board, 18);
    board.set(7, 17, 6);

    assert!(board.mark_full_rows());
    assert_eq!(board.compact_pending_rows(), 2);
    assert_eq!(board.get(7, 19), Some(6));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_four_rows_at_top_and_bottom() {
    let mut board = Board::new();
    fill_row(&mut board, 0);
    fill_row(&mut board, 1);
    fill_row(&mut board, 18);
    fill_row(&mut board, 19);
    board.set(3, 10, 4);

    board.mark_full_rows();
    assert_eq!(board.compact_pending_rows(), 4);
    assert_eq!(board.get(3, 12), Some(4));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_piece_stamp_roundtrip_leaves_board_untouched() {
    let mut board = Board::new();
    board.set(0, 19, 3);
    let before = board.clone();

    let piece = Piece::new(PieceKind::J, 2, 4, 10);
    board.stamp_piece_cells(&piece);
    assert_eq!(board.filled_count(), 5);
    board.clear_piece_cells(&piece);
    assert_eq!(board, before);
}

/// Reference compaction: drop flagged rows, keep survivors in order.
fn compact_reference(rows: &[[u8; 10]], pending: &[bool]) -> Vec<[u8; 10]> {
    let kept: Vec<[u8; 10]> = rows
        .iter()
        .zip(pending)
        .filter(|(_, &p)| !p)
        .map(|(r, _)| *r)
        .collect();
    let mut out = vec![[0u8; 10]; rows.len() - kept.len()];
    out.extend(kept);
    out
}

#[test]
fn test_randomized_compaction_matches_reference() {
    let mut rng = SimpleRng::new(2024);

    for _ in 0..300 {
        let mut board = Board::new();
        let mut rows = vec![[0u8; 10]; BOARD_HEIGHT as usize];

        for y in 0..BOARD_HEIGHT as usize {
            let full = rng.next_range(3) == 0;
            for x in 0..BOARD_WIDTH as usize {
                let color = if full || rng.next_range(2) == 0 {
                    1 + rng.next_range(7) as u8
                } else {
                    EMPTY
                };
                rows[y][x] = color;
                board.set(x as i8, y as i8, color);
            }
        }

        let pending: Vec<bool> = rows.iter().map(|r| r.iter().all(|&c| c != EMPTY)).collect();
        board.mark_full_rows();
        for (y, &p) in pending.iter().enumerate() {
            assert_eq!(board.is_pending(y), p);
        }

        let removed = board.compact_pending_rows();
        assert_eq!(removed, pending.iter().filter(|&&p| p).count());

        let expected = compact_reference(&rows, &pending);
        let mut grid = [[0u8; 10]; 20];
        board.write_grid(&mut grid);
        assert_eq!(grid.to_vec(), expected);
        assert!(!board.has_pending_rows());
    }
}
