//! 既知の計数値（OEIS A390833 の値と一致）

use knightpath_core::{BoardError, CountError, count_hamiltonian_paths};

fn count(rows: usize, cols: usize) -> u64 {
    count_hamiltonian_paths(rows, cols).unwrap()
}

#[test]
fn golden_small_boards() {
    assert_eq!(count(3, 4), 8);
    assert_eq!(count(4, 5), 82);
    assert_eq!(count(4, 6), 744);
    assert_eq!(count(5, 5), 864);
    assert_eq!(count(3, 7), 52);
    assert_eq!(count(3, 8), 396);
}

#[test]
fn golden_boards_without_paths() {
    for k in 3..=6 {
        assert_eq!(count(k, 1), 0, "{k}x1");
        assert_eq!(count(k, 2), 0, "{k}x2");
    }
    assert_eq!(count(3, 3), 0);
    assert_eq!(count(3, 5), 0);
    assert_eq!(count(3, 6), 0);
    assert_eq!(count(4, 4), 0);
    assert_eq!(count(1, 1), 0);
}

#[test]
fn golden_5x6() {
    assert_eq!(count(5, 6), 18784);
    assert_eq!(count(6, 5), 18784);
}

#[test]
#[cfg_attr(debug_assertions, ignore = "slow without optimizations; run in release")]
fn golden_6x6() {
    assert_eq!(count(6, 6), 3318960);
}

#[test]
fn transposed_boards_agree() {
    for (rows, cols) in [(3, 4), (4, 5), (3, 7), (2, 5), (1, 6)] {
        assert_eq!(count(rows, cols), count(cols, rows), "{rows}x{cols}");
    }
}

#[test]
fn oversized_board_is_rejected() {
    for (rows, cols) in [(5, 13), (13, 5), (9, 8), (65, 1)] {
        match count_hamiltonian_paths(rows, cols) {
            Err(CountError::Board(BoardError::TooLarge { cells, .. })) => {
                assert_eq!(cells, rows * cols);
            }
            other => panic!("{rows}x{cols}: expected TooLarge, got {other:?}"),
        }
    }
}

#[test]
fn empty_dimension_is_rejected() {
    assert!(matches!(
        count_hamiltonian_paths(0, 4),
        Err(CountError::Board(BoardError::EmptyDimension { .. }))
    ));
}
