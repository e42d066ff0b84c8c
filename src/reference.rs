//! Brute-force permutation counter used to cross-check the solver

use crate::board::BoardSize;
use crate::error::{QueensError, QueensResult};
use itertools::Itertools;

/// Largest board the permutation counter accepts (10! placements)
pub const MAX_REFERENCE_SIZE: u32 = 10;

/// Count solutions by trying every assignment of distinct columns to rows.
///
/// Each permutation already has one queen per row and column, so only the
/// diagonals need checking.
pub fn count_by_permutation(size: BoardSize) -> QueensResult<u64> {
    let n = size.get();
    if n > MAX_REFERENCE_SIZE {
        return Err(QueensError::ReferenceTooLarge {
            size: n,
            max: MAX_REFERENCE_SIZE,
        });
    }

    let n = n as usize;
    let count = (0..n)
        .permutations(n)
        .filter(|columns| is_non_attacking(columns))
        .count();

    Ok(count as u64)
}

/// True when no two queens (`columns[row]`) share a diagonal
pub fn is_non_attacking(columns: &[usize]) -> bool {
    columns
        .iter()
        .enumerate()
        .tuple_combinations()
        .all(|((r1, &c1), (r2, &c2))| r1.abs_diff(r2) != c1.abs_diff(c2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;

    #[test]
    fn test_reference_known_counts() {
        let expected = [1, 0, 0, 2, 10, 4, 40, 92];
        for (i, &count) in expected.iter().enumerate() {
            let size = BoardSize::new(i as u32 + 1).unwrap();
            assert_eq!(count_by_permutation(size).unwrap(), count);
        }
    }

    #[test]
    fn test_reference_matches_solver() {
        for n in 1..=8 {
            let size = BoardSize::new(n).unwrap();
            assert_eq!(
                count_by_permutation(size).unwrap(),
                Solver::new(size).count(),
                "board size {}",
                n
            );
        }
    }

    #[test]
    fn test_reference_rejects_large_boards() {
        let size = BoardSize::new(11).unwrap();
        assert_eq!(
            count_by_permutation(size),
            Err(QueensError::ReferenceTooLarge { size: 11, max: 10 })
        );
    }

    #[test]
    fn test_is_non_attacking() {
        assert!(is_non_attacking(&[1, 3, 0, 2]));
        assert!(is_non_attacking(&[2, 0, 3, 1]));
        assert!(!is_non_attacking(&[0, 1, 2, 3]));
        assert!(!is_non_attacking(&[3, 2, 1, 0]));
        assert!(is_non_attacking(&[]));
        assert!(is_non_attacking(&[0]));
    }
}
