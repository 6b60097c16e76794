//! Board state model shared by every strategy.
//!
//! A board is an ordered sequence of N cells; the cell at index `row`
//! holds the column of the queen placed in that row, or [`UNPLACED`]
//! for rows not yet assigned. Incremental strategies (backtracking,
//! BFS/DFS, A*) build boards row by row through the sentinel; the
//! population and value-learning strategies only ever handle complete
//! permutations of `0..N-1`.
//!
//! This module is the single source of truth for conflict detection:
//! [`Board::is_valid_placement`] and [`Board::conflicts`] define the
//! contract every strategy relies on.

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Sentinel column value for a row without a queen.
pub const UNPLACED: i32 = -1;

/// Queen placement per row, with `-1` marking unassigned rows.
///
/// Cheap to clone, structurally comparable, and hashable, so boards can
/// serve directly as keys in A*'s cost map and the reinforcement
/// strategy's action-value table. Ordering is lexicographic over the
/// cell sequence, which is what canonicalization minimizes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    cells: SmallVec<[i32; 16]>,
}

impl Board {
    /// An N-row board with every row unassigned.
    pub fn empty(n: usize) -> Self {
        Self {
            cells: smallvec::smallvec![UNPLACED; n],
        }
    }

    /// Builds a board from explicit cell values (`-1` allowed).
    pub fn from_columns(columns: &[i32]) -> Self {
        Self {
            cells: SmallVec::from_slice(columns),
        }
    }

    /// Builds a complete board from a permutation of `0..N-1`.
    pub fn from_permutation(perm: &[usize]) -> Self {
        Self {
            cells: perm.iter().map(|&c| c as i32).collect(),
        }
    }

    /// Board size N.
    pub fn n(&self) -> usize {
        self.cells.len()
    }

    /// The raw cell sequence.
    pub fn columns(&self) -> &[i32] {
        &self.cells
    }

    /// Column of the queen in `row`, or [`UNPLACED`].
    pub fn column(&self, row: usize) -> i32 {
        self.cells[row]
    }

    /// Index of the first row without a queen, if any.
    pub fn first_unplaced(&self) -> Option<usize> {
        self.cells.iter().position(|&c| c == UNPLACED)
    }

    /// True when every row has a queen.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&c| c != UNPLACED)
    }

    /// Returns a copy of this board with a queen placed at `(row, col)`.
    pub fn with_placement(&self, row: usize, col: i32) -> Self {
        let mut next = self.clone();
        next.cells[row] = col;
        next
    }

    /// Overwrites the cell at `row`.
    pub fn set(&mut self, row: usize, col: i32) {
        self.cells[row] = col;
    }

    /// Swaps the columns of two rows.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    /// Whether a queen at `(row, col)` is attacked by any queen in an
    /// earlier row.
    ///
    /// Returns `false` iff some row `r < row` holds a queen in the same
    /// column or on the same diagonal. Runs in O(row).
    pub fn is_valid_placement(&self, row: usize, col: i32) -> bool {
        for r in 0..row {
            let placed = self.cells[r];
            if placed == UNPLACED {
                continue;
            }
            if placed == col || (placed - col).abs() == (row as i32 - r as i32).abs() {
                return false;
            }
        }
        true
    }

    /// Number of attacking pairs among placed queens.
    ///
    /// Counts unordered row pairs `(i, j)` sharing a column or a
    /// diagonal; unassigned rows are skipped. For permutation boards
    /// the column term is always zero, leaving diagonal conflicts only.
    /// Runs in O(N²).
    pub fn conflicts(&self) -> usize {
        let n = self.n();
        let mut count = 0;
        for i in 0..n {
            if self.cells[i] == UNPLACED {
                continue;
            }
            for j in (i + 1)..n {
                if self.cells[j] == UNPLACED {
                    continue;
                }
                let same_column = self.cells[i] == self.cells[j];
                let same_diagonal =
                    (self.cells[i] - self.cells[j]).abs() == (j as i32 - i as i32);
                if same_column || same_diagonal {
                    count += 1;
                }
            }
        }
        count
    }

    /// True for a complete board with zero conflicts.
    pub fn is_goal(&self) -> bool {
        self.is_complete() && self.conflicts() == 0
    }

    /// True when the cells are exactly a permutation of `0..N-1`.
    pub fn is_permutation(&self) -> bool {
        let n = self.n();
        let mut seen = vec![false; n];
        for &c in &self.cells {
            if c < 0 || c as usize >= n || seen[c as usize] {
                return false;
            }
            seen[c as usize] = true;
        }
        true
    }

    /// Rotates the board 90° clockwise.
    ///
    /// A queen at `(row, col)` moves to `(col, N-1-row)`. Only defined
    /// for complete permutation boards.
    fn rotated(&self) -> Self {
        let n = self.n() as i32;
        let mut cells: SmallVec<[i32; 16]> = smallvec::smallvec![UNPLACED; self.n()];
        for (row, &col) in self.cells.iter().enumerate() {
            cells[col as usize] = n - 1 - row as i32;
        }
        Self { cells }
    }

    /// Mirrors the board left-to-right (column `c` becomes `N-1-c`).
    fn mirrored(&self) -> Self {
        let n = self.n() as i32;
        Self {
            cells: self.cells.iter().map(|&c| n - 1 - c).collect(),
        }
    }

    /// Canonical representative of this board's symmetry class.
    ///
    /// The lexicographically smallest board among the 4 rotations and
    /// their mirror images. Used by the population strategy to
    /// deduplicate symmetric solutions. Idempotent: canonicalizing a
    /// canonical board returns it unchanged.
    ///
    /// # Panics
    /// Debug-asserts that the board is a complete permutation; the
    /// geometric transforms are meaningless for partial boards.
    pub fn canonical(&self) -> Self {
        debug_assert!(self.is_permutation(), "canonical form needs a permutation");
        let mut best = self.clone();
        let mut image = self.clone();
        for turn in 0..4 {
            if turn > 0 {
                image = image.rotated();
            }
            let mirror = image.mirrored();
            if image < best {
                best = image.clone();
            }
            if mirror < best {
                best = mirror;
            }
        }
        best
    }
}

/// Samples a uniformly random permutation board of size `n`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Board {
    let mut cols: Vec<i32> = (0..n as i32).collect();
    cols.shuffle(rng);
    Board::from_columns(&cols)
}

/// Total number of N-Queens solutions for board sizes with a
/// precomputed entry.
///
/// Known for N ∈ {1, 4, 8, 10, 12}; other sizes return `None`, which
/// disables the genetic strategy's exact early-stop condition.
pub fn known_solution_count(n: usize) -> Option<usize> {
    match n {
        1 => Some(1),
        4 => Some(2),
        8 => Some(92),
        10 => Some(724),
        12 => Some(14_200),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_empty_board_is_all_unplaced() {
        let board = Board::empty(5);
        assert_eq!(board.n(), 5);
        assert_eq!(board.first_unplaced(), Some(0));
        assert!(!board.is_complete());
        assert_eq!(board.conflicts(), 0);
    }

    #[test]
    fn test_known_four_queens_solution() {
        let board = Board::from_permutation(&[1, 3, 0, 2]);
        assert!(board.is_permutation());
        assert!(board.is_goal());
        assert_eq!(board.conflicts(), 0);
    }

    #[test]
    fn test_column_conflict_detected() {
        let board = Board::from_columns(&[2, 2, UNPLACED]);
        assert_eq!(board.conflicts(), 1);
        assert!(!board.is_goal());
    }

    #[test]
    fn test_diagonal_conflict_detected() {
        // Queens at (0,0) and (2,2) share the main diagonal.
        let board = Board::from_columns(&[0, UNPLACED, 2]);
        assert_eq!(board.conflicts(), 1);
    }

    #[test]
    fn test_valid_placement_rejects_column_and_diagonals() {
        let board = Board::from_columns(&[1, UNPLACED, UNPLACED, UNPLACED]);
        assert!(!board.is_valid_placement(1, 1)); // same column
        assert!(!board.is_valid_placement(1, 0)); // adjacent diagonal
        assert!(!board.is_valid_placement(1, 2)); // adjacent diagonal
        assert!(board.is_valid_placement(1, 3));
    }

    #[test]
    fn test_valid_placement_ignores_later_rows() {
        let board = Board::from_columns(&[UNPLACED, UNPLACED, 0]);
        // Only rows before `row` are consulted.
        assert!(board.is_valid_placement(1, 0));
    }

    #[test]
    fn test_with_placement_leaves_original_untouched() {
        let board = Board::empty(4);
        let next = board.with_placement(0, 2);
        assert_eq!(board.column(0), UNPLACED);
        assert_eq!(next.column(0), 2);
        assert_eq!(next.first_unplaced(), Some(1));
    }

    #[test]
    fn test_is_permutation() {
        assert!(Board::from_permutation(&[3, 1, 0, 2]).is_permutation());
        assert!(!Board::from_columns(&[0, 0, 1, 2]).is_permutation());
        assert!(!Board::from_columns(&[0, 1, UNPLACED, 3]).is_permutation());
        assert!(!Board::from_columns(&[0, 1, 2, 4]).is_permutation());
    }

    #[test]
    fn test_rotation_has_period_four() {
        let board = Board::from_permutation(&[1, 3, 0, 2]);
        let back = board.rotated().rotated().rotated().rotated();
        assert_eq!(back, board);
    }

    #[test]
    fn test_rotation_preserves_goal() {
        let board = Board::from_permutation(&[2, 0, 3, 1]);
        assert!(board.rotated().is_goal());
        assert!(board.mirrored().is_goal());
    }

    #[test]
    fn test_canonical_identifies_symmetric_solutions() {
        // The two 4-queens solutions are mirror images of each other.
        let a = Board::from_permutation(&[1, 3, 0, 2]);
        let b = Board::from_permutation(&[2, 0, 3, 1]);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_canonical_idempotent() {
        let board = Board::from_permutation(&[2, 0, 3, 1]);
        let canon = board.canonical();
        assert_eq!(canon.canonical(), canon);
    }

    #[test]
    fn test_known_solution_counts() {
        assert_eq!(known_solution_count(1), Some(1));
        assert_eq!(known_solution_count(4), Some(2));
        assert_eq!(known_solution_count(8), Some(92));
        assert_eq!(known_solution_count(7), None);
    }

    #[test]
    fn test_random_permutation_is_permutation() {
        let mut rng = create_rng(42);
        for n in 1..=12 {
            let board = random_permutation(n, &mut rng);
            assert!(board.is_permutation(), "not a permutation: {board:?}");
        }
    }

    proptest! {
        /// Placement validity depends on the set of placed queens, not
        /// on any placement order: it must agree with a pairwise attack
        /// check against every earlier queen.
        #[test]
        fn prop_valid_placement_matches_pairwise_check(
            cols in proptest::collection::vec(0i32..8, 1..8),
            col in 0i32..8,
        ) {
            let row = cols.len();
            let mut cells = cols.clone();
            cells.push(UNPLACED);
            let board = Board::from_columns(&cells);

            let attacked = cols.iter().enumerate().any(|(r, &c)| {
                c == col || (c - col).abs() == (row as i32 - r as i32).abs()
            });
            prop_assert_eq!(board.is_valid_placement(row, col), !attacked);
        }

        /// Canonicalization maps every symmetry image of a board to the
        /// same representative, and is idempotent.
        #[test]
        fn prop_canonical_invariant_under_symmetry(seed in 0u64..500) {
            let mut rng = create_rng(seed);
            let board = random_permutation(6, &mut rng);
            let canon = board.canonical();

            prop_assert_eq!(canon.canonical(), canon.clone());
            prop_assert_eq!(board.rotated().canonical(), canon.clone());
            prop_assert_eq!(board.mirrored().canonical(), canon.clone());
            prop_assert_eq!(board.rotated().mirrored().canonical(), canon);
        }

        /// The board symmetries preserve the conflict count: attacking
        /// pairs stay attacking pairs under rotation and mirroring.
        #[test]
        fn prop_symmetries_preserve_conflicts(seed in 0u64..200) {
            let mut rng = create_rng(seed);
            let board = random_permutation(7, &mut rng);
            let conflicts = board.conflicts();
            prop_assert_eq!(board.rotated().conflicts(), conflicts);
            prop_assert_eq!(board.mirrored().conflicts(), conflicts);
        }
    }
}
