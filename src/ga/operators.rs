//! Permutation operators for the genetic strategy.
//!
//! All operators keep boards inside the permutation space: crossover
//! output is repaired into a valid permutation, and swap mutation is
//! permutation-preserving by construction.

use rand::Rng;

use crate::board::Board;

/// Single-point crossover with first-fit permutation repair.
///
/// Cuts at a random row index in `[1, N-1]`, concatenates parent 1's
/// prefix with parent 2's suffix, then repairs duplicate columns by
/// replacing each with the smallest column not yet used. Boards of
/// size 1 have no cut point and clone parent 1.
pub fn single_point_crossover<R: Rng + ?Sized>(
    parent1: &Board,
    parent2: &Board,
    rng: &mut R,
) -> Board {
    let n = parent1.n();
    debug_assert_eq!(n, parent2.n(), "parents must have equal size");
    if n < 2 {
        return parent1.clone();
    }

    let cut = rng.random_range(1..n);
    let mut cells: Vec<i32> = Vec::with_capacity(n);
    cells.extend_from_slice(&parent1.columns()[..cut]);
    cells.extend_from_slice(&parent2.columns()[cut..]);
    first_fit_repair(&mut cells);
    Board::from_columns(&cells)
}

/// Replaces duplicate columns left to right with the smallest unused
/// column, turning an arbitrary column sequence into a permutation.
fn first_fit_repair(cells: &mut [i32]) {
    let n = cells.len();
    let mut used = vec![false; n];
    for value in cells.iter_mut() {
        let idx = *value as usize;
        if !used[idx] {
            used[idx] = true;
            continue;
        }
        let replacement = used
            .iter()
            .position(|&taken| !taken)
            .expect("a sequence of n cells cannot exhaust n columns");
        *value = replacement as i32;
        used[replacement] = true;
    }
}

/// Swaps the columns of two distinct random rows.
pub fn swap_mutation<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    let n = board.n();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    board.swap(i, j);
}

/// Fraction of rows where both boards place their queen in the same
/// column, in `[0, 1]`.
pub fn similarity(a: &Board, b: &Board) -> f64 {
    debug_assert_eq!(a.n(), b.n());
    let matches = a
        .columns()
        .iter()
        .zip(b.columns())
        .filter(|(x, y)| x == y)
        .count();
    matches as f64 / a.n() as f64
}
