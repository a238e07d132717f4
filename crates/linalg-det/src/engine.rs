//! Determinant by Gaussian elimination with row pivoting
//!
//! The engine owns its working grid and reduces it in place. Each column
//! contributes its pivot to a running product, each row swap flips the sign
//! of that product, and a zero pivot ends elimination early with a zero
//! determinant.
//!
//! Sizes 1 and 2 are answered directly. An empty grid has determinant one,
//! the empty product.

use crate::options::Pivoting;
use linalg_core::{Field, Grid};
use tracing::{debug, trace};

/// Determinant of a square working grid
///
/// The grid is consumed; it is mutated by row swaps, normalization and
/// elimination. Never fails for square input. Singularity is reported as
/// `T::zero()`.
///
/// # Panics
///
/// Debug builds panic if the grid is not square.
pub(crate) fn determinant<T: Field>(mut grid: Grid<T>, pivoting: Pivoting) -> T {
    debug_assert!(grid.is_square(), "determinant requires a square grid");
    let n = grid.n_rows();

    match n {
        0 => return T::one(),
        1 => return grid[(0, 0)].clone(),
        2 => {
            return grid[(0, 0)].clone() * grid[(1, 1)].clone()
                - grid[(0, 1)].clone() * grid[(1, 0)].clone()
        }
        _ => {}
    }

    let mut det = T::one();

    for j in 0..n {
        let Some(k) = select_pivot(&grid, j, pivoting) else {
            debug!(column = j, n, "zero pivot, matrix is singular");
            return T::zero();
        };

        if k != j {
            trace!(from = k, to = j, "swapping rows");
            grid.swap_rows(k, j);
            det = -det;
        }

        let pivot = grid[(j, j)].clone();
        det = det * pivot.clone();

        // Columns left of j are already zero in the pivot row
        for value in &mut grid.row_mut(j)[j..] {
            *value = value.clone() / pivot.clone();
        }

        for k in (j + 1)..n {
            let (pivot_row, row) = grid.row_pair_mut(j, k);
            let factor = row[j].clone();
            for (value, p) in row.iter_mut().zip(pivot_row.iter()) {
                *value = value.clone() - factor.clone() * p.clone();
            }
        }
    }

    det
}

/// Row index in `[col, n)` to pivot on for column `col`
///
/// Returns `None` when the selected entry is exactly zero.
fn select_pivot<T: Field>(grid: &Grid<T>, col: usize, pivoting: Pivoting) -> Option<usize> {
    let n = grid.n_rows();

    match pivoting {
        Pivoting::Partial => {
            let mut best = col;
            for i in (col + 1)..n {
                if grid[(i, col)].magnitude_gt(&grid[(best, col)]) {
                    best = i;
                }
            }
            (!grid[(best, col)].is_zero()).then_some(best)
        }
        Pivoting::FirstNonZero => (col..n).find(|&i| !grid[(i, col)].is_zero()),
    }
}
