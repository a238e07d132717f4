//! Matrix determinants
//!
//! This crate computes the determinant of a scalar, a single-element vector
//! or a square matrix. Inputs are classified by shape first; square matrices
//! are then copied and reduced by Gaussian elimination with row pivoting.
//!
//! # Overview
//!
//! - **Classifier**: validates the shape of an [`Operand`] and extracts a
//!   private working [`Grid`](linalg_core::Grid)
//! - **Engine**: eliminates the working grid column by column, tracking the
//!   pivot product and the sign of row swaps
//!
//! Scalars are their own determinant, and so is the single entry of a
//! one-element vector. Vectors of any other length, non-square matrices and
//! inputs of rank greater than 2 are rejected with a shape error.
//!
//! Elements can be any [`Field`]: `f32`, `f64`, `Complex<f32>`,
//! `Complex<f64>` or a user type providing exact arithmetic.
//!
//! # Examples
//!
//! ```rust
//! use linalg_core::Operand;
//! use linalg_det::det;
//!
//! let m = Operand::from_rows(vec![
//!     vec![-2.0, 2.0, 3.0],
//!     vec![-1.0, 1.0, 3.0],
//!     vec![2.0, 0.0, -1.0],
//! ]).unwrap();
//! assert_eq!(det(&m).unwrap(), 6.0);
//!
//! assert_eq!(linalg_det::det_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap(), -2.0);
//! ```
//!
//! Shape errors carry the offending shape:
//!
//! ```rust
//! use linalg_core::Operand;
//!
//! let v = Operand::from(vec![1.0, 2.0, 3.0]);
//! let err = linalg_det::det(&v).unwrap_err();
//! assert_eq!(err.to_string(), "Matrix must be square (size: [3])");
//! ```

pub mod classifier;
mod determinant;
mod engine;
mod options;

// Re-exports
pub use classifier::{classify, classify_grid, Classified};
pub use determinant::Determinant;
pub use options::Pivoting;

use linalg_core::{Field, Grid, Operand, Result};

/// Determinant of an operand using partial pivoting
pub fn det<T: Field>(x: &Operand<T>) -> Result<T> {
    Determinant::new().compute(x)
}

/// Determinant of a matrix given as nested rows
///
/// Rows must be rectangular and the matrix square.
pub fn det_rows<T: Field>(rows: &[Vec<T>]) -> Result<T> {
    let grid = Grid::from_rows(rows.to_vec())?;
    Determinant::new().compute_grid(grid)
}
