//! Determinants of square matrices
//!
//! Facade over the workspace crates:
//!
//! - [`linalg_core`]: element trait, shapes, working grids and operands
//! - [`linalg_det`]: shape classification and the elimination engine
//!
//! ```rust
//! use robust_linalg::prelude::*;
//!
//! let m = Operand::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(det(&m).unwrap(), -2.0);
//! ```

pub use linalg_core;
pub use linalg_det;

pub use linalg_core::{Error, Field, Grid, Operand, Result, Shape, ShapeClass};
pub use linalg_det::{det, det_rows, Determinant, Pivoting};

/// Prelude module for convenient imports
pub mod prelude {
    pub use linalg_core::prelude::*;
    pub use linalg_det::{det, det_rows, Determinant, Pivoting};
}
