//! Core traits and types for dense linear algebra
//!
//! This crate provides the foundations shared by the linear algebra crates:
//! the element capability trait, shape introspection, the owned working grid
//! used by elimination algorithms and the operand type accepted at the API
//! boundary.
//!
//! # Overview
//!
//! - [`Field`]: arithmetic and magnitude comparison required of matrix elements
//! - [`Shape`] / [`ShapeClass`]: dimension lengths and their closed classification
//! - [`Grid`]: row-major storage with O(1) row swaps through row handles
//! - [`Operand`]: a scalar or an n-dimensional array
//!
//! # Example
//!
//! ```rust
//! use linalg_core::{Operand, ShapeClass};
//!
//! let m = Operand::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(m.class(), ShapeClass::Matrix { rows: 2, cols: 2 });
//! assert_eq!(m.shape().to_string(), "[2, 2]");
//! ```

pub mod error;
pub mod grid;
pub mod numeric;
pub mod operand;
pub mod shape;

// Re-export core types
pub use error::{Error, Result, ShapeErrorKind};
pub use grid::Grid;
pub use numeric::Field;
pub use operand::Operand;
pub use shape::{Shape, ShapeClass};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Error, Field, Grid, Operand, Result, Shape, ShapeClass};
}
