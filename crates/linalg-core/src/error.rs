//! Error types for linear algebra operations
//!
//! Provides a unified error type for all linalg crates.

use crate::shape::Shape;
use std::fmt;
use thiserror::Error;

/// Which shape requirement an input failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeErrorKind {
    /// Vector of length other than 1, or a non-square matrix
    NotSquare,
    /// Input of rank greater than 2
    NotTwoDimensional,
}

impl fmt::Display for ShapeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare => write!(f, "square"),
            Self::NotTwoDimensional => write!(f, "two dimensional"),
        }
    }
}

/// Core error type for linear algebra operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input shape is not eligible for the requested operation
    #[error("Matrix must be {kind} (size: {shape})")]
    Shape { kind: ShapeErrorKind, shape: Shape },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an input that must be square
    pub fn not_square(shape: Shape) -> Self {
        Self::Shape {
            kind: ShapeErrorKind::NotSquare,
            shape,
        }
    }

    /// Create an error for an input of rank greater than 2
    pub fn not_two_dimensional(shape: Shape) -> Self {
        Self::Shape {
            kind: ShapeErrorKind::NotTwoDimensional,
            shape,
        }
    }

    /// Create an error for nested rows of unequal length
    pub fn ragged_rows(row: usize, expected: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "Ragged rows: row {row} has {actual} columns, expected {expected}"
        ))
    }

    /// Whether this error was raised by shape validation
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }

    /// The offending shape, if this is a shape error
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            Self::Shape { shape, .. } => Some(shape),
            _ => None,
        }
    }
}
