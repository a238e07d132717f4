//! Shape classification for determinant inputs
//!
//! Decides whether an operand is determinant-eligible and, for square
//! matrices, extracts a private working copy for the engine. The caller's
//! operand is only ever read.

use linalg_core::{Error, Grid, Operand, Result, ShapeClass};

/// A determinant-eligible input
#[derive(Debug, Clone, PartialEq)]
pub enum Classified<T> {
    /// Rank-0 input; its determinant is the value itself
    Scalar(T),
    /// Single-element vector; reduces to its sole entry
    Element(T),
    /// Square matrix, copied into a working grid the engine may mutate
    Square(Grid<T>),
}

impl<T> Classified<T> {
    /// Get the name of the classified case
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Element(_) => "element",
            Self::Square(_) => "square",
        }
    }
}

/// Classify an operand by shape
///
/// # Errors
///
/// Returns a shape error, carrying the offending shape, for vectors whose
/// length is not 1, non-square matrices and inputs of rank greater than 2.
pub fn classify<T: Clone>(x: &Operand<T>) -> Result<Classified<T>> {
    let shape = x.shape();

    match shape.class() {
        ShapeClass::Scalar => x
            .first_element()
            .map(Classified::Scalar)
            .ok_or_else(|| Error::InvalidInput("scalar operand holds no value".to_string())),
        ShapeClass::Vector { len: 1 } => x
            .first_element()
            .map(Classified::Element)
            .ok_or_else(|| Error::not_square(shape)),
        ShapeClass::Vector { .. } => Err(Error::not_square(shape)),
        ShapeClass::Matrix { rows, cols } if rows == cols => x
            .to_grid()
            .map(Classified::Square)
            .ok_or_else(|| Error::not_square(shape)),
        ShapeClass::Matrix { .. } => Err(Error::not_square(shape)),
        ShapeClass::Tensor { .. } => Err(Error::not_two_dimensional(shape)),
    }
}

/// Classify an already materialized grid
///
/// Takes ownership, so no further copy is made.
pub fn classify_grid<T>(grid: Grid<T>) -> Result<Classified<T>> {
    if grid.is_square() {
        Ok(Classified::Square(grid))
    } else {
        Err(Error::not_square(grid.shape()))
    }
}
