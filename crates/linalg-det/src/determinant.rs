//! Configured determinant computation

use crate::classifier::{classify, classify_grid, Classified};
use crate::engine;
use crate::options::Pivoting;
use linalg_core::{Field, Grid, Operand, Result};
use tracing::{debug, instrument};

/// Determinant calculator
///
/// Holds the elimination settings. The default uses partial pivoting.
///
/// ```rust
/// use linalg_core::Operand;
/// use linalg_det::{Determinant, Pivoting};
///
/// let m = Operand::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let det = Determinant::new().with_pivoting(Pivoting::FirstNonZero);
/// assert_eq!(det.compute(&m).unwrap(), -2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Determinant {
    pivoting: Pivoting,
}

impl Determinant {
    /// Create a calculator with partial pivoting
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pivot selection rule
    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }

    pub fn pivoting(&self) -> Pivoting {
        self.pivoting
    }

    /// Determinant of a scalar, single-element vector or square matrix
    ///
    /// The operand is never modified; square matrices are copied before
    /// elimination.
    ///
    /// # Errors
    ///
    /// Returns a shape error for vectors of length other than 1, non-square
    /// matrices and inputs of rank greater than 2.
    #[instrument(skip_all, fields(shape = %x.shape(), pivoting = self.pivoting.name()))]
    pub fn compute<T: Field>(&self, x: &Operand<T>) -> Result<T> {
        let classified = classify(x)?;
        Ok(self.resolve(classified))
    }

    /// Determinant of an owned grid, which must be square
    pub fn compute_grid<T: Field>(&self, grid: Grid<T>) -> Result<T> {
        let classified = classify_grid(grid)?;
        Ok(self.resolve(classified))
    }

    fn resolve<T: Field>(&self, classified: Classified<T>) -> T {
        debug!(class = classified.name(), "classified determinant input");
        match classified {
            Classified::Scalar(value) | Classified::Element(value) => value,
            Classified::Square(grid) => engine::determinant(grid, self.pivoting),
        }
    }
}
