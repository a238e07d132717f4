//! Operands accepted by matrix functions
//!
//! An [`Operand`] is either a bare scalar or an n-dimensional array. It
//! answers the shape query and hands out deep copies for algorithms that
//! need to mutate their input.

use crate::error::Result;
use crate::grid::Grid;
use crate::shape::{Shape, ShapeClass};
use ndarray::{Array1, Array2, ArrayD, Ix2};

/// A scalar or an n-dimensional array of elements
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<T> {
    /// Bare scalar (rank 0)
    Scalar(T),
    /// Array of any rank, including 0-dimensional arrays
    Array(ArrayD<T>),
}

impl<T> Operand<T> {
    pub fn scalar(value: T) -> Self {
        Self::Scalar(value)
    }

    /// Build a rank-2 operand from nested rows
    ///
    /// Rows must all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self>
    where
        T: Clone,
    {
        Grid::from_rows(rows).map(Self::from)
    }

    /// Dimension lengths of the operand
    pub fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::scalar(),
            Self::Array(a) => Shape::from(a.shape()),
        }
    }

    pub fn class(&self) -> ShapeClass {
        self.shape().class()
    }

    pub fn as_array(&self) -> Option<&ArrayD<T>> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(a) => Some(a),
        }
    }
}

impl<T: Clone> Operand<T> {
    /// Copy of the first element in logical order
    ///
    /// For a scalar this is the scalar itself. Returns `None` for empty arrays.
    pub fn first_element(&self) -> Option<T> {
        match self {
            Self::Scalar(v) => Some(v.clone()),
            Self::Array(a) => a.iter().next().cloned(),
        }
    }

    /// Deep copy of a rank-2 operand into an owned [`Grid`]
    ///
    /// Returns `None` when the operand is not two-dimensional.
    pub fn to_grid(&self) -> Option<Grid<T>> {
        let view = self.as_array()?.view().into_dimensionality::<Ix2>().ok()?;
        let (rows, cols) = view.dim();
        Some(Grid::from_fn(rows, cols, |i, j| view[[i, j]].clone()))
    }
}

impl<T> From<ArrayD<T>> for Operand<T> {
    fn from(array: ArrayD<T>) -> Self {
        Self::Array(array)
    }
}

impl<T> From<Array2<T>> for Operand<T> {
    fn from(array: Array2<T>) -> Self {
        Self::Array(array.into_dyn())
    }
}

impl<T> From<Array1<T>> for Operand<T> {
    fn from(array: Array1<T>) -> Self {
        Self::Array(array.into_dyn())
    }
}

impl<T> From<Vec<T>> for Operand<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Array(Array1::from(values).into_dyn())
    }
}

impl<T: Clone> From<Grid<T>> for Operand<T> {
    fn from(grid: Grid<T>) -> Self {
        let array = Array2::from_shape_fn((grid.n_rows(), grid.n_cols()), |(i, j)| {
            grid[(i, j)].clone()
        });
        Self::Array(array.into_dyn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, arr2, ArrayD, IxDyn};

    #[test]
    fn test_scalar_operand() {
        let x = Operand::scalar(4.5);
        assert_eq!(x.shape(), Shape::scalar());
        assert_eq!(x.class(), ShapeClass::Scalar);
        assert_eq!(x.first_element(), Some(4.5));
        assert!(x.to_grid().is_none());

        let zero_dim: Operand<f64> = arr0(2.0).into_dyn().into();
        assert_eq!(zero_dim.class(), ShapeClass::Scalar);
        assert_eq!(zero_dim.first_element(), Some(2.0));
    }

    #[test]
    fn test_vector_operand() {
        let v = Operand::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.shape().to_string(), "[3]");
        assert_eq!(v.class(), ShapeClass::Vector { len: 3 });
        assert_eq!(v.first_element(), Some(1.0));

        let empty: Operand<f64> = Operand::from(Vec::new());
        assert_eq!(empty.class(), ShapeClass::Vector { len: 0 });
        assert_eq!(empty.first_element(), None);
    }

    #[test]
    fn test_matrix_operand_to_grid() {
        let m = Operand::from(arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
        assert_eq!(m.class(), ShapeClass::Matrix { rows: 2, cols: 3 });

        let grid = m.to_grid().unwrap();
        assert_eq!(grid.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_to_grid_is_deep_copy() {
        let m = Operand::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let before = m.clone();

        let mut grid = m.to_grid().unwrap();
        grid[(0, 0)] = 100.0;
        grid.swap_rows(0, 1);

        assert_eq!(m, before);
    }

    #[test]
    fn test_grid_round_trip_keeps_logical_order() {
        let mut grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        grid.swap_rows(0, 1);
        let op = Operand::from(grid);
        assert_eq!(op.to_grid().unwrap().to_rows(), vec![vec![3, 4], vec![1, 2]]);
    }

    #[test]
    fn test_higher_rank_operand() {
        let t: Operand<f64> = ArrayD::zeros(IxDyn(&[2, 2, 2])).into();
        assert_eq!(t.class(), ShapeClass::Tensor { rank: 3 });
        assert_eq!(t.shape().to_string(), "[2, 2, 2]");
        assert!(t.to_grid().is_none());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Operand::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_err());
    }
}
