//! Owned row-major working storage
//!
//! [`Grid`] keeps all elements in one flat buffer and addresses rows through a
//! table of row handles. Swapping two rows exchanges their handles, so a swap
//! costs O(1) and never moves elements.

use crate::error::{Error, Result};
use crate::shape::Shape;
use num_traits::{One, Zero};
use std::ops::{Index, IndexMut};

/// Rectangular grid of elements with handle-indirected rows
#[derive(Debug, Clone)]
pub struct Grid<T> {
    /// Storage slots, `n_cols` elements each
    data: Vec<T>,
    /// Logical row -> storage slot
    handles: Vec<usize>,
    n_cols: usize,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows
    ///
    /// Every row must have the same length. An empty list of rows yields a
    /// 0 x 0 grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::ragged_rows(i, n_cols, row.len()));
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            handles: (0..n_rows).collect(),
            n_cols,
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every position
    pub fn from_fn<F>(n_rows: usize, n_cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for i in 0..n_rows {
            for j in 0..n_cols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            handles: (0..n_rows).collect(),
            n_cols,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.handles.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_square(&self) -> bool {
        self.n_rows() == self.n_cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(vec![self.n_rows(), self.n_cols])
    }

    /// Element at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if col >= self.n_cols {
            return None;
        }
        self.handles
            .get(row)
            .map(|&slot| &self.data[slot * self.n_cols + col])
    }

    /// Logical row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[T] {
        let start = self.handles[i] * self.n_cols;
        &self.data[start..start + self.n_cols]
    }

    /// Mutable logical row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = self.handles[i] * self.n_cols;
        &mut self.data[start..start + self.n_cols]
    }

    /// Two distinct rows borrowed mutably at once
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either index is out of bounds.
    pub fn row_pair_mut(&mut self, a: usize, b: usize) -> (&mut [T], &mut [T]) {
        assert_ne!(a, b, "row_pair_mut requires two distinct rows");
        let w = self.n_cols;
        let (slot_a, slot_b) = (self.handles[a], self.handles[b]);

        if slot_a < slot_b {
            let (lo, hi) = self.data.split_at_mut(slot_b * w);
            (&mut lo[slot_a * w..(slot_a + 1) * w], &mut hi[..w])
        } else {
            let (lo, hi) = self.data.split_at_mut(slot_a * w);
            (&mut hi[..w], &mut lo[slot_b * w..(slot_b + 1) * w])
        }
    }

    /// Exchange logical rows `a` and `b` by swapping their handles
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.handles.swap(a, b);
    }

    /// Iterate over logical rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.n_rows()).map(move |i| self.row(i))
    }
}

impl<T: Clone> Grid<T> {
    /// Copy out the logical rows as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Zero + Clone> Grid<T> {
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self::from_fn(n_rows, n_cols, |_, _| T::zero())
    }
}

impl<T: Zero + One> Grid<T> {
    /// The n x n identity
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n_rows() == other.n_rows()
            && self.n_cols == other.n_cols
            && self.rows().zip(other.rows()).all(|(a, b)| a == b)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.n_cols, "column {col} out of bounds");
        &self.row(row)[col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.n_cols, "column {col} out of bounds");
        &mut self.row_mut(row)[col]
    }
}
