//! Shape introspection for operands
//!
//! A [`Shape`] is the ordered list of dimension lengths of a value. Scalars
//! have the empty shape `[]`. [`ShapeClass`] folds a shape into the closed set
//! of cases that matrix operations dispatch on.

use std::fmt;

/// Ordered dimension lengths of a value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Create a shape from dimension lengths
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    /// The shape of a scalar
    pub fn scalar() -> Self {
        Self(Vec::new())
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Fold the shape into its class
    pub fn class(&self) -> ShapeClass {
        match *self.0.as_slice() {
            [] => ShapeClass::Scalar,
            [len] => ShapeClass::Vector { len },
            [rows, cols] => ShapeClass::Matrix { rows, cols },
            _ => ShapeClass::Tensor { rank: self.rank() },
        }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, dim) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dim}")?;
        }
        write!(f, "]")
    }
}

/// Closed classification of a shape, one case per rank class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeClass {
    /// Rank 0
    Scalar,
    /// Rank 1
    Vector { len: usize },
    /// Rank 2
    Matrix { rows: usize, cols: usize },
    /// Rank 3 and above
    Tensor { rank: usize },
}

impl ShapeClass {
    /// Get the name of the shape class
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Vector { .. } => "vector",
            Self::Matrix { .. } => "matrix",
            Self::Tensor { .. } => "tensor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::scalar().to_string(), "[]");
        assert_eq!(Shape::new(vec![3]).to_string(), "[3]");
        assert_eq!(Shape::new(vec![2, 3]).to_string(), "[2, 3]");
        assert_eq!(Shape::from(&[2usize, 2, 2][..]).to_string(), "[2, 2, 2]");
    }

    #[test]
    fn test_shape_class() {
        assert_eq!(Shape::scalar().class(), ShapeClass::Scalar);
        assert_eq!(Shape::new(vec![1]).class(), ShapeClass::Vector { len: 1 });
        assert_eq!(
            Shape::new(vec![2, 3]).class(),
            ShapeClass::Matrix { rows: 2, cols: 3 }
        );
        assert_eq!(
            Shape::new(vec![2, 2, 2, 2]).class(),
            ShapeClass::Tensor { rank: 4 }
        );
    }

    #[test]
    fn test_rank_and_dims() {
        let shape = Shape::from(vec![4, 5]);
        assert_eq!(shape.rank(), 2);
        assert_eq!(shape.dims(), &[4, 5]);
        assert_eq!(Shape::default(), Shape::scalar());
        assert_eq!(shape.class().name(), "matrix");
    }
}
