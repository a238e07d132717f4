//! Configuration for the determinant engine

/// Pivot selection rule used during elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pivoting {
    /// Largest magnitude entry in the pivot column (partial pivoting)
    #[default]
    Partial,
    /// First non-zero entry at or below the diagonal
    ///
    /// Useful for exact element types, where division by a small pivot loses
    /// no accuracy.
    FirstNonZero,
}

impl Pivoting {
    /// Get the name of the pivoting rule
    pub fn name(&self) -> &'static str {
        match self {
            Self::Partial => "partial",
            Self::FirstNonZero => "first-non-zero",
        }
    }
}
