/// Errors produced by the checked operations of a `FixedMatrix`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Element `(row, col)` does not exist in a matrix of `nrows` by `ncols`
    #[error("Row or Column out of bounds: ({row},{col}) requested from a {nrows} by {ncols} matrix")]
    OutOfBounds {
        /// The requested row
        row: usize,
        /// The requested column
        col: usize,
        /// Number of rows of the matrix
        nrows: usize,
        /// Number of columns of the matrix
        ncols: usize,
    },

    /// Linear `index` is not within `[0, size)`
    #[error("Index {index} out of bounds for a matrix of {size} elements")]
    LinearOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of elements in the matrix
        size: usize,
    },

    /// A sequence used for building a matrix had the wrong number of elements
    #[error("When creating Matrix: expected {expected} elements, found {found}")]
    ShapeMismatch {
        /// Number of elements the shape requires
        expected: usize,
        /// Number of elements received
        found: usize,
    },

    /// The determinant is zero, so there is no inverse
    #[error("Matrix is singular (determinant is zero); it has no inverse")]
    Singular,
}
