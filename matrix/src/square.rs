use crate::error::MatrixError;
use crate::fixed_matrix::FixedMatrix;
use crate::traits::Numberish;

impl<const N: usize, T: Numberish> FixedMatrix<N, N, T> {
    /// Creates an Identity matrix of size NxN.
    ///
    /// Only square matrices have one:
    ///
    /// ```compile_fail
    /// use matrix::FixedMatrix;
    ///
    /// let _ = FixedMatrix::<2, 3, i32>::identity();
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        let mut ret = Self::zeros();
        for (i, row) in ret.data.iter_mut().enumerate() {
            row[i] = T::one();
        }
        ret
    }
}

/// Multiplies `adjugate` by `1/determinant`.
///
/// For integer elements `1/determinant` truncates (to zero, unless
/// the determinant is `1` or `-1`), so the result is only meaningful
/// for unimodular matrices.
fn scale_adjugate<const N: usize, T: Numberish>(
    adjugate: FixedMatrix<N, N, T>,
    determinant: T,
) -> Result<FixedMatrix<N, N, T>, MatrixError> {
    if determinant == T::zero() {
        log::debug!(
            "Attempted to invert a {}x{} matrix whose determinant is zero",
            N,
            N
        );
        return Err(MatrixError::Singular);
    }
    Ok(adjugate * (T::one() / determinant))
}

impl<T: Numberish> FixedMatrix<2, 2, T> {
    /// Calculates the determinant of a 2x2 matrix.
    ///
    /// Only `2x2` and `3x3` matrices have a `determinant()`:
    ///
    /// ```compile_fail
    /// use matrix::FixedMatrix;
    ///
    /// let _ = FixedMatrix::<4, 4, f64>::zeros().determinant();
    /// ```
    ///
    /// # Note
    /// The result is `a00*a11 - a01*a10`, so unsigned elements overflow
    /// (and panic in debug builds) whenever `a01*a10 > a00*a11`.
    pub fn determinant(&self) -> T {
        let [[a00, a01], [a10, a11]] = self.data;
        a00 * a11 - a01 * a10
    }

    /// Calculates the inverse of a 2x2 matrix, as its adjugate divided by
    /// its determinant.
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero.
    ///
    /// # Note
    /// The result is scaled by `1/determinant`, which for integer
    /// elements truncates (see [`FixedMatrix::determinant`]). Unsigned
    /// elements cannot hold the negated off-diagonal terms.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let [[a00, a01], [a10, a11]] = self.data;
        let zero = T::zero();
        let adjugate = Self::from_rows([[a11, zero - a01], [zero - a10, a00]]);
        scale_adjugate(adjugate, self.determinant())
    }
}

impl<T: Numberish> FixedMatrix<3, 3, T> {
    /// Calculates the determinant of a 3x3 matrix, by expansion of its
    /// positive and negative diagonal products.
    ///
    /// Non-square matrices have no `determinant()`:
    ///
    /// ```compile_fail
    /// use matrix::FixedMatrix;
    ///
    /// let _ = FixedMatrix::<2, 3, i32>::zeros().determinant();
    /// ```
    ///
    /// # Note
    /// The negative products are subtracted from the positive ones, so
    /// unsigned elements overflow (and panic in debug builds) whenever
    /// the negative products are larger.
    pub fn determinant(&self) -> T {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.data;
        (a00 * a11 * a22 + a10 * a21 * a02 + a20 * a01 * a12)
            - (a02 * a11 * a20 + a00 * a21 * a12 + a10 * a01 * a22)
    }

    /// The 2x2 matrix left after removing `row` and `col`
    fn minor(&self, row: usize, col: usize) -> FixedMatrix<2, 2, T> {
        let mut ret = FixedMatrix::<2, 2, T>::zeros();
        let kept = self
            .data
            .iter()
            .enumerate()
            .filter(|(r, _)| *r != row)
            .flat_map(|(_, row_data)| {
                row_data
                    .iter()
                    .enumerate()
                    .filter(|(c, _)| *c != col)
                    .map(|(_, v)| *v)
            });
        ret.as_mut_slice()
            .iter_mut()
            .zip(kept)
            .for_each(|(to, from)| *to = from);
        ret
    }

    /// Calculates the inverse of a 3x3 matrix, as its adjugate (i.e., the
    /// transposed matrix of cofactors) divided by its determinant.
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero.
    ///
    /// # Note
    /// The result is scaled by `1/determinant`, which for integer
    /// elements truncates. Unsigned elements cannot hold negative
    /// cofactors.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let mut cofactors = Self::zeros();
        for (row, row_data) in cofactors.data.iter_mut().enumerate() {
            for (col, item) in row_data.iter_mut().enumerate() {
                let minor = self.minor(row, col).determinant();
                *item = if (row + col) % 2 == 0 {
                    minor
                } else {
                    T::zero() - minor
                };
            }
        }
        scale_adjugate(cofactors.transpose(), self.determinant())
    }
}
