use crate::error::MatrixError;
use crate::traits::Numberish;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The main Structure in this library: a matrix of `R` rows and `C`
/// columns whose shape is part of its type.
///
/// The elements live inline (no heap allocation), so copying a
/// `FixedMatrix` always produces an independent matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMatrix<const R: usize, const C: usize, T: Numberish> {
    // Contains the data ordered by row,
    // Going left to right, and up and down.
    pub(crate) data: [[T; C]; R],
}

impl<const R: usize, const C: usize, T: Numberish> Default for FixedMatrix<R, C, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize, T: Numberish> FixedMatrix<R, C, T> {
    /// Number of rows
    pub const NROWS: usize = R;

    /// Number of columns
    pub const NCOLS: usize = C;

    /// Number of elements
    pub const SIZE: usize = R * C;

    /// Creates a `FixedMatrix` from its rows.
    #[must_use]
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        const {
            assert!(
                R > 0 && C > 0,
                "A FixedMatrix needs at least one row and one column"
            )
        };
        Self { data: rows }
    }

    /// Creates a `FixedMatrix` full of zeroes
    #[must_use]
    pub fn zeros() -> Self {
        Self::from_rows([[T::zero(); C]; R])
    }

    /// Creates a `FixedMatrix` full of values `v`
    #[must_use]
    pub fn new(v: T) -> Self {
        Self::from_rows([[v; C]; R])
    }

    /// Creates a `FixedMatrix` from the elements in `data`, in row-major order.
    ///
    /// Using an array whose length is not `R * C` does not compile:
    ///
    /// ```compile_fail
    /// use matrix::FixedMatrix;
    ///
    /// let m = FixedMatrix::<2, 2, i32>::from_array([1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_array<const N: usize>(data: [T; N]) -> Self {
        const {
            assert!(
                N == R * C,
                "When creating Matrix: length of data does not match nrows * ncols"
            )
        };
        let mut ret = Self::zeros();
        ret.as_mut_slice().copy_from_slice(&data);
        ret
    }

    /// Creates a `FixedMatrix` from a slice containing its elements, in
    /// row-major order. Fails if the slice does not have exactly `R * C`
    /// elements.
    pub fn from_slice(data: &[T]) -> Result<Self, MatrixError> {
        if data.len() != Self::SIZE {
            return Err(MatrixError::ShapeMismatch {
                expected: Self::SIZE,
                found: data.len(),
            });
        }
        let mut ret = Self::zeros();
        ret.as_mut_slice().copy_from_slice(data);
        Ok(ret)
    }

    /// Creates a `FixedMatrix` from a sequence of rows, each of them a
    /// sequence of values. Fails if there are not exactly `R` rows or if
    /// any of them does not have exactly `C` values.
    pub fn from_row_iter<I, J>(rows: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = T>,
    {
        let mut ret = Self::zeros();
        let mut rows = rows.into_iter();
        for (nrow, row_data) in ret.data.iter_mut().enumerate() {
            let values = rows.next().ok_or(MatrixError::ShapeMismatch {
                expected: R,
                found: nrow,
            })?;
            let mut values = values.into_iter();
            for (ncol, item) in row_data.iter_mut().enumerate() {
                *item = values.next().ok_or(MatrixError::ShapeMismatch {
                    expected: C,
                    found: ncol,
                })?;
            }
            let leftover = values.count();
            if leftover > 0 {
                return Err(MatrixError::ShapeMismatch {
                    expected: C,
                    found: C + leftover,
                });
            }
        }
        let leftover = rows.count();
        if leftover > 0 {
            return Err(MatrixError::ShapeMismatch {
                expected: R,
                found: R + leftover,
            });
        }
        Ok(ret)
    }

    /// Returns a tuple with number of rows and columns
    pub const fn size(&self) -> (usize, usize) {
        (R, C)
    }

    /// The elements of the matrix, in row-major order
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// The elements of the matrix, in row-major order
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /* INDEX TRANSFORMATIONS */

    /// Gets the index of element `row,col` within the row-major data
    pub const fn absolute_index(row: usize, col: usize) -> usize {
        row * C + col
    }

    /// Gets the column of the element at linear `index`
    pub const fn column_of(index: usize) -> usize {
        index % C
    }

    /// Gets the row of the element at linear `index`
    pub const fn row_of(index: usize) -> usize {
        (index - Self::column_of(index)) / C
    }

    /* ELEMENT ACCESS */

    fn check_bounds(row: usize, col: usize) -> Result<(), MatrixError> {
        if row < R && col < C {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                col,
                nrows: R,
                ncols: C,
            })
        }
    }

    fn linear_out_of_bounds(index: usize) -> MatrixError {
        MatrixError::LinearOutOfBounds {
            index,
            size: Self::SIZE,
        }
    }

    /// Gets an element from the matrix
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        Self::check_bounds(row, col)?;
        Ok(self.data[row][col])
    }

    /// Gets a mutable reference to an element of the matrix
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        Self::check_bounds(row, col)?;
        Ok(&mut self.data[row][col])
    }

    /// Sets an element into the matrix
    pub fn set(&mut self, row: usize, col: usize, v: T) -> Result<T, MatrixError> {
        *self.get_mut(row, col)? = v;
        Ok(v)
    }

    /// Gets the element at linear (i.e., row-major) `index`
    pub fn get_linear(&self, index: usize) -> Result<T, MatrixError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| Self::linear_out_of_bounds(index))
    }

    /// Gets a mutable reference to the element at linear `index`
    pub fn get_linear_mut(&mut self, index: usize) -> Result<&mut T, MatrixError> {
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| Self::linear_out_of_bounds(index))
    }

    /// Sets the element at linear `index`
    pub fn set_linear(&mut self, index: usize, v: T) -> Result<T, MatrixError> {
        *self.get_linear_mut(index)? = v;
        Ok(v)
    }

    /* ARITHMETIC OPERATION */

    /// Multiplies every element by `s`
    pub fn scale<S: Into<T>>(&mut self, s: S) {
        *self *= s.into();
    }

    /// Returns a copy of `self` with every element multiplied by `s`
    #[must_use]
    pub fn scaled<S: Into<T>>(&self, s: S) -> Self {
        *self * s.into()
    }

    /// Multiplies `self` by `other`, putting the result into `into`
    pub fn prod_into<const K: usize>(
        &self,
        other: &FixedMatrix<C, K, T>,
        into: &mut FixedMatrix<R, K, T>,
    ) {
        #[cfg(not(feature = "parallel"))]
        let rows = self.data.iter().zip(into.data.iter_mut());
        #[cfg(feature = "parallel")]
        let rows = self.data.par_iter().zip(into.data.par_iter_mut());

        rows.for_each(|(row_data, into_data)| {
            for (col, item) in into_data.iter_mut().enumerate() {
                *item = row_data
                    .iter()
                    .zip(other.data.iter())
                    .map(|(a, other_row)| *a * other_row[col])
                    .fold(T::zero(), |acc, val| acc + val);
            }
        });
    }

    /// Swaps rows and columns
    #[must_use]
    pub fn transpose(&self) -> FixedMatrix<C, R, T> {
        let mut ret = FixedMatrix::<C, R, T>::zeros();
        for (row, row_data) in self.data.iter().enumerate() {
            for (col, v) in row_data.iter().enumerate() {
                ret.data[col][row] = *v;
            }
        }
        ret
    }
}

impl<const R: usize, const C: usize, T: Numberish> std::ops::AddAssign for FixedMatrix<R, C, T> {
    fn add_assign(&mut self, other: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(other.as_slice())
            .for_each(|(a, b)| *a += *b);
    }
}

impl<const R: usize, const C: usize, T: Numberish> std::ops::Add for FixedMatrix<R, C, T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}

impl<const R: usize, const C: usize, T: Numberish> std::ops::SubAssign for FixedMatrix<R, C, T> {
    fn sub_assign(&mut self, other: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(other.as_slice())
            .for_each(|(a, b)| *a -= *b);
    }
}

impl<const R: usize, const C: usize, T: Numberish> std::ops::Sub for FixedMatrix<R, C, T> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self::Output {
        self -= other;
        self
    }
}

impl<const R: usize, const C: usize, T: Numberish> std::ops::MulAssign<T> for FixedMatrix<R, C, T> {
    fn mul_assign(&mut self, s: T) {
        self.as_mut_slice().iter_mut().for_each(|a| *a *= s);
    }
}

impl<const R: usize, const C: usize, T: Numberish> std::ops::Mul<T> for FixedMatrix<R, C, T> {
    type Output = Self;

    fn mul(mut self, s: T) -> Self::Output {
        self *= s;
        self
    }
}

impl<const R: usize, const C: usize, T: Numberish> std::ops::DivAssign<T> for FixedMatrix<R, C, T> {
    fn div_assign(&mut self, s: T) {
        self.as_mut_slice().iter_mut().for_each(|a| *a /= s);
    }
}

impl<const R: usize, const C: usize, T: Numberish> std::ops::Div<T> for FixedMatrix<R, C, T> {
    type Output = Self;

    fn div(mut self, s: T) -> Self::Output {
        self /= s;
        self
    }
}

impl<const R: usize, const C: usize, const K: usize, T: Numberish>
    std::ops::Mul<&FixedMatrix<C, K, T>> for &FixedMatrix<R, C, T>
{
    type Output = FixedMatrix<R, K, T>;

    fn mul(self, other: &FixedMatrix<C, K, T>) -> Self::Output {
        let mut ret = FixedMatrix::<R, K, T>::zeros();
        self.prod_into(other, &mut ret);
        ret
    }
}

impl<const R: usize, const C: usize, const K: usize, T: Numberish>
    std::ops::Mul<FixedMatrix<C, K, T>> for FixedMatrix<R, C, T>
{
    type Output = FixedMatrix<R, K, T>;

    fn mul(self, other: FixedMatrix<C, K, T>) -> Self::Output {
        &self * &other
    }
}

/// Implements `scalar * matrix` for primitive scalars, which is the
/// same as `matrix * scalar`
macro_rules! impl_left_scalar_mul {
    ( $( $t: ty ),* ) => {
        $(
            impl<const R: usize, const C: usize> std::ops::Mul<FixedMatrix<R, C, $t>> for $t {
                type Output = FixedMatrix<R, C, $t>;

                fn mul(self, m: FixedMatrix<R, C, $t>) -> Self::Output {
                    m * self
                }
            }

            impl<const R: usize, const C: usize> std::ops::Mul<&FixedMatrix<R, C, $t>> for $t {
                type Output = FixedMatrix<R, C, $t>;

                fn mul(self, m: &FixedMatrix<R, C, $t>) -> Self::Output {
                    *m * self
                }
            }
        )*
    };
}

impl_left_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    type M23 = FixedMatrix<2, 3, i32>;

    #[test]
    fn test_default() {
        let m = M23::default();
        assert_eq!(m.size(), (2, 3));
        assert_eq!(m.as_slice().len(), 6);
        assert!(m.as_slice().iter().all(|v| *v == 0));
    }

    #[test]
    fn test_new() {
        let a = FixedMatrix::<3, 12, f64>::new(2.0);
        assert_eq!(a.size(), (3, 12));
        for v in a.as_slice() {
            assert_eq!(*v, 2.0);
        }
    }

    #[test]
    fn test_from_array() {
        let m = M23::from_array([2, 3, 5, 7, 2, 4]);
        assert_eq!(m.get(0, 0), Ok(2));
        assert_eq!(m.get(0, 2), Ok(5));
        assert_eq!(m.get(1, 0), Ok(7));
        assert_eq!(m.get(1, 2), Ok(4));
    }

    #[test]
    fn test_from_rows() {
        let m = M23::from_rows([[2, 3, 5], [7, 2, 4]]);
        assert_eq!(m, M23::from_array([2, 3, 5, 7, 2, 4]));
    }

    #[test]
    fn test_from_slice() -> Result<(), MatrixError> {
        let data = [1, 2, 3, 4, 5, 6];
        let m = M23::from_slice(&data)?;
        assert_eq!(m.as_slice(), &data);

        assert_eq!(
            M23::from_slice(&data[..5]),
            Err(MatrixError::ShapeMismatch {
                expected: 6,
                found: 5
            })
        );
        assert_eq!(
            M23::from_slice(&[0; 7]),
            Err(MatrixError::ShapeMismatch {
                expected: 6,
                found: 7
            })
        );
        Ok(())
    }

    #[test]
    fn test_from_row_iter() -> Result<(), MatrixError> {
        let m = M23::from_row_iter(vec![vec![2, 3, 5], vec![7, 2, 4]])?;
        assert_eq!(m, M23::from_rows([[2, 3, 5], [7, 2, 4]]));

        // Too few rows
        assert_eq!(
            M23::from_row_iter(vec![vec![2, 3, 5]]),
            Err(MatrixError::ShapeMismatch {
                expected: 2,
                found: 1
            })
        );
        // Too many rows
        assert_eq!(
            M23::from_row_iter(vec![vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]),
            Err(MatrixError::ShapeMismatch {
                expected: 2,
                found: 3
            })
        );
        // Short row
        assert_eq!(
            M23::from_row_iter(vec![vec![2, 3, 5], vec![7, 2]]),
            Err(MatrixError::ShapeMismatch {
                expected: 3,
                found: 2
            })
        );
        // Long row
        assert_eq!(
            M23::from_row_iter(vec![vec![2, 3, 5, 1], vec![7, 2, 4]]),
            Err(MatrixError::ShapeMismatch {
                expected: 3,
                found: 4
            })
        );
        Ok(())
    }

    #[test]
    fn test_copy_is_independent() -> Result<(), MatrixError> {
        let a = M23::from_array([1, 2, 3, 4, 5, 6]);
        let mut b = a;
        b.set(0, 0, 100)?;
        assert_eq!(a.get(0, 0)?, 1);
        assert_eq!(b.get(0, 0)?, 100);
        Ok(())
    }

    #[test]
    fn test_get_set() -> Result<(), MatrixError> {
        let mut m = M23::zeros();
        assert_eq!(m.set(1, 2, 9)?, 9);
        assert_eq!(m.get(1, 2)?, 9);
        assert_eq!(m.get_linear(5)?, 9);

        *m.get_mut(0, 1)? += 3;
        assert_eq!(m.get_linear(1)?, 3);

        *m.get_linear_mut(3)? = -4;
        assert_eq!(m.get(1, 0)?, -4);

        m.set_linear(2, 8)?;
        assert_eq!(m.get(0, 2)?, 8);
        Ok(())
    }

    #[test]
    fn test_out_of_bounds() {
        let mut m = M23::zeros();
        assert_eq!(
            m.get(2, 0),
            Err(MatrixError::OutOfBounds {
                row: 2,
                col: 0,
                nrows: 2,
                ncols: 3
            })
        );
        // (0, 4) would map to linear index 4, which exists... still rejected.
        assert!(m.get(0, 4).is_err());
        assert!(m.get_mut(0, 3).is_err());
        assert!(m.set(5, 5, 1).is_err());

        assert_eq!(
            m.get_linear(6),
            Err(MatrixError::LinearOutOfBounds { index: 6, size: 6 })
        );
        assert!(m.get_linear_mut(100).is_err());
        assert!(m.set_linear(6, 1).is_err());
        assert!(m.as_slice().iter().all(|v| *v == 0));
    }

    #[test]
    fn test_index_transforms() {
        assert_eq!(M23::absolute_index(0, 0), 0);
        assert_eq!(M23::absolute_index(1, 0), 3);
        assert_eq!(M23::absolute_index(1, 2), 5);
        assert_eq!(M23::row_of(4), 1);
        assert_eq!(M23::column_of(4), 1);
        assert_eq!(M23::NROWS, 2);
        assert_eq!(M23::NCOLS, 3);
        assert_eq!(M23::SIZE, 6);
    }

    #[test]
    fn test_add_sub() {
        let a = M23::from_array([1, 2, 3, 4, 5, 6]);
        let b = M23::from_array([6, 5, 4, 3, 2, 1]);
        assert_eq!(a + b, M23::new(7));
        assert_eq!(a - a, M23::zeros());

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_scale() {
        let a = FixedMatrix::<2, 2, f64>::from_array([1., 2., 3., 4.]);
        let expected = FixedMatrix::<2, 2, f64>::from_array([2., 4., 6., 8.]);

        assert_eq!(a * 2., expected);
        assert_eq!(2. * a, expected);
        assert_eq!(2. * &a, expected);
        assert_eq!(a.scaled(2_i32), expected);
        assert_eq!(a.scaled(2_f32), expected);

        let mut b = a;
        b *= 2.;
        assert_eq!(b, expected);
        b /= 2.;
        assert_eq!(b, a);

        let mut c = a;
        c.scale(2_u8);
        assert_eq!(c, expected);
        assert_eq!(expected / 2., a);
    }

    #[test]
    fn test_prod() {
        let a = M23::from_rows([[2, 3, 5], [7, 2, 4]]);
        let b = FixedMatrix::<3, 2, i32>::from_rows([[1, 6], [7, 2], [0, -5]]);

        // 2*1 + 3*7 + 5*0  |  2*6 + 3*2 + 5*-5
        // 7*1 + 2*7 + 4*0  |  7*6 + 2*2 + 4*-5
        let expected = FixedMatrix::<2, 2, i32>::from_rows([[23, -7], [21, 26]]);
        assert_eq!(a * b, expected);
        assert_eq!(&a * &b, expected);

        let mut into = FixedMatrix::<2, 2, i32>::new(99);
        a.prod_into(&b, &mut into);
        assert_eq!(into, expected);

        // The other way around is a 3x3
        let c: FixedMatrix<3, 3, i32> = b * a;
        assert_eq!(c.get(0, 0), Ok(1 * 2 + 6 * 7));
        assert_eq!(c.get(2, 2), Ok(0 * 5 + -5 * 4));
    }

    #[test]
    fn test_prod_vector() {
        let a = FixedMatrix::<2, 2, f64>::from_array([1., 2., 3., 4.]);
        let x = FixedMatrix::<2, 1, f64>::from_array([1., -1.]);
        assert_eq!(a * x, FixedMatrix::from_array([-1., -1.]));
    }

    #[test]
    fn test_transpose() {
        let a = M23::from_rows([[2, 3, 5], [7, 2, 4]]);
        let t = a.transpose();
        assert_eq!(t, FixedMatrix::<3, 2, i32>::from_rows([[2, 7], [3, 2], [5, 4]]));
        assert_eq!(t.transpose(), a);
    }
}
