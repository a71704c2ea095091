/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! A Library for matrices whose shape is known at compile time.
//!
//! `FixedMatrix<R, C, T>` holds `R` rows and `C` columns of a numeric
//! type `T` (i.e., anything implementing [`Numberish`], which includes every
//! primitive integer and floating point type). Since `R` and `C` are part of the
//! type, adding matrices of different sizes or multiplying matrices whose inner
//! dimensions do not match does not compile:
//!
//! ```
//! use matrix::{fixed_matrix, FixedMatrix};
//!
//! let a: FixedMatrix<2, 3, i32> = fixed_matrix![
//!     2, 3, 5;
//!     7, 2, 4
//! ];
//! let b: FixedMatrix<3, 2, i32> = fixed_matrix![
//!     1, 6;
//!     7, 2;
//!     0, -5
//! ];
//! let c: FixedMatrix<2, 2, i32> = a * b;
//! assert_eq!(c, fixed_matrix![23, -7; 21, 26]);
//! ```
//!
//! ```compile_fail
//! use matrix::FixedMatrix;
//!
//! let a = FixedMatrix::<2, 3, i32>::zeros();
//! let _ = a * a; // 3 columns times 2 rows
//! ```
//!
//! ```compile_fail
//! use matrix::FixedMatrix;
//!
//! // Only matrices of the same shape can be added
//! let _ = FixedMatrix::<2, 3, i32>::zeros() + FixedMatrix::<3, 2, i32>::zeros();
//! ```
//!
//! Square matrices also get `identity()`; and `2x2` and `3x3` matrices get
//! `determinant()` and `inverse()`.

/// Builds a [`FixedMatrix`] from its elements, separating columns by `,`
/// and rows by `;`.
///
/// All rows must have the same number of elements, and the number of rows and
/// columns must match the type of the matrix being built. Otherwise, it does
/// not compile.
#[macro_export]
macro_rules! fixed_matrix {
    ( $( $( $x: expr ),+ );+ $(;)? ) => {
        $crate::FixedMatrix::from_rows([ $( [ $( $x ),+ ] ),+ ])
    };
}

mod error;
mod fixed_matrix;
/// Human-readable rendering of matrices
pub mod pretty;
mod square;
mod traits;

pub use crate::error::MatrixError;
pub use crate::fixed_matrix::FixedMatrix;
pub use crate::traits::{Numberish, OneZero};
