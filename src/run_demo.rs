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

use crate::{fixed_matrix, FixedMatrix, MatrixError};
use clap::Parser;
use std::io::Write;

/// The options we can pass to the demo
#[derive(Parser, Default, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct DemoOptions {
    /// Also report the determinant and the inverse of the product
    #[clap(short = 'i', long)]
    pub inverse: bool,

    /// Specifies the path to which to write the results.
    /// If none is given, STDOUT is used
    #[clap(short = 'o')]
    pub output: Option<String>,

    /// Log what is being done (same as setting `FIXMAT_LOG=debug`)
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

/// The `2x3` matrix on the left of the demo product
pub fn left_operand() -> FixedMatrix<2, 3, i32> {
    fixed_matrix![
        2, 3, 5;
        7, 2, 4
    ]
}

/// The `3x2` matrix on the right of the demo product
pub fn right_operand() -> FixedMatrix<3, 2, i32> {
    fixed_matrix![
        1, 6;
        7, 2;
        0, -5
    ]
}

/// Multiplies the demo matrices and writes the result into `out`
pub fn run<W: Write>(options: &DemoOptions, mut out: W) -> Result<(), String> {
    let a = left_operand();
    let b = right_operand();
    log::debug!("Multiplying a {:?} matrix by a {:?} one", a.size(), b.size());

    let product = a * b;
    writeln!(out, "{}", product).map_err(|e| e.to_string())?;

    if options.inverse {
        writeln!(out, "determinant = {}", product.determinant()).map_err(|e| e.to_string())?;

        // Integer inverses truncate, so go through floats
        let as_float: Vec<f64> = product.as_slice().iter().map(|v| f64::from(*v)).collect();
        let product = FixedMatrix::<2, 2, f64>::from_slice(&as_float).map_err(|e| e.to_string())?;
        match product.inverse() {
            Ok(inv) => {
                for row in inv.as_slice().chunks_exact(2) {
                    writeln!(out, "{:>12.6} {:>12.6}", row[0], row[1])
                        .map_err(|e| e.to_string())?;
                }
            }
            Err(MatrixError::Singular) => {
                writeln!(out, "The product has no inverse").map_err(|e| e.to_string())?;
            }
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(())
}
