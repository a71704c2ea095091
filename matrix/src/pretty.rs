use crate::fixed_matrix::FixedMatrix;
use crate::traits::Numberish;

/// Renders a single element, padding single-digit non-negative values
/// with a leading zero so that columns stay aligned.
fn render_element<T: Numberish>(v: T) -> String {
    let s = v.to_string();
    if s.len() == 1 && s.as_bytes()[0].is_ascii_digit() {
        format!("0{}", s)
    } else {
        s
    }
}

/// Renders a matrix as rows of elements between curly brackets, one row
/// per line.
///
/// ```
/// use matrix::{pretty, FixedMatrix};
///
/// let m = FixedMatrix::<2, 2, i32>::from_rows([[23, -7], [21, 6]]);
/// assert_eq!(pretty::render(&m), "{  23  -7  }\n{  21  06  }\n");
/// ```
pub fn render<const R: usize, const C: usize, T: Numberish>(m: &FixedMatrix<R, C, T>) -> String {
    let mut out = String::from("{ ");
    for (nrow, row) in m.as_slice().chunks_exact(C).enumerate() {
        for v in row {
            out.push(' ');
            out.push_str(&render_element(*v));
            out.push(' ');
        }
        out.push_str(" }\n");
        if nrow + 1 != R {
            out.push_str("{ ");
        }
    }
    out
}

impl<const R: usize, const C: usize, T: Numberish> std::fmt::Display for FixedMatrix<R, C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_padding() {
        assert_eq!(render_element(0), "00");
        assert_eq!(render_element(9), "09");
        assert_eq!(render_element(10), "10");
        assert_eq!(render_element(-1), "-1");
        assert_eq!(render_element(3.0_f64), "03");
        assert_eq!(render_element(2.5_f64), "2.5");
        // Only single-digit renderings are padded
        assert_eq!(render_element(0.5_f64), "0.5");
    }

    #[test]
    fn test_render() {
        let eye = FixedMatrix::<3, 3, i32>::identity();
        assert_eq!(
            render(&eye),
            "{  01  00  00  }\n{  00  01  00  }\n{  00  00  01  }\n"
        );

        let row = FixedMatrix::<1, 3, i32>::from_array([100, -20, 3]);
        assert_eq!(render(&row), "{  100  -20  03  }\n");
    }

    #[test]
    fn test_display() {
        let m = FixedMatrix::<2, 1, u8>::from_array([7, 12]);
        assert_eq!(format!("{}", m), "{  07  }\n{  12  }\n");
    }
}
