use std::fmt;

use crate::math::Matrix;

/// Renders `matrix` one row per line, each element followed by a single space.
///
/// With `decimal_places` set, every element is printed with that many digits
/// after the point; otherwise the shortest representation is used, so whole
/// numbers print without a fractional part (`58`, not `58.0`).
pub fn render(matrix: &Matrix, decimal_places: Option<usize>) -> String {
    match decimal_places {
        Some(places) => format!("{:.*}", places, matrix),
        None => matrix.to_string(),
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        for row in 0..self.nrows() {
            for &value in self.row_slice(row) {
                match precision {
                    Some(places) => write!(f, "{:.*} ", places, value)?,
                    None => write!(f, "{} ", value)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
