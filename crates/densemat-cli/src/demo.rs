use anyhow::{Context, Result};
use densemat::utils::render;
use densemat::Matrix;
use std::io::Write;

use crate::config::{DemoConfig, Operation};

/// The 2x3 operand `A = [[1, 2, 3], [4, 5, 6]]`.
pub fn operand_a() -> Result<Matrix> {
    let mut a = Matrix::new(2, 3)?;
    a.set(0, 0, 1.0);
    a.set(0, 1, 2.0);
    a.set(0, 2, 3.0);
    a.set(1, 0, 4.0);
    a.set(1, 1, 5.0);
    a.set(1, 2, 6.0);
    Ok(a)
}

/// The 3x2 operand `B = [[7, 8], [9, 10], [11, 12]]`.
pub fn operand_b() -> Result<Matrix> {
    let mut b = Matrix::new(3, 2)?;
    b.set(0, 0, 7.0);
    b.set(0, 1, 8.0);
    b.set(1, 0, 9.0);
    b.set(1, 1, 10.0);
    b.set(2, 0, 11.0);
    b.set(2, 1, 12.0);
    Ok(b)
}

pub fn apply(op: Operation, a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let result = match op {
        Operation::Add => a.add(b),
        Operation::Subtract => a.sub(b),
        Operation::Multiply => a.matmul(b),
        Operation::Transpose => Ok(a.transpose()),
    };
    result.with_context(|| format!("Failed to {} matrices A and B", op))
}

fn print_matrix<W: Write>(out: &mut W, header: &str, m: &Matrix, precision: Option<usize>) -> Result<()> {
    writeln!(out, "{}", header)?;
    write!(out, "{}", render(m, precision))?;
    Ok(())
}

/// Prints `A`, `B`, then the result of every configured operation.
///
/// Stops at the first operation that fails; the output written so far is
/// left in `out`.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let a = operand_a()?;
    let b = operand_b()?;

    print_matrix(out, "Matrix A:", &a, config.precision)?;
    print_matrix(out, "Matrix B:", &b, config.precision)?;

    for &op in &config.operations {
        log::debug!("Applying {} to A {:?} and B {:?}", op, a.shape(), b.shape());
        let c = apply(op, &a, &b)?;
        print_matrix(out, op.label(), &c, config.precision)?;
    }

    out.flush()?;
    Ok(())
}
