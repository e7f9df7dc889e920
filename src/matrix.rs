//! Gauss-Jordan elimination over GF(251).
//!
//! Recovery solves one k x (k+1) augmented system per pixel position. The
//! coefficient part is a Vandermonde matrix of shadow indices, so the system
//! is non-singular whenever the indices are distinct and nonzero; a zero
//! pivot therefore means the shadow set itself is bad.

use crate::error::{Result, ShareError};
use crate::field;

/// Builds the augmented row `[1, x, x^2, ..., x^(k-1) | y]`, reduced mod 251.
pub fn vandermonde_row(x: u16, k: u16, y: u8) -> Vec<u8> {
    let mut row = Vec::with_capacity(k as usize + 1);
    let x = (x % field::PRIME) as u8;
    let mut power = 1u8;

    for _ in 0..k {
        row.push(power);
        power = field::mul(power, x);
    }
    row.push(y);

    row
}

/// Solves the augmented system in place and returns the k coefficients.
///
/// Forward elimination clears the columns below the diagonal from the bottom
/// row up; back-substitution then normalizes each pivot to 1 and clears the
/// entries above it, leaving the solution in the augmented column.
pub fn solve(mat: &mut [Vec<u8>]) -> Result<Vec<u8>> {
    let k = mat.len();

    // echelon form
    for j in 0..k.saturating_sub(1) {
        for i in (j + 1..k).rev() {
            let pivot = mat[i - 1][j];
            if pivot == 0 {
                return Err(zero_pivot());
            }
            let a = field::mul(mat[i][j], field::inv(pivot));
            for t in j..=k {
                mat[i][t] = field::sub(mat[i][t], field::mul(mat[i - 1][t], a));
            }
        }
    }

    // reduced row echelon form
    for i in (1..k).rev() {
        let pivot = mat[i][i];
        if pivot == 0 {
            return Err(zero_pivot());
        }
        mat[i][k] = field::mul(mat[i][k], field::inv(pivot));
        mat[i][i] = 1;
        for t in (0..i).rev() {
            mat[t][k] = field::sub(mat[t][k], field::mul(mat[i][k], mat[t][i]));
            mat[t][i] = 0;
        }
    }

    let pivot = mat[0][0];
    if pivot == 0 {
        return Err(zero_pivot());
    }
    mat[0][k] = field::mul(mat[0][k], field::inv(pivot));

    Ok(mat.iter().map(|row| row[k]).collect())
}

fn zero_pivot() -> ShareError {
    ShareError::InsufficientShadows(
        "zero pivot while solving; shadow indices must be distinct and nonzero".into(),
    )
}
