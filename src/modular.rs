//! Modular arithmetic helpers.
//!
//! The extended Euclidean algorithm and the modular multiplicative
//! inverse derived from it. Consumed by the Affine and Hill ciphers and
//! by [`Matrix::pow`](crate::matrix::Matrix::pow) for Gauss-Jordan
//! inversion modulo a base.

use crate::error::ScytaleError;

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a*x + b*y == g == gcd(a, b)`.
///
/// # Examples
///
/// ```
/// use scytale::modular::egcd;
///
/// assert_eq!(egcd(120, 23), (1, -9, 47));
/// assert_eq!(egcd(81, 57), (3, -7, 10));
/// ```
pub fn egcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut a, mut b) = (a, b);
    let (mut x, mut y, mut u, mut v) = (0i64, 1i64, 1i64, 0i64);
    while a != 0 {
        let q = b.div_euclid(a);
        let r = b.rem_euclid(a);
        let m = x - u * q;
        let n = y - v * q;
        b = a;
        a = r;
        x = u;
        y = v;
        u = m;
        v = n;
    }
    (b, x, y)
}

/// Calculates the multiplicative inverse of `a` modulo `m`.
///
/// # Errors
/// Returns [`ScytaleError::NotInvertible`] if `a` is not prime relative
/// to `m`.
///
/// # Examples
///
/// ```
/// use scytale::modular::mmi;
///
/// assert_eq!(mmi(5, 26).unwrap(), 21);
/// assert!(mmi(2, 4).is_err());
/// ```
pub fn mmi(a: i64, m: i64) -> Result<i64, ScytaleError> {
    let (g, x, _) = egcd(a, m);
    if g != 1 {
        return Err(ScytaleError::NotInvertible(format!(
            "{} is not prime relative to {}",
            a, m
        )));
    }
    Ok(x.rem_euclid(m))
}
