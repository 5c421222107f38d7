//! Arithmetic functions
//!
//! Overflow wraps in two's complement instead of panicking, so every
//! function is total over its domain except [`divide`] with a zero divisor.

use tracing::{debug, warn};

use crate::error::MathError;

/// Add two numbers and return the sum.
#[must_use]
pub fn add(a: i64, b: i64) -> i64 {
    debug!(a, b, "performing addition");
    a.wrapping_add(b)
}

/// Subtract `b` from `a` and return the difference.
#[must_use]
pub fn subtract(a: i64, b: i64) -> i64 {
    debug!(a, b, "performing subtraction");
    a.wrapping_sub(b)
}

/// Multiply two numbers and return the product.
#[must_use]
pub fn multiply(a: i64, b: i64) -> i64 {
    debug!(a, b, "performing multiplication");
    a.wrapping_mul(b)
}

/// Divide `a` by `b`, truncating toward zero.
///
/// `i64::MIN / -1` wraps to `i64::MIN`.
///
/// # Errors
/// Returns [`MathError::DivisionByZero`] if `b` is zero.
pub fn divide(a: i64, b: i64) -> Result<i64, MathError> {
    if b == 0 {
        warn!(a, "division by zero requested");
        return Err(MathError::DivisionByZero { dividend: a });
    }
    debug!(a, b, "performing division");
    Ok(a.wrapping_div(b))
}
