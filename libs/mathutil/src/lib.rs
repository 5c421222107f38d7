//! Basic integer arithmetic
//!
//! This crate provides the four arithmetic operations consumed by the
//! repository example application:
//! - [`add`], [`subtract`], [`multiply`]: total functions on `i64`
//! - [`divide`]: fails with [`MathError::DivisionByZero`] for a zero divisor
//! - [`Operation`]: named dispatch over the four functions
//!
//! ## Usage
//!
//! ```
//! use mathutil::{MathError, divide};
//!
//! assert_eq!(mathutil::add(10, 5), 15);
//! assert_eq!(divide(10, 5), Ok(2));
//! assert!(matches!(divide(10, 0), Err(MathError::DivisionByZero { .. })));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod ops;
mod operation;

pub use error::MathError;
pub use operation::{Operation, ParseOperationError};
pub use ops::{add, divide, multiply, subtract};
