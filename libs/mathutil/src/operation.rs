use std::fmt;
use std::str::FromStr;

use crate::error::MathError;
use crate::ops;

/// One of the four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in the order the repository example reports them.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Apply the operation to `a` and `b`.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] for [`Operation::Divide`] with `b == 0`.
    pub fn apply(self, a: i64, b: i64) -> Result<i64, MathError> {
        match self {
            Self::Add => Ok(ops::add(a, b)),
            Self::Subtract => Ok(ops::subtract(a, b)),
            Self::Multiply => Ok(ops::multiply(a, b)),
            Self::Divide => ops::divide(a, b),
        }
    }

    /// Human-readable label, e.g. `Addition`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a known operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation '{0}', expected one of: add, sub, mul, div")]
pub struct ParseOperationError(String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "addition" => Ok(Self::Add),
            "sub" | "subtract" | "subtraction" => Ok(Self::Subtract),
            "mul" | "multiply" | "multiplication" => Ok(Self::Multiply),
            "div" | "divide" | "division" => Ok(Self::Divide),
            _ => Err(ParseOperationError(s.to_owned())),
        }
    }
}
