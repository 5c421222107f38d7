/// Error type for arithmetic operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero { dividend: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_message() {
        let err = MathError::DivisionByZero { dividend: 10 };
        assert_eq!(err.to_string(), "division by zero");
    }
}
