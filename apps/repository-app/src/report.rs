//! Result lines printed by the application.

use mathutil::{MathError, Operation};

use crate::config::Operands;

/// Format one result line: `Addition:  15`, or `Error:  division by zero`.
#[must_use]
pub fn render_line(op: Operation, result: Result<i64, MathError>) -> String {
    match result {
        Ok(value) => format!("{}:  {value}", op.label()),
        Err(err) => format!("Error:  {err}"),
    }
}

/// Apply every operation to the operands, one line per operation.
#[must_use]
pub fn render_all(operands: Operands) -> Vec<String> {
    Operation::ALL
        .iter()
        .map(|op| {
            let result = op.apply(operands.a, operands.b);
            if let Err(err) = &result {
                tracing::warn!(operation = %op, error = %err, "operation failed");
            }
            render_line(*op, result)
        })
        .collect()
}
