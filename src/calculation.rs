// calculation.rs

use chrono::Utc;

use crate::error::CalcError;
use crate::operations::Op;

/// One executed operation, frozen at creation time. History rows are exactly
/// these.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub a: f64,
    pub b: f64,
    pub operation: String,
    pub result: f64,
    pub timestamp_utc: String,
}

impl Calculation {
    /// Run `op` over the operands and stamp the current UTC time. Domain
    /// failures from the operation pass through unchanged.
    pub fn evaluate(a: f64, b: f64, op: Op) -> Result<Self, CalcError> {
        let result = op.execute(a, b)?;
        Ok(Self {
            a,
            b,
            operation: op.name().to_string(),
            result,
            timestamp_utc: Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn evaluate_fills_every_field() {
        let calc = Calculation::evaluate(2.0, 3.0, Op::Add).unwrap();
        assert_eq!(calc.a, 2.0);
        assert_eq!(calc.b, 3.0);
        assert_eq!(calc.operation, "add");
        assert_eq!(calc.result, 5.0);
        assert!(DateTime::parse_from_rfc3339(&calc.timestamp_utc).is_ok());
    }

    #[test]
    fn operation_failures_pass_through() {
        let err = Calculation::evaluate(1.0, 0.0, Op::Div).unwrap_err();
        assert_eq!(err.to_string(), "Cannot divide by zero.");
    }
}
