// operations.rs

use crate::error::CalcError;

/// The fixed set of binary operations. Tokens are resolved up front, so the
/// rest of the program only ever holds a valid variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Root,
}

/// Word-form tokens, used by tab completion.
pub const OP_NAMES: [&str; 6] = ["add", "sub", "mul", "div", "pow", "root"];

impl Op {
    /// Resolve a user-supplied token, symbol or name, case-insensitively and
    /// ignoring surrounding whitespace.
    pub fn from_token(token: &str) -> Result<Self, CalcError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Op::Add),
            "-" | "sub" => Ok(Op::Sub),
            "*" | "mul" => Ok(Op::Mul),
            "/" | "div" => Ok(Op::Div),
            "^" | "pow" => Ok(Op::Pow),
            "root" => Ok(Op::Root),
            _ => Err(CalcError::OperationNotFound(token.to_string())),
        }
    }

    /// Canonical name, used in history rows and logging.
    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Pow => "pow",
            Op::Root => "root",
        }
    }

    /// Apply the operation. Pure; the only failures are the two domain
    /// errors, division by zero and the zeroth root.
    pub fn execute(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Op::Add => Ok(a + b),
            Op::Sub => Ok(a - b),
            Op::Mul => Ok(a * b),
            Op::Div => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
            Op::Pow => Ok(a.powf(b)),
            Op::Root => {
                if b == 0.0 {
                    return Err(CalcError::InvalidArithmetic(
                        "Invalid root operation: zeroth root undefined.".into(),
                    ));
                }
                Ok(a.powf(1.0 / b))
            }
        }
    }
}
