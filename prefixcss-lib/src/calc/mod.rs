//! `calc()` handling: a small arithmetic evaluator and the per-vendor
//! rewriting policy built on top of it.

pub mod fallback;
mod lexer;
mod parser;

use std::fmt;

pub use fallback::{rewrite, CalcRewrite};
pub use parser::{parse_expr, BinaryOp, Expr};

/// A failure to lex, parse or evaluate an arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcError {
    pub offset: usize,
    pub message: String,
}

impl CalcError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.offset)
    }
}

impl std::error::Error for CalcError {}

/// Parses and evaluates a plain arithmetic expression such as `(100 - 20) / 2`.
pub fn evaluate(src: &str) -> Result<f64, CalcError> {
    let value = parse_expr(src)?.eval()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::new(0, "result is not a finite number"))
    }
}
