//! # Calculator Error Types
//!
//! Two error surfaces live here:
//!
//! - [`EvalError`]: the outcome of a failed evaluation. It is an ordinary
//!   value carried in `Result<f64, EvalError>` and is meant to be shown to the
//!   user (`"Syntax Error: trailing operation"`). It never aborts the session.
//! - [`CalcError`]: failures on the input side, such as an unknown key name or
//!   an operator symbol outside the keypad's table.
//!
//! Both derive [`thiserror::Error`], so they compose with `?` and with
//! `anyhow` in the binary.
use smartstring::alias::String;
use std::fmt;
use thiserror::Error;

/// Message attached to a number literal with more than one decimal point.
pub const TOO_MANY_DECIMAL_POINTS: &str = "too many decimal points";

/// Message returned when an operator has no right-hand operand.
pub const TRAILING_OPERATION: &str = "trailing operation";

/// Message returned when dividing by zero.
pub const DIVISION_BY_ZERO: &str = "division by zero";

/// Message returned when a number literal can't be read as a float (e.g. `"."`).
pub const INVALID_NUMBER: &str = "invalid number";

/// The category of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The expression is malformed.
    SyntaxError,
    /// The expression is well formed but the arithmetic is undefined.
    MathError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::SyntaxError => f.write_str("Syntax Error"),
            ErrorKind::MathError => f.write_str("Math Error"),
        }
    }
}

/// A structured evaluation failure: a kind plus a human-readable message.
///
/// # Example
/// ```rust
/// # use keypad_calc::{EvalError, ErrorKind};
/// let err = EvalError::math("division by zero");
/// assert_eq!(err.kind, ErrorKind::MathError);
/// assert_eq!(err.to_string(), "Math Error: division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct EvalError {
    /// Syntax or math.
    pub kind: ErrorKind,
    /// What went wrong.
    pub message: String,
}

impl EvalError {
    /// Builds a [`ErrorKind::SyntaxError`].
    pub fn syntax(message: impl AsRef<str>) -> Self {
        Self {
            kind: ErrorKind::SyntaxError,
            message: String::from(message.as_ref()),
        }
    }

    /// Builds a [`ErrorKind::MathError`].
    pub fn math(message: impl AsRef<str>) -> Self {
        Self {
            kind: ErrorKind::MathError,
            message: String::from(message.as_ref()),
        }
    }
}

/// Errors raised while turning raw input into calculator events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The symbol is not one of `+`, `-`, `*`, `/`.
    #[error("{symbol:?} is not an operator")]
    UnknownOperator {
        /// The rejected symbol.
        symbol: char,
    },

    /// A digit event carried something other than `0-9` or `.`.
    #[error("{ch:?} is not a digit or decimal point")]
    InvalidDigit {
        /// The rejected character.
        ch: char,
    },

    /// The key name has no binding on the keypad.
    #[error("no binding for key {key:?}")]
    UnknownKey {
        /// The key name as received.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_error_trait_obj(e: &dyn std::error::Error) -> &dyn std::error::Error {
        e
    }

    #[test]
    fn eval_error_displays_kind_and_message() {
        let err = EvalError::syntax(TRAILING_OPERATION);
        assert_eq!(err.kind, ErrorKind::SyntaxError);
        assert_eq!(err.to_string(), "Syntax Error: trailing operation");

        let _ = _assert_error_trait_obj(&err);
    }

    #[test]
    fn math_error_displays_kind_and_message() {
        let err = EvalError::math(DIVISION_BY_ZERO);
        assert_eq!(err.to_string(), "Math Error: division by zero");
    }

    #[test]
    fn calc_error_messages_name_the_input() {
        let err = CalcError::UnknownOperator { symbol: '%' };
        assert!(err.to_string().contains("'%'"));

        let err = CalcError::UnknownKey {
            key: String::from("f1"),
        };
        assert!(err.to_string().contains("\"f1\""));
    }

    // If these ever stop being Send + Sync + 'static this will fail to compile.
    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn errors_are_send_sync_static() {
        _assert_send_sync_static::<EvalError>();
        _assert_send_sync_static::<CalcError>();
    }
}
