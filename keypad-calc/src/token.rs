//! # Calculator Tokens
//!
//! This module defines the token model shared by the expression builder, the
//! validator and the evaluator:
//!
//! - [`Operator`]: the four binary operations with their priority, keypad
//!   symbol and display glyph,
//! - [`TokenValue`]: what a token is (number literal, the `Ans` variable, or
//!   an operator),
//! - [`CalcToken`]: a [`TokenValue`] plus the syntax error the validator may
//!   have attached to it,
//! - [`TokenView`]: the renderable form handed to a display adapter.
//!
//! Behavior is dispatched on the tag through free functions ([`reduce`] here,
//! [`resolve_value`](crate::eval::resolve_value) in the evaluator) rather than
//! stored on the token.
use crate::CalcError;
use smartstring::alias::String;
use std::fmt;

/// The name a [`TokenValue::Answer`] token renders as.
pub const ANSWER_TEXT: &str = "Ans";

/// A binary arithmetic operation available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Looks up the operator typed as `symbol`.
    ///
    /// # Errors
    /// [`CalcError::UnknownOperator`] for anything but `+`, `-`, `*`, `/`.
    ///
    /// # Example
    /// ```rust
    /// # use keypad_calc::Operator;
    /// let op = Operator::from_symbol('*').unwrap();
    /// assert_eq!(op, Operator::Multiply);
    /// assert_eq!(op.priority(), 1);
    /// assert_eq!(op.glyph(), "×");
    /// assert!(Operator::from_symbol('^').is_err());
    /// ```
    pub fn from_symbol(symbol: char) -> Result<Self, CalcError> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            _ => Err(CalcError::UnknownOperator { symbol }),
        }
    }

    /// The ASCII symbol used to enter this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// The glyph shown on the calculator display.
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Binding priority: 0 for `+`/`-`, 1 for `*`/`/`.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 0,
            Operator::Multiply | Operator::Divide => 1,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Operator::from_symbol(symbol)
    }
}

/// Applies `op` to its two operands.
///
/// Division by zero is not checked here; the evaluator rejects it before
/// calling this.
pub fn reduce(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => a / b,
    }
}

/// Returns `true` for the characters a number literal may contain.
pub fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

/// The payload of a [`CalcToken`].
///
/// # Variants
///
/// - [`TokenValue::Number`]: the literal as typed. Its numeric value is parsed
///   from the text whenever it is needed, so in-place edits are always seen.
/// - [`TokenValue::Answer`]: the `Ans` variable, resolved against the
///   session's previous result at evaluation time. It carries its display
///   text, which starts as `Ans` and keeps any digits typed right after it;
///   those digits never change its value.
/// - [`TokenValue::Operator`]: a binary operator.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Number literal text.
    Number(String),

    /// Reference to the previous result, with its display text.
    Answer(String),

    /// Binary operator.
    Operator(Operator),
}

/// Render class of a token, used by display adapters to style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Number,
    Variable,
    Operation,
}

impl TokenClass {
    /// The class name a display adapter attaches to the rendered token.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::Number => "number",
            TokenClass::Variable => "variable",
            TokenClass::Operation => "operation",
        }
    }
}

/// A single token of a calculator expression.
///
/// Only the text of a number or `Ans` token and `syntax_error` change after a
/// token is pushed; everything else is fixed at construction.
///
/// # Example
/// ```rust
/// # use keypad_calc::{CalcToken, Operator, TokenClass};
/// let num = CalcToken::number("12.5");
/// assert!(num.is_value());
/// assert_eq!(num.to_string(), "12.5");
///
/// let op = CalcToken::operator(Operator::Divide);
/// assert_eq!(op.view().class, TokenClass::Operation);
/// assert_eq!(op.to_string(), "÷");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalcToken {
    /// What the token is.
    pub value: TokenValue,
    /// Reason the validator rejected this token, if it did.
    pub syntax_error: Option<String>,
}

impl CalcToken {
    /// A number literal token.
    pub fn number(text: impl AsRef<str>) -> Self {
        Self {
            value: TokenValue::Number(String::from(text.as_ref())),
            syntax_error: None,
        }
    }

    /// An `Ans` token.
    pub fn answer() -> Self {
        Self {
            value: TokenValue::Answer(String::from(ANSWER_TEXT)),
            syntax_error: None,
        }
    }

    /// An operator token.
    pub fn operator(op: Operator) -> Self {
        Self {
            value: TokenValue::Operator(op),
            syntax_error: None,
        }
    }

    /// Numbers and `Ans` are values; operators are not.
    pub fn is_value(&self) -> bool {
        !matches!(self.value, TokenValue::Operator(_))
    }

    /// Returns the operator if this is an operator token.
    pub fn as_operator(&self) -> Option<Operator> {
        match self.value {
            TokenValue::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Render class of this token.
    pub fn class(&self) -> TokenClass {
        match self.value {
            TokenValue::Number(_) => TokenClass::Number,
            TokenValue::Answer(_) => TokenClass::Variable,
            TokenValue::Operator(_) => TokenClass::Operation,
        }
    }

    /// The renderable form of this token.
    pub fn view(&self) -> TokenView<'_> {
        TokenView {
            text: match &self.value {
                TokenValue::Number(text) | TokenValue::Answer(text) => text.as_str(),
                TokenValue::Operator(op) => op.glyph(),
            },
            class: self.class(),
            error: self.syntax_error.as_deref(),
        }
    }
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.view().text)
    }
}

/// What a display adapter needs to draw one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenView<'a> {
    /// Display text (number literal, `Ans`, or operator glyph).
    pub text: &'a str,
    /// Style class.
    pub class: TokenClass,
    /// Syntax error to flag, if any.
    pub error: Option<&'a str>,
}
