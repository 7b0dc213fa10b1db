//! # Expression Builder
//!
//! An [`Expression`] is the ordered token sequence the user is typing. It is
//! only changed through [`Expression::apply`], which performs one atomic
//! [`Edit`] and reports what happened as a list of [`UpdateHint`]s so a
//! display can reconcile its rendering incrementally.
//!
//! Value/operator alternation is not enforced here. Malformed sequences are
//! reported later by the validator and the evaluator.
use crate::CalcError;
use crate::session::Mode;
use crate::token::{CalcToken, Operator, TokenValue, is_number_char};
use std::fmt;

/// How one mutation changed the end of the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateHint {
    /// A token was appended.
    Push,
    /// The last token changed in place.
    Update,
    /// The last token was removed.
    Pop,
    /// Nothing changed.
    None,
}

/// An atomic edit of the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// A digit `0-9` or the decimal point.
    Digit(char),
    /// A binary operator.
    Operator(Operator),
    /// Delete one character or token from the end.
    Backspace,
    /// Insert the `Ans` variable.
    UseAnswer,
}

impl Edit {
    /// Builds a [`Edit::Digit`], rejecting anything that can't appear in a
    /// number literal.
    pub fn digit(ch: char) -> Result<Self, CalcError> {
        if is_number_char(ch) {
            Ok(Edit::Digit(ch))
        } else {
            Err(CalcError::InvalidDigit { ch })
        }
    }

    /// Builds a [`Edit::Operator`] from its keypad symbol.
    pub fn operator(symbol: char) -> Result<Self, CalcError> {
        Ok(Edit::Operator(Operator::from_symbol(symbol)?))
    }
}

/// The token sequence being edited.
///
/// # Example
/// ```rust
/// # use keypad_calc::{Edit, Expression, Mode, Operator, UpdateHint};
/// let mut expr = Expression::new();
/// assert_eq!(expr.apply(Edit::Digit('4'), Mode::Writing).unwrap(), [UpdateHint::Push]);
/// assert_eq!(expr.apply(Edit::Digit('2'), Mode::Writing).unwrap(), [UpdateHint::Update]);
/// expr.apply(Edit::Operator(Operator::Add), Mode::Writing).unwrap();
/// assert_eq!(
///     expr.apply(Edit::Operator(Operator::Multiply), Mode::Writing).unwrap(),
///     [UpdateHint::Pop, UpdateHint::Push],
/// );
/// assert_eq!(expr.to_string(), "42 ×");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    tokens: Vec<CalcToken>,
}

impl Expression {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Builds an expression from already-made tokens.
    pub fn from_tokens(tokens: Vec<CalcToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[CalcToken] {
        &self.tokens
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut [CalcToken] {
        &mut self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The most recently pushed token.
    pub fn last(&self) -> Option<&CalcToken> {
        self.tokens.last()
    }

    /// Truncates the expression to empty.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Applies one edit and returns the hints for every mutation it made, in
    /// order.
    ///
    /// `mode` selects the auto-start seed used when an operator arrives on an
    /// empty expression: `0` while writing, `Ans` otherwise.
    ///
    /// # Errors
    /// [`CalcError::InvalidDigit`] if a [`Edit::Digit`] carries a character
    /// other than `0-9` or `.`. The expression is left unchanged.
    pub fn apply(&mut self, edit: Edit, mode: Mode) -> Result<Vec<UpdateHint>, CalcError> {
        let hints = match edit {
            Edit::Digit(ch) => {
                if !is_number_char(ch) {
                    return Err(CalcError::InvalidDigit { ch });
                }
                vec![self.push_digit(ch)]
            }
            Edit::Operator(op) => self.push_operator(op, mode),
            Edit::Backspace => vec![self.backspace()],
            Edit::UseAnswer => vec![self.push(CalcToken::answer())],
        };
        log::trace!("{:?} -> {:?} [{}]", edit, hints, self);
        Ok(hints)
    }

    fn push(&mut self, token: CalcToken) -> UpdateHint {
        self.tokens.push(token);
        UpdateHint::Push
    }

    fn pop(&mut self) -> UpdateHint {
        match self.tokens.pop() {
            Some(_) => UpdateHint::Pop,
            None => UpdateHint::None,
        }
    }

    /// Appends `ch` to a trailing value token. After `Ans` the digit only
    /// extends the displayed text; the token still stands for the previous
    /// result.
    fn push_digit(&mut self, ch: char) -> UpdateHint {
        match self.tokens.last_mut() {
            Some(CalcToken {
                value: TokenValue::Number(text) | TokenValue::Answer(text),
                ..
            }) => {
                text.push(ch);
                UpdateHint::Update
            }
            _ => {
                let mut buf = [0u8; 4];
                self.push(CalcToken::number(ch.encode_utf8(&mut buf)))
            }
        }
    }

    fn push_operator(&mut self, op: Operator, mode: Mode) -> Vec<UpdateHint> {
        let mut hints = Vec::with_capacity(2);
        if self.tokens.is_empty() {
            hints.push(self.push(mode.auto_start_token()));
        }
        if self.last().is_some_and(|t| t.as_operator().is_some()) {
            hints.push(self.pop());
        }
        hints.push(self.push(CalcToken::operator(op)));
        hints
    }

    fn backspace(&mut self) -> UpdateHint {
        match self.tokens.last_mut() {
            None => UpdateHint::None,
            Some(CalcToken {
                value: TokenValue::Number(text),
                ..
            }) if text.chars().count() > 1 => {
                text.pop();
                UpdateHint::Update
            }
            Some(_) => self.pop(),
        }
    }
}

impl fmt::Display for Expression {
    /// Tokens joined by single spaces, the way the calculator display shows
    /// them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
