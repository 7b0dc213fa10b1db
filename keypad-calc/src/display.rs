//! # Display Adapter
//!
//! [`TokenList`] is an in-memory stand-in for the calculator's visual token
//! list. It never re-renders the whole expression: it replays the
//! [`UpdateHint`]s of each edit against its own copy, reading only the tokens
//! at the end of the expression. Also home to result formatting.
use crate::EvalError;
use crate::expression::UpdateHint;
use crate::session::EditReport;
use crate::token::{CalcToken, TokenClass};
use smartstring::alias::String;
use std::fmt;

/// Decimal places results are rounded to unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 4;

/// One drawn token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedToken {
    pub text: String,
    pub class: TokenClass,
    pub error: Option<String>,
}

impl From<&CalcToken> for RenderedToken {
    fn from(token: &CalcToken) -> Self {
        let view = token.view();
        Self {
            text: String::from(view.text),
            class: view.class,
            error: view.error.map(String::from),
        }
    }
}

/// Incrementally reconciled list of rendered tokens.
///
/// # Example
/// ```rust
/// # use keypad_calc::{CalculatorSession, InputEvent, Operator, Response, TokenList};
/// let mut session = CalculatorSession::new();
/// let mut list = TokenList::new();
/// for event in [
///     InputEvent::Digit('5'),
///     InputEvent::Operator(Operator::Add),
///     InputEvent::Operator(Operator::Subtract),
/// ] {
///     if let Response::Edited(report) = session.handle(event).unwrap() {
///         list.reconcile(&report, session.expression().tokens());
///     }
/// }
/// assert_eq!(list.to_string(), "5 −");
/// assert!(list.matches(session.expression().tokens()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    items: Vec<RenderedToken>,
}

impl TokenList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[RenderedToken] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Applies an edit's hints, clearing first if the edit started a fresh
    /// expression. `tokens` is the expression after the edit.
    pub fn reconcile(&mut self, report: &EditReport, tokens: &[CalcToken]) {
        if report.cleared {
            self.clear();
        }
        for &hint in &report.hints {
            self.apply(hint, tokens);
        }
    }

    /// Applies a single hint.
    ///
    /// Every mutation happens at the end of the sequence, so the token a
    /// `Push` or `Update` refers to sits at the same index in `tokens` as in
    /// this list.
    pub fn apply(&mut self, hint: UpdateHint, tokens: &[CalcToken]) {
        match hint {
            UpdateHint::Push => {
                if let Some(token) = tokens.get(self.items.len()) {
                    self.items.push(token.into());
                }
            }
            UpdateHint::Update => {
                let index = self.items.len().wrapping_sub(1);
                if let (Some(item), Some(token)) = (self.items.last_mut(), tokens.get(index)) {
                    *item = token.into();
                }
            }
            UpdateHint::Pop => {
                self.items.pop();
            }
            UpdateHint::None => {}
        }
    }

    /// Re-syncs the error flags with the validator's annotations.
    ///
    /// Validation can flag or unflag a token that hints did not touch.
    pub fn refresh_errors(&mut self, tokens: &[CalcToken]) {
        for (item, token) in self.items.iter_mut().zip(tokens) {
            item.error = token.syntax_error.clone();
        }
    }

    /// `true` if this list shows exactly `tokens`.
    pub fn matches(&self, tokens: &[CalcToken]) -> bool {
        self.items.len() == tokens.len()
            && self
                .items
                .iter()
                .zip(tokens)
                .all(|(item, token)| *item == RenderedToken::from(token))
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&item.text)?;
        }
        Ok(())
    }
}

/// Rounds `value` to `precision` decimal places and drops trailing zeros.
///
/// # Example
/// ```rust
/// # use keypad_calc::format_value;
/// assert_eq!(format_value(1.0 / 3.0, 4), "0.3333");
/// assert_eq!(format_value(2.5, 4), "2.5");
/// assert_eq!(format_value(248.0, 4), "248");
/// ```
pub fn format_value(value: f64, precision: u32) -> String {
    let scale = 10f64.powi(precision.min(i32::MAX as u32) as i32);
    let scaled = value * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };
    // no "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}").into()
}

/// Text shown in the output area after an evaluation.
pub fn format_outcome(outcome: &Result<f64, EvalError>, precision: u32) -> String {
    match outcome {
        Ok(value) => format_value(*value, precision),
        Err(err) => err.to_string().into(),
    }
}
