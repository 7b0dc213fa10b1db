//! # Calculator Session
//!
//! [`CalculatorSession`] owns the expression, the previous result and the
//! [`Mode`] state machine. Every input event goes through
//! [`CalculatorSession::handle`], which runs the expression builder, the
//! validator and the evaluator and reports back what a display needs to
//! redraw.
//!
//! ## Modes
//!
//! ```text
//!            edit (not backspace)           evaluate ok
//!   Evaluated ───────────────────► Writing ─────────────► Evaluated
//!   Error     ───────────────────►         ─────────────► Error
//!                                          evaluate err
//! ```
//!
//! Leaving `Evaluated`/`Error` through an edit first clears the expression.
//! Backspace is exempt: it neither clears nor changes the mode, and does
//! nothing while the mode is not `Writing`. `ResumeWriting` switches back to
//! `Writing` keeping the tokens.
use crate::CalcError;
use crate::EvalError;
use crate::eval;
use crate::expression::{Edit, Expression, UpdateHint};
use crate::token::{CalcToken, Operator, TokenView};
use crate::validator::validate;

/// Session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The expression is live and edits append to it.
    #[default]
    Writing,
    /// The last evaluation produced a number.
    Evaluated,
    /// The last evaluation failed.
    Error,
}

impl Mode {
    /// Seed pushed when an operator arrives on an empty expression: `0` while
    /// writing, `Ans` after an evaluation.
    pub fn auto_start_token(self) -> CalcToken {
        match self {
            Mode::Writing => CalcToken::number("0"),
            Mode::Evaluated | Mode::Error => CalcToken::answer(),
        }
    }
}

/// A mode change (possibly to the same mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
}

impl Transition {
    /// `true` if the mode actually changed.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// The inputs a display can send to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Digit(char),
    Operator(Operator),
    Backspace,
    UseAnswer,
    Evaluate,
    ClearAll,
    ResumeWriting,
}

/// Result of an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditReport {
    /// The expression was emptied before the edit was applied; a display
    /// should drop everything it shows before replaying `hints`.
    pub cleared: bool,
    /// One hint per mutation, in order.
    pub hints: Vec<UpdateHint>,
    pub transition: Transition,
}

/// Result of an evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub outcome: Result<f64, EvalError>,
    pub transition: Transition,
}

/// What [`CalculatorSession::handle`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Edited(EditReport),
    Evaluated(Evaluation),
    /// The expression was emptied; the mode is unchanged.
    Cleared,
    Resumed(Transition),
}

/// The calculator core: expression, previous result and mode.
///
/// # Example
/// ```rust
/// # use keypad_calc::{CalculatorSession, InputEvent, Mode, Operator};
/// let mut session = CalculatorSession::new();
/// for event in [
///     InputEvent::Digit('7'),
///     InputEvent::Evaluate,
///     InputEvent::Operator(Operator::Add),
///     InputEvent::Digit('3'),
/// ] {
///     session.handle(event).unwrap();
/// }
/// assert_eq!(session.expression().to_string(), "Ans + 3");
/// let eval = session.evaluate();
/// assert_eq!(eval.outcome, Ok(10.0));
/// assert_eq!(session.mode(), Mode::Evaluated);
/// assert_eq!(session.previous_result(), 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    expression: Expression,
    previous_result: f64,
    mode: Mode,
}

impl CalculatorSession {
    /// A fresh session: empty expression, previous result `0`, `Writing`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn previous_result(&self) -> f64 {
        self.previous_result
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Renderable form of the last token, for incremental display updates.
    pub fn last_token_view(&self) -> Option<TokenView<'_>> {
        self.expression.last().map(CalcToken::view)
    }

    /// Dispatches one input event.
    ///
    /// # Errors
    /// [`CalcError::InvalidDigit`] for a digit event outside `0-9` and `.`.
    /// Nothing is changed in that case.
    pub fn handle(&mut self, event: InputEvent) -> Result<Response, CalcError> {
        Ok(match event {
            InputEvent::Digit(ch) => Response::Edited(self.edit(Edit::Digit(ch))?),
            InputEvent::Operator(op) => Response::Edited(self.edit(Edit::Operator(op))?),
            InputEvent::Backspace => Response::Edited(self.edit(Edit::Backspace)?),
            InputEvent::UseAnswer => Response::Edited(self.edit(Edit::UseAnswer)?),
            InputEvent::Evaluate => Response::Evaluated(self.evaluate()),
            InputEvent::ClearAll => {
                self.clear_all();
                Response::Cleared
            }
            InputEvent::ResumeWriting => Response::Resumed(self.resume_writing()),
        })
    }

    /// Applies an edit under the session's clearing rule, then revalidates.
    ///
    /// # Errors
    /// Whatever [`Expression::apply`] rejects. The expression and the mode
    /// are left untouched.
    pub fn edit(&mut self, edit: Edit) -> Result<EditReport, CalcError> {
        let from = self.mode;
        if from != Mode::Writing && edit == Edit::Backspace {
            return Ok(EditReport {
                cleared: false,
                hints: vec![UpdateHint::None],
                transition: Transition { from, to: from },
            });
        }

        let cleared = from != Mode::Writing;
        // the seed is picked by the mode in force before the transition
        let hints = if cleared {
            let mut fresh = Expression::new();
            let hints = fresh.apply(edit, from)?;
            self.expression = fresh;
            hints
        } else {
            self.expression.apply(edit, from)?
        };
        validate(&mut self.expression);
        let transition = self.set_mode(Mode::Writing);

        Ok(EditReport {
            cleared,
            hints,
            transition,
        })
    }

    /// Evaluates the current expression.
    ///
    /// On success the value becomes the previous result and the mode becomes
    /// `Evaluated`; on failure the mode becomes `Error` and the previous
    /// result is kept. The tokens are left as they are either way.
    pub fn evaluate(&mut self) -> Evaluation {
        let outcome = eval::evaluate(self.expression.tokens(), self.previous_result);
        let to = match &outcome {
            Ok(value) => {
                self.previous_result = *value;
                Mode::Evaluated
            }
            Err(_) => Mode::Error,
        };
        let transition = self.set_mode(to);
        Evaluation {
            outcome,
            transition,
        }
    }

    /// Empties the expression. The mode and previous result are kept.
    pub fn clear_all(&mut self) {
        self.expression.clear();
    }

    /// Returns to `Writing` without touching the tokens.
    pub fn resume_writing(&mut self) -> Transition {
        self.set_mode(Mode::Writing)
    }

    fn set_mode(&mut self, to: Mode) -> Transition {
        let transition = Transition {
            from: self.mode,
            to,
        };
        if transition.changed() {
            log::debug!("mode {:?} -> {:?}", transition.from, transition.to);
        }
        self.mode = to;
        transition
    }
}
