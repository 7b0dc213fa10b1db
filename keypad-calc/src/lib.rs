//! # keypad-calc
//!
//! The expression engine behind a keypad calculator. Input arrives one key at
//! a time; the engine keeps a flat token sequence up to date, flags malformed
//! number literals, and evaluates the sequence with two priority levels
//! (`+ -` below `× ÷`).
//!
//! ## Overview
//!
//! - [`token`]: [`CalcToken`], [`TokenValue`] and the [`Operator`] table.
//! - [`expression`]: the [`Expression`] builder and its [`UpdateHint`]s.
//! - [`validator`]: number-literal checks ([`validate`]).
//! - [`eval`]: split-and-recurse evaluation ([`evaluate`]).
//! - [`session`]: [`CalculatorSession`], the `writing`/`evaluated`/`error`
//!   state machine that ties the above together.
//! - [`keymap`]: keyboard key names to [`InputEvent`]s.
//! - [`display`]: an incremental [`TokenList`] and result formatting.
//!
//! ## Example
//!
//! ```rust
//! use keypad_calc::{CalculatorSession, char_to_event, format_outcome};
//!
//! let mut session = CalculatorSession::new();
//! for ch in "8-3+2".chars() {
//!     session.handle(char_to_event(ch).unwrap()).unwrap();
//! }
//! let eval = session.evaluate();
//! assert_eq!(eval.outcome, Ok(7.0));
//! assert_eq!(format_outcome(&eval.outcome, 4), "7");
//! ```
pub mod display;
pub mod error;
pub mod eval;
pub mod expression;
pub mod keymap;
pub mod session;
pub mod token;
pub mod validator;

pub use display::{DEFAULT_PRECISION, RenderedToken, TokenList, format_outcome, format_value};
pub use error::{CalcError, ErrorKind, EvalError};
pub use eval::{evaluate, resolve_value, split_index};
pub use expression::{Edit, Expression, UpdateHint};
pub use keymap::{char_to_event, key_to_event};
pub use session::{
    CalculatorSession, EditReport, Evaluation, InputEvent, Mode, Response, Transition,
};
pub use token::{CalcToken, Operator, TokenClass, TokenValue, TokenView, reduce};
pub use validator::validate;
