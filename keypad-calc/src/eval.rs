//! # Evaluator
//!
//! Reduces a flat token slice to a number without building a tree. The slice
//! is split at the operator that binds loosest (see [`split_index`]), both
//! sides are evaluated recursively and the operator is applied to the two
//! results.
//!
//! Only two priority levels are supported. Parentheses or more levels would
//! need a real expression tree.
use crate::EvalError;
use crate::error::{DIVISION_BY_ZERO, INVALID_NUMBER, TRAILING_OPERATION};
use crate::token::{CalcToken, Operator, TokenValue, reduce};

/// Evaluates `tokens`, resolving `Ans` to `previous_result`.
///
/// A token already flagged by the validator fails the whole evaluation with
/// that token's message, the leftmost flagged token winning.
///
/// # Errors
/// - `SyntaxError` for a flagged token, an unreadable number literal, or an
///   operator with a missing operand (`"trailing operation"`).
/// - `MathError` for division by zero.
///
/// # Example
/// ```rust
/// # use keypad_calc::{evaluate, CalcToken, Operator};
/// let tokens = [
///     CalcToken::number("2"),
///     CalcToken::operator(Operator::Add),
///     CalcToken::number("3"),
///     CalcToken::operator(Operator::Multiply),
///     CalcToken::number("4"),
/// ];
/// assert_eq!(evaluate(&tokens, 0.0), Ok(14.0));
/// ```
pub fn evaluate(tokens: &[CalcToken], previous_result: f64) -> Result<f64, EvalError> {
    if let Some(message) = tokens.iter().find_map(|t| t.syntax_error.as_deref()) {
        return Err(EvalError::syntax(message));
    }
    evaluate_slice(tokens, previous_result)
}

fn evaluate_slice(tokens: &[CalcToken], previous_result: f64) -> Result<f64, EvalError> {
    if let [token] = tokens {
        return resolve_value(token, previous_result);
    }

    let Some((index, op)) = split_index(tokens) else {
        return Err(EvalError::syntax(TRAILING_OPERATION));
    };

    let a = evaluate_slice(&tokens[..index], previous_result)?;
    let b = evaluate_slice(&tokens[index + 1..], previous_result)?;

    if op == Operator::Divide && b == 0.0 {
        return Err(EvalError::math(DIVISION_BY_ZERO));
    }
    Ok(reduce(op, a, b))
}

/// The numeric value of a single value token.
///
/// Numbers are parsed from their current text; `Ans` yields
/// `previous_result`. An operator on its own has no value and is reported as
/// a trailing operation.
pub fn resolve_value(token: &CalcToken, previous_result: f64) -> Result<f64, EvalError> {
    match &token.value {
        TokenValue::Number(text) => text
            .parse::<f64>()
            .map_err(|_| EvalError::syntax(INVALID_NUMBER)),
        TokenValue::Answer(_) => Ok(previous_result),
        TokenValue::Operator(_) => Err(EvalError::syntax(TRAILING_OPERATION)),
    }
}

/// Picks the operator to evaluate last.
///
/// Scans right to left keeping the first operator seen, replacing it only by
/// one of strictly lower priority, and stops at the first priority-0
/// operator. Among equal priorities the rightmost therefore wins, which makes
/// every operator left-associative.
pub fn split_index(tokens: &[CalcToken]) -> Option<(usize, Operator)> {
    let mut split: Option<(usize, Operator)> = None;
    for (index, token) in tokens.iter().enumerate().rev() {
        let Some(op) = token.as_operator() else {
            continue;
        };
        if split.is_none_or(|(_, best)| op.priority() < best.priority()) {
            split = Some((index, op));
        }
        if op.priority() == 0 {
            break;
        }
    }
    log::trace!("split {:?} of {} tokens", split, tokens.len());
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    /// Tokenizes a compact test string: digits and `.` form numbers, `A` is
    /// `Ans`, `+-*/` are operators. Consecutive operators are kept as-is and
    /// digits right after `A` extend its text, as the builder does.
    fn toks(src: &str) -> Vec<CalcToken> {
        let mut out: Vec<CalcToken> = Vec::new();
        for ch in src.chars() {
            match ch {
                '+' | '-' | '*' | '/' => {
                    out.push(CalcToken::operator(Operator::from_symbol(ch).unwrap()))
                }
                'A' => out.push(CalcToken::answer()),
                ' ' => {}
                _ => match out.last_mut() {
                    Some(CalcToken {
                        value: TokenValue::Number(text) | TokenValue::Answer(text),
                        ..
                    }) => text.push(ch),
                    _ => out.push(CalcToken::number(ch.to_string())),
                },
            }
        }
        out
    }

    fn eval(src: &str) -> Result<f64, EvalError> {
        evaluate(&toks(src), 0.0)
    }

    #[test]
    fn single_number_parses_as_float() {
        assert_eq!(eval("248"), Ok(248.0));
        assert_eq!(eval("2.5"), Ok(2.5));
        assert_eq!(eval(".5"), Ok(0.5));
        assert_eq!(eval("5."), Ok(5.0));
    }

    #[test]
    fn lone_decimal_point_is_invalid_number() {
        assert_eq!(eval("."), Err(EvalError::syntax(INVALID_NUMBER)));
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(eval("2+3*4"), Ok(14.0));
        assert_eq!(eval("2*3+4"), Ok(10.0));
        assert_eq!(eval("10-6/2"), Ok(7.0));
    }

    #[test]
    fn same_priority_is_left_associative() {
        assert_eq!(eval("8-3+2"), Ok(7.0));
        assert_eq!(eval("10-4-3"), Ok(3.0));
        assert_eq!(eval("8/4*2"), Ok(4.0));
        assert_eq!(eval("64/4/2"), Ok(8.0));
    }

    #[test]
    fn split_prefers_rightmost_low_priority() {
        assert_eq!(split_index(&toks("8-3+2")), Some((3, Operator::Add)));
        assert_eq!(split_index(&toks("1+2*3*4")), Some((1, Operator::Add)));
        assert_eq!(split_index(&toks("2*3*4")), Some((3, Operator::Multiply)));
        assert_eq!(split_index(&toks("12")), None);
    }

    #[test]
    fn answer_resolves_to_previous_result() {
        assert_eq!(evaluate(&toks("A+3"), 7.0), Ok(10.0));
        assert_eq!(evaluate(&toks("A*A"), -3.0), Ok(9.0));
    }

    #[test]
    fn division_by_zero_is_math_error() {
        let err = eval("5/0").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MathError);
        assert_eq!(err.message, DIVISION_BY_ZERO);
        assert_eq!(eval("5/0.0").unwrap_err().kind, ErrorKind::MathError);
        assert_eq!(eval("1+5/0*2").unwrap_err().kind, ErrorKind::MathError);
    }

    #[test]
    fn zero_numerator_is_fine() {
        assert_eq!(eval("0/5"), Ok(0.0));
    }

    #[test]
    fn trailing_operator_is_syntax_error() {
        assert_eq!(eval("5+"), Err(EvalError::syntax(TRAILING_OPERATION)));
        assert_eq!(eval("5*3-"), Err(EvalError::syntax(TRAILING_OPERATION)));
        assert_eq!(eval(""), Err(EvalError::syntax(TRAILING_OPERATION)));
        assert_eq!(eval("+"), Err(EvalError::syntax(TRAILING_OPERATION)));
    }

    #[test]
    fn digits_typed_after_answer_do_not_change_it() {
        let tokens = toks("A5");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].to_string(), "Ans5");
        assert_eq!(evaluate(&tokens, 7.0), Ok(7.0));
        assert_eq!(evaluate(&toks("A12*2"), 3.0), Ok(6.0));
    }

    #[test]
    fn left_error_wins_over_right_error() {
        // left side is a division by zero, right side is dangling
        assert_eq!(eval("1/0+"), Err(EvalError::math(DIVISION_BY_ZERO)));
        assert_eq!(eval("*2+1/0"), Err(EvalError::syntax(TRAILING_OPERATION)));
    }

    #[test]
    fn flagged_token_fails_whole_expression() {
        let mut tokens = toks("1+1.2.3*2");
        tokens[2].syntax_error = Some("too many decimal points".into());
        let err = evaluate(&tokens, 0.0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::SyntaxError);
        assert_eq!(err.message, "too many decimal points");
    }

    #[test]
    fn leftmost_flagged_token_wins() {
        let mut tokens = toks("1+2");
        tokens[0].syntax_error = Some("first".into());
        tokens[2].syntax_error = Some("second".into());
        assert_eq!(evaluate(&tokens, 0.0), Err(EvalError::syntax("first")));
    }

    #[test]
    fn evaluation_does_not_mutate_tokens() {
        let tokens = toks("9-4*2");
        let before = tokens.clone();
        assert_eq!(evaluate(&tokens, 0.0), Ok(1.0));
        assert_eq!(tokens, before);
    }
}
