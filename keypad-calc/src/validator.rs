//! Number-literal validation.
//!
//! [`validate`] annotates tokens in place and never removes them. Only
//! well-formedness of number literals is checked; token adjacency problems
//! surface at evaluation time instead.
use crate::Expression;
use crate::error::TOO_MANY_DECIMAL_POINTS;
use crate::token::{CalcToken, TokenValue};
use smartstring::alias::String;

/// Sets or clears `syntax_error` on every number token of `expr`.
///
/// Running it twice on an unchanged expression gives the same annotations.
///
/// # Example
/// ```rust
/// # use keypad_calc::{validate, CalcToken, Expression};
/// let mut expr = Expression::from_tokens(vec![CalcToken::number("1.2.3")]);
/// validate(&mut expr);
/// assert_eq!(expr.tokens()[0].syntax_error.as_deref(), Some("too many decimal points"));
/// ```
pub fn validate(expr: &mut Expression) {
    for token in expr.tokens_mut() {
        validate_token(token);
    }
}

fn validate_token(token: &mut CalcToken) {
    let TokenValue::Number(text) = &token.value else {
        return;
    };
    token.syntax_error = if text.matches('.').count() > 1 {
        log::trace!("{:?}: {}", text, TOO_MANY_DECIMAL_POINTS);
        Some(String::from(TOO_MANY_DECIMAL_POINTS))
    } else {
        None
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operator;

    fn errors(expr: &Expression) -> Vec<Option<&str>> {
        expr.tokens()
            .iter()
            .map(|t| t.syntax_error.as_deref())
            .collect()
    }

    #[test]
    fn flags_number_with_two_points() {
        let mut expr = Expression::from_tokens(vec![
            CalcToken::number("1.5"),
            CalcToken::operator(Operator::Add),
            CalcToken::number("1.2.3"),
        ]);
        validate(&mut expr);
        assert_eq!(errors(&expr), [None, None, Some(TOO_MANY_DECIMAL_POINTS)]);
    }

    #[test]
    fn clears_error_once_fixed() {
        let mut expr = Expression::from_tokens(vec![CalcToken::number("1..")]);
        validate(&mut expr);
        assert!(expr.tokens()[0].syntax_error.is_some());

        expr.tokens_mut()[0] = CalcToken {
            value: TokenValue::Number(String::from("1.")),
            syntax_error: Some(String::from(TOO_MANY_DECIMAL_POINTS)),
        };
        validate(&mut expr);
        assert_eq!(errors(&expr), [None]);
    }

    #[test]
    fn is_idempotent() {
        let mut expr = Expression::from_tokens(vec![
            CalcToken::number("3..1"),
            CalcToken::operator(Operator::Multiply),
            CalcToken::answer(),
            CalcToken::number("2"),
        ]);
        validate(&mut expr);
        let once = expr.clone();
        validate(&mut expr);
        assert_eq!(expr, once);
    }

    #[test]
    fn does_not_check_alternation() {
        let mut expr = Expression::from_tokens(vec![
            CalcToken::operator(Operator::Add),
            CalcToken::number("1"),
            CalcToken::number("2"),
        ]);
        validate(&mut expr);
        assert_eq!(errors(&expr), [None, None, None]);
    }
}
