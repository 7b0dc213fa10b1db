//! Keyboard bindings.
//!
//! Maps key names (as a browser reports them in `KeyboardEvent.key`) to
//! [`InputEvent`]s. Matching ignores case.
//!
//! | key                      | event           |
//! |--------------------------|-----------------|
//! | `0`-`9`, `.`             | `Digit`         |
//! | `+`, `-`, `*`, `/`       | `Operator`      |
//! | `a`                      | `UseAnswer`     |
//! | `Backspace`, `Delete`    | `Backspace`     |
//! | `c`                      | `ClearAll`      |
//! | `Enter`, `=`             | `Evaluate`      |
//! | `ArrowLeft`              | `ResumeWriting` |
use crate::CalcError;
use crate::session::InputEvent;
use crate::token::{Operator, is_number_char};
use smartstring::alias::String;

/// Looks up the event bound to `key`.
///
/// # Errors
/// [`CalcError::UnknownKey`] if nothing is bound to it.
///
/// # Example
/// ```rust
/// # use keypad_calc::{key_to_event, InputEvent, Operator};
/// assert_eq!(key_to_event("7").unwrap(), InputEvent::Digit('7'));
/// assert_eq!(key_to_event("Enter").unwrap(), InputEvent::Evaluate);
/// assert_eq!(key_to_event("/").unwrap(), InputEvent::Operator(Operator::Divide));
/// assert!(key_to_event("F1").is_err());
/// ```
pub fn key_to_event(key: &str) -> Result<InputEvent, CalcError> {
    let lower = key.to_ascii_lowercase();
    let mut chars = lower.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if is_number_char(ch) {
            return Ok(InputEvent::Digit(ch));
        }
        if let Ok(op) = Operator::from_symbol(ch) {
            return Ok(InputEvent::Operator(op));
        }
    }
    match lower.as_str() {
        "a" => Ok(InputEvent::UseAnswer),
        "backspace" | "delete" => Ok(InputEvent::Backspace),
        "c" => Ok(InputEvent::ClearAll),
        "enter" | "=" => Ok(InputEvent::Evaluate),
        "arrowleft" => Ok(InputEvent::ResumeWriting),
        _ => Err(CalcError::UnknownKey {
            key: String::from(key),
        }),
    }
}

/// Maps a single typed character, the way [`key_to_event`] maps a one-letter
/// key name.
pub fn char_to_event(ch: char) -> Result<InputEvent, CalcError> {
    let mut buf = [0u8; 4];
    key_to_event(ch.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_point() {
        for ch in "0123456789.".chars() {
            assert_eq!(char_to_event(ch).unwrap(), InputEvent::Digit(ch));
        }
    }

    #[test]
    fn operators() {
        assert_eq!(
            key_to_event("+").unwrap(),
            InputEvent::Operator(Operator::Add)
        );
        assert_eq!(
            key_to_event("-").unwrap(),
            InputEvent::Operator(Operator::Subtract)
        );
        assert_eq!(
            key_to_event("*").unwrap(),
            InputEvent::Operator(Operator::Multiply)
        );
    }

    #[test]
    fn named_keys_ignore_case() {
        assert_eq!(key_to_event("Backspace").unwrap(), InputEvent::Backspace);
        assert_eq!(key_to_event("DELETE").unwrap(), InputEvent::Backspace);
        assert_eq!(key_to_event("A").unwrap(), InputEvent::UseAnswer);
        assert_eq!(key_to_event("C").unwrap(), InputEvent::ClearAll);
        assert_eq!(key_to_event("=").unwrap(), InputEvent::Evaluate);
        assert_eq!(
            key_to_event("ArrowLeft").unwrap(),
            InputEvent::ResumeWriting
        );
    }

    #[test]
    fn unbound_key_is_reported_as_typed() {
        let err = key_to_event("Tab").unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownKey {
                key: String::from("Tab")
            }
        );
        assert!(char_to_event('x').is_err());
        assert!(key_to_event("").is_err());
    }
}
