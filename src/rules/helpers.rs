//! Shared token predicates and the numeric guard used by every matcher.

use num_bigint::BigUint;

use crate::Token;

/// Digit runs longer than this are unparseable for matching purposes.
///
/// The bound caps per-step arithmetic cost: a rule whose rewrite needs the
/// value of an over-long number simply does not match at that location, so a
/// diverging run grinds to "no rule applies" instead of consuming unbounded
/// time inside a single step.
pub(crate) const MAX_NUMBER_DIGITS: usize = 100;

/// The integer value of a number token, if a matcher may use it.
///
/// Returns `None` for separators and for digit runs longer than
/// [`MAX_NUMBER_DIGITS`]. Never fails louder than that.
pub(crate) fn number_value(token: &Token) -> Option<BigUint> {
    match token {
        Token::Number(digits) if digits.len() <= MAX_NUMBER_DIGITS => digits.parse().ok(),
        _ => None,
    }
}

/// True for any number token, regardless of length.
pub(crate) fn is_number(token: &Token) -> bool {
    matches!(token, Token::Number(_))
}

/// True for the literal token `0`.
///
/// The rules compare text, not value: `00` is a number like any other, not a
/// zero marker.
pub(crate) fn is_zero(token: &Token) -> bool {
    matches!(token, Token::Number(digits) if digits == "0")
}

/// Render a value as a canonical number token (decimal, no leading zeros).
pub(crate) fn number_token(value: &BigUint) -> Token {
    Token::Number(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_value_respects_the_digit_cutoff() {
        let at_bound = Token::Number("9".repeat(MAX_NUMBER_DIGITS));
        let past_bound = Token::Number("9".repeat(MAX_NUMBER_DIGITS + 1));
        assert!(number_value(&at_bound).is_some());
        assert!(number_value(&past_bound).is_none());
        assert!(number_value(&Token::Bullet).is_none());
    }

    #[test]
    fn zero_is_textual() {
        assert!(is_zero(&Token::Number("0".to_string())));
        assert!(!is_zero(&Token::Number("00".to_string())));
        assert!(!is_zero(&Token::Dash));
    }
}
