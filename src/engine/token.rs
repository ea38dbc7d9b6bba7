//! Token model boundary: normalization, tokenization, and the chain grammar.
//!
//! The engine never sees raw text except through this module. `tokenize` and
//! `detokenize` are exact inverses for any text the engine itself produces;
//! input text is first passed through `normalize` so that the ASCII `.` alias
//! becomes the canonical bullet glyph before tokenizing.

use crate::Token;

/// Replace every ASCII dot with the centered bullet glyph.
///
/// Both forms are accepted on input as "begin a number group"; output always
/// uses the bullet.
pub(crate) fn normalize(text: &str) -> String {
    text.replace('.', "•")
}

/// Split a chain into maximal digit runs and single separator tokens.
///
/// Characters outside the alphabet are skipped, not rejected — validity is a
/// boundary concern (see [`is_wellformed`]), not a tokenizer concern.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    regex!(r"\d+|[•-]")
        .find_iter(text)
        .map(|m| match m.as_str() {
            "•" => Token::Bullet,
            "-" => Token::Dash,
            digits => Token::Number(digits.to_string()),
        })
        .collect()
}

/// Concatenate token texts. No separators are added or removed.
pub(crate) fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

/// The chain validity grammar: a bullet-or-dot group first, then any mix of
/// bullet-or-dot or dash groups, digits after every separator.
///
/// Callers are expected to gate input on this before stepping; the engine's
/// behavior on text that fails it is out of contract.
pub(crate) fn is_wellformed(text: &str) -> bool {
    regex!(r"^[•.][0-9]+(?:[-•.][0-9]+)*$").is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_detokenize_roundtrip() {
        for text in ["•0•3", "•2-2-2-5•2", "•123-456•789", "•0", "•10•0-0"] {
            assert_eq!(detokenize(&tokenize(text)), text, "roundtrip of {text}");
        }
    }

    #[test]
    fn normalize_maps_dots_to_bullets() {
        assert_eq!(normalize(".0.3"), "•0•3");
        assert_eq!(normalize("•1-2.3"), "•1-2•3");
        assert_eq!(normalize("123"), "123");
    }

    #[test]
    fn tokenize_splits_maximal_digit_runs() {
        let tokens = tokenize("•12-345•6");
        assert_eq!(
            tokens,
            vec![
                Token::Bullet,
                Token::Number("12".to_string()),
                Token::Dash,
                Token::Number("345".to_string()),
                Token::Bullet,
                Token::Number("6".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_preserves_leading_zeros() {
        // Raw digit runs are kept verbatim; only rewritten numbers are
        // re-rendered canonically.
        assert_eq!(detokenize(&tokenize("•0033")), "•0033");
    }

    #[test]
    fn wellformed_grammar() {
        for valid in ["•0", ".5", "•1-2•3", "•10•0-0", ".1.2", "•0033"] {
            assert!(is_wellformed(valid), "expected valid: {valid}");
        }
        for invalid in ["", "•", "0•1", "•-1", "•1-", "•1--2", "a•1", "•1•", "-0•1", "•1 2"] {
            assert!(!is_wellformed(invalid), "expected invalid: {invalid}");
        }
    }
}
