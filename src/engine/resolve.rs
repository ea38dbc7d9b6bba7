//! Step resolution: candidate collection and the selection policy.
//!
//! The matchers enumerate every occurrence of every rule; this module picks
//! the single one to apply. The policy is the engine's determinism
//! guarantee — for a given chain there is exactly one next chain, or none:
//!
//! - the rightmost start index wins (the outermost, most recently produced
//!   structure is reduced before anything earlier in the chain), and
//! - matches tied on start go to the lowest rule id.

use crate::engine::token::{detokenize, tokenize};
use crate::rules::matchers::all_matches;
use crate::{RuleMatch, Token};

/// Apply one rewrite step to a token sequence.
pub(crate) fn step_tokens(tokens: &[Token]) -> Option<Vec<Token>> {
    select(all_matches(tokens)).map(|chosen| chosen.tokens)
}

/// Apply one rewrite step to chain text. `None` means normal form.
pub(crate) fn step_text(chain: &str) -> Option<String> {
    step_tokens(&tokenize(chain)).map(|tokens| detokenize(&tokens))
}

/// Rightmost start wins; ties go to the lowest rule id.
///
/// For matches identical on both (one rule matching one position several
/// ways), the first one the matcher enumerated is kept.
fn select(matches: Vec<RuleMatch>) -> Option<RuleMatch> {
    if std::env::var_os("HYDRION_DEBUG_RULES").is_some() {
        for candidate in &matches {
            eprintln!("[candidate] start={} rule=\"{}\"", candidate.start, candidate.rule.name());
        }
    }
    matches.into_iter().min_by(|a, b| b.start.cmp(&a.start).then(a.rule.cmp(&b.rule)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleId;

    #[test]
    fn tie_on_start_takes_the_lowest_rule_id() {
        let matches = vec![
            RuleMatch { start: 2, rule: RuleId::Replicate, tokens: vec![Token::Dash] },
            RuleMatch { start: 2, rule: RuleId::UnfoldZeros, tokens: vec![Token::Bullet] },
            RuleMatch { start: 0, rule: RuleId::AbsorbZero, tokens: vec![] },
        ];
        let chosen = select(matches).unwrap();
        assert_eq!(chosen.start, 2);
        assert_eq!(chosen.rule, RuleId::UnfoldZeros);
    }

    #[test]
    fn rightmost_start_beats_rule_priority() {
        let matches = vec![
            RuleMatch { start: 0, rule: RuleId::AbsorbZero, tokens: vec![] },
            RuleMatch { start: 4, rule: RuleId::Replicate, tokens: vec![Token::Bullet] },
        ];
        assert_eq!(select(matches).unwrap().start, 4);
    }

    #[test]
    fn identical_start_and_rule_keeps_enumeration_order() {
        // One rule can match one opening position against several closing
        // positions; the first enumerated (innermost) candidate is applied.
        let first = vec![Token::Bullet];
        let second = vec![Token::Dash];
        let matches = vec![
            RuleMatch { start: 1, rule: RuleId::UnfoldZeros, tokens: first.clone() },
            RuleMatch { start: 1, rule: RuleId::UnfoldZeros, tokens: second },
        ];
        assert_eq!(select(matches).unwrap().tokens, first);
    }

    #[test]
    fn stepping_is_pure() {
        let chain = "•2•0•1";
        assert_eq!(step_text(chain), step_text(chain));
    }

    #[test]
    fn rightmost_candidate_is_applied() {
        // absorb-zero matches at 0 and 4, replicate at 2; position 4 wins.
        assert_eq!(step_text("•0•1•0•1").as_deref(), Some("•0•1•2"));
    }

    #[test]
    fn normal_form_is_stable() {
        for chain in ["•5", "•1-1", "•0", "•0-3"] {
            assert_eq!(step_text(chain), None, "expected normal form: {chain}");
            assert_eq!(step_text(chain), None, "normal form must stay terminal: {chain}");
        }
    }
}
