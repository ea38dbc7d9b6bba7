use num_bigint::BigUint;

use crate::engine::resolve::step_text;
use crate::engine::token::{detokenize, tokenize};
use crate::rules::helpers::MAX_NUMBER_DIGITS;
use crate::rules::matchers::{absorb_zero, all_matches, drop_zero, replicate, unfold_zeros};
use crate::RuleId;

#[test]
fn rewrite_examples() {
    // Array of (input, expected next chain)
    let cases: Vec<(&str, &str)> = vec![
        ("•0•3", "•4"),
        ("-0•", "•"),
        ("•0-0-3-5•2", "•2-2-2-5•2"),
        ("•3-5•2", "•2-5•2-5•2"),
        ("•0•0", "•1"),
        ("•1•1", "•0•1"),
        ("•2•2", "•1•1•2"),
        ("•1-2•2", "•0-2•0-2•2"),
        ("•0-0-1•3", "•3-3-0•3"),
        ("•1-2-3•2", "•0-2-3•0-2-3•2"),
        // A replicate count of zero erases the leading group entirely.
        ("•3-5•0", "•0"),
        // Rightmost positioning: the later absorb-zero candidate wins over
        // both the earlier one and the replicate candidate between them.
        ("•0•1•0•1", "•0•1•2"),
        // Rewritten numbers are re-rendered canonically.
        ("•0•007", "•8"),
    ];

    for (input, expected) in cases {
        assert_eq!(step_text(input).as_deref(), Some(expected), "stepping {input}");
    }
}

#[test]
fn terminal_examples() {
    // Syntactically valid chains no rule can touch are normal forms, not
    // errors.
    for chain in ["•5", "•0", "•1-1", "•0-3", "•7-0", "•1-2-3"] {
        assert_eq!(step_text(chain), None, "expected normal form: {chain}");
    }
}

#[test]
fn absorb_zero_enumerates_every_occurrence() {
    let tokens = tokenize("•0•1•0•1");
    let matches = absorb_zero(&tokens);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].start, 0);
    assert_eq!(matches[1].start, 4);
    assert!(matches.iter().all(|m| m.rule == RuleId::AbsorbZero));
}

#[test]
fn drop_zero_matches_mid_chain() {
    let tokens = tokenize("•1-0•2");
    let matches = drop_zero(&tokens);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start, 2);
    // -0• collapses to a bare bullet; the rest is untouched.
    assert_eq!(step_text("•1-0•2").as_deref(), Some("•1•2"));
}

#[test]
fn unfold_zeros_considers_every_closing_bullet() {
    // Every later bullet is tried as a closing position. Against the second
    // bullet the remainder would contain the first closing bullet itself,
    // which is not a `-digit` pair, so only the innermost candidate is valid.
    let tokens = tokenize("•0-1•2•3");
    let matches = unfold_zeros(&tokens);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start, 0);
    assert_eq!(detokenize(&matches[0].tokens), "•2-0•2•3");
}

#[test]
fn unfold_zeros_rejects_malformed_remainders() {
    // Between the bullets: 0 - 1 - (missing digit) — the candidate at that
    // closing bullet is dropped, without disturbing the scan.
    let tokens = tokenize("•0-1-•2");
    assert!(unfold_zeros(&tokens).is_empty());
    // A zero run with nothing after it is not an unfold site either.
    assert!(unfold_zeros(&tokenize("•0-0•2")).is_empty());
}

#[test]
fn replicate_consumes_the_auxiliary_run_greedily() {
    let tokens = tokenize("•3-5-7•2");
    let matches = replicate(&tokens);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start, 0);
    assert_eq!(step_text("•3-5-7•2").as_deref(), Some("•2-5-7•2-5-7•2"));
}

#[test]
fn replicate_requires_a_positive_counter() {
    // A zero head belongs to the other rules' patterns; replicate must not
    // fabricate a negative counter from it.
    let tokens = tokenize("•0-3•2");
    assert!(replicate(&tokens).is_empty());
    // The same chain is still an unfold site: z = 1, k = 2, v empty.
    assert_eq!(step_text("•0-3•2").as_deref(), Some("•2-2•2"));
}

#[test]
fn oversized_numbers_remove_their_candidates() {
    let over = "1".repeat(MAX_NUMBER_DIGITS + 1);
    let at_bound = "1".repeat(MAX_NUMBER_DIGITS);

    // 101 digits: the only candidates would need the value; nothing matches.
    assert_eq!(step_text(&format!("•0•{over}")), None);

    // 100 digits: rewritten normally.
    let expected = ("1".repeat(MAX_NUMBER_DIGITS).parse::<BigUint>().unwrap() + 1u32).to_string();
    assert_eq!(step_text(&format!("•0•{at_bound}")), Some(format!("•{expected}")));
}

#[test]
fn oversized_numbers_inside_the_auxiliary_run_are_copied_verbatim() {
    // v digits are never parsed, so the guard does not apply to them.
    let over = "7".repeat(MAX_NUMBER_DIGITS + 50);
    let chain = format!("•2-{over}•2");
    let expected = format!("•1-{over}•1-{over}•2");
    assert_eq!(step_text(&chain), Some(expected));
}

#[test]
fn overlapping_candidates_are_all_enumerated() {
    // Three rules see this chain: absorb-zero at 0 and 4, replicate at 2.
    // The resolver (not the matchers) is what narrows this down to one.
    let tokens = tokenize("•0•1•0•1");
    let mut pairs: Vec<(usize, RuleId)> = all_matches(&tokens).iter().map(|m| (m.start, m.rule)).collect();
    pairs.sort();
    assert_eq!(pairs, vec![(0, RuleId::AbsorbZero), (2, RuleId::Replicate), (4, RuleId::AbsorbZero)]);
}
