//! The four rule matchers.
//!
//! Each matcher is a pure scan `&[Token] -> Vec<RuleMatch>` that records
//! every position where its pattern occurs, together with the full token
//! sequence the rewrite at that position would produce. Nothing here selects
//! between candidates; that is `engine::resolve`'s job.

use num_traits::{ToPrimitive, Zero};

use crate::rules::helpers::{is_number, is_zero, number_token, number_value};
use crate::{RuleId, RuleMatch, Token};

/// `•0•m → •(m+1)`: a zero group feeds the group after it.
pub(crate) fn absorb_zero(tokens: &[Token]) -> Vec<RuleMatch> {
    let mut matches = Vec::new();
    if tokens.len() < 4 {
        return matches;
    }
    for i in 0..tokens.len() - 3 {
        if tokens[i] == Token::Bullet && is_zero(&tokens[i + 1]) && tokens[i + 2] == Token::Bullet {
            let Some(m) = number_value(&tokens[i + 3]) else { continue };
            let mut rewritten = tokens[..i].to_vec();
            rewritten.push(Token::Bullet);
            rewritten.push(number_token(&(m + 1u32)));
            rewritten.extend_from_slice(&tokens[i + 4..]);
            matches.push(RuleMatch { start: i, rule: RuleId::AbsorbZero, tokens: rewritten });
        }
    }
    matches
}

/// `-0• → •`: a spent zero limb in front of a bullet disappears.
pub(crate) fn drop_zero(tokens: &[Token]) -> Vec<RuleMatch> {
    let mut matches = Vec::new();
    if tokens.len() < 3 {
        return matches;
    }
    for i in 0..tokens.len() - 2 {
        if tokens[i] == Token::Dash && is_zero(&tokens[i + 1]) && tokens[i + 2] == Token::Bullet {
            let mut rewritten = tokens[..i].to_vec();
            rewritten.push(Token::Bullet);
            rewritten.extend_from_slice(&tokens[i + 3..]);
            matches.push(RuleMatch { start: i, rule: RuleId::DropZero, tokens: rewritten });
        }
    }
    matches
}

/// `•0-…-0-(k+1)-v•n → •n-…-n-k-v•n`: distribute `n` over a run of zeros,
/// decrementing the group that ends the run.
///
/// Every later bullet is a candidate closing position for every opening
/// bullet, so one opening index can yield several matches (one per valid
/// closing bullet); all are kept. A malformed remainder between the bullets
/// invalidates that closing candidate only, never the whole scan.
pub(crate) fn unfold_zeros(tokens: &[Token]) -> Vec<RuleMatch> {
    let mut matches = Vec::new();
    for i in 0..tokens.len() {
        if tokens[i] != Token::Bullet {
            continue;
        }
        for j in i + 1..tokens.len() {
            if tokens[j] != Token::Bullet {
                continue;
            }
            let inner = &tokens[i + 1..j];
            if inner.len() < 3 {
                continue;
            }
            // Count the leading `0-` pairs; z is the run length.
            let mut z = 0usize;
            let mut idx = 0usize;
            while idx + 1 < inner.len() && is_zero(&inner[idx]) && inner[idx + 1] == Token::Dash {
                z += 1;
                idx += 2;
            }
            if z == 0 {
                continue;
            }
            let Some(kp1) = inner.get(idx).and_then(number_value) else { continue };
            if kp1.is_zero() {
                continue;
            }
            let Some(n) = tokens.get(j + 1).and_then(number_value) else { continue };
            let v = &inner[idx + 1..];
            if !is_dash_run(v) {
                continue;
            }
            let k = kp1 - 1u32;
            let mut rewritten = tokens[..i].to_vec();
            rewritten.push(Token::Bullet);
            rewritten.push(number_token(&n));
            for _ in 1..z {
                rewritten.push(Token::Dash);
                rewritten.push(number_token(&n));
            }
            rewritten.push(Token::Dash);
            rewritten.push(number_token(&k));
            rewritten.extend_from_slice(v);
            rewritten.push(Token::Bullet);
            rewritten.push(number_token(&n));
            rewritten.extend_from_slice(&tokens[j + 2..]);
            matches.push(RuleMatch { start: i, rule: RuleId::UnfoldZeros, tokens: rewritten });
        }
    }
    matches
}

/// `•(k+1)-v•n → n copies of •k-v, then •n`: clone the leading group with its
/// counter decremented.
///
/// The `v` run is greedy and unambiguous: `-digit` pairs are consumed until
/// the next token is not a dash followed by a digit; the token right after
/// the run must be a bullet followed by a number, or the candidate at this
/// position is discarded.
pub(crate) fn replicate(tokens: &[Token]) -> Vec<RuleMatch> {
    let mut matches = Vec::new();
    if tokens.len() < 3 {
        return matches;
    }
    for i in 0..tokens.len() - 2 {
        if tokens[i] != Token::Bullet || !is_number(&tokens[i + 1]) {
            continue;
        }
        let Some(kp1) = number_value(&tokens[i + 1]) else { continue };
        if kp1.is_zero() {
            continue;
        }
        let k = kp1 - 1u32;
        let mut j = i + 2;
        while j + 1 < tokens.len() && tokens[j] == Token::Dash && is_number(&tokens[j + 1]) {
            j += 2;
        }
        if tokens.get(j) != Some(&Token::Bullet) {
            continue;
        }
        let Some(n) = tokens.get(j + 1).and_then(number_value) else { continue };
        // A copy count past the address space could never be materialized.
        let Some(copies) = n.to_usize() else { continue };
        let v = &tokens[i + 2..j];
        let mut rewritten = tokens[..i].to_vec();
        for _ in 0..copies {
            rewritten.push(Token::Bullet);
            rewritten.push(number_token(&k));
            rewritten.extend_from_slice(v);
        }
        rewritten.push(Token::Bullet);
        rewritten.push(number_token(&n));
        rewritten.extend_from_slice(&tokens[j + 2..]);
        matches.push(RuleMatch { start: i, rule: RuleId::Replicate, tokens: rewritten });
    }
    matches
}

/// Every candidate from every rule, in rule order.
pub(crate) fn all_matches(tokens: &[Token]) -> Vec<RuleMatch> {
    let mut matches = Vec::new();
    matches.extend(absorb_zero(tokens));
    matches.extend(drop_zero(tokens));
    matches.extend(unfold_zeros(tokens));
    matches.extend(replicate(tokens));
    matches
}

/// A well-formed auxiliary run: zero or more `-digit` pairs, nothing else.
fn is_dash_run(v: &[Token]) -> bool {
    v.len() % 2 == 0 && v.chunks_exact(2).all(|pair| pair[0] == Token::Dash && is_number(&pair[1]))
}
