//! Abridged stepping: closed-form jumps over repetitive suffixes.
//!
//! Long runs spend almost all of their steps in three suffix shapes whose
//! futures are known in closed form. Each branch here lands on exactly the
//! chain that repeated unabridged stepping would reach, with the exact
//! elementary step count — these are shortcuts, not approximations, and the
//! tests replay every one of them against the unabridged engine.
//!
//! Branch order per call: trailing-zero collapse, then the `•1•n` suffix,
//! then the `•2•n` suffix, then a replay from the run's cache, then one
//! ordinary step. Every computed transition is recorded in the cache so a
//! chain revisited later in the same run is never recomputed.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::Token;
use crate::engine::resolve::step_text;
use crate::engine::token::{detokenize, tokenize};
use crate::rules::helpers::{MAX_NUMBER_DIGITS, is_zero, number_token, number_value};

/// Fewest elementary steps a closed-form branch is allowed to replace.
/// Shorter runs fall through to ordinary stepping.
const MIN_JUMP: usize = 5;

/// Which abridged branch produced a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Trailing `•0` pairs collapsed into the final group.
    ZeroRun,
    /// A `•1•n` suffix doubled in one jump.
    OneTail,
    /// A `•2•n` suffix resolved to `n·2ⁿ` in one jump.
    TwoTail,
    /// Replay of a transition recorded earlier in this run.
    Cached,
    /// One ordinary step.
    Single,
}

/// One abridged transition.
#[derive(Debug, Clone)]
pub struct Jump {
    /// The next chain.
    pub chain: String,
    /// Elementary steps this transition represents.
    pub steps: BigUint,
    /// Lines a driver should annotate as omitted before printing `chain`.
    /// Zero for a fresh single step.
    pub omitted: BigUint,
    /// The branch that fired.
    pub kind: JumpKind,
}

/// Per-run memo of transitions, keyed by exact chain text.
///
/// Owned by a single run and dropped with it — never shared between runs and
/// never persisted.
#[derive(Debug, Default)]
pub struct StepCache {
    entries: HashMap<String, (String, BigUint)>,
}

impl StepCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct chains with a recorded transition.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, chain: &str) -> Option<&(String, BigUint)> {
        self.entries.get(chain)
    }

    fn record(&mut self, chain: &str, next: &str, steps: &BigUint) {
        self.entries.insert(chain.to_string(), (next.to_string(), steps.clone()));
    }
}

/// One abridged step. `None` means the chain is in normal form.
pub(crate) fn abridged_step(chain: &str, cache: &mut StepCache) -> Option<Jump> {
    let tokens = tokenize(chain);
    let debug = std::env::var_os("HYDRION_DEBUG_RULES").is_some();

    if let Some((next, steps)) = collapse_zero_run(&tokens) {
        if debug {
            eprintln!("[abridged] zero-run jump of {steps} steps");
        }
        cache.record(chain, &next, &steps);
        return Some(jump(next, steps, JumpKind::ZeroRun));
    }
    if let Some((next, steps)) = double_tail(&tokens) {
        if debug {
            eprintln!("[abridged] •1•n jump of {steps} steps");
        }
        cache.record(chain, &next, &steps);
        return Some(jump(next, steps, JumpKind::OneTail));
    }
    if let Some((next, steps)) = power_tail(&tokens) {
        if debug {
            eprintln!("[abridged] •2•n jump of {steps} steps");
        }
        cache.record(chain, &next, &steps);
        return Some(jump(next, steps, JumpKind::TwoTail));
    }
    if let Some((next, steps)) = cache.lookup(chain).cloned() {
        return Some(jump(next, steps, JumpKind::Cached));
    }

    let next = step_text(chain)?;
    cache.record(chain, &next, &BigUint::one());
    Some(Jump { chain: next, steps: BigUint::one(), omitted: BigUint::zero(), kind: JumpKind::Single })
}

fn jump(chain: String, steps: BigUint, kind: JumpKind) -> Jump {
    Jump { chain, omitted: steps.clone(), steps, kind }
}

/// `… (•0)ᵐ •n → … •(n+m)` for `m ≥ 5`: exactly `m` absorb-zero steps, each
/// feeding one trailing zero group into the final number.
fn collapse_zero_run(tokens: &[Token]) -> Option<(String, BigUint)> {
    if tokens.len() < 2 {
        return None;
    }
    let mut idx = tokens.len() - 2;
    let mut m = 0usize;
    while idx >= 2 && is_zero(&tokens[idx - 1]) && tokens[idx - 2] == Token::Bullet {
        m += 1;
        idx -= 2;
    }
    if m < MIN_JUMP || tokens[idx] != Token::Bullet {
        return None;
    }
    let n = number_value(tokens.last()?)?;
    let result = n + BigUint::from(m);
    if !replay_stays_parseable(&result) {
        return None;
    }
    let mut next = tokens[..idx].to_vec();
    next.push(Token::Bullet);
    next.push(number_token(&result));
    Some((detokenize(&next), BigUint::from(m)))
}

/// `… •1•n → … •(2n)`: one replicate step turns the suffix into `n` zero
/// groups before `•n`, and `n` absorb-zero steps collapse them. `n+1` steps.
fn double_tail(tokens: &[Token]) -> Option<(String, BigUint)> {
    let n = suffix_pivot(tokens, "1")?;
    let steps = &n + 1u32;
    if steps < BigUint::from(MIN_JUMP) {
        return None;
    }
    let result = &n * 2u32;
    if !replay_stays_parseable(&result) {
        return None;
    }
    Some((replace_tail(tokens, &result), steps))
}

/// `… •2•n → … •(n·2ⁿ)`: each doubling of the `•1•j` shape costs `j+1`
/// steps; summed over the cascade the whole suffix resolves in `n·2ⁿ + 1`.
fn power_tail(tokens: &[Token]) -> Option<(String, BigUint)> {
    let n = suffix_pivot(tokens, "2")?;
    // The jump needs a 2ⁿ shift; past usize the result could never be held
    // in memory, so the slower branches take over.
    let shift = n.to_usize()?;
    let result = &n << shift;
    let steps = &result + 1u32;
    if steps < BigUint::from(MIN_JUMP) || !replay_stays_parseable(&result) {
        return None;
    }
    Some((replace_tail(tokens, &result), steps))
}

/// Whether every number the unabridged replay of a jump would parse stays
/// within the digit cutoff.
///
/// The largest value a replay ever parses is one below the jump's final
/// value; past the cutoff the plain engine stops matching mid-run, so the
/// closed form must stand down or it would overshoot the guarded semantics.
fn replay_stays_parseable(final_value: &BigUint) -> bool {
    (final_value - 1u32).to_string().len() <= MAX_NUMBER_DIGITS
}

/// The final group value `n` when the chain ends `•<lead>•n`.
fn suffix_pivot(tokens: &[Token], lead: &str) -> Option<BigUint> {
    if tokens.len() < 4 {
        return None;
    }
    let tail = &tokens[tokens.len() - 4..];
    if tail[0] != Token::Bullet || tail[2] != Token::Bullet {
        return None;
    }
    match &tail[1] {
        Token::Number(digits) if digits == lead => number_value(&tail[3]),
        _ => None,
    }
}

fn replace_tail(tokens: &[Token], value: &BigUint) -> String {
    let mut next = tokens[..tokens.len() - 4].to_vec();
    next.push(Token::Bullet);
    next.push(number_token(value));
    detokenize(&next)
}
