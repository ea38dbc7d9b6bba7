//! The four rewrite rules.
//!
//! Chains are rewritten by exactly one rule per step, chosen in
//! `engine::resolve`. The patterns (where `m`, `n`, `k+1` denote number
//! groups and `v` a possibly-empty run of `-digit` pairs):
//!
//! ```text
//! 1. absorb zero group   •0•m            →  •(m+1)
//! 2. drop zero limb      -0•             →  •
//! 3. unfold zero run     •0-…-0-(k+1)-v•n →  •n-…-n-k-v•n
//! 4. replicate group     •(k+1)-v•n      →  n copies of •k-v, then •n
//! ```
//!
//! Each matcher enumerates *every* occurrence of its pattern, independent of
//! the other matchers, and is pure: same tokens in, same candidates out. A
//! candidate whose arithmetic would need a number longer than the digit
//! cutoff is skipped silently (see `helpers::number_value`) — the safety
//! valve against the rules' own super-exponential growth.
//!
//! The `(k+1)` groups in rules 3 and 4 must be at least 1; the rewrites
//! decrement them, and a zero there belongs to the other rules' patterns.

#[path = "rules/helpers.rs"]
pub(crate) mod helpers;
#[path = "rules/matchers.rs"]
pub(crate) mod matchers;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;
