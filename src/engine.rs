//! The rewrite engine.
//!
//! This module is the *internal entry point* for stepping a chain. The public
//! paths live in `src/api.rs`; the engine is split into focused submodules
//! under `src/engine/`.
//!
//! ## How the parts work together
//!
//! Advancing a chain by one step is a short pipeline:
//!
//! ```text
//! chain text ── token::tokenize ──┐
//!                                 │
//!                                 v
//!                  rules::matchers::all_matches
//!                    - every occurrence of every rule
//!                    - each carries its rewritten token sequence
//!                                 │
//!                                 v
//!                       resolve::select
//!                    - rightmost start wins
//!                    - ties go to the lowest rule id
//!                                 │
//!                                 v
//!                   token::detokenize ──▶ next chain text
//! ```
//!
//! The abridged path (`accel.rs`) sits in front of this pipeline: it
//! recognizes three fast-growing suffix shapes and replaces long runs of the
//! pipeline above with a single closed-form jump, memoizing every transition
//! it computes in a run-scoped `StepCache`. When no shortcut applies it falls
//! back to exactly one ordinary step.
//!
//! ## Responsibilities by module
//!
//! - `token.rs`: the token model, normalizer, tokenizer/detokenizer, and the
//!   chain validity grammar.
//! - `resolve.rs`: candidate collection and the deterministic selection
//!   policy.
//! - `accel.rs`: the closed-form jumps, the per-run cache, and the fallback.
//! - `metrics.rs`: counters a driving loop can accumulate over a run.
//!
//! ## Debugging
//!
//! Set `HYDRION_DEBUG_RULES=1` to print candidate and jump traces.

#[path = "engine/accel.rs"]
pub(crate) mod accel;
#[path = "engine/metrics.rs"]
pub(crate) mod metrics;
#[path = "engine/resolve.rs"]
pub(crate) mod resolve;
#[path = "engine/token.rs"]
pub(crate) mod token;
