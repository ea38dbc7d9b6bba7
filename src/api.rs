use std::error::Error;
use std::fmt;

use crate::engine;

pub use crate::engine::accel::{Jump, JumpKind, StepCache};
pub use crate::engine::metrics::{JumpKinds, RunMetrics};

/// Replace the ASCII dot alias with the canonical bullet glyph.
///
/// Both `.` and `•` are accepted on input as "begin a number group"; the
/// engine only ever emits the bullet form.
pub fn normalize(text: &str) -> String {
    engine::token::normalize(text)
}

/// Whether `text` matches the chain grammar: a bullet-or-dot group first,
/// then any mix of bullet-or-dot or dash groups, digits after every
/// separator.
pub fn is_wellformed(text: &str) -> bool {
    engine::token::is_wellformed(text)
}

/// Text rejected by the chain grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedChain {
    text: String,
}

impl MalformedChain {
    /// The rejected input.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for MalformedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed chain {:?}: expected digits after every separator, starting with \u{2022} or .", self.text)
    }
}

impl Error for MalformedChain {}

/// Validate `text` against the chain grammar.
///
/// The engine's behavior on malformed text is out of contract; callers are
/// expected to reject it here before stepping.
pub fn validate(text: &str) -> Result<(), MalformedChain> {
    if is_wellformed(text) { Ok(()) } else { Err(MalformedChain { text: text.to_string() }) }
}

/// Apply exactly one rewrite step. `None` means the chain is in normal form
/// (no rule matches anywhere).
///
/// # Example
/// ```
/// assert_eq!(hydrion::rewrite_step("•0•3").as_deref(), Some("•4"));
/// assert_eq!(hydrion::rewrite_step("•5"), None);
/// ```
pub fn rewrite_step(chain: &str) -> Option<String> {
    engine::resolve::step_text(chain)
}

/// Apply one abridged step, jumping over repetitive suffixes in closed form
/// where possible and memoizing every transition in `cache`.
///
/// The cache is scoped to one run: create a fresh [`StepCache`] per starting
/// chain and drop it when the run ends. `None` means normal form, exactly as
/// for [`rewrite_step`].
///
/// # Example
/// ```
/// use hydrion::StepCache;
///
/// let mut cache = StepCache::new();
/// let jump = hydrion::abridged_step("•2•2", &mut cache).unwrap();
/// assert_eq!(jump.chain, "•8");
/// assert_eq!(jump.steps.to_string(), "9");
/// ```
pub fn abridged_step(chain: &str, cache: &mut StepCache) -> Option<Jump> {
    engine::accel::abridged_step(chain, cache)
}
