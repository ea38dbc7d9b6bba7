extern crate self as hydrion;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub use api::{
    Jump, JumpKind, JumpKinds, MalformedChain, RunMetrics, StepCache, abridged_step, is_wellformed, normalize,
    rewrite_step, validate,
};

// --- Internal types ---------------------------------------------------------

/// One symbol of a chain.
///
/// A chain is a flat sequence of these; there is no nesting in the data model,
/// only in the patterns the rules read into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A maximal digit run, kept as raw text. Conversion to an integer is
    /// deferred to the matchers (see `rules::helpers::number_value`), so a
    /// huge run costs nothing until a rule actually needs its value.
    Number(String),
    /// The primary separator, rendered `•`.
    Bullet,
    /// The secondary separator, rendered `-`.
    Dash,
}

impl Token {
    /// The exact textual form of this token.
    pub fn text(&self) -> &str {
        match self {
            Token::Number(digits) => digits,
            Token::Bullet => "•",
            Token::Dash => "-",
        }
    }
}

/// Rule identifiers. The numeric order is the tie-breaking priority order:
/// when two rules match at the same start index, the lower id is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum RuleId {
    AbsorbZero = 1,
    DropZero = 2,
    UnfoldZeros = 3,
    Replicate = 4,
}

impl RuleId {
    pub fn name(self) -> &'static str {
        match self {
            RuleId::AbsorbZero => "absorb zero group",
            RuleId::DropZero => "drop zero limb",
            RuleId::UnfoldZeros => "unfold zero run",
            RuleId::Replicate => "replicate group",
        }
    }
}

/// A single candidate rewrite: where the matched pattern begins, which rule
/// matched there, and the full token sequence the rewrite would produce.
///
/// Matches are produced fresh on every step and discarded after selection;
/// they own no state beyond their tokens.
#[derive(Debug, Clone)]
pub(crate) struct RuleMatch {
    pub start: usize,
    pub rule: RuleId,
    pub tokens: Vec<Token>,
}
