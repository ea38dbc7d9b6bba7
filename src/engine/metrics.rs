//! Run observation.
//!
//! The engine itself keeps no counters; a driving loop owns a `RunMetrics`
//! and feeds it every transition it performs. Metrics are intentionally
//! simple and opt-in — nothing here is required for correct stepping.

use std::time::Duration;

use num_bigint::BigUint;
use num_traits::One;

use super::accel::{Jump, JumpKind};

bitflags::bitflags! {
    /// Abridged branch kinds observed at least once during a run.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct JumpKinds: u8 {
        const ZERO_RUN = 1 << 0;
        const ONE_TAIL = 1 << 1;
        const TWO_TAIL = 1 << 2;
        const CACHED   = 1 << 3;
        const SINGLE   = 1 << 4;
    }
}

/// Counters accumulated by a driving loop over one run.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Wall-clock time for the whole run.
    pub total: Duration,
    /// Engine calls made (abridged or plain).
    pub calls: usize,
    /// Elementary steps represented by those calls.
    pub elementary: BigUint,
    /// Calls that replaced more than one elementary step.
    pub jumps: usize,
    /// Calls served from the per-run cache.
    pub cache_hits: usize,
    /// Branch kinds seen.
    pub kinds: JumpKinds,
}

impl RunMetrics {
    /// Account for one plain (unabridged) step.
    pub fn record_step(&mut self) {
        self.calls += 1;
        self.elementary += 1u32;
        self.kinds |= JumpKinds::SINGLE;
    }

    /// Account for one abridged transition.
    pub fn record(&mut self, jump: &Jump) {
        self.calls += 1;
        self.elementary += &jump.steps;
        if jump.steps > BigUint::one() {
            self.jumps += 1;
        }
        match jump.kind {
            JumpKind::ZeroRun => self.kinds |= JumpKinds::ZERO_RUN,
            JumpKind::OneTail => self.kinds |= JumpKinds::ONE_TAIL,
            JumpKind::TwoTail => self.kinds |= JumpKinds::TWO_TAIL,
            JumpKind::Cached => {
                self.kinds |= JumpKinds::CACHED;
                self.cache_hits += 1;
            }
            JumpKind::Single => self.kinds |= JumpKinds::SINGLE,
        }
    }
}
