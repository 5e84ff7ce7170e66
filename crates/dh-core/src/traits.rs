//! Capability traits for the dihadron analysis.
//!
//! `EventAnalysis` is the value-level replacement for a host framework's
//! plugin registration hook: a run driver only needs something it can feed
//! events to and finalize, not a concrete analysis type.

use crate::Result;

/// An analysis that consumes events one at a time and produces a result
/// once at end of run.
pub trait EventAnalysis {
    /// Event type consumed by the analysis.
    type Event;
    /// Per-event outcome (accepted or vetoed, with bookkeeping).
    type Disposition;
    /// Value produced by finalization.
    type Output;

    /// Process one event. Per-event discards are dispositions, not errors.
    fn process_event(&mut self, event: &Self::Event) -> Self::Disposition;

    /// Consume the analysis and produce its end-of-run output.
    fn finalize(self) -> Result<Self::Output>;
}
