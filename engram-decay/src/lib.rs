//! # engram-decay
//!
//! Time-decay multiplier for recall scores.
//!
//! Permanent memories (patterns, warnings, pinned, or explicitly
//! overridden) never decay. Decaying memories halve in weight every
//! half-life, floored so old memories are demoted but never erased
//! from consideration. Age is measured from the decay anchor at query
//! time, never baked into a stored score.

mod scorer;

pub use scorer::{DecayBreakdown, DecayScorer};
