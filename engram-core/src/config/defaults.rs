//! Default values for all config subsystems.

/// Half-life for decaying categories, in days.
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 30.0;

/// Floor below which decay weight never falls.
pub const DEFAULT_MIN_DECAY_WEIGHT: f64 = 0.05;

/// Blend factor between lexical and vector similarity.
pub const DEFAULT_FUSION_WEIGHT: f64 = 0.3;

pub const DEFAULT_FUSION_ENABLED: bool = true;

/// Maximum cached result sets per project.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 128;

/// Cached result set time-to-live, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Candidate over-fetch multiplier for re-ranking headroom.
pub const DEFAULT_EXPANSION_FACTOR: usize = 3;

/// Minimum lexical score a candidate must reach to be ranked.
pub const DEFAULT_MIN_SCORE: f64 = 0.05;

/// Maximum results sharing one source file.
pub const DEFAULT_PER_FILE_CAP: usize = 3;

/// Minimum Jaccard token overlap for a conflict candidate pair.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.4;

/// Polarity cue words. Tunable heuristic, not a contract.
pub const DEFAULT_NEGATIVE_CUES: &[&str] = &[
    "don't", "dont", "avoid", "never", "stop", "not", "deprecated",
];

pub const DEFAULT_POSITIVE_CUES: &[&str] = &["use", "prefer", "always", "adopt", "recommended"];
