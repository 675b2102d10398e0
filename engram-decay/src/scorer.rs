use chrono::{DateTime, Utc};
use engram_core::config::DecayConfig;
use engram_core::Memory;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Computes the decay multiplier applied to lexical/fused scores.
#[derive(Debug, Clone)]
pub struct DecayScorer {
    half_life_days: f64,
    min_weight: f64,
}

/// Per-memory decay factors, for observability.
#[derive(Debug, Clone)]
pub struct DecayBreakdown {
    pub permanent: bool,
    pub age_days: f64,
    pub raw_weight: f64,
    /// Final weight after the floor, in (0, 1].
    pub weight: f64,
}

impl DecayScorer {
    /// Build from a validated [`DecayConfig`].
    pub fn new(config: &DecayConfig) -> Self {
        Self {
            half_life_days: config.half_life_days,
            min_weight: config.min_weight,
        }
    }

    /// Decay multiplier in (0, 1] for a memory at time `now`.
    ///
    /// Permanent memories return exactly 1.0 at any age. Decaying
    /// memories follow `0.5^(age_days / half_life)`, floored at the
    /// configured minimum.
    pub fn weight(&self, memory: &Memory, now: DateTime<Utc>) -> f64 {
        self.breakdown(memory, now).weight
    }

    /// Full factor breakdown for a memory at time `now`.
    pub fn breakdown(&self, memory: &Memory, now: DateTime<Utc>) -> DecayBreakdown {
        if memory.is_permanent() {
            return DecayBreakdown {
                permanent: true,
                age_days: 0.0,
                raw_weight: 1.0,
                weight: 1.0,
            };
        }

        // Clock skew can put the anchor in the future; treat as age zero.
        let age_days =
            ((now - memory.decay_anchor()).num_seconds().max(0) as f64) / SECONDS_PER_DAY;
        let raw_weight = 0.5f64.powf(age_days / self.half_life_days);
        DecayBreakdown {
            permanent: false,
            age_days,
            raw_weight,
            weight: raw_weight.max(self.min_weight),
        }
    }
}

impl Default for DecayScorer {
    fn default() -> Self {
        Self::new(&DecayConfig::default())
    }
}
