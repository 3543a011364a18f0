// crates/trustboard-scoring/src/decay.rs
//
// Recency decay for claim contributions.
//
// A claim's contribution is attenuated by its age relative to the newest
// settled claim of the same influencer. Supports exponential and linear
// decay, or none at all.

use serde::{Deserialize, Serialize};

/// Decay function for claim weight attenuation over age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecayFunction {
    /// Exponential decay: value * 0.5^(age / half_life).
    /// Contribution halves every `half_life_days` days.
    Exponential {
        /// Number of days for the contribution to halve.
        half_life_days: f64,
    },
    /// Linear decay: max(0, value - decay_per_day * age).
    Linear {
        /// Amount of contribution lost per day.
        decay_per_day: f64,
    },
    /// Age does not matter.
    None,
}

impl Default for DecayFunction {
    fn default() -> Self {
        DecayFunction::Exponential {
            half_life_days: 180.0,
        }
    }
}

/// Apply a decay function to a contribution.
///
/// # Arguments
/// * `value` - The undecayed contribution.
/// * `age_days` - Age of the claim in days (negative ages count as 0).
/// * `function` - The decay function to apply.
///
/// # Returns
/// The decayed contribution, always >= 0.0 for non-negative `value`.
pub fn apply_decay(value: f64, age_days: f64, function: &DecayFunction) -> f64 {
    let age = age_days.max(0.0);
    match function {
        DecayFunction::Exponential { half_life_days } => {
            if *half_life_days <= 0.0 {
                return 0.0;
            }
            value * 0.5_f64.powf(age / half_life_days)
        }
        DecayFunction::Linear { decay_per_day } => (value - decay_per_day * age).max(0.0),
        DecayFunction::None => value,
    }
}
