// crates/trustboard-scoring/src/engine.rs
//
// Trust score engine.
//
// score = round(100 * P / (P + N + confidence)), where
//   P = sum over verified claims of weight * recency
//   N = sum over refuted claims of weight * recency * refute_penalty
// Unverified and superseded claims contribute nothing. Recency is measured
// against the newest settled claim in the set, so the result depends only
// on the claims passed in.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use trustboard_core::{Claim, ClaimStatus, TrustScore, TrustScorer, TrustboardError};

use crate::decay::{apply_decay, DecayFunction};

/// Tunables for the trust score engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// How claim contributions fade with age.
    pub decay: DecayFunction,
    /// Multiplier applied to refuted contributions.
    pub refute_penalty: f64,
    /// Pseudo-count of neutral evidence; keeps a single claim from scoring 100.
    pub confidence: f64,
    /// How far in the future a claim timestamp may be before it is rejected.
    pub max_future_skew_secs: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            decay: DecayFunction::default(),
            refute_penalty: 2.0,
            confidence: 5.0,
            max_future_skew_secs: 300,
        }
    }
}

/// Deterministic claim-history scorer.
#[derive(Debug, Clone, Default)]
pub struct TrustScoreEngine {
    config: ScoringConfig,
}

impl TrustScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate a claim against the clock value `now`.
    pub fn validate_claim_at(&self, claim: &Claim, now: DateTime<Utc>) -> Result<(), TrustboardError> {
        if !claim.weight.is_finite() {
            return Err(TrustboardError::InvalidClaim(format!(
                "claim {} has non-finite weight",
                claim.id
            )));
        }
        if claim.weight < 0.0 {
            return Err(TrustboardError::InvalidClaim(format!(
                "claim {} has negative weight {}",
                claim.id, claim.weight
            )));
        }
        let horizon = now + Duration::seconds(self.config.max_future_skew_secs.max(0));
        if claim.timestamp > horizon {
            return Err(TrustboardError::InvalidClaim(format!(
                "claim {} timestamp {} is in the future",
                claim.id,
                claim.timestamp.to_rfc3339()
            )));
        }
        Ok(())
    }

    /// Compute the score of `claims`, validating each one against `now`.
    pub fn compute_score_at(
        &self,
        claims: &[Claim],
        now: DateTime<Utc>,
    ) -> Result<TrustScore, TrustboardError> {
        for claim in claims {
            self.validate_claim_at(claim, now)?;
        }

        let scored: Vec<&Claim> = claims
            .iter()
            .filter(|c| c.is_effective() && c.status.is_settled())
            .collect();

        let reference = match scored.iter().map(|c| c.timestamp).max() {
            Some(t) => t,
            None => return Ok(TrustScore::MIN),
        };

        let contributions: Vec<(ClaimStatus, f64)> = scored
            .iter()
            .map(|claim| {
                let age_days = (reference - claim.timestamp).num_seconds() as f64 / 86_400.0;
                (claim.status, apply_decay(claim.weight, age_days, &self.config.decay))
            })
            .collect();

        // Sums are taken relative to the largest contribution so that
        // weights near f64::MAX cannot overflow P or N to infinity.
        let scale = contributions
            .iter()
            .map(|(_, c)| *c)
            .fold(1.0_f64, f64::max);

        let mut positive = 0.0_f64;
        let mut negative = 0.0_f64;
        for (status, contribution) in contributions {
            let scaled = contribution / scale;
            match status {
                ClaimStatus::Verified => positive += scaled,
                ClaimStatus::Refuted => negative += scaled * self.config.refute_penalty.max(0.0),
                ClaimStatus::Unverified => {}
            }
        }

        let denominator = positive + negative + self.config.confidence.max(0.0) / scale;
        if denominator <= 0.0 {
            return Ok(TrustScore::MIN);
        }
        Ok(TrustScore::from_percent(100.0 * positive / denominator))
    }
}

impl TrustScorer for TrustScoreEngine {
    fn compute_score(&self, claims: &[Claim]) -> Result<TrustScore, TrustboardError> {
        self.compute_score_at(claims, Utc::now())
    }

    fn validate_claim(&self, claim: &Claim) -> Result<(), TrustboardError> {
        self.validate_claim_at(claim, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use trustboard_core::InfluencerId;
    use uuid::Uuid;

    fn base_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn claim(status: ClaimStatus, weight: f64, days_ago: i64) -> Claim {
        let ts = base_time() - Duration::days(days_ago);
        Claim {
            id: Uuid::now_v7(),
            influencer_id: InfluencerId(1),
            status,
            timestamp: ts,
            weight,
            supersedes: None,
            superseded_by: None,
            statement: None,
            recorded_at: ts,
        }
    }

    fn engine() -> TrustScoreEngine {
        TrustScoreEngine::default()
    }

    #[test]
    fn empty_history_scores_zero() {
        let score = engine().compute_score_at(&[], base_time()).unwrap();
        assert_eq!(score, TrustScore::MIN);
    }

    #[test]
    fn unverified_claims_contribute_nothing() {
        let claims = vec![claim(ClaimStatus::Unverified, 50.0, 0)];
        assert_eq!(engine().compute_score_at(&claims, base_time()).unwrap().value(), 0);

        let mut with_verified = vec![claim(ClaimStatus::Verified, 5.0, 0)];
        let before = engine().compute_score_at(&with_verified, base_time()).unwrap();
        with_verified.push(claim(ClaimStatus::Unverified, 100.0, 0));
        let after = engine().compute_score_at(&with_verified, base_time()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn verified_raises_and_refuted_depresses() {
        let mut claims = vec![claim(ClaimStatus::Verified, 10.0, 0)];
        let base = engine().compute_score_at(&claims, base_time()).unwrap();

        claims.push(claim(ClaimStatus::Verified, 10.0, 0));
        let raised = engine().compute_score_at(&claims, base_time()).unwrap();
        assert!(raised > base);

        claims.push(claim(ClaimStatus::Refuted, 5.0, 0));
        let depressed = engine().compute_score_at(&claims, base_time()).unwrap();
        assert!(depressed < raised);
    }

    #[test]
    fn many_verified_claims_approach_the_top() {
        let claims: Vec<Claim> = (0..200).map(|_| claim(ClaimStatus::Verified, 1.0, 0)).collect();
        let score = engine().compute_score_at(&claims, base_time()).unwrap();
        // 200 / 205
        assert_eq!(score.value(), 98);
    }

    #[test]
    fn old_refutations_weigh_less_than_fresh_ones() {
        let fresh = vec![
            claim(ClaimStatus::Verified, 10.0, 0),
            claim(ClaimStatus::Refuted, 5.0, 0),
        ];
        let stale = vec![
            claim(ClaimStatus::Verified, 10.0, 0),
            claim(ClaimStatus::Refuted, 5.0, 720),
        ];
        let fresh_score = engine().compute_score_at(&fresh, base_time()).unwrap();
        let stale_score = engine().compute_score_at(&stale, base_time()).unwrap();
        assert!(stale_score > fresh_score);
    }

    #[test]
    fn superseded_claims_are_ignored() {
        let mut refuted = claim(ClaimStatus::Refuted, 10.0, 0);
        let verified = claim(ClaimStatus::Verified, 10.0, 0);
        let with_refutation = engine()
            .compute_score_at(&[verified.clone(), refuted.clone()], base_time())
            .unwrap();
        refuted.superseded_by = Some(Uuid::now_v7());
        let corrected = engine()
            .compute_score_at(&[verified, refuted], base_time())
            .unwrap();
        assert!(corrected > with_refutation);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let claims = vec![claim(ClaimStatus::Verified, -1.0, 0)];
        let err = engine().compute_score_at(&claims, base_time()).unwrap_err();
        assert!(matches!(err, TrustboardError::InvalidClaim(_)));
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let claims = vec![claim(ClaimStatus::Verified, f64::NAN, 0)];
        assert!(engine().compute_score_at(&claims, base_time()).is_err());
    }

    #[test]
    fn future_timestamps_respect_skew_tolerance() {
        let mut near = claim(ClaimStatus::Verified, 1.0, 0);
        near.timestamp = base_time() + Duration::seconds(120);
        assert!(engine().validate_claim_at(&near, base_time()).is_ok());

        let mut far = claim(ClaimStatus::Verified, 1.0, 0);
        far.timestamp = base_time() + Duration::hours(2);
        let err = engine().validate_claim_at(&far, base_time()).unwrap_err();
        assert!(matches!(err, TrustboardError::InvalidClaim(_)));
    }

    #[test]
    fn deterministic_for_the_same_claim_set() {
        let claims = vec![
            claim(ClaimStatus::Verified, 3.0, 10),
            claim(ClaimStatus::Refuted, 1.0, 40),
            claim(ClaimStatus::Verified, 2.0, 2),
        ];
        let a = engine().compute_score_at(&claims, base_time()).unwrap();
        let b = engine()
            .compute_score_at(&claims, base_time() + Duration::days(30))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_claim_sets_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(0x7157);
        let statuses = [ClaimStatus::Unverified, ClaimStatus::Verified, ClaimStatus::Refuted];
        let configs = [
            ScoringConfig::default(),
            ScoringConfig {
                decay: DecayFunction::None,
                refute_penalty: 0.0,
                confidence: 0.0,
                ..ScoringConfig::default()
            },
            ScoringConfig {
                decay: DecayFunction::Linear { decay_per_day: 0.5 },
                refute_penalty: 10.0,
                confidence: 1.0,
                ..ScoringConfig::default()
            },
        ];

        for config in configs {
            let engine = TrustScoreEngine::new(config);
            for _ in 0..300 {
                let n = rng.gen_range(0..40);
                let claims: Vec<Claim> = (0..n)
                    .map(|_| {
                        let status = statuses[rng.gen_range(0..statuses.len())];
                        let weight = rng.gen_range(0.0..1_000.0);
                        claim(status, weight, rng.gen_range(0..2_000))
                    })
                    .collect();
                let score = engine.compute_score_at(&claims, base_time()).unwrap();
                assert!(score.value() <= 100);
            }
        }
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let mut claims = vec![claim(ClaimStatus::Verified, 1e308, 0)];
        let one = engine().compute_score_at(&claims, base_time()).unwrap();
        assert_eq!(one.value(), 100);

        claims.push(claim(ClaimStatus::Verified, 1e308, 0));
        let two = engine().compute_score_at(&claims, base_time()).unwrap();
        assert!(two >= one);
        assert_eq!(two.value(), 100);

        claims.push(claim(ClaimStatus::Refuted, f64::MAX, 0));
        let mixed = engine().compute_score_at(&claims, base_time()).unwrap();
        assert!(mixed < two);
        assert!(mixed.value() > 0);
    }

    #[test]
    fn adding_verified_claims_never_lowers_the_score() {
        let mut rng = StdRng::seed_from_u64(0x5ca1e);
        let mut claims = Vec::new();
        let mut last = TrustScore::MIN;
        for _ in 0..50 {
            let exponent = rng.gen_range(0..=307);
            claims.push(claim(ClaimStatus::Verified, 10f64.powi(exponent), 0));
            let score = engine().compute_score_at(&claims, base_time()).unwrap();
            assert!(score >= last, "score fell from {} to {}", last, score);
            last = score;
        }
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: ScoringConfig = serde_json::from_str(r#"{"refute_penalty":3.0}"#).unwrap();
        assert_eq!(config.refute_penalty, 3.0);
        assert_eq!(config.confidence, 5.0);
        assert_eq!(config.max_future_skew_secs, 300);
    }
}
