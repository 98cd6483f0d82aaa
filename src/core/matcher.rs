use crate::core::error::PairingError;
use crate::models::{PairKey, PairScores, Pairing, ScoredPair};
use rand::Rng;
use std::collections::BTreeSet;

/// Weight added to every candidate so score-0 pairs can still be drawn
pub const DEFAULT_WEIGHT_FLOOR: f64 = 0.1;

/// Score-biased random pairing
///
/// Each step draws one pair among those whose members are both still
/// unmatched, with probability proportional to `score + weight_floor`,
/// until fewer than two names remain. This is a greedy stochastic
/// heuristic: repeated runs on the same input give different pairings.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weight_floor: f64,
}

impl Matcher {
    pub fn new(weight_floor: f64) -> Result<Self, PairingError> {
        if !weight_floor.is_finite() || weight_floor <= 0.0 {
            return Err(PairingError::InvalidWeightFloor(weight_floor));
        }
        Ok(Self { weight_floor })
    }

    pub fn weight_floor(&self) -> f64 {
        self.weight_floor
    }

    /// Pair up `names` using a fresh thread-local random source
    pub fn generate_pairing(&self, names: &[String], scores: &PairScores) -> Result<Pairing, PairingError> {
        self.generate_pairing_with(names, scores, &mut rand::rng())
    }

    /// Pair up `names` drawing from `rng`
    ///
    /// # Errors
    /// * `DuplicateParticipant` if a name is listed twice
    /// * `UnknownParticipant` if a name was not part of the scored set
    pub fn generate_pairing_with<R: Rng>(
        &self,
        names: &[String],
        scores: &PairScores,
        rng: &mut R,
    ) -> Result<Pairing, PairingError> {
        // Same identity rule as `Participant::key`
        let mut pool: BTreeSet<&str> = BTreeSet::new();
        for name in names.iter().map(|name| name.trim()) {
            if !scores.contains_participant(name) {
                return Err(PairingError::UnknownParticipant(name.to_string()));
            }
            if !pool.insert(name) {
                return Err(PairingError::DuplicateParticipant(name.to_string()));
            }
        }

        let mut pairing = Pairing::default();

        while pool.len() > 1 {
            let candidates: Vec<(&PairKey, u32)> = scores
                .iter()
                .filter(|(key, _)| pool.contains(key.first()) && pool.contains(key.second()))
                .collect();

            if candidates.is_empty() {
                tracing::warn!(
                    "No scored pair left among {} remaining participants, stopping early",
                    pool.len()
                );
                break;
            }

            let weights: Vec<f64> = candidates
                .iter()
                .map(|(_, score)| *score as f64 + self.weight_floor)
                .collect();
            let (key, score) = candidates[weighted_index(&weights, rng)];

            tracing::debug!("Drew pair {} with score {}", key, score);

            pool.remove(key.first());
            pool.remove(key.second());
            pairing.total_score += score;
            pairing.pairs.push(ScoredPair::from_key(key, score));
        }

        pairing.unmatched = pool.into_iter().map(str::to_string).collect();

        Ok(pairing)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            weight_floor: DEFAULT_WEIGHT_FLOOR,
        }
    }
}

/// Draw an index with probability proportional to its weight
///
/// Builds a cumulative table and locates a uniform draw in `[0, total)`.
/// Weights must be positive and the slice non-empty.
pub fn weighted_index<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let cumulative: Vec<f64> = weights
        .iter()
        .scan(0.0, |acc, w| {
            *acc += w;
            Some(*acc)
        })
        .collect();

    let total = cumulative.last().copied().unwrap_or(0.0);
    if total <= 0.0 {
        return 0;
    }

    let target = rng.random_range(0.0..total);
    // First bucket whose upper edge is past the draw; clamp for float rounding
    cumulative
        .partition_point(|&edge| edge <= target)
        .min(weights.len() - 1)
}
