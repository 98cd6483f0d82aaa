use crate::core::error::PairingError;
use crate::core::matcher::Matcher;
use crate::core::scoring::score_all;
use crate::models::{Pairing, PairScores, Participant, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Drop every participant whose name is on the exclusion list
///
/// Names are compared by `Participant::key`, i.e. after trimming.
#[inline]
pub fn apply_exclusions(participants: &[Participant], excluded: &[String]) -> Vec<Participant> {
    let excluded: HashSet<&str> = excluded.iter().map(|name| name.trim()).collect();

    participants
        .iter()
        .filter(|participant| !excluded.contains(participant.key()))
        .cloned()
        .collect()
}

/// Roster-level entry point: exclusion -> scoring -> matching
///
/// `skip_names` come from configuration and are always applied on top of
/// any per-call exclusions.
#[derive(Debug, Clone)]
pub struct Planner {
    matcher: Matcher,
    skip_names: Vec<String>,
}

impl Planner {
    pub fn new(matcher: Matcher, skip_names: Vec<String>) -> Self {
        Self { matcher, skip_names }
    }

    pub fn skip_names(&self) -> &[String] {
        &self.skip_names
    }

    /// Participants that survive both the configured and per-call exclusions
    pub fn eligible(&self, roster: &Roster, extra_exclusions: &[String]) -> Vec<Participant> {
        let mut excluded = self.skip_names.clone();
        excluded.extend(extra_exclusions.iter().cloned());
        apply_exclusions(&roster.participants, &excluded)
    }

    /// Score table for the eligible participants
    pub fn scores(&self, roster: &Roster, extra_exclusions: &[String]) -> Result<PairScores, PairingError> {
        let eligible = self.eligible(roster, extra_exclusions);
        score_all(&eligible, &roster.topics)
    }

    /// Generate one pairing for the roster
    ///
    /// A `seed` makes the run reproducible; without one every call draws
    /// from fresh entropy.
    pub fn plan(
        &self,
        roster: &Roster,
        extra_exclusions: &[String],
        seed: Option<u64>,
    ) -> Result<Pairing, PairingError> {
        let eligible = self.eligible(roster, extra_exclusions);
        let scores = score_all(&eligible, &roster.topics)?;
        let names: Vec<String> = eligible.iter().map(|p| p.key().to_string()).collect();

        let pairing = match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.matcher.generate_pairing_with(&names, &scores, &mut rng)?
            }
            None => self.matcher.generate_pairing(&names, &scores)?,
        };

        tracing::info!(
            participants = names.len(),
            excluded = roster.participants.len() - names.len(),
            pairs = pairing.pairs.len(),
            total_score = pairing.total_score,
            unmatched = pairing.unmatched.len(),
            seeded = seed.is_some(),
            "Generated pairing"
        );

        Ok(pairing)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Matcher::default(), Vec::new())
    }
}
