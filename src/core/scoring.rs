use crate::core::error::PairingError;
use crate::models::{PairKey, PairScores, Participant, Proficiency};
use std::collections::{BTreeMap, BTreeSet};

/// Score every unordered pair of participants over the given topics
///
/// Scoring table per topic:
/// ```text
/// ok        + ok        -> 1
/// ok        + preferred -> 2
/// preferred + preferred -> 4
/// anything  + none      -> 0
/// ```
///
/// Pair score is the sum over all topics, so it ranges from 0 to
/// `topics.len() * 4`. Names are compared by `Participant::key`, so they
/// must be unique and non-empty once trimmed.
pub fn score_all(participants: &[Participant], topics: &[String]) -> Result<PairScores, PairingError> {
    let mut names = BTreeSet::new();
    for participant in participants {
        let name = participant.key();
        if name.is_empty() {
            return Err(PairingError::EmptyName);
        }
        if !names.insert(name.to_string()) {
            return Err(PairingError::DuplicateParticipant(name.to_string()));
        }
    }

    let mut scores = BTreeMap::new();
    for (i, a) in participants.iter().enumerate() {
        for b in &participants[i + 1..] {
            // Distinct names were checked above, so this never yields a self-pair
            if let Some(key) = PairKey::new(a.key(), b.key()) {
                scores.insert(key, calculate_pair_score(a, b, topics));
            }
        }
    }

    tracing::debug!(
        "Scored {} pairs across {} participants and {} topics",
        scores.len(),
        names.len(),
        topics.len()
    );

    Ok(PairScores::new(names, scores))
}

/// Compatibility of two participants summed over all topics
#[inline]
pub fn calculate_pair_score(a: &Participant, b: &Participant, topics: &[String]) -> u32 {
    topics
        .iter()
        .map(|topic| topic_contribution(a.level(topic), b.level(topic)))
        .sum()
}

/// Per-topic contribution; symmetric in its arguments
#[inline]
pub fn topic_contribution(a: Proficiency, b: Proficiency) -> u32 {
    use Proficiency::*;

    match (a, b) {
        (Ok, Ok) => 1,
        (Ok, Preferred) | (Preferred, Ok) => 2,
        (Preferred, Preferred) => 4,
        (None, _) | (_, None) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(names: &[&str]) -> Vec<String> {
        names.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_contribution_table() {
        use Proficiency::*;

        assert_eq!(topic_contribution(Ok, Ok), 1);
        assert_eq!(topic_contribution(Ok, Preferred), 2);
        assert_eq!(topic_contribution(Preferred, Ok), 2);
        assert_eq!(topic_contribution(Preferred, Preferred), 4);
        assert_eq!(topic_contribution(None, None), 0);
        assert_eq!(topic_contribution(None, Ok), 0);
        assert_eq!(topic_contribution(Preferred, None), 0);
    }

    #[test]
    fn test_contribution_is_symmetric() {
        let levels = [Proficiency::None, Proficiency::Ok, Proficiency::Preferred];
        for a in levels {
            for b in levels {
                assert_eq!(topic_contribution(a, b), topic_contribution(b, a));
            }
        }
    }

    #[test]
    fn test_two_topic_example() {
        let topics = topics(&["T1", "T2"]);
        let a = Participant::new("A")
            .with("T1", Proficiency::Ok)
            .with("T2", Proficiency::Preferred);
        let b = Participant::new("B")
            .with("T1", Proficiency::Preferred)
            .with("T2", Proficiency::None);

        assert_eq!(calculate_pair_score(&a, &b, &topics), 2);
    }

    #[test]
    fn test_score_all_covers_every_pair_once() {
        let topics = topics(&["Rust"]);
        let participants: Vec<Participant> = ["D", "B", "A", "C"]
            .iter()
            .map(|n| Participant::new(*n).with("Rust", Proficiency::Ok))
            .collect();

        let scores = score_all(&participants, &topics).unwrap();

        // 4 choose 2
        assert_eq!(scores.len(), 6);
        assert_eq!(scores.get("A", "D"), Some(1));
        assert_eq!(scores.get("D", "A"), Some(1));
        assert_eq!(scores.get("A", "A"), None);
    }

    #[test]
    fn test_score_all_rejects_duplicates() {
        let participants = vec![Participant::new("A"), Participant::new("A")];
        let err = score_all(&participants, &[]).unwrap_err();
        assert_eq!(err, PairingError::DuplicateParticipant("A".to_string()));
    }

    #[test]
    fn test_score_all_treats_padded_names_as_duplicates() {
        let participants = vec![Participant::new("Ann"), Participant::new("Ann ")];
        let err = score_all(&participants, &[]).unwrap_err();
        assert_eq!(err, PairingError::DuplicateParticipant("Ann".to_string()));
    }

    #[test]
    fn test_score_all_keys_by_trimmed_name() {
        let participants = vec![
            Participant::new(" Ann").with("Go", Proficiency::Ok),
            Participant::new("Bea\t").with("Go", Proficiency::Ok),
        ];
        let scores = score_all(&participants, &topics(&["Go"])).unwrap();

        assert_eq!(scores.get("Ann", "Bea"), Some(1));
        assert!(scores.contains_participant("Ann"));
        assert!(!scores.contains_participant(" Ann"));
    }

    #[test]
    fn test_score_all_rejects_blank_name() {
        let participants = vec![Participant::new("A"), Participant::new("  ")];
        assert_eq!(score_all(&participants, &[]).unwrap_err(), PairingError::EmptyName);
    }

    #[test]
    fn test_single_participant_is_in_domain() {
        let scores = score_all(&[Participant::new("Solo")], &topics(&["Go"])).unwrap();
        assert!(scores.is_empty());
        assert!(scores.contains_participant("Solo"));
    }
}
