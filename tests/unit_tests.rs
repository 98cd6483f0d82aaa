// Unit tests for Workshop Pairs

use workshop_pairs::core::{
    matcher::{weighted_index, Matcher},
    scoring::{calculate_pair_score, score_all, topic_contribution},
    PairingError,
};
use workshop_pairs::models::{Participant, Proficiency};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn topics(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

fn participant(name: &str, levels: &[(&str, Proficiency)]) -> Participant {
    levels
        .iter()
        .fold(Participant::new(name), |p, (topic, level)| p.with(*topic, *level))
}

#[test]
fn test_scoring_table() {
    assert_eq!(topic_contribution(Proficiency::Ok, Proficiency::Ok), 1);
    assert_eq!(topic_contribution(Proficiency::Ok, Proficiency::Preferred), 2);
    assert_eq!(topic_contribution(Proficiency::Preferred, Proficiency::Ok), 2);
    assert_eq!(topic_contribution(Proficiency::Preferred, Proficiency::Preferred), 4);
    assert_eq!(topic_contribution(Proficiency::None, Proficiency::Preferred), 0);
}

#[test]
fn test_pair_score_example() {
    let topics = topics(&["T1", "T2"]);
    let a = participant("A", &[("T1", Proficiency::Ok), ("T2", Proficiency::Preferred)]);
    let b = participant("B", &[("T1", Proficiency::Preferred), ("T2", Proficiency::None)]);

    assert_eq!(calculate_pair_score(&a, &b, &topics), 2);
    assert_eq!(calculate_pair_score(&b, &a, &topics), 2);
}

#[test]
fn test_pair_score_upper_bound() {
    let topics = topics(&["T1", "T2", "T3"]);
    let all_preferred: Vec<(&str, Proficiency)> =
        vec![("T1", Proficiency::Preferred), ("T2", Proficiency::Preferred), ("T3", Proficiency::Preferred)];
    let a = participant("A", &all_preferred);
    let b = participant("B", &all_preferred);

    assert_eq!(calculate_pair_score(&a, &b, &topics), 12);
}

#[test]
fn test_unlisted_topics_do_not_count() {
    // Levels for topics outside the topic set are ignored
    let topics = topics(&["T1"]);
    let a = participant("A", &[("T1", Proficiency::Ok), ("Other", Proficiency::Preferred)]);
    let b = participant("B", &[("T1", Proficiency::Ok), ("Other", Proficiency::Preferred)]);

    assert_eq!(calculate_pair_score(&a, &b, &topics), 1);
}

#[test]
fn test_score_table_is_symmetric_and_complete() {
    let topics = topics(&["Rust", "Go"]);
    let participants = vec![
        participant("Ann", &[("Rust", Proficiency::Preferred), ("Go", Proficiency::Ok)]),
        participant("Bea", &[("Rust", Proficiency::Ok)]),
        participant("Cid", &[("Go", Proficiency::Preferred)]),
        participant("Dee", &[]),
        participant("Eve", &[("Rust", Proficiency::Preferred), ("Go", Proficiency::Preferred)]),
    ];

    let scores = score_all(&participants, &topics).unwrap();
    assert_eq!(scores.len(), 10);

    for a in &participants {
        for b in &participants {
            if a.name == b.name {
                assert_eq!(scores.get(&a.name, &b.name), None);
            } else {
                assert_eq!(scores.get(&a.name, &b.name), scores.get(&b.name, &a.name));
                assert!(scores.get(&a.name, &b.name).is_some());
            }
        }
    }

    assert_eq!(scores.get("Ann", "Eve"), Some(6));
    assert_eq!(scores.get("Dee", "Eve"), Some(0));
}

#[test]
fn test_matcher_unknown_name_is_fatal() {
    let participants = vec![Participant::new("A"), Participant::new("B")];
    let scores = score_all(&participants, &[]).unwrap();

    let result = Matcher::default().generate_pairing(&["A".to_string(), "Ghost".to_string()], &scores);

    assert_eq!(result.unwrap_err(), PairingError::UnknownParticipant("Ghost".to_string()));
}

#[test]
fn test_zero_scores_still_pair() {
    let participants: Vec<Participant> = ["A", "B", "C", "D"].iter().map(|n| Participant::new(*n)).collect();
    let scores = score_all(&participants, &topics(&["Rust"])).unwrap();
    let names: Vec<String> = participants.iter().map(|p| p.name.clone()).collect();

    let pairing = Matcher::default().generate_pairing(&names, &scores).unwrap();

    assert_eq!(pairing.pairs.len(), 2);
    assert_eq!(pairing.total_score, 0);
    assert!(pairing.unmatched.is_empty());
}

#[test]
fn test_weighted_index_single_bucket() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..100 {
        assert_eq!(weighted_index(&[0.1], &mut rng), 0);
    }
}
