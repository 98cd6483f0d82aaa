use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Self-reported proficiency for a single topic
///
/// Parsing is lenient: anything that is not `ok` or `preferred`
/// (including blank cells and `null`) is treated as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Proficiency {
    #[default]
    None,
    Ok,
    Preferred,
}

impl Proficiency {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "ok" => Proficiency::Ok,
            "preferred" => Proficiency::Preferred,
            _ => Proficiency::None,
        }
    }
}

impl From<Option<String>> for Proficiency {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map(Proficiency::parse).unwrap_or_default()
    }
}

/// A workshop participant and their per-topic proficiency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default)]
    pub proficiency: HashMap<String, Proficiency>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proficiency: HashMap::new(),
        }
    }

    /// Builder helper used by loaders and tests
    pub fn with(mut self, topic: impl Into<String>, level: Proficiency) -> Self {
        self.proficiency.insert(topic.into(), level);
        self
    }

    /// Identity used for duplicate checks, exclusions and pair keys
    pub fn key(&self) -> &str {
        self.name.trim()
    }

    /// Level for a topic, `None` when the cell was never filled in
    pub fn level(&self, topic: &str) -> Proficiency {
        self.proficiency.get(topic).copied().unwrap_or_default()
    }
}

/// Topics plus the participants who signed up for them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Unordered pair of distinct names, stored in lexicographic order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Returns `None` for a self-pair
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a.to_string(),
                second: b.to_string(),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b.to_string(),
                second: a.to_string(),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Compatibility score for every unordered pair of a participant set
///
/// Also remembers which names it was built from, so a lone participant
/// with no possible partner is still part of the domain.
#[derive(Debug, Clone, Default)]
pub struct PairScores {
    participants: BTreeSet<String>,
    scores: BTreeMap<PairKey, u32>,
}

impl PairScores {
    pub(crate) fn new(participants: BTreeSet<String>, scores: BTreeMap<PairKey, u32>) -> Self {
        Self { participants, scores }
    }

    pub fn get(&self, a: &str, b: &str) -> Option<u32> {
        PairKey::new(a, b).and_then(|key| self.scores.get(&key).copied())
    }

    pub fn contains_participant(&self, name: &str) -> bool {
        self.participants.contains(name)
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(String::as_str)
    }

    /// Pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, u32)> {
        self.scores.iter().map(|(key, score)| (key, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// A pair chosen by the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPair {
    pub first: String,
    pub second: String,
    pub score: u32,
}

impl ScoredPair {
    pub fn from_key(key: &PairKey, score: u32) -> Self {
        Self {
            first: key.first().to_string(),
            second: key.second().to_string(),
            score,
        }
    }
}

/// Outcome of one pairing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Pairs in the order they were drawn
    pub pairs: Vec<ScoredPair>,
    #[serde(rename = "totalScore")]
    pub total_score: u32,
    pub unmatched: Vec<String>,
}

impl Pairing {
    pub fn matched_names(&self) -> impl Iterator<Item = &str> {
        self.pairs
            .iter()
            .flat_map(|pair| [pair.first.as_str(), pair.second.as_str()])
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated pairing:")?;
        for pair in &self.pairs {
            writeln!(f, "  ({}, {}) -> {}", pair.first, pair.second, pair.score)?;
        }
        let unmatched = if self.unmatched.is_empty() {
            "none".to_string()
        } else {
            self.unmatched.join(", ")
        };
        write!(f, "Pairing score: {}, unmatched: {}", self.total_score, unmatched)
    }
}
