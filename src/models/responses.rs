use serde::{Deserialize, Serialize};
use crate::models::domain::{Pairing, PairScores, ScoredPair};

/// Response for the generate endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingResponse {
    #[serde(rename = "pairingId")]
    pub pairing_id: String,
    pub pairs: Vec<ScoredPair>,
    #[serde(rename = "totalScore")]
    pub total_score: u32,
    pub unmatched: Vec<String>,
    /// Human readable rendering, `unmatched: none` when everyone has a partner
    pub summary: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Pairing> for PairingResponse {
    fn from(pairing: Pairing) -> Self {
        let summary = pairing.to_string();
        Self {
            pairing_id: uuid::Uuid::new_v4().to_string(),
            pairs: pairing.pairs,
            total_score: pairing.total_score,
            unmatched: pairing.unmatched,
            summary,
            generated_at: chrono::Utc::now(),
        }
    }
}

/// Response for the scores endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresResponse {
    pub scores: Vec<ScoredPair>,
    #[serde(rename = "participantCount")]
    pub participant_count: usize,
}

impl From<&PairScores> for ScoresResponse {
    fn from(scores: &PairScores) -> Self {
        Self {
            scores: scores
                .iter()
                .map(|(key, score)| ScoredPair::from_key(key, score))
                .collect(),
            participant_count: scores.participants().count(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
