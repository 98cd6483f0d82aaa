// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PairKey, PairScores, Pairing, Participant, Proficiency, Roster, ScoredPair};
pub use requests::{DefaultPairingRequest, GeneratePairingRequest, ScorePairsRequest};
pub use responses::{ErrorResponse, HealthResponse, PairingResponse, ScoresResponse};
