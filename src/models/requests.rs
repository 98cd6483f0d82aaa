use crate::models::domain::{Participant, Roster};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to generate a pairing for an inline roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratePairingRequest {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub topics: Vec<String>,
    #[validate(length(max = 200), custom(function = "validate_participant_names"))]
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    #[serde(alias = "exclude_names", rename = "excludeNames")]
    pub exclude_names: Vec<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratePairingRequest {
    pub fn roster(&self) -> Roster {
        Roster {
            topics: self.topics.clone(),
            participants: self.participants.clone(),
        }
    }
}

/// Request for the raw score table of an inline roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorePairsRequest {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub topics: Vec<String>,
    #[validate(length(max = 200), custom(function = "validate_participant_names"))]
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    #[serde(alias = "exclude_names", rename = "excludeNames")]
    pub exclude_names: Vec<String>,
}

impl ScorePairsRequest {
    pub fn roster(&self) -> Roster {
        Roster {
            topics: self.topics.clone(),
            participants: self.participants.clone(),
        }
    }
}

/// Request to pair the roster loaded at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultPairingRequest {
    #[serde(default)]
    #[serde(alias = "exclude_names", rename = "excludeNames")]
    pub exclude_names: Vec<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn validate_participant_names(participants: &Vec<Participant>) -> Result<(), ValidationError> {
    if participants.iter().any(|p| p.name.trim().is_empty()) {
        let mut err = ValidationError::new("empty_name");
        err.message = Some("participant names must not be empty".into());
        return Err(err);
    }
    Ok(())
}
