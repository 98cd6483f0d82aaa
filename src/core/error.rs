use thiserror::Error;

/// Precondition violations raised by the scorer and matcher
///
/// These point at malformed input from whoever built the roster, so they
/// are returned to the caller rather than recovered from.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PairingError {
    #[error("Participant not present in score table: {0}")]
    UnknownParticipant(String),

    #[error("Participant listed more than once: {0}")]
    DuplicateParticipant(String),

    #[error("Participant name must not be empty")]
    EmptyName,

    #[error("Weight floor must be a positive finite number, got {0}")]
    InvalidWeightFloor(f64),
}
